use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{
    CLEANED_LANDINGS_FILE, MAX_YEAR, MIN_YEAR, OUTPUTS_DIR, RAW_LANDINGS_FILE, TOP_COUNTRIES,
};

#[derive(Parser)]
#[command(name = "meteorite-processor")]
#[command(about = "Two-stage batch processor for the NASA meteorite-landings dataset")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean the raw export and annotate each landing with a country
    Clean {
        #[arg(short, long, default_value = RAW_LANDINGS_FILE, help = "Raw landings CSV")]
        input: PathBuf,

        #[arg(short, long, default_value = CLEANED_LANDINGS_FILE, help = "Cleaned CSV output path")]
        output: PathBuf,

        #[arg(long, default_value_t = MIN_YEAR, help = "First year retained (inclusive)")]
        min_year: i32,

        #[arg(long, default_value_t = MAX_YEAR, help = "Last year retained (inclusive)")]
        max_year: i32,
    },

    /// Aggregate the cleaned dataset and render the report charts
    Report {
        #[arg(short, long, default_value = CLEANED_LANDINGS_FILE, help = "Cleaned landings CSV")]
        input: PathBuf,

        #[arg(short, long, default_value = OUTPUTS_DIR, help = "Directory for charts and summary")]
        output_dir: PathBuf,

        #[arg(long, default_value_t = TOP_COUNTRIES, help = "Countries shown per bar chart")]
        top: usize,
    },
}
