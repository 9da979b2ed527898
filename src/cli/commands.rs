use std::path::{Path, PathBuf};

use crate::analyzers::LandingAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::{PipelineError, Result};
use crate::processors::{CountryClassifier, LandingCleaner, ReverseGeocoderLookup};
use crate::readers::{CleanedReader, LandingReader};
use crate::utils::constants::{
    COUNTRY_COUNT_CHART, MEAN_MASS_CHART, PEAK_YEARS_ANNOTATED, PEAK_YEARS_PRINTED, SUMMARY_FILE,
    TOP_CONSOLE_ROWS, YEARLY_COUNT_CHART,
};
use crate::utils::progress::ProgressReporter;
use crate::writers::{ChartWriter, CleanedCsvWriter};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Clean {
            input,
            output,
            min_year,
            max_year,
        } => run_clean(&input, &output, min_year, max_year),

        Commands::Report {
            input,
            output_dir,
            top,
        } => run_report(&input, &output_dir, top),
    }
}

fn run_clean(input: &Path, output: &Path, min_year: i32, max_year: i32) -> Result<()> {
    println!("Cleaning raw landings data...");
    println!("Input file: {}", input.display());
    println!("Output file: {}", output.display());

    let rows = LandingReader::new().read_raw(input)?;
    println!("Loaded {} raw rows", rows.len());

    let cleaner = LandingCleaner::with_year_window(min_year, max_year);
    let (filtered, mut report) = cleaner.clean(rows);

    let progress = ProgressReporter::new(filtered.len() as u64, "Resolving countries...", false);
    let classifier = CountryClassifier::new(ReverseGeocoderLookup::new());
    let (cleaned, unresolved) = classifier.annotate(filtered, Some(&progress));
    progress.finish_with_message(&format!("Resolved {} landings", cleaned.len()));

    report.resolved = cleaned.len();
    report.unresolved = unresolved;
    println!("\n{}", report.summary());

    if cleaned.is_empty() {
        return Err(PipelineError::EmptyDataset(
            "no rows survived cleaning and classification".to_string(),
        ));
    }

    let by_country = LandingAnalyzer::new().counts_by_country(&cleaned);
    println!("Top countries:");
    for (i, entry) in by_country.iter().take(TOP_CONSOLE_ROWS).enumerate() {
        println!("{:2}. {}: {} landings", i + 1, entry.country, entry.count);
    }

    CleanedCsvWriter::new().write(&cleaned, output)?;
    println!(
        "\nCleaned dataset written to {} ({} rows, every row with a resolved country)",
        output.display(),
        cleaned.len()
    );

    Ok(())
}

fn run_report(input: &Path, output_dir: &Path, top: usize) -> Result<()> {
    println!("Analyzing cleaned landings data...");
    println!("Input file: {}", input.display());

    let records = CleanedReader::new().read_cleaned(input)?;
    println!("Loaded {} records", records.len());

    std::fs::create_dir_all(output_dir)?;

    let analyzer = LandingAnalyzer::new();
    let charts = ChartWriter::new();

    // 1. Landings per country
    let by_country = analyzer.counts_by_country(&records);
    println!("\nCountries with landings: {}", by_country.len());
    println!("Top countries by landings:");
    for (i, entry) in by_country.iter().take(TOP_CONSOLE_ROWS).enumerate() {
        println!("{:2}. {}: {} landings", i + 1, entry.country, entry.count);
    }
    let count_chart = chart_path(output_dir, COUNTRY_COUNT_CHART);
    charts.country_count_chart(&by_country[..top.min(by_country.len())], &count_chart)?;
    println!("Chart saved to {}", count_chart.display());

    // 2. Mean mass per country
    let by_mass = analyzer.mean_mass_by_country(&records);
    println!("\nTop countries by mean mass:");
    for (i, entry) in by_mass.iter().take(TOP_CONSOLE_ROWS).enumerate() {
        println!("{:2}. {}: {:.2} g", i + 1, entry.country, entry.mean_mass);
    }
    let mass_chart = chart_path(output_dir, MEAN_MASS_CHART);
    charts.mean_mass_chart(&by_mass[..top.min(by_mass.len())], &mass_chart)?;
    println!("Chart saved to {}", mass_chart.display());

    // 3. Landings per year
    let by_year = analyzer.counts_by_year(&records);
    let printed_peaks = analyzer.peak_years(&by_year, PEAK_YEARS_PRINTED);
    println!("\nPeak years:");
    for (i, peak) in printed_peaks.iter().enumerate() {
        println!("{}. {}: {} landings", i + 1, peak.year, peak.count);
    }
    let annotated_peaks = analyzer.peak_years(&by_year, PEAK_YEARS_ANNOTATED);
    let year_chart = chart_path(output_dir, YEARLY_COUNT_CHART);
    charts.yearly_count_chart(&by_year, &annotated_peaks, &year_chart)?;
    println!("Chart saved to {}", year_chart.display());

    // Final summary, console and JSON
    let summary = analyzer.summarize(&records)?;
    println!("\n{}", summary.display_summary());

    let summary_path = output_dir.join(SUMMARY_FILE);
    let file = std::fs::File::create(&summary_path)?;
    serde_json::to_writer_pretty(file, &summary)?;
    println!("Summary written to {}", summary_path.display());

    println!("\nAnalysis complete. All charts saved to {}", output_dir.display());
    Ok(())
}

fn chart_path(output_dir: &Path, file_name: &str) -> PathBuf {
    output_dir.join(file_name)
}
