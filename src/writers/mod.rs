pub mod chart_writer;
pub mod csv_writer;

pub use chart_writer::ChartWriter;
pub use csv_writer::CleanedCsvWriter;
