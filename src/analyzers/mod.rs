pub mod landing_analyzer;

pub use landing_analyzer::{AnalysisSummary, CountryCount, CountryMass, LandingAnalyzer, YearCount};
