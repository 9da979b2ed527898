pub mod classifier;
pub mod cleaner;

pub use classifier::{CountryClassifier, CountryLookup, ReverseGeocoderLookup};
pub use cleaner::{CleaningReport, LandingCleaner};
