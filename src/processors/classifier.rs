use reverse_geocoder::ReverseGeocoder;
use tracing::{debug, warn};

use crate::models::{CleanedLanding, RawLanding};
use crate::utils::constants::{ANTARCTIC_LATITUDE_LIMIT, ARCTIC_LATITUDE_LIMIT};
use crate::utils::countries::country_name;
use crate::utils::progress::ProgressReporter;

pub const ANTARCTICA: &str = "Antarctica";
pub const ARCTIC_OCEAN: &str = "Arctic Ocean";

/// Nearest-populated-place lookup. Returns the two-letter country code, or
/// `None` when the position resolves to nothing.
pub trait CountryLookup {
    fn country_code(&self, latitude: f64, longitude: f64) -> Option<String>;
}

/// Production lookup over the embedded GeoNames dataset. Building it parses
/// the dataset, so construct once per run and reuse.
pub struct ReverseGeocoderLookup {
    geocoder: ReverseGeocoder,
}

impl ReverseGeocoderLookup {
    pub fn new() -> Self {
        Self {
            geocoder: ReverseGeocoder::new(),
        }
    }
}

impl Default for ReverseGeocoderLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryLookup for ReverseGeocoderLookup {
    fn country_code(&self, latitude: f64, longitude: f64) -> Option<String> {
        let result = self.geocoder.search((latitude, longitude));
        let code = result.record.cc.trim();
        if code.is_empty() {
            None
        } else {
            Some(code.to_string())
        }
    }
}

/// Maps a coordinate pair to a country name. Polar overrides win over the
/// geocoder; a code the static table does not know falls through as itself.
pub struct CountryClassifier<L: CountryLookup> {
    lookup: L,
}

impl<L: CountryLookup> CountryClassifier<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// `None` means unresolved: the caller drops the record.
    pub fn classify(&self, latitude: f64, longitude: f64) -> Option<String> {
        if latitude < ANTARCTIC_LATITUDE_LIMIT {
            return Some(ANTARCTICA.to_string());
        }
        if latitude > ARCTIC_LATITUDE_LIMIT {
            return Some(ARCTIC_OCEAN.to_string());
        }

        let code = self.lookup.country_code(latitude, longitude)?;
        match country_name(&code) {
            Some(name) => Some(name.to_string()),
            None => Some(code),
        }
    }

    /// Sequential single pass over the filtered rows. Unresolved rows are
    /// logged and dropped, never retried; the batch always completes.
    pub fn annotate(
        &self,
        rows: Vec<RawLanding>,
        progress: Option<&ProgressReporter>,
    ) -> (Vec<CleanedLanding>, usize) {
        let mut cleaned = Vec::with_capacity(rows.len());
        let mut unresolved = 0usize;

        for row in rows {
            if let Some(pb) = progress {
                pb.increment(1);
            }

            let (Some(latitude), Some(longitude)) = (row.reclat, row.reclong) else {
                debug!(name = %row.name, "row reached classifier without coordinates");
                unresolved += 1;
                continue;
            };

            match self
                .classify(latitude, longitude)
                .and_then(|country| CleanedLanding::from_raw(&row, country))
            {
                Some(record) => cleaned.push(record),
                None => {
                    warn!(
                        name = %row.name,
                        latitude,
                        longitude,
                        "no country resolved, dropping row"
                    );
                    unresolved += 1;
                }
            }
        }

        (cleaned, unresolved)
    }
}
