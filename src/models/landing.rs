use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::utils::constants::{MASS_LARGE_LIMIT, MASS_MEDIUM_LIMIT, MASS_SMALL_LIMIT};

/// One row of the raw NASA landings export. Everything except the name may
/// be absent; duplicates are possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLanding {
    pub name: String,
    pub id: Option<u32>,
    pub nametype: Option<String>,
    pub recclass: Option<String>,
    pub mass: Option<f64>,
    pub fall: Option<String>,
    #[serde(default, deserialize_with = "de_year")]
    pub year: Option<i32>,
    pub reclat: Option<f64>,
    pub reclong: Option<f64>,
    #[serde(rename = "GeoLocation")]
    pub geolocation: Option<String>,
}

/// Full-row identity used for exact-duplicate removal. Floats compare by
/// bit pattern, so only byte-identical values collapse.
pub type DedupKey = (
    String,
    Option<u32>,
    Option<String>,
    Option<String>,
    Option<u64>,
    Option<String>,
    Option<i32>,
    Option<u64>,
    Option<u64>,
    Option<String>,
);

impl RawLanding {
    pub fn has_required_fields(&self) -> bool {
        self.reclat.is_some() && self.reclong.is_some() && self.year.is_some() && self.mass.is_some()
    }

    pub fn dedup_key(&self) -> DedupKey {
        (
            self.name.clone(),
            self.id,
            self.nametype.clone(),
            self.recclass.clone(),
            self.mass.map(f64::to_bits),
            self.fall.clone(),
            self.year,
            self.reclat.map(f64::to_bits),
            self.reclong.map(f64::to_bits),
            self.geolocation.clone(),
        )
    }
}

/// The raw export writes years both as `1963` and `1963.0`; accept either.
fn de_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(|year| Some(year as i32))
            .map_err(|_| serde::de::Error::custom(format!("invalid year value: '{}'", value))),
    }
}

/// A retained row after filtering and annotation. Field order matters: the
/// cleaned CSV carries all input columns with `country` and `mass_category`
/// appended as the final two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CleanedLanding {
    pub name: String,
    pub id: Option<u32>,
    pub nametype: Option<String>,
    pub recclass: Option<String>,
    pub mass: f64,
    pub fall: Option<String>,
    pub year: i32,

    #[validate(range(min = -90.0, max = 90.0))]
    pub reclat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub reclong: f64,

    #[serde(rename = "GeoLocation")]
    pub geolocation: Option<String>,

    pub country: String,
    pub mass_category: MassCategory,
}

impl CleanedLanding {
    /// Build a cleaned record from a raw row with a resolved country.
    /// Returns `None` if any essential field is still absent.
    pub fn from_raw(raw: &RawLanding, country: String) -> Option<Self> {
        let mass = raw.mass?;
        Some(Self {
            name: raw.name.clone(),
            id: raw.id,
            nametype: raw.nametype.clone(),
            recclass: raw.recclass.clone(),
            mass,
            fall: raw.fall.clone(),
            year: raw.year?,
            reclat: raw.reclat?,
            reclong: raw.reclong?,
            geolocation: raw.geolocation.clone(),
            country,
            mass_category: MassCategory::from_mass(mass),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassCategory {
    Small,
    Medium,
    Large,
    #[serde(rename = "Very Large")]
    VeryLarge,
}

impl MassCategory {
    /// Total over all masses; boundaries are half-open on the lower bound.
    pub fn from_mass(mass: f64) -> Self {
        if mass < MASS_SMALL_LIMIT {
            MassCategory::Small
        } else if mass < MASS_MEDIUM_LIMIT {
            MassCategory::Medium
        } else if mass < MASS_LARGE_LIMIT {
            MassCategory::Large
        } else {
            MassCategory::VeryLarge
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MassCategory::Small => "Small",
            MassCategory::Medium => "Medium",
            MassCategory::Large => "Large",
            MassCategory::VeryLarge => "Very Large",
        }
    }
}

impl std::fmt::Display for MassCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, mass: Option<f64>, year: Option<i32>, lat: Option<f64>, lon: Option<f64>) -> RawLanding {
        RawLanding {
            name: name.to_string(),
            id: Some(1),
            nametype: Some("Valid".to_string()),
            recclass: Some("L5".to_string()),
            mass,
            fall: Some("Fell".to_string()),
            year,
            reclat: lat,
            reclong: lon,
            geolocation: None,
        }
    }

    #[test]
    fn test_mass_category_boundaries() {
        assert_eq!(MassCategory::from_mass(9.999), MassCategory::Small);
        assert_eq!(MassCategory::from_mass(10.0), MassCategory::Medium);
        assert_eq!(MassCategory::from_mass(99.999), MassCategory::Medium);
        assert_eq!(MassCategory::from_mass(100.0), MassCategory::Large);
        assert_eq!(MassCategory::from_mass(999.999), MassCategory::Large);
        assert_eq!(MassCategory::from_mass(1000.0), MassCategory::VeryLarge);
    }

    #[test]
    fn test_mass_category_labels() {
        assert_eq!(MassCategory::Small.to_string(), "Small");
        assert_eq!(MassCategory::VeryLarge.to_string(), "Very Large");
    }

    #[test]
    fn test_required_fields() {
        assert!(raw("Aachen", Some(21.0), Some(1963), Some(50.775), Some(6.083)).has_required_fields());
        assert!(!raw("Aachen", None, Some(1963), Some(50.775), Some(6.083)).has_required_fields());
        assert!(!raw("Aachen", Some(21.0), None, Some(50.775), Some(6.083)).has_required_fields());
        assert!(!raw("Aachen", Some(21.0), Some(1963), None, Some(6.083)).has_required_fields());
    }

    #[test]
    fn test_dedup_key_equality() {
        let a = raw("Aachen", Some(21.0), Some(1963), Some(50.775), Some(6.083));
        let b = a.clone();
        assert_eq!(a.dedup_key(), b.dedup_key());

        let c = raw("Aachen", Some(21.0), Some(1963), Some(50.775), Some(6.084));
        assert_ne!(a.dedup_key(), c.dedup_key());
    }

    #[test]
    fn test_from_raw() {
        let source = raw("Aachen", Some(1500.0), Some(1970), Some(50.775), Some(6.083));
        let cleaned = CleanedLanding::from_raw(&source, "Germany".to_string()).unwrap();

        assert_eq!(cleaned.country, "Germany");
        assert_eq!(cleaned.mass_category, MassCategory::VeryLarge);
        assert_eq!(cleaned.year, 1970);
        assert!(cleaned.validate().is_ok());
    }

    #[test]
    fn test_from_raw_missing_field() {
        let source = raw("Aachen", Some(1500.0), None, Some(50.775), Some(6.083));
        assert!(CleanedLanding::from_raw(&source, "Germany".to_string()).is_none());
    }

    #[test]
    fn test_invalid_coordinates_fail_validation() {
        let source = raw("Bad", Some(10.0), Some(1970), Some(91.0), Some(6.083));
        let cleaned = CleanedLanding::from_raw(&source, "Nowhere".to_string()).unwrap();
        assert!(cleaned.validate().is_err());
    }

    #[test]
    fn test_year_accepts_float_spelling() {
        let mut reader = csv::Reader::from_reader(
            "name,id,nametype,recclass,mass,fall,year,reclat,reclong,GeoLocation\n\
             Aachen,1,Valid,L5,21.0,Fell,1963.0,50.775,6.083,\"(50.775, 6.083)\"\n"
                .as_bytes(),
        );
        let row: RawLanding = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(row.year, Some(1963));
    }
}
