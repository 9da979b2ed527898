use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::CleanedLanding;

/// Writes the cleaned dataset. Columns come out in record-field order, so
/// `country` and `mass_category` land as the final two.
pub struct CleanedCsvWriter;

impl CleanedCsvWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write(&self, records: &[CleanedLanding], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        info!(rows = records.len(), path = %path.display(), "wrote cleaned dataset");
        Ok(())
    }
}

impl Default for CleanedCsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MassCategory;
    use crate::readers::CleanedReader;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn landing(name: &str, mass: f64) -> CleanedLanding {
        CleanedLanding {
            name: name.to_string(),
            id: Some(42),
            nametype: Some("Valid".to_string()),
            recclass: Some("H5".to_string()),
            mass,
            fall: Some("Fell".to_string()),
            year: 1970,
            reclat: 40.0,
            reclong: -75.0,
            geolocation: Some("(40.0, -75.0)".to_string()),
            country: "United States".to_string(),
            mass_category: MassCategory::from_mass(mass),
        }
    }

    #[test]
    fn test_roundtrip() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("cleaned.csv");
        let records = vec![landing("A", 5.0), landing("B", 5000.0)];

        CleanedCsvWriter::new().write(&records, &path)?;
        let read_back = CleanedReader::new().read_cleaned(&path)?;

        assert_eq!(read_back, records);
        Ok(())
    }

    #[test]
    fn test_appended_columns_are_last() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("cleaned.csv");
        CleanedCsvWriter::new().write(&[landing("A", 5.0)], &path)?;

        let content = std::fs::read_to_string(&path)?;
        let header = content.lines().next().unwrap();
        assert!(header.ends_with("country,mass_category"));
        Ok(())
    }

    #[test]
    fn test_creates_missing_directories() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested/data/cleaned.csv");
        CleanedCsvWriter::new().write(&[landing("A", 5.0)], &path)?;
        assert!(path.exists());
        Ok(())
    }
}
