use std::path::Path;

use tracing::info;

use crate::error::{PipelineError, Result};
use crate::models::CleanedLanding;
use crate::readers::ensure_columns;
use crate::utils::constants::{
    COL_COUNTRY, COL_MASS, COL_MASS_CATEGORY, COL_NAME, COL_RECLAT, COL_RECLONG, COL_YEAR,
};

/// Reads the cleaned dataset produced by the `clean` stage.
pub struct CleanedReader;

impl CleanedReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_cleaned(&self, path: &Path) -> Result<Vec<CleanedLanding>> {
        let mut reader = crate::readers::open_csv(path)?;
        ensure_columns(
            reader.headers()?,
            &[
                COL_NAME,
                COL_MASS,
                COL_YEAR,
                COL_RECLAT,
                COL_RECLONG,
                COL_COUNTRY,
                COL_MASS_CATEGORY,
            ],
            path,
        )?;

        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<CleanedLanding>, csv::Error>>()?;

        if records.is_empty() {
            return Err(PipelineError::EmptyDataset(format!(
                "cleaned dataset {} contains no rows",
                path.display()
            )));
        }

        info!(rows = records.len(), path = %path.display(), "loaded cleaned landings");
        Ok(records)
    }
}

impl Default for CleanedReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "name,id,nametype,recclass,mass,fall,year,reclat,reclong,GeoLocation,country,mass_category";

    #[test]
    fn test_read_cleaned_rows() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HEADER)?;
        writeln!(file, "Allende,2278,Valid,CV3,2000000,Fell,1969,26.96667,-105.31667,,Mexico,Very Large")?;

        let rows = CleanedReader::new().read_cleaned(file.path())?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country, "Mexico");
        assert_eq!(rows[0].mass_category.to_string(), "Very Large");
        Ok(())
    }

    #[test]
    fn test_empty_dataset_is_fatal() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HEADER)?;

        let err = CleanedReader::new().read_cleaned(file.path()).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyDataset(_)));
        Ok(())
    }

    #[test]
    fn test_missing_country_column_is_fatal() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "name,id,nametype,recclass,mass,fall,year,reclat,reclong,GeoLocation")?;
        writeln!(file, "Allende,2278,Valid,CV3,2000000,Fell,1969,26.96667,-105.31667,")?;

        let err = CleanedReader::new().read_cleaned(file.path()).unwrap_err();
        match err {
            PipelineError::MissingColumn { column, .. } => assert_eq!(column, "country"),
            other => panic!("unexpected error: {other:?}"),
        }
        Ok(())
    }
}
