use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::RawLanding;
use crate::readers::ensure_columns;
use crate::utils::constants::{COL_MASS, COL_NAME, COL_RECLAT, COL_RECLONG, COL_YEAR};

/// Reads the raw NASA landings export.
pub struct LandingReader;

impl LandingReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_raw(&self, path: &Path) -> Result<Vec<RawLanding>> {
        let mut reader = crate::readers::open_csv(path)?;
        ensure_columns(
            reader.headers()?,
            &[COL_NAME, COL_MASS, COL_YEAR, COL_RECLAT, COL_RECLONG],
            path,
        )?;

        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<RawLanding>, csv::Error>>()?;

        info!(rows = records.len(), path = %path.display(), "loaded raw landings");
        Ok(records)
    }
}

impl Default for LandingReader {
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

    const HEADER: &str = "name,id,nametype,recclass,mass,fall,year,reclat,reclong,GeoLocation";

    #[test]
    fn test_read_raw_rows() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HEADER)?;
        writeln!(file, "Aachen,1,Valid,L5,21.0,Fell,1880,50.775,6.08333,\"(50.775, 6.08333)\"")?;
        writeln!(file, "Nogata,16988,Valid,L6,472,Fell,861,33.725,130.75,")?;

        let rows = LandingReader::new().read_raw(file.path())?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Aachen");
        assert_eq!(rows[0].mass, Some(21.0));
        assert_eq!(rows[1].year, Some(861));
        Ok(())
    }

    #[test]
    fn test_missing_fields_become_none() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HEADER)?;
        writeln!(file, "Unknown,2,Valid,L5,,Found,,,,")?;

        let rows = LandingReader::new().read_raw(file.path())?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].mass, None);
        assert_eq!(rows[0].year, None);
        assert_eq!(rows[0].reclat, None);
        assert!(!rows[0].has_required_fields());
        Ok(())
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = LandingReader::new()
            .read_raw(Path::new("no-such-dir/meteorite-landings.csv"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::InputNotFound { .. }));
    }

    #[test]
    fn test_missing_column_is_fatal() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "name,id,nametype,recclass,mass,fall,year,reclat")?;
        writeln!(file, "Aachen,1,Valid,L5,21.0,Fell,1880,50.775")?;

        let err = LandingReader::new().read_raw(file.path()).unwrap_err();
        match err {
            PipelineError::MissingColumn { column, .. } => assert_eq!(column, "reclong"),
            other => panic!("unexpected error: {other:?}"),
        }
        Ok(())
    }
}
