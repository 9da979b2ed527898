use std::collections::HashSet;

use tracing::info;

use crate::models::RawLanding;
use crate::utils::constants::{
    MAX_LATITUDE, MAX_LONGITUDE, MAX_YEAR, MIN_LATITUDE, MIN_LONGITUDE, MIN_YEAR,
};

/// Row counts through each filter step plus the classification outcome.
/// Counts are monotonically non-increasing from `rows_loaded` down to
/// `resolved`.
#[derive(Debug, Clone, Default)]
pub struct CleaningReport {
    pub rows_loaded: usize,
    pub missing_mass: usize,
    pub missing_year: usize,
    pub missing_coordinates: usize,
    pub after_required_fields: usize,
    pub after_dedup: usize,
    pub after_coordinate_filter: usize,
    pub after_year_filter: usize,
    pub resolved: usize,
    pub unresolved: usize,
}

impl CleaningReport {
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Data Cleaning Report ===\n");
        summary.push_str(&format!("Rows loaded: {}\n", self.rows_loaded));
        summary.push_str(&format!(
            "Missing values: mass={}, year={}, coordinates={}\n",
            self.missing_mass, self.missing_year, self.missing_coordinates
        ));
        summary.push_str(&format!(
            "After dropping incomplete rows: {}\n",
            self.after_required_fields
        ));
        summary.push_str(&format!(
            "After dropping exact duplicates: {}\n",
            self.after_dedup
        ));
        summary.push_str(&format!(
            "After coordinate range filter: {}\n",
            self.after_coordinate_filter
        ));
        summary.push_str(&format!(
            "After year window filter: {}\n",
            self.after_year_filter
        ));
        summary.push_str(&format!(
            "Country resolved: {} / unresolved (dropped): {}\n",
            self.resolved, self.unresolved
        ));

        summary
    }
}

/// Applies the four row filters in order, counting survivors after each.
pub struct LandingCleaner {
    min_year: i32,
    max_year: i32,
}

impl LandingCleaner {
    pub fn new() -> Self {
        Self {
            min_year: MIN_YEAR,
            max_year: MAX_YEAR,
        }
    }

    pub fn with_year_window(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    /// Filter the raw table. The returned report has the classification
    /// counters still at zero; the classifier pass fills them in.
    pub fn clean(&self, rows: Vec<RawLanding>) -> (Vec<RawLanding>, CleaningReport) {
        let mut report = CleaningReport {
            rows_loaded: rows.len(),
            missing_mass: rows.iter().filter(|r| r.mass.is_none()).count(),
            missing_year: rows.iter().filter(|r| r.year.is_none()).count(),
            missing_coordinates: rows
                .iter()
                .filter(|r| r.reclat.is_none() || r.reclong.is_none())
                .count(),
            ..Default::default()
        };

        // 1. Rows missing any essential field
        let rows: Vec<RawLanding> = rows
            .into_iter()
            .filter(RawLanding::has_required_fields)
            .collect();
        report.after_required_fields = rows.len();

        // 2. Exact full-row duplicates; first occurrence wins. Rows that
        //    merely share coordinates or a name are kept.
        let mut seen = HashSet::with_capacity(rows.len());
        let rows: Vec<RawLanding> = rows
            .into_iter()
            .filter(|row| seen.insert(row.dedup_key()))
            .collect();
        report.after_dedup = rows.len();

        // 3. Coordinates outside the valid ranges
        let rows: Vec<RawLanding> = rows
            .into_iter()
            .filter(|row| {
                row.reclat
                    .is_some_and(|lat| (MIN_LATITUDE..=MAX_LATITUDE).contains(&lat))
                    && row
                        .reclong
                        .is_some_and(|lon| (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon))
            })
            .collect();
        report.after_coordinate_filter = rows.len();

        // 4. Observation window, inclusive on both ends
        let rows: Vec<RawLanding> = rows
            .into_iter()
            .filter(|row| {
                row.year
                    .is_some_and(|year| year >= self.min_year && year <= self.max_year)
            })
            .collect();
        report.after_year_filter = rows.len();

        info!(
            loaded = report.rows_loaded,
            retained = report.after_year_filter,
            "filter pipeline complete"
        );

        (rows, report)
    }
}

impl Default for LandingCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(name: &str, mass: Option<f64>, year: Option<i32>, lat: Option<f64>, lon: Option<f64>) -> RawLanding {
        RawLanding {
            name: name.to_string(),
            id: None,
            nametype: None,
            recclass: None,
            mass,
            fall: None,
            year,
            reclat: lat,
            reclong: lon,
            geolocation: None,
        }
    }

    #[test]
    fn test_drops_incomplete_rows() {
        let rows = vec![
            raw("A", Some(10.0), Some(1970), Some(1.0), Some(1.0)),
            raw("B", None, Some(1970), Some(1.0), Some(1.0)),
            raw("C", Some(10.0), None, Some(1.0), Some(1.0)),
            raw("D", Some(10.0), Some(1970), None, Some(1.0)),
        ];

        let (kept, report) = LandingCleaner::new().clean(rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "A");
        assert_eq!(report.rows_loaded, 4);
        assert_eq!(report.missing_mass, 1);
        assert_eq!(report.missing_year, 1);
        assert_eq!(report.missing_coordinates, 1);
        assert_eq!(report.after_required_fields, 1);
    }

    #[test]
    fn test_collapses_exact_duplicates_only() {
        let a = raw("A", Some(10.0), Some(1970), Some(1.0), Some(1.0));
        let near = raw("A2", Some(10.0), Some(1970), Some(1.0), Some(1.0));
        let rows = vec![a.clone(), a.clone(), near];

        let (kept, report) = LandingCleaner::new().clean(rows);
        assert_eq!(kept.len(), 2);
        assert_eq!(report.after_required_fields, 3);
        assert_eq!(report.after_dedup, 2);
    }

    #[test]
    fn test_coordinate_range_filter() {
        let rows = vec![
            raw("ok", Some(10.0), Some(1970), Some(-90.0), Some(180.0)),
            raw("bad-lat", Some(10.0), Some(1970), Some(200.0), Some(1.0)),
            raw("bad-lon", Some(10.0), Some(1970), Some(1.0), Some(-181.0)),
        ];

        let (kept, report) = LandingCleaner::new().clean(rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "ok");
        assert_eq!(report.after_coordinate_filter, 1);
    }

    #[test]
    fn test_year_window_inclusive() {
        let rows = vec![
            raw("low", Some(10.0), Some(1962), Some(1.0), Some(1.0)),
            raw("min", Some(10.0), Some(1963), Some(1.0), Some(1.0)),
            raw("max", Some(10.0), Some(2013), Some(1.0), Some(1.0)),
            raw("high", Some(10.0), Some(2014), Some(1.0), Some(1.0)),
        ];

        let (kept, report) = LandingCleaner::new().clean(rows);
        let names: Vec<&str> = kept.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["min", "max"]);
        assert_eq!(report.after_year_filter, 2);
    }

    #[test]
    fn test_counts_monotonically_decrease() {
        let a = raw("A", Some(10.0), Some(1970), Some(1.0), Some(1.0));
        let rows = vec![
            a.clone(),
            a,
            raw("B", None, Some(1970), Some(1.0), Some(1.0)),
            raw("C", Some(10.0), Some(1950), Some(1.0), Some(1.0)),
            raw("D", Some(10.0), Some(1970), Some(95.0), Some(1.0)),
        ];

        let (_, report) = LandingCleaner::new().clean(rows);
        assert!(report.rows_loaded >= report.after_required_fields);
        assert!(report.after_required_fields >= report.after_dedup);
        assert!(report.after_dedup >= report.after_coordinate_filter);
        assert!(report.after_coordinate_filter >= report.after_year_filter);
    }

    #[test]
    fn test_custom_year_window() {
        let rows = vec![
            raw("old", Some(10.0), Some(1900), Some(1.0), Some(1.0)),
            raw("new", Some(10.0), Some(1970), Some(1.0), Some(1.0)),
        ];

        let (kept, _) = LandingCleaner::with_year_window(1890, 1910).clean(rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "old");
    }
}
