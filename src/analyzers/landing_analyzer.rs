use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{PipelineError, Result};
use crate::models::{CleanedLanding, MassCategory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryMass {
    pub country: String,
    pub mean_mass: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub total_records: usize,
    pub first_year: i32,
    pub last_year: i32,
    pub distinct_countries: usize,
    pub modal_country: String,
    pub modal_country_count: usize,
    pub modal_mass_category: String,
    pub mean_mass: f64,
    pub total_mass: f64,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisSummary {
    pub fn display_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Analysis Summary ===\n");
        summary.push_str(&format!("Total landings analyzed: {}\n", self.total_records));
        summary.push_str(&format!(
            "Observation period: {} to {}\n",
            self.first_year, self.last_year
        ));
        summary.push_str(&format!(
            "Countries with landings: {}\n",
            self.distinct_countries
        ));
        summary.push_str(&format!(
            "Most landings: {} ({} records)\n",
            self.modal_country, self.modal_country_count
        ));
        summary.push_str(&format!(
            "Most common mass category: {}\n",
            self.modal_mass_category
        ));
        summary.push_str(&format!("Mean mass: {:.2} g\n", self.mean_mass));
        summary.push_str(&format!("Total mass: {:.2} g\n", self.total_mass));

        summary
    }
}

/// Read-only reductions over the cleaned table. Every method leaves the
/// input untouched; ties break on country name or year so repeated runs
/// order identically.
pub struct LandingAnalyzer;

impl LandingAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn counts_by_country(&self, records: &[CleanedLanding]) -> Vec<CountryCount> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in records {
            *counts.entry(record.country.as_str()).or_insert(0) += 1;
        }

        let mut result: Vec<CountryCount> = counts
            .into_iter()
            .map(|(country, count)| CountryCount {
                country: country.to_string(),
                count,
            })
            .collect();
        result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));
        result
    }

    pub fn mean_mass_by_country(&self, records: &[CleanedLanding]) -> Vec<CountryMass> {
        let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
        for record in records {
            let entry = sums.entry(record.country.as_str()).or_insert((0.0, 0));
            entry.0 += record.mass;
            entry.1 += 1;
        }

        let mut result: Vec<CountryMass> = sums
            .into_iter()
            .map(|(country, (total, count))| CountryMass {
                country: country.to_string(),
                mean_mass: total / count as f64,
            })
            .collect();
        result.sort_by(|a, b| {
            b.mean_mass
                .partial_cmp(&a.mean_mass)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.country.cmp(&b.country))
        });
        result
    }

    pub fn counts_by_year(&self, records: &[CleanedLanding]) -> Vec<YearCount> {
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for record in records {
            *counts.entry(record.year).or_insert(0) += 1;
        }

        let mut result: Vec<YearCount> = counts
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect();
        result.sort_by_key(|yc| yc.year);
        result
    }

    /// The busiest years, highest count first; earlier year wins a tie.
    pub fn peak_years(&self, year_counts: &[YearCount], limit: usize) -> Vec<YearCount> {
        let mut peaks = year_counts.to_vec();
        peaks.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.year.cmp(&b.year)));
        peaks.truncate(limit);
        peaks
    }

    pub fn summarize(&self, records: &[CleanedLanding]) -> Result<AnalysisSummary> {
        if records.is_empty() {
            return Err(PipelineError::EmptyDataset(
                "no records to analyze".to_string(),
            ));
        }

        let first_year = records.iter().map(|r| r.year).min().unwrap_or_default();
        let last_year = records.iter().map(|r| r.year).max().unwrap_or_default();

        let by_country = self.counts_by_country(records);
        let modal = &by_country[0];

        let mut category_counts: HashMap<MassCategory, usize> = HashMap::new();
        for record in records {
            *category_counts.entry(record.mass_category).or_insert(0) += 1;
        }
        let modal_mass_category = category_counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.label().cmp(a.0.label())))
            .map(|(category, _)| category.label().to_string())
            .unwrap_or_default();

        let total_mass: f64 = records.iter().map(|r| r.mass).sum();

        Ok(AnalysisSummary {
            total_records: records.len(),
            first_year,
            last_year,
            distinct_countries: by_country.len(),
            modal_country: modal.country.clone(),
            modal_country_count: modal.count,
            modal_mass_category,
            mean_mass: total_mass / records.len() as f64,
            total_mass,
            generated_at: Utc::now(),
        })
    }
}

impl Default for LandingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
