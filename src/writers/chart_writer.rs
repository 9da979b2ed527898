use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::analyzers::{CountryCount, CountryMass, YearCount};
use crate::error::{PipelineError, Result};
use crate::utils::constants::{CHART_HEIGHT, CHART_WIDTH};

fn chart_err<E: std::fmt::Display>(err: E) -> PipelineError {
    PipelineError::Chart(err.to_string())
}

/// Renders the three report charts as PNG files at a fixed resolution.
pub struct ChartWriter {
    width: u32,
    height: u32,
}

impl ChartWriter {
    pub fn new() -> Self {
        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }

    pub fn with_resolution(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Bar chart of landing counts per country, already sorted descending.
    pub fn country_count_chart(&self, data: &[CountryCount], path: &Path) -> Result<()> {
        let labels: Vec<String> = data.iter().map(|c| c.country.clone()).collect();
        let values: Vec<f64> = data.iter().map(|c| c.count as f64).collect();
        self.draw_bar_chart(
            "Meteorite Landings by Country",
            "Country",
            "Landings",
            &labels,
            &values,
            BLUE,
            path,
        )
    }

    /// Bar chart of mean mass per country, already sorted descending.
    pub fn mean_mass_chart(&self, data: &[CountryMass], path: &Path) -> Result<()> {
        let labels: Vec<String> = data.iter().map(|c| c.country.clone()).collect();
        let values: Vec<f64> = data.iter().map(|c| c.mean_mass).collect();
        self.draw_bar_chart(
            "Mean Meteorite Mass by Country (g)",
            "Country",
            "Mean mass (g)",
            &labels,
            &values,
            RED,
            path,
        )
    }

    /// Line chart of landings per year with the peak years annotated.
    pub fn yearly_count_chart(
        &self,
        data: &[YearCount],
        peaks: &[YearCount],
        path: &Path,
    ) -> Result<()> {
        if data.is_empty() {
            return Err(PipelineError::EmptyDataset(
                "no yearly counts to chart".to_string(),
            ));
        }

        Self::ensure_parent(path)?;

        let min_year = data.first().map(|y| y.year).unwrap_or_default();
        let max_year = data.last().map(|y| y.year).unwrap_or_default();
        let max_count = data.iter().map(|y| y.count).max().unwrap_or(0) as f64;

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Meteorite Landings by Year", ("sans-serif", 32))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(min_year..max_year + 1, 0f64..max_count * 1.15)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc("Landings")
            .label_style(("sans-serif", 16))
            .draw()
            .map_err(chart_err)?;

        let points: Vec<(i32, f64)> = data.iter().map(|y| (y.year, y.count as f64)).collect();
        chart
            .draw_series(LineSeries::new(points.clone(), &BLUE))
            .map_err(chart_err)?;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
            )
            .map_err(chart_err)?;

        chart
            .draw_series(peaks.iter().map(|p| {
                Text::new(
                    format!("{}: {}", p.year, p.count),
                    (p.year, p.count as f64 + max_count * 0.04),
                    ("sans-serif", 18).into_font(),
                )
            }))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        info!(path = %path.display(), "wrote yearly count chart");
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_bar_chart(
        &self,
        caption: &str,
        x_desc: &str,
        y_desc: &str,
        labels: &[String],
        values: &[f64],
        color: RGBColor,
        path: &Path,
    ) -> Result<()> {
        if values.is_empty() {
            return Err(PipelineError::EmptyDataset(format!(
                "no data for chart '{caption}'"
            )));
        }

        Self::ensure_parent(path)?;

        let max_value = values.iter().cloned().fold(f64::MIN, f64::max);

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 32))
            .margin(20)
            .x_label_area_size(140)
            .y_label_area_size(90)
            .build_cartesian_2d(0i32..labels.len() as i32, 0f64..max_value * 1.1)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&|idx: &i32| {
                labels
                    .get(*idx as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .x_desc(x_desc)
            .y_desc(y_desc)
            .label_style(("sans-serif", 14))
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(values.iter().enumerate().map(|(idx, &value)| {
                Rectangle::new(
                    [(idx as i32, 0.0), (idx as i32 + 1, value)],
                    color.mix(0.6).filled(),
                )
            }))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        info!(path = %path.display(), "wrote bar chart");
        Ok(())
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl Default for ChartWriter {
    fn default() -> Self {
        Self::new()
    }
}
