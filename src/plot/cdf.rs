//! Cumulative distribution chart over the version-count histogram.
//!
//! The histogram is expanded into a sorted sample list (keys above the
//! cap excluded) and each sample becomes one `(version_count, fraction)`
//! point with `fraction = rank / sample_count`. Charts are rendered with
//! the [`plotters`] bitmap backend and saved as PNG files.

use crate::utils::config::{CDF_VERSION_CAP, DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH};
use crate::utils::error::PlotError;
use log::{debug, info};
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

/// CDF chart configuration
#[derive(Debug, Clone)]
pub struct CdfConfig {
    /// Chart title (empty for no caption text)
    pub title: String,

    /// X-axis label
    pub x_label: String,

    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,
}

impl Default for CdfConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: "Number of Versions".to_string(),
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
        }
    }
}

impl CdfConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }
}

/// Expand a histogram into cumulative distribution points
///
/// **Public** - pure function, also used by tests
///
/// # Arguments
/// * `histogram` - version count -> occurrence count
///
/// # Returns
/// One `(version_count, rank / sample_count)` point per sample, ascending;
/// keys above the cap are excluded before expansion. Empty when no key
/// survives the cap.
pub fn cumulative_points(histogram: &BTreeMap<u32, u64>) -> Vec<(f64, f64)> {
    let sample_count: u64 = histogram
        .iter()
        .filter(|&(&key, _)| key <= CDF_VERSION_CAP)
        .map(|(_, &count)| count)
        .sum();

    if sample_count == 0 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(sample_count as usize);
    let mut rank = 0u64;

    for (&key, &count) in histogram.iter() {
        if key > CDF_VERSION_CAP {
            continue;
        }
        for _ in 0..count {
            rank += 1;
            points.push((key as f64, rank as f64 / sample_count as f64));
        }
    }

    points
}

/// Render the histogram's CDF as a PNG line chart
///
/// **Public** - main entry point for plot output
///
/// # Arguments
/// * `histogram` - version count -> occurrence count
/// * `config` - Chart configuration (None = defaults)
/// * `output_path` - Path for the PNG file
///
/// # Errors
/// * `PlotError::EmptyData` - no samples survive the version cap
/// * `PlotError::DrawingArea` / `ChartConfig` / `Drawing` - backend failures
pub fn render_cdf(
    histogram: &BTreeMap<u32, u64>,
    config: Option<&CdfConfig>,
    output_path: impl AsRef<Path>,
) -> Result<(), PlotError> {
    let output_path = output_path.as_ref();
    let config = config.cloned().unwrap_or_default();

    let points = cumulative_points(histogram);
    if points.is_empty() {
        return Err(PlotError::EmptyData);
    }

    info!(
        "Rendering CDF plot ({} samples) to: {}",
        points.len(),
        output_path.display()
    );

    let x_min = points[0].0;
    let mut x_max = points[points.len() - 1].0;
    if x_max <= x_min {
        // Single distinct version count still needs a non-empty axis range
        x_max = x_min + 1.0;
    }

    debug!("Plot axes: x {}..{}, y 0..1", x_min, x_max);

    let root = BitMapBackend::new(output_path, (config.width, config.height));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&drawing_area)
        .caption(config.title.as_str(), ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_min..x_max, 0.0..1.0)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_str())
        .x_label_style(("sans-serif", 25))
        .y_desc("CDF")
        .y_label_style(("sans-serif", 25))
        .x_label_formatter(&|x| format!("{:.0}", x.round()))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(points.iter().cloned(), &BLUE))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
