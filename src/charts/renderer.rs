//! Static Chart Renderer
//! Writes a bar chart to a PNG file with plotters.
//!
//! Layout:
//! 1. Title centered on top
//! 2. One bar per label, labels rotated under the x axis
//! 3. Axis descriptions matching the on-screen chart

use crate::charts::BarChartData;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::Path;
use thiserror::Error;

const FONT: &str = "sans-serif";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart has no bars")]
    NoData,
    #[error("Failed to draw chart: {0}")]
    Draw(String),
}

fn draw_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `chart` into a PNG at `path`.
    pub fn render_png(chart: &BarChartData, path: &Path, size: (u32, u32)) -> Result<(), RenderError> {
        if chart.is_empty() {
            return Err(RenderError::NoData);
        }

        let heights = chart.heights();
        let (y_min, y_max) = Self::value_range(&heights);
        let [r, g, b, _] = chart.color.to_array();
        let bar_color = RGBColor(r, g, b);

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut plot = ChartBuilder::on(&root)
            .caption(&chart.title, (FONT, 28))
            .margin(20)
            .x_label_area_size(Self::label_area(&chart.labels))
            .y_label_area_size(70)
            .build_cartesian_2d((0..chart.len()).into_segmented(), y_min..y_max)
            .map_err(draw_err)?;

        let labels = &chart.labels;
        plot.configure_mesh()
            .disable_x_mesh()
            .x_labels(chart.len())
            .x_desc(&chart.x_label)
            .y_desc(&chart.y_label)
            .axis_desc_style((FONT, 18))
            .y_label_style((FONT, 14))
            .x_label_style(
                (FONT, 13)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                    labels.get(*i).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            .draw()
            .map_err(draw_err)?;

        plot.draw_series(
            Histogram::vertical(&plot)
                .style(bar_color.filled())
                .margin(6)
                .data(heights.iter().enumerate().map(|(i, v)| (i, *v))),
        )
        .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        log::info!("Exported '{}' to {}", chart.title, path.display());
        Ok(())
    }

    /// Y range covering every bar and the zero baseline, with headroom.
    pub fn value_range(values: &[f64]) -> (f64, f64) {
        let min = values.iter().copied().fold(0.0_f64, f64::min);
        let max = values.iter().copied().fold(0.0_f64, f64::max);
        if (max - min).abs() < f64::EPSILON {
            return (min, min + 1.0);
        }
        let pad = (max - min) * 0.1;
        let low = if min < 0.0 { min - pad } else { 0.0 };
        (low, max + pad)
    }

    /// Room under the axis for the longest rotated label.
    fn label_area(labels: &[String]) -> u32 {
        let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
        (longest * 8 + 40).clamp(60, 260)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ProfileEntry, RankedPlayer};

    #[test]
    fn range_includes_zero_baseline() {
        let (low, high) = StaticChartRenderer::value_range(&[10.0, 40.0, 20.0]);
        assert_eq!(low, 0.0);
        assert!(high > 40.0);
    }

    #[test]
    fn range_extends_below_zero() {
        let (low, high) = StaticChartRenderer::value_range(&[-5.0, 5.0]);
        assert!(low < -5.0);
        assert!(high > 5.0);
    }

    #[test]
    fn flat_range_is_not_empty() {
        let (low, high) = StaticChartRenderer::value_range(&[0.0, 0.0]);
        assert!(high > low);
    }

    #[test]
    fn empty_chart_is_rejected() {
        let chart = BarChartData::ranking("ace", &[]);
        let result = StaticChartRenderer::render_png(&chart, Path::new("unused.png"), (100, 100));
        assert!(matches!(result, Err(RenderError::NoData)));
    }

    fn assert_renders(chart: &BarChartData, file: &str) {
        let path = std::env::temp_dir().join(format!("{}_{}.png", file, std::process::id()));
        StaticChartRenderer::render_png(chart, &path, (800, 500)).unwrap();
        let size = std::fs::metadata(&path).unwrap().len();
        let _ = std::fs::remove_file(&path);
        assert!(size > 0);
    }

    #[test]
    fn renders_ranking_chart_png() {
        let players = vec![
            RankedPlayer {
                name: "Reilly Opelka".to_string(),
                value: Some(50.0),
            },
            RankedPlayer {
                name: "John Isner".to_string(),
                value: Some(45.0),
            },
        ];
        assert_renders(&BarChartData::ranking("ace", &players), "serve_stats_ranking");
    }

    #[test]
    fn renders_profile_chart_png() {
        let entries = vec![
            ProfileEntry {
                statistic: "ace".to_string(),
                value: Some(26.0),
            },
            ProfileEntry {
                statistic: "first_serve_in_pct".to_string(),
                value: None,
            },
        ];
        assert_renders(
            &BarChartData::profile("Adrian Mannarino", &entries),
            "serve_stats_profile",
        );
    }

    #[test]
    fn label_area_grows_with_text() {
        let short = StaticChartRenderer::label_area(&["ace".to_string()]);
        let long = StaticChartRenderer::label_area(&["second_serve_points_won_pct".to_string()]);
        assert!(long > short);
    }
}
