//! Chart Plotter Module
//! Creates interactive bar charts using egui_plot.

use crate::data::{ProfileEntry, RankedPlayer};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Plot};

pub const RANKING_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const PROFILE_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

const BAR_WIDTH: f64 = 0.7;

/// Everything needed to draw one bar chart, on screen or to a file.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartData {
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub color: Color32,
}

impl BarChartData {
    /// Player name on x, `category` on y.
    pub fn ranking(category: &str, players: &[RankedPlayer]) -> Self {
        Self {
            id: "ranking_chart".to_string(),
            title: format!("Players by {}", category),
            x_label: "name".to_string(),
            y_label: category.to_string(),
            labels: players.iter().map(|p| p.name.clone()).collect(),
            values: players.iter().map(|p| p.value).collect(),
            color: RANKING_COLOR,
        }
    }

    /// Statistic name on x, the player's value on y.
    pub fn profile(player: &str, entries: &[ProfileEntry]) -> Self {
        Self {
            id: "profile_chart".to_string(),
            title: player.to_string(),
            x_label: "cats".to_string(),
            y_label: player.to_string(),
            labels: entries.iter().map(|e| e.statistic.clone()).collect(),
            values: entries.iter().map(|e| e.value).collect(),
            color: PROFILE_COLOR,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Bar heights; missing values are drawn at zero.
    pub fn heights(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.unwrap_or(0.0)).collect()
    }

    /// Label for an axis position, if it falls on a bar.
    pub fn label_at(&self, position: f64) -> Option<&str> {
        let rounded = position.round();
        if rounded < 0.0 || (position - rounded).abs() > 1e-6 {
            return None;
        }
        self.labels.get(rounded as usize).map(String::as_str)
    }
}

/// Draws bar charts into egui panels.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw a bar chart with one labelled bar per entry.
    pub fn draw_bar_chart(ui: &mut egui::Ui, chart: &BarChartData, height: f32) {
        if chart.is_empty() {
            ui.label(RichText::new("No Data").size(16.0).color(Color32::GRAY));
            return;
        }

        let bars: Vec<Bar> = chart
            .labels
            .iter()
            .zip(chart.heights())
            .enumerate()
            .map(|(i, (label, value))| {
                Bar::new(i as f64, value)
                    .name(label)
                    .fill(chart.color)
                    .width(BAR_WIDTH)
            })
            .collect();

        let axis_chart = chart.clone();

        Plot::new(&chart.id)
            .height(height)
            .allow_zoom(true)
            .allow_drag(true)
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_label(&chart.x_label)
            .y_axis_label(&chart.y_label)
            .x_grid_spacer(egui_plot::uniform_grid_spacer(|_input| [1.0, 5.0, 10.0]))
            .x_axis_formatter(move |mark, _range| {
                axis_chart
                    .label_at(mark.value)
                    .map(str::to_string)
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(chart.color).name(&chart.title));
            });
    }
}
