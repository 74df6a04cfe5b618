//! Serve Stats Main Application
//! Main window with control panel and chart viewer.

use crate::charts::{BarChartData, StaticChartRenderer};
use crate::config::DashboardConfig;
use crate::data::{DataProcessor, ProcessorError, ServeDataset};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, SelectionState};
use egui::SidePanel;
use std::sync::Arc;

/// Derive both charts from the current selection.
pub fn compute_charts(
    dataset: &ServeDataset,
    selection: &SelectionState,
) -> Result<(BarChartData, BarChartData), ProcessorError> {
    let ranked = DataProcessor::rank_players(
        dataset,
        &selection.category,
        selection.sort_order,
        selection.display_count as usize,
    )?;
    let profile = DataProcessor::player_profile(dataset, &selection.selected_player)?;

    Ok((
        BarChartData::ranking(&selection.category, &ranked),
        BarChartData::profile(&selection.selected_player, &profile),
    ))
}

/// Main application window.
pub struct ServeStatsApp {
    dataset: Arc<ServeDataset>,
    config: DashboardConfig,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl ServeStatsApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        dataset: Arc<ServeDataset>,
        config: DashboardConfig,
    ) -> Self {
        let control_panel = ControlPanel::new(&config, &dataset);
        let mut app = Self {
            dataset,
            config,
            control_panel,
            chart_viewer: ChartViewer::new(),
        };
        app.refresh_charts();
        app
    }

    /// Recompute both charts from the current selection.
    fn refresh_charts(&mut self) {
        let selection = &self.control_panel.selection;
        log::debug!("Recomputing charts for {:?}", selection);

        match compute_charts(&self.dataset, selection) {
            Ok((ranking, profile)) => {
                self.chart_viewer.ranking = Some(ranking);
                self.chart_viewer.profile = Some(profile);
                self.control_panel.set_error(None);
            }
            Err(e) => {
                log::error!("Failed to update charts: {}", e);
                self.chart_viewer.clear();
                self.control_panel.set_error(Some(e.to_string()));
            }
        }
    }

    /// Save a chart as PNG and open it with the system viewer.
    fn handle_export(&mut self, chart: Option<BarChartData>) {
        let Some(chart) = chart else {
            self.control_panel.set_error(Some("No chart to export".to_string()));
            return;
        };

        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(format!("{}.png", chart.id))
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        let [width, height] = self.config.export_size;
        match StaticChartRenderer::render_png(&chart, &output_path, (width, height)) {
            Ok(()) => {
                self.control_panel.set_error(None);
                if let Err(e) = open::that(&output_path) {
                    log::warn!("Could not open {}: {}", output_path.display(), e);
                }
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.control_panel.set_error(Some(e.to_string()));
            }
        }
    }

    fn handle_action(&mut self, action: ControlPanelAction) {
        match action {
            ControlPanelAction::SelectionChanged => self.refresh_charts(),
            ControlPanelAction::ExportRanking => {
                self.handle_export(self.chart_viewer.ranking.clone())
            }
            ControlPanelAction::ExportProfile => {
                self.handle_export(self.chart_viewer.profile.clone())
            }
            ControlPanelAction::None => {}
        }
    }
}

impl eframe::App for ServeStatsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        let action = SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| self.control_panel.show(ui))
                    .inner
            })
            .inner;
        self.handle_action(action);

        // Central panel - Chart Viewer
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| self.chart_viewer.show(ui, &mut self.control_panel))
            .inner;
        self.handle_action(action);
    }
}
