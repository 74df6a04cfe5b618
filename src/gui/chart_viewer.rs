//! Chart Viewer Widget
//! Central scrollable panel with the ranking chart on top and the player
//! profile chart below it.

use crate::charts::{BarChartData, ChartPlotter};
use crate::gui::{ControlPanel, ControlPanelAction};
use egui::{Color32, RichText, ScrollArea};

const CARD_SPACING: f32 = 15.0;
const CHART_HEIGHT: f32 = 380.0;

/// Holds the chart data currently on screen.
#[derive(Default)]
pub struct ChartViewer {
    pub ranking: Option<BarChartData>,
    pub profile: Option<BarChartData>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ranking = None;
        self.profile = None;
    }

    /// Draw both chart cards; the player dropdown lives in the profile card.
    pub fn show(&mut self, ui: &mut egui::Ui, controls: &mut ControlPanel) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if Self::draw_card(ui, self.ranking.as_ref(), |_| {}) {
                    action = ControlPanelAction::ExportRanking;
                }

                ui.add_space(CARD_SPACING);
                ui.heading("Individual Statistics");
                ui.label(
                    "Since the Australian Open is a knockout based tournament, \
                     the most relevant statistics are those which are normalised.",
                );
                ui.add_space(CARD_SPACING);

                let mut menu_action = ControlPanelAction::None;
                let export = Self::draw_card(ui, self.profile.as_ref(), |ui| {
                    menu_action = controls.show_player_menu(ui);
                    ui.add_space(8.0);
                });
                if menu_action != ControlPanelAction::None {
                    action = menu_action;
                } else if export {
                    action = ControlPanelAction::ExportProfile;
                }
            });

        action
    }

    /// Draw one chart card. Returns true when its export button was clicked.
    fn draw_card(
        ui: &mut egui::Ui,
        chart: Option<&BarChartData>,
        header: impl FnOnce(&mut egui::Ui),
    ) -> bool {
        let mut export = false;

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(200)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                header(ui);

                let Some(chart) = chart else {
                    ui.label(RichText::new("No Data").size(16.0).color(Color32::GRAY));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.label(RichText::new(&chart.title).size(16.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Export PNG").clicked() {
                            export = true;
                        }
                    });
                });
                ui.add_space(6.0);
                ChartPlotter::draw_bar_chart(ui, chart, CHART_HEIGHT);
            });

        export
    }
}
