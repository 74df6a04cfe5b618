//! Control Panel Widget
//! Left side panel with the dashboard controls and the status line.

use crate::config::DashboardConfig;
use crate::data::{ServeDataset, SortOrder};
use egui::{Color32, ComboBox, RichText};

pub const MIN_DISPLAY_COUNT: u32 = 5;
pub const MAX_DISPLAY_COUNT: u32 = 100;
pub const DISPLAY_COUNT_STEP: u32 = 5;

/// Clamp to the slider range and snap to the nearest step.
pub fn clamp_display_count(count: u32) -> u32 {
    let clamped = count.clamp(MIN_DISPLAY_COUNT, MAX_DISPLAY_COUNT);
    let snapped = (clamped + DISPLAY_COUNT_STEP / 2) / DISPLAY_COUNT_STEP * DISPLAY_COUNT_STEP;
    snapped.clamp(MIN_DISPLAY_COUNT, MAX_DISPLAY_COUNT)
}

pub fn display_count_status(count: u32) -> String {
    format!("You have selected to display {} players", count)
}

/// Current control values driving both charts.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub category: String,
    pub sort_order: SortOrder,
    pub display_count: u32,
    pub selected_player: String,
}

impl SelectionState {
    /// Start from the configured defaults, falling back to the first valid
    /// option when a default is not in the dataset.
    pub fn from_config(config: &DashboardConfig, categories: &[String], players: &[String]) -> Self {
        Self {
            category: pick_option(&config.default_category, categories, "category"),
            sort_order: SortOrder::from_ascending(config.default_sort_ascending),
            display_count: clamp_display_count(config.default_display_count),
            selected_player: pick_option(&config.default_player, players, "player"),
        }
    }
}

fn pick_option(wanted: &str, options: &[String], kind: &str) -> String {
    if options.iter().any(|o| o == wanted) {
        return wanted.to_string();
    }
    let fallback = options.first().cloned().unwrap_or_default();
    log::warn!("Default {} '{}' not in dataset, using '{}'", kind, wanted, fallback);
    fallback
}

/// Left side control panel.
pub struct ControlPanel {
    pub selection: SelectionState,
    pub categories: Vec<String>,
    pub players: Vec<String>,
    pub status: String,
    pub error: Option<String>,
}

impl ControlPanel {
    pub fn new(config: &DashboardConfig, dataset: &ServeDataset) -> Self {
        let categories = dataset.statistic_columns();
        let players = dataset.player_names();
        let selection = SelectionState::from_config(config, &categories, &players);
        let status = display_count_status(selection.display_count);

        Self {
            selection,
            categories,
            players,
            status,
            error: None,
        }
    }

    /// Apply a new display count. Returns true if it changed.
    pub fn set_display_count(&mut self, count: u32) -> bool {
        let count = clamp_display_count(count);
        if count == self.selection.display_count {
            return false;
        }
        self.selection.display_count = count;
        self.status = display_count_status(count);
        true
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Draw the ranking controls.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let before = self.selection.clone();

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(RichText::new("🎾").size(32.0));
            ui.label(
                RichText::new("Tennis Serve Analytics")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Analyse the serving performances of all male players at the 2021 Australian Open")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("Category").size(14.0).strong());
        ComboBox::from_id_salt("cat_filter")
            .width(200.0)
            .selected_text(&self.selection.category)
            .show_ui(ui, |ui| {
                for category in &self.categories {
                    ui.selectable_value(&mut self.selection.category, category.clone(), category);
                }
            });

        ui.add_space(10.0);

        ui.label(RichText::new("Sort").size(14.0).strong());
        ui.radio_value(&mut self.selection.sort_order, SortOrder::Ascending, "Ascending");
        ui.radio_value(&mut self.selection.sort_order, SortOrder::Descending, "Descending");

        ui.add_space(10.0);

        ui.label(RichText::new("# Players").size(14.0).strong());
        let mut count = self.selection.display_count;
        ui.add(
            egui::Slider::new(&mut count, MIN_DISPLAY_COUNT..=MAX_DISPLAY_COUNT)
                .step_by(DISPLAY_COUNT_STEP as f64),
        );
        self.set_display_count(count);
        ui.label(RichText::new(&self.status).size(11.0));

        ui.add_space(15.0);
        ui.separator();

        if let Some(error) = &self.error {
            ui.label(
                RichText::new(format!("Error: {}", error))
                    .size(11.0)
                    .color(Color32::from_rgb(220, 53, 69)),
            );
        }

        if self.selection != before {
            ControlPanelAction::SelectionChanged
        } else {
            ControlPanelAction::None
        }
    }

    /// Draw the player dropdown above the profile chart.
    pub fn show_player_menu(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let before = self.selection.selected_player.clone();

        ui.horizontal(|ui| {
            ui.label(RichText::new("Name").size(14.0).strong());
            ComboBox::from_id_salt("name_filter")
                .width(220.0)
                .selected_text(&self.selection.selected_player)
                .show_ui(ui, |ui| {
                    for player in &self.players {
                        ui.selectable_value(
                            &mut self.selection.selected_player,
                            player.clone(),
                            player,
                        );
                    }
                });
        });

        if self.selection.selected_player != before {
            ControlPanelAction::SelectionChanged
        } else {
            ControlPanelAction::None
        }
    }
}

/// Actions triggered by the dashboard panels
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectionChanged,
    ExportRanking,
    ExportProfile,
}
