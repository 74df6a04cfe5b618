//! Serve Stats - Tennis Serve Analytics Dashboard
//!
//! Visualizes serve statistics of the male players at the 2021 Australian
//! Open: a ranking chart over one statistic and a profile chart for one player.

mod charts;
mod config;
mod data;
mod gui;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, DashboardConfig};
use data::ServeDataset;
use eframe::egui;
use gui::ServeStatsApp;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = DashboardConfig::resolve(&cli).context("loading configuration")?;

    // The dataset is loaded once; a missing or malformed file stops here.
    let dataset = ServeDataset::load_csv(&config.data_path, &config.name_column)
        .with_context(|| format!("loading dataset {}", config.data_path.display()))?;
    let dataset = Arc::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Tennis Serve Analytics"),
        ..Default::default()
    };

    eframe::run_native(
        "Tennis Serve Analytics",
        options,
        Box::new(move |cc| Ok(Box::new(ServeStatsApp::new(cc, dataset, config)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
