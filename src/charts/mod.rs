//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::{BarChartData, ChartPlotter};
pub use renderer::StaticChartRenderer;
