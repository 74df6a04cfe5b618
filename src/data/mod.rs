//! Data module - CSV loading and chart data derivation

mod loader;
mod processor;

pub use loader::ServeDataset;
pub use processor::{DataProcessor, ProcessorError, ProfileEntry, RankedPlayer, SortOrder};
