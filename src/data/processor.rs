//! Data Processor Module
//! Derives chart data from the immutable dataset: ranking (sort and slice)
//! and player profile (row to column transposition).

use crate::data::ServeDataset;
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
    #[error("Player not found: {0}")]
    PlayerNotFound(String),
    #[error("Player '{name}' matches {count} rows")]
    AmbiguousPlayer { name: String, count: usize },
}

/// Sort direction of the ranking chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortOrder::Ascending
    }
}

/// One bar of the ranking chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    pub name: String,
    pub value: Option<f64>,
}

/// One bar of the profile chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileEntry {
    pub statistic: String,
    pub value: Option<f64>,
}

pub struct DataProcessor;

impl DataProcessor {
    /// Sort every player by `category` and keep the first `count` rows.
    ///
    /// Ties keep file order and missing values always go last.
    pub fn rank_players(
        dataset: &ServeDataset,
        category: &str,
        order: SortOrder,
        count: usize,
    ) -> Result<Vec<RankedPlayer>, ProcessorError> {
        let df = dataset.dataframe();
        if df.column(category).is_err() {
            return Err(ProcessorError::UnknownColumn(category.to_string()));
        }

        let options = SortMultipleOptions::default()
            .with_order_descending(!order.is_ascending())
            .with_nulls_last(true)
            .with_maintain_order(true);

        // NaN is a value to polars; make it null so it sorts with the missing.
        let ranked = df
            .clone()
            .lazy()
            .with_column(
                col(category)
                    .cast(DataType::Float64)
                    .fill_nan(lit(NULL)),
            )
            .sort([category], options)
            .limit(count as IdxSize)
            .collect()?;

        let names = ranked.column(dataset.name_column())?.str()?;
        let values = ranked.column(category)?.f64()?;

        Ok(names
            .into_iter()
            .zip(values.into_iter())
            .map(|(name, value)| RankedPlayer {
                name: name.unwrap_or_default().to_string(),
                value,
            })
            .collect())
    }

    /// Transpose the row of `player` into (statistic, value) pairs, leaving
    /// out the identifier column and the trailing label column.
    pub fn player_profile(
        dataset: &ServeDataset,
        player: &str,
    ) -> Result<Vec<ProfileEntry>, ProcessorError> {
        let row = dataset
            .dataframe()
            .clone()
            .lazy()
            .filter(col(dataset.name_column()).eq(lit(player)))
            .collect()?;

        match row.height() {
            0 => return Err(ProcessorError::PlayerNotFound(player.to_string())),
            1 => {}
            count => {
                return Err(ProcessorError::AmbiguousPlayer {
                    name: player.to_string(),
                    count,
                })
            }
        }

        let columns = row.get_columns();
        let retained = columns.len().saturating_sub(2);

        Ok(columns
            .iter()
            .skip(1)
            .take(retained)
            .map(|column| {
                // Label columns that cannot be cast come through as missing.
                let value = column
                    .cast(&DataType::Float64)
                    .ok()
                    .and_then(|c| c.f64().ok().and_then(|ca| ca.get(0)))
                    .filter(|v| !v.is_nan());
                ProfileEntry {
                    statistic: column.name().to_string(),
                    value,
                }
            })
            .collect())
    }
}
