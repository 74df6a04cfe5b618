//! CSV Data Loader Module
//! Loads the serve statistics table once at startup using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Dataset not found: {0}")]
    MissingFile(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Identifier column '{0}' must be the first column")]
    MissingColumn(String),
    #[error("Dataset has no rows")]
    Empty,
}

/// The immutable serve statistics table.
///
/// The first column identifies the player, the last column is a label that
/// is never plotted, everything in between is a statistic.
#[derive(Debug, Clone)]
pub struct ServeDataset {
    df: DataFrame,
    name_col: String,
}

impl ServeDataset {
    /// Wrap an already built DataFrame.
    pub fn from_dataframe(df: DataFrame, name_col: &str) -> Result<Self, LoaderError> {
        let first = df.get_column_names().first().map(|s| s.to_string());
        if first.as_deref() != Some(name_col) {
            return Err(LoaderError::MissingColumn(name_col.to_string()));
        }

        // Rows without a player name cannot be selected or labelled.
        let total = df.height();
        let df = df
            .lazy()
            .filter(col(name_col).is_not_null())
            .collect()?;
        if df.height() < total {
            log::warn!("Skipped {} rows without a player name", total - df.height());
        }
        if df.height() == 0 {
            return Err(LoaderError::Empty);
        }

        let dataset = Self {
            df,
            name_col: name_col.to_string(),
        };
        dataset.warn_on_numeric_trailing_column();
        Ok(dataset)
    }

    /// Load the CSV file at `path`.
    pub fn load_csv(path: &Path, name_col: &str) -> Result<Self, LoaderError> {
        if !path.exists() {
            return Err(LoaderError::MissingFile(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        let dataset = Self::from_dataframe(df, name_col)?;
        log::info!(
            "Loaded {} players with {} columns from {}",
            dataset.row_count(),
            dataset.column_count(),
            path.display()
        );
        log::debug!("Columns: {:?}", dataset.columns());
        Ok(dataset)
    }

    fn warn_on_numeric_trailing_column(&self) {
        let columns = self.df.get_columns();
        if columns.len() < 2 {
            return;
        }
        if let Some(last) = columns.last() {
            if is_numeric(last.dtype()) {
                log::warn!(
                    "Trailing column '{}' is numeric but is excluded from player profiles",
                    last.name()
                );
            }
        }
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn name_column(&self) -> &str {
        &self.name_col
    }

    /// All column names in file order.
    pub fn columns(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Numeric columns other than the identifier, in file order.
    pub fn statistic_columns(&self) -> Vec<String> {
        self.df
            .get_columns()
            .iter()
            .filter(|col| col.name().as_str() != self.name_col && is_numeric(col.dtype()))
            .map(|col| col.name().to_string())
            .collect()
    }

    /// Distinct player names, sorted.
    pub fn player_names(&self) -> Vec<String> {
        let Ok(column) = self.df.column(&self.name_col) else {
            return Vec::new();
        };
        let Ok(names) = column.str() else {
            return Vec::new();
        };

        let mut names: Vec<String> = names
            .into_iter()
            .flatten()
            .map(|s| s.to_string())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn column_count(&self) -> usize {
        self.df.width()
    }
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled_path() -> PathBuf {
        PathBuf::from(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/data/serve_statistics.csv"
        ))
    }

    #[test]
    fn loads_bundled_dataset() {
        let dataset = ServeDataset::load_csv(&bundled_path(), "name").unwrap();
        assert!(dataset.row_count() >= 100);
        assert_eq!(dataset.columns().first().map(String::as_str), Some("name"));
        assert_eq!(dataset.columns().last().map(String::as_str), Some("country"));
        assert!(dataset
            .player_names()
            .iter()
            .any(|n| n == "Adrian Mannarino"));
    }

    #[test]
    fn statistic_columns_skip_name_and_labels() {
        let dataset = ServeDataset::load_csv(&bundled_path(), "name").unwrap();
        let stats = dataset.statistic_columns();
        assert_eq!(stats.first().map(String::as_str), Some("ace"));
        assert!(!stats.iter().any(|c| c == "name" || c == "country"));
        assert_eq!(stats.len(), dataset.column_count() - 2);
    }

    #[test]
    fn missing_file_fails() {
        let result = ServeDataset::load_csv(Path::new("no/such/file.csv"), "name");
        assert!(matches!(result, Err(LoaderError::MissingFile(_))));
    }

    #[test]
    fn identifier_must_come_first() {
        let df = df!(
            "ace" => [1i64, 2],
            "name" => ["A", "B"]
        )
        .unwrap();
        let result = ServeDataset::from_dataframe(df, "name");
        assert!(matches!(result, Err(LoaderError::MissingColumn(_))));
    }

    #[test]
    fn rows_without_name_are_dropped() {
        let df = df!(
            "name" => [Some("Adrian Mannarino"), None],
            "ace" => [12i64, 30],
            "country" => ["FRA", "USA"]
        )
        .unwrap();
        let dataset = ServeDataset::from_dataframe(df, "name").unwrap();
        assert_eq!(dataset.row_count(), 1);
        assert_eq!(dataset.player_names(), vec!["Adrian Mannarino"]);
    }

    #[test]
    fn player_names_are_sorted_and_unique() {
        let df = df!(
            "name" => ["Zverev", "Berrettini", "Medvedev", "Berrettini"],
            "ace" => [10i64, 20, 30, 40],
            "country" => ["GER", "ITA", "RUS", "ITA"]
        )
        .unwrap();
        let dataset = ServeDataset::from_dataframe(df, "name").unwrap();
        assert_eq!(
            dataset.player_names(),
            vec!["Berrettini", "Medvedev", "Zverev"]
        );
    }
}
