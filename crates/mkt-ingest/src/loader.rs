//! CSV loading and cleaning of the campaign dataset.
//!
//! Cleaning coerces the percentage-style columns to Float64 and clamps
//! `Social_Media_Followers` to a floor of zero. No other column is modified
//! and row order is preserved, so downstream consumers can treat the
//! returned frame as the immutable source of truth for the run.

use std::path::Path;

use polars::prelude::{AnyValue, CsvReadOptions, DataFrame, SerReader};
use tracing::{debug, info};

use mkt_model::schema::{CATEGORICAL_COLUMNS, NUMERIC_COLUMNS, PERCENTAGE_COLUMNS, col};

use crate::cell::{any_to_f64, any_to_i64, any_to_string};
use crate::error::{IngestError, Result};
use crate::frame::{set_f64_column, set_i64_column};

/// Loads the campaign CSV and applies cleaning.
///
/// Fails with [`IngestError::FileNotFound`] when `path` does not exist, with
/// [`IngestError::CsvParse`] when the file is not a readable CSV, and with
/// the schema errors documented on [`clean_dataset`]. A header-only file
/// yields an empty (zero-row) frame.
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_schema(&df, path)?;
    let df = clean_dataset(df)?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded campaign dataset"
    );
    Ok(df)
}

/// Checks that every expected column is present.
fn validate_schema(df: &DataFrame, path: &Path) -> Result<()> {
    for name in NUMERIC_COLUMNS.iter().chain(CATEGORICAL_COLUMNS.iter()) {
        if df.column(name).is_err() {
            return Err(IngestError::MissingColumn {
                column: (*name).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Applies cleaning to a raw frame.
///
/// The four percentage columns are coerced to Float64; any non-null cell that
/// does not parse as a number fails with [`IngestError::NonNumeric`]. Negative
/// `Social_Media_Followers` values are clamped to zero.
pub fn clean_dataset(mut df: DataFrame) -> Result<DataFrame> {
    for name in PERCENTAGE_COLUMNS {
        let values = coerce_f64_column(&df, name)?;
        set_f64_column(&mut df, name, values)?;
    }

    let followers = clamp_followers(&df)?;
    set_i64_column(&mut df, col::SOCIAL_MEDIA_FOLLOWERS, followers)?;

    Ok(df)
}

/// Reads a column as Float64 values, rejecting non-numeric cells.
fn coerce_f64_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        if matches!(value, AnyValue::Null) {
            values.push(None);
            continue;
        }
        match any_to_f64(value.clone()) {
            Some(parsed) => values.push(Some(parsed)),
            None => {
                return Err(IngestError::NonNumeric {
                    column: name.to_string(),
                    row: idx + 1,
                    value: any_to_string(value),
                });
            }
        }
    }
    Ok(values)
}

/// Reads the follower column, clamping negative counts to zero.
fn clamp_followers(df: &DataFrame) -> Result<Vec<Option<i64>>> {
    let name = col::SOCIAL_MEDIA_FOLLOWERS;
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    let mut clamped = 0usize;
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        if matches!(value, AnyValue::Null) {
            values.push(None);
            continue;
        }
        match any_to_i64(value.clone()) {
            Some(count) if count < 0 => {
                clamped += 1;
                values.push(Some(0));
            }
            Some(count) => values.push(Some(count)),
            None => {
                return Err(IngestError::NonNumeric {
                    column: name.to_string(),
                    row: idx + 1,
                    value: any_to_string(value),
                });
            }
        }
    }
    if clamped > 0 {
        debug!(clamped, "clamped negative follower counts to zero");
    }
    Ok(values)
}
