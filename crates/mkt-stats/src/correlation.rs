//! Pairwise Pearson correlations over the numeric columns.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::debug;

use mkt_ingest::numeric_column_f64;
use mkt_model::CorrelationMatrix;
use mkt_model::schema::NUMERIC_COLUMNS;

use crate::describe::{pearson, round3, sample_std};

/// Computes the correlation matrix over the six numeric columns.
///
/// Coefficients use pairwise-complete observations (rows where both columns
/// are non-null) and are rounded to 3 decimals. Self-pairs are exactly 1.0
/// when the column has positive variance; degenerate pairs are NaN.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    let mut columns: Vec<Vec<Option<f64>>> = Vec::with_capacity(NUMERIC_COLUMNS.len());
    for name in NUMERIC_COLUMNS {
        columns.push(numeric_column_f64(df, name)?);
    }

    let n = columns.len();
    let mut values = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = if i == j {
                self_correlation(&columns[i])
            } else {
                pairwise_correlation(&columns[i], &columns[j])
            };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    debug!(size = n, "computed correlation matrix");
    Ok(CorrelationMatrix {
        columns: NUMERIC_COLUMNS.iter().map(|s| (*s).to_string()).collect(),
        values,
    })
}

/// 1.0 for a column with positive variance, NaN otherwise.
fn self_correlation(column: &[Option<f64>]) -> f64 {
    let observed: Vec<f64> = column.iter().flatten().copied().collect();
    let std = sample_std(&observed);
    if std.is_nan() || std == 0.0 {
        f64::NAN
    } else {
        1.0
    }
}

fn pairwise_correlation(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (x, y) in a.iter().zip(b.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            xs.push(*x);
            ys.push(*y);
        }
    }
    round3(pearson(&xs, &ys))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn numeric_frame(values: Vec<Vec<Option<f64>>>) -> DataFrame {
        let columns = NUMERIC_COLUMNS
            .iter()
            .zip(values)
            .map(|(name, column)| Series::new((*name).into(), column).into())
            .collect();
        DataFrame::new(columns).expect("build frame")
    }

    fn linear_frame(rows: usize) -> DataFrame {
        // Each column a distinct increasing linear function of the row index.
        let values: Vec<Vec<Option<f64>>> = (0..NUMERIC_COLUMNS.len())
            .map(|c| {
                (0..rows)
                    .map(|r| Some((c + 1) as f64 * r as f64 + c as f64))
                    .collect()
            })
            .collect();
        numeric_frame(values)
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let df = linear_frame(5);
        let matrix = correlation_matrix(&df).unwrap();
        let n = matrix.len();
        assert_eq!(n, NUMERIC_COLUMNS.len());
        for i in 0..n {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..n {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn linear_columns_are_perfectly_correlated() {
        let df = linear_frame(4);
        let matrix = correlation_matrix(&df).unwrap();
        assert_eq!(matrix.get(0, 1), 1.0);
        assert_eq!(matrix.get(2, 5), 1.0);
    }

    #[test]
    fn single_row_yields_nan() {
        let df = linear_frame(1);
        let matrix = correlation_matrix(&df).unwrap();
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                assert!(matrix.get(i, j).is_nan());
            }
        }
    }

    #[test]
    fn constant_column_is_nan_even_on_diagonal() {
        let mut values: Vec<Vec<Option<f64>>> = (0..NUMERIC_COLUMNS.len())
            .map(|c| (0..3).map(|r| Some((c as f64 + 1.0) * r as f64)).collect())
            .collect();
        values[0] = vec![Some(7.0); 3];
        let df = numeric_frame(values);
        let matrix = correlation_matrix(&df).unwrap();
        assert!(matrix.get(0, 0).is_nan());
        assert!(matrix.get(0, 1).is_nan());
        assert_eq!(matrix.get(1, 1), 1.0);
    }

    #[test]
    fn nulls_use_pairwise_complete_rows() {
        let mut values: Vec<Vec<Option<f64>>> = (0..NUMERIC_COLUMNS.len())
            .map(|c| {
                (0..4)
                    .map(|r| Some((c as f64 + 1.0) * r as f64))
                    .collect()
            })
            .collect();
        // A null in one column must not poison the pair.
        values[1][2] = None;
        let df = numeric_frame(values);
        let matrix = correlation_matrix(&df).unwrap();
        assert_eq!(matrix.get(0, 1), 1.0);
    }
}
