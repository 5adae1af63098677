//! Frequency distributions for the categorical columns.

use std::collections::HashMap;

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::debug;

use mkt_ingest::string_column;
use mkt_model::schema::CATEGORICAL_COLUMNS;
use mkt_model::{CategoricalDistribution, CategoryRow};

use crate::describe::round2;

/// Computes the value distribution of every categorical column.
///
/// Rows are sorted by descending count; values with equal counts keep their
/// first-encountered order. Percentages are relative to the total row count
/// and rounded to 2 decimals; the cumulative column is a running sum of the
/// rounded percentages.
pub fn categorical_distributions(df: &DataFrame) -> Result<Vec<CategoricalDistribution>> {
    let mut distributions = Vec::with_capacity(CATEGORICAL_COLUMNS.len());
    for name in CATEGORICAL_COLUMNS {
        distributions.push(distribution_for(df, name)?);
    }
    debug!(columns = distributions.len(), "computed categorical distributions");
    Ok(distributions)
}

fn distribution_for(df: &DataFrame, name: &str) -> Result<CategoricalDistribution> {
    let values = string_column(df, name)?;
    let total = values.len();

    // Count in first-encountered order; the stable sort below keeps that
    // order as the tie-break between equal counts.
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        if !counts.contains_key(&value) {
            order.push(value.clone());
        }
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut tallies: Vec<(String, usize)> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();
    tallies.sort_by(|a, b| b.1.cmp(&a.1));

    let mut rows = Vec::with_capacity(tallies.len());
    let mut cumulative = 0.0;
    for (value, count) in tallies {
        let percentage = round2(100.0 * count as f64 / total as f64);
        cumulative += percentage;
        rows.push(CategoryRow {
            value,
            count,
            percentage,
            cumulative: round2(cumulative),
        });
    }

    Ok(CategoricalDistribution {
        column: name.to_string(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn frame_with_platform(values: Vec<&str>) -> DataFrame {
        let height = values.len();
        let mut columns = vec![Series::new("Platform".into(), values).into()];
        for name in CATEGORICAL_COLUMNS.iter().skip(1) {
            let filler: Vec<String> = vec![String::new(); height];
            columns.push(Series::new((*name).into(), filler).into());
        }
        DataFrame::new(columns).expect("build frame")
    }

    fn platform_rows(df: &DataFrame) -> Vec<CategoryRow> {
        categorical_distributions(df)
            .unwrap()
            .into_iter()
            .find(|d| d.column == "Platform")
            .unwrap()
            .rows
    }

    #[test]
    fn platform_scenario() {
        let df = frame_with_platform(vec!["A", "A", "B"]);
        let rows = platform_rows(&df);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value, "A");
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[0].percentage, 66.67);
        assert_eq!(rows[0].cumulative, 66.67);
        assert_eq!(rows[1].value, "B");
        assert_eq!(rows[1].count, 1);
        assert_eq!(rows[1].percentage, 33.33);
        assert_eq!(rows[1].cumulative, 100.0);
    }

    #[test]
    fn counts_cover_all_rows_and_cumulative_is_monotone() {
        let df = frame_with_platform(vec!["X", "Y", "X", "Z", "Y", "X", "W"]);
        let rows = platform_rows(&df);
        let total: usize = rows.iter().map(|r| r.count).sum();
        assert_eq!(total, 7);

        let pct_sum: f64 = rows.iter().map(|r| r.percentage).sum();
        assert!((pct_sum - 100.0).abs() < 0.05);

        let mut last = 0.0;
        for row in &rows {
            assert!(row.cumulative >= last);
            last = row.cumulative;
        }
        assert!((last - 100.0).abs() < 0.05);
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let df = frame_with_platform(vec!["B", "A", "B", "A"]);
        let rows = platform_rows(&df);
        assert_eq!(rows[0].value, "B");
        assert_eq!(rows[1].value, "A");
    }

    #[test]
    fn empty_frame_has_no_rows() {
        let df = frame_with_platform(vec![]);
        let rows = platform_rows(&df);
        assert!(rows.is_empty());
    }
}
