//! Group-wise metric means keyed by a categorical column.

use std::collections::BTreeMap;

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::debug;

use mkt_ingest::{numeric_column_f64, string_column};
use mkt_model::schema::{GROUP_KEY_COLUMNS, GROUP_METRIC_COLUMNS};
use mkt_model::{GroupMeans, GroupRow};

use crate::describe::{mean, round2};

/// Computes metric means per distinct value of `key_column`.
///
/// Only keys observed in the data produce groups; group rows are ordered
/// lexicographically by key. A metric with no non-null values within a group
/// yields NaN. Means are rounded to 2 decimals.
pub fn group_means(df: &DataFrame, key_column: &str) -> Result<GroupMeans> {
    let keys = string_column(df, key_column)?;
    let mut metrics: Vec<Vec<Option<f64>>> = Vec::with_capacity(GROUP_METRIC_COLUMNS.len());
    for name in GROUP_METRIC_COLUMNS {
        metrics.push(numeric_column_f64(df, name)?);
    }

    let mut row_indices: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (idx, key) in keys.into_iter().enumerate() {
        row_indices.entry(key).or_default().push(idx);
    }

    let groups = row_indices
        .into_iter()
        .map(|(key, indices)| {
            let means = metrics
                .iter()
                .map(|column| {
                    let observed: Vec<f64> = indices
                        .iter()
                        .filter_map(|&idx| column[idx])
                        .collect();
                    round2(mean(&observed))
                })
                .collect();
            GroupRow { key, means }
        })
        .collect();

    debug!(key = key_column, "computed group means");
    Ok(GroupMeans {
        key_column: key_column.to_string(),
        metric_columns: GROUP_METRIC_COLUMNS.iter().map(|s| (*s).to_string()).collect(),
        groups,
    })
}

/// Group means for both report keys, in report order (campaign type, platform).
pub fn all_group_means(df: &DataFrame) -> Result<Vec<GroupMeans>> {
    GROUP_KEY_COLUMNS
        .iter()
        .map(|key| group_means(df, key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkt_model::schema::col;
    use polars::prelude::{NamedFrom, Series};

    fn sample_frame() -> DataFrame {
        let mut columns = vec![
            Series::new(
                col::CAMPAIGN_TYPE.into(),
                vec!["Email", "Social", "Email", "Social"],
            )
            .into(),
            Series::new(col::PLATFORM.into(), vec!["FB", "FB", "IG", "IG"]).into(),
        ];
        let budgets = vec![Some(100.0), Some(200.0), Some(300.0), None];
        columns.push(Series::new(col::CAMPAIGN_BUDGET.into(), budgets).into());
        for name in GROUP_METRIC_COLUMNS.iter().skip(1) {
            let filler: Vec<Option<f64>> = vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)];
            columns.push(Series::new((*name).into(), filler).into());
        }
        DataFrame::new(columns).expect("build frame")
    }

    #[test]
    fn means_cover_exactly_the_matching_rows() {
        let df = sample_frame();
        let table = group_means(&df, col::CAMPAIGN_TYPE).unwrap();
        // Email rows: budgets 100 and 300
        assert_eq!(table.mean_of("Email", col::CAMPAIGN_BUDGET), Some(200.0));
        // Social rows: budgets 200 and null -> mean over the single observed value
        assert_eq!(table.mean_of("Social", col::CAMPAIGN_BUDGET), Some(200.0));
    }

    #[test]
    fn groups_are_sorted_and_only_observed() {
        let df = sample_frame();
        let table = group_means(&df, col::PLATFORM).unwrap();
        let keys: Vec<&str> = table.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["FB", "IG"]);
    }

    #[test]
    fn group_with_no_observed_metric_is_nan() {
        let mut columns = vec![
            Series::new(col::CAMPAIGN_TYPE.into(), vec!["Email"]).into(),
            Series::new(col::PLATFORM.into(), vec!["FB"]).into(),
        ];
        for name in GROUP_METRIC_COLUMNS {
            let filler: Vec<Option<f64>> = vec![None];
            columns.push(Series::new(name.into(), filler).into());
        }
        let df = DataFrame::new(columns).unwrap();
        let table = group_means(&df, col::CAMPAIGN_TYPE).unwrap();
        assert!(table.mean_of("Email", col::CAMPAIGN_BUDGET).unwrap().is_nan());
    }

    #[test]
    fn empty_frame_has_no_groups() {
        let mut columns = vec![
            Series::new(col::CAMPAIGN_TYPE.into(), Vec::<String>::new()).into(),
            Series::new(col::PLATFORM.into(), Vec::<String>::new()).into(),
        ];
        for name in GROUP_METRIC_COLUMNS {
            columns.push(Series::new(name.into(), Vec::<Option<f64>>::new()).into());
        }
        let df = DataFrame::new(columns).unwrap();
        let tables = all_group_means(&df).unwrap();
        assert_eq!(tables.len(), 2);
        assert!(tables.iter().all(|t| t.groups.is_empty()));
    }
}
