//! Descriptive statistics for the numeric columns.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::debug;

use mkt_ingest::numeric_column_f64;
use mkt_model::NumericSummary;
use mkt_model::schema::NUMERIC_COLUMNS;

use crate::describe::{
    kurtosis, max, mean, median, min, quantile, round2, sample_std, skewness,
};

/// Computes the ten-statistic summary for every numeric column.
///
/// Statistics run over non-null values only; all values except the count are
/// rounded to 2 decimals. Columns with too few observations carry NaN for
/// the undefined statistics.
pub fn numeric_summaries(df: &DataFrame) -> Result<Vec<NumericSummary>> {
    let mut summaries = Vec::with_capacity(NUMERIC_COLUMNS.len());
    for name in NUMERIC_COLUMNS {
        let values: Vec<f64> = numeric_column_f64(df, name)?.into_iter().flatten().collect();
        summaries.push(summarize_column(name, &values));
    }
    debug!(columns = summaries.len(), "computed numeric summaries");
    Ok(summaries)
}

fn summarize_column(name: &str, values: &[f64]) -> NumericSummary {
    NumericSummary {
        column: name.to_string(),
        count: values.len(),
        mean: round2(mean(values)),
        median: round2(median(values)),
        std_dev: round2(sample_std(values)),
        min: round2(min(values)),
        max: round2(max(values)),
        q25: round2(quantile(values, 0.25)),
        q75: round2(quantile(values, 0.75)),
        skewness: round2(skewness(values)),
        kurtosis: round2(kurtosis(values)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn frame_with_budget(budgets: Vec<Option<f64>>) -> DataFrame {
        let height = budgets.len();
        let mut columns = vec![Series::new("Campaign_Budget".into(), budgets).into()];
        for name in NUMERIC_COLUMNS.iter().skip(1) {
            let filler: Vec<Option<f64>> = vec![None; height];
            columns.push(Series::new((*name).into(), filler).into());
        }
        DataFrame::new(columns).expect("build frame")
    }

    fn budget_summary(df: &DataFrame) -> NumericSummary {
        numeric_summaries(df)
            .unwrap()
            .into_iter()
            .find(|s| s.column == "Campaign_Budget")
            .unwrap()
    }

    #[test]
    fn budget_scenario() {
        let df = frame_with_budget(vec![Some(100.0), Some(200.0), Some(300.0)]);
        let summary = budget_summary(&df);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean, 200.0);
        assert_eq!(summary.median, 200.0);
        assert_eq!(summary.min, 100.0);
        assert_eq!(summary.max, 300.0);
        assert_eq!(summary.q25, 150.0);
        assert_eq!(summary.q75, 250.0);
        assert_eq!(summary.std_dev, 100.0);
        // 3 values: skewness defined, kurtosis not
        assert_eq!(summary.skewness, 0.0);
        assert!(summary.kurtosis.is_nan());
    }

    #[test]
    fn nulls_are_skipped() {
        let df = frame_with_budget(vec![Some(10.0), None, Some(30.0)]);
        let summary = budget_summary(&df);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, 20.0);
    }

    #[test]
    fn empty_frame_yields_nan_markers() {
        let df = frame_with_budget(vec![]);
        let summaries = numeric_summaries(&df).unwrap();
        assert_eq!(summaries.len(), NUMERIC_COLUMNS.len());
        for summary in summaries {
            assert_eq!(summary.count, 0);
            assert!(summary.mean.is_nan());
            assert!(summary.std_dev.is_nan());
            assert!(summary.min.is_nan());
        }
    }

    #[test]
    fn quantile_ordering_holds() {
        let df = frame_with_budget(vec![
            Some(42.0),
            Some(7.0),
            Some(99.0),
            Some(60.0),
            Some(13.0),
        ]);
        let s = budget_summary(&df);
        assert!(s.min <= s.q25 && s.q25 <= s.median && s.median <= s.q75 && s.q75 <= s.max);
    }
}
