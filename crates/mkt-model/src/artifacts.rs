//! Derived summary artifacts.
//!
//! All artifacts are pure functions of the cleaned dataset, recomputed on
//! every run and never persisted. Statistics that are undefined for the
//! available sample size are carried as `f64::NAN`, not as errors.

use serde::{Deserialize, Serialize};

/// Descriptive statistics for one numeric column.
///
/// `std_dev` is the sample standard deviation (ddof = 1); `skewness` and
/// `kurtosis` use the bias-adjusted Fisher definitions and require at least
/// 3 and 4 observations respectively. All values are rounded to 2 decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub q25: f64,
    pub q75: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

impl NumericSummary {
    /// Statistic values in the order of [`crate::schema::STATISTIC_LABELS`].
    pub fn ordered_values(&self) -> [f64; 10] {
        [
            self.count as f64,
            self.mean,
            self.median,
            self.std_dev,
            self.min,
            self.max,
            self.q25,
            self.q75,
            self.skewness,
            self.kurtosis,
        ]
    }
}

/// One distinct value of a categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub value: String,
    pub count: usize,
    /// Share of all rows, in percent, rounded to 2 decimals.
    pub percentage: f64,
    /// Running sum of `percentage` in table order, rounded to 2 decimals.
    pub cumulative: f64,
}

/// Frequency table of one categorical column, sorted by descending count.
/// Values with equal counts keep their first-encountered order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalDistribution {
    pub column: String,
    pub rows: Vec<CategoryRow>,
}

impl CategoricalDistribution {
    pub fn total_count(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }
}

/// Pairwise Pearson correlations over the numeric columns.
///
/// Symmetric; coefficients are rounded to 3 decimals. Self-pairs are exactly
/// 1.0 when the column has positive variance, NaN otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major, `columns.len()` squared.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.values[row][column]
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Mean of each metric within one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRow {
    pub key: String,
    /// Parallel to the owning table's `metric_columns`.
    pub means: Vec<f64>,
}

/// Group-wise metric means keyed by one categorical column.
/// Only keys observed in the data appear; rows are ordered lexicographically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMeans {
    pub key_column: String,
    pub metric_columns: Vec<String>,
    pub groups: Vec<GroupRow>,
}

impl GroupMeans {
    /// Mean of `metric` for the group `key`, if both exist.
    pub fn mean_of(&self, key: &str, metric: &str) -> Option<f64> {
        let idx = self.metric_columns.iter().position(|m| m == metric)?;
        self.groups
            .iter()
            .find(|group| group.key == key)
            .map(|group| group.means[idx])
    }
}
