//! Schema and derived-artifact definitions for the marketing analytics pipeline.

pub mod artifacts;
pub mod schema;

pub use artifacts::{
    CategoricalDistribution, CategoryRow, CorrelationMatrix, GroupMeans, GroupRow, NumericSummary,
};
pub use schema::{
    CATEGORICAL_COLUMNS, GROUP_KEY_COLUMNS, GROUP_METRIC_COLUMNS, NUMERIC_COLUMNS,
    PERCENTAGE_COLUMNS, STATISTIC_LABELS, col,
};
