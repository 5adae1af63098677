//! Descriptive statistics over the cleaned campaign dataset.
//!
//! Every summarizer is a pure function of the cleaned frame. All derived
//! numbers are computed exactly once here; the console report and the chart
//! renderer both consume these artifacts rather than recomputing them.

pub mod categorical;
pub mod correlation;
pub mod describe;
pub mod groups;
pub mod numeric;

pub use categorical::categorical_distributions;
pub use correlation::correlation_matrix;
pub use groups::{all_group_means, group_means};
pub use numeric::numeric_summaries;

use anyhow::Result;
use polars::prelude::DataFrame;

use mkt_model::{CategoricalDistribution, CorrelationMatrix, GroupMeans, NumericSummary};

/// Every derived artifact of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisArtifacts {
    pub row_count: usize,
    /// Estimated in-memory size of the frame, in bytes.
    pub estimated_size: usize,
    pub numeric: Vec<NumericSummary>,
    pub categorical: Vec<CategoricalDistribution>,
    pub correlations: CorrelationMatrix,
    /// In report order: by campaign type, then by platform.
    pub group_means: Vec<GroupMeans>,
}

/// Runs all summarizers over the cleaned frame.
pub fn analyze(df: &DataFrame) -> Result<AnalysisArtifacts> {
    Ok(AnalysisArtifacts {
        row_count: df.height(),
        estimated_size: df.estimated_size(),
        numeric: numeric_summaries(df)?,
        categorical: categorical_distributions(df)?,
        correlations: correlation_matrix(df)?,
        group_means: all_group_means(df)?,
    })
}
