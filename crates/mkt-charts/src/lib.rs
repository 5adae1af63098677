//! PNG chart rendering for the campaign analysis.
//!
//! Two artifacts are produced per run: a six-panel dashboard and a
//! standalone correlation heatmap. Group means and correlations come from
//! the shared `mkt-stats` artifacts; only raw histogram and box-plot samples
//! are read from the frame itself.

pub mod error;
pub mod heatmap;
pub mod panels;
pub mod style;

pub use error::{ChartError, Result};

use std::path::Path;

use polars::prelude::DataFrame;

use mkt_model::{CorrelationMatrix, GroupMeans};

/// File name of the six-panel dashboard.
pub const DASHBOARD_FILE: &str = "marketing_analysis_visualizations.png";
/// File name of the correlation heatmap.
pub const HEATMAP_FILE: &str = "correlation_heatmap.png";

/// Renders both chart files under `output_dir`, creating it if absent.
/// Existing files of the same name are overwritten.
pub fn render_charts(
    df: &DataFrame,
    platform_means: &GroupMeans,
    correlations: &CorrelationMatrix,
    output_dir: &Path,
) -> Result<()> {
    std::fs::create_dir_all(output_dir).map_err(|source| ChartError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    panels::render_dashboard(df, platform_means, &output_dir.join(DASHBOARD_FILE))?;
    heatmap::render_correlation_heatmap(correlations, &output_dir.join(HEATMAP_FILE))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkt_model::schema::col;
    use mkt_stats::{correlation_matrix, group_means};
    use polars::prelude::{NamedFrom, Series};

    fn sample_frame() -> DataFrame {
        let columns = vec![
            Series::new(col::CAMPAIGN_BUDGET.into(), vec![100.0, 200.0, 300.0]).into(),
            Series::new(col::AD_CLICK_RATE.into(), vec![2.5, 3.5, 4.5]).into(),
            Series::new(col::CONVERSION_RATE.into(), vec![1.2, 2.2, 3.2]).into(),
            Series::new(col::SOCIAL_MEDIA_FOLLOWERS.into(), vec![500.0, 600.0, 700.0]).into(),
            Series::new(col::EMAIL_OPEN_RATE.into(), vec![20.0, 25.0, 30.0]).into(),
            Series::new(col::CUSTOMER_RETENTION_RATE.into(), vec![75.0, 80.0, 85.0]).into(),
            Series::new(col::PLATFORM.into(), vec!["Facebook", "Instagram", "Facebook"]).into(),
            Series::new(col::CAMPAIGN_TYPE.into(), vec!["Email", "Social", "Email"]).into(),
            Series::new(col::TARGET_AUDIENCE.into(), vec!["Adults", "Teens", "Adults"]).into(),
            Series::new(col::REGION.into(), vec!["North", "South", "North"]).into(),
        ];
        DataFrame::new(columns).expect("build frame")
    }

    #[test]
    fn renders_both_files_into_new_directory() {
        let df = sample_frame();
        let platform_means = group_means(&df, col::PLATFORM).unwrap();
        let correlations = correlation_matrix(&df).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("graphs");

        match render_charts(&df, &platform_means, &correlations, &output_dir) {
            Ok(()) => {
                let dashboard = output_dir.join(DASHBOARD_FILE);
                let heatmap = output_dir.join(HEATMAP_FILE);
                assert!(dashboard.is_file());
                assert!(heatmap.is_file());
                assert!(std::fs::metadata(&dashboard).unwrap().len() > 0);
                assert!(std::fs::metadata(&heatmap).unwrap().len() > 0);
            }
            // Machines without a system font cannot rasterize captions.
            Err(error) => {
                let message = error.to_string().to_lowercase();
                assert!(message.contains("font"), "unexpected render failure: {message}");
            }
        }
    }
}
