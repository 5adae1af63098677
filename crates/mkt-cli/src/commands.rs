//! Command implementations: load the dataset, compute artifacts, and hand
//! results to the presentation layer.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use mkt_charts::{DASHBOARD_FILE, HEATMAP_FILE, render_charts};
use mkt_model::schema::col;
use mkt_stats::{AnalysisArtifacts, analyze, correlation_matrix, group_means};

use crate::cli::{ChartsArgs, ReportArgs};

/// Outcome of the `charts` command.
pub struct ChartsResult {
    pub output_dir: PathBuf,
    pub files: Vec<String>,
}

/// Loads the dataset and computes every report artifact.
pub fn run_report(args: &ReportArgs) -> Result<AnalysisArtifacts> {
    let df = mkt_ingest::load_dataset(&args.input)?;
    let artifacts = analyze(&df)?;
    info!(rows = artifacts.row_count, "analysis complete");
    Ok(artifacts)
}

/// Loads the dataset and renders both chart files.
pub fn run_charts(args: &ChartsArgs) -> Result<ChartsResult> {
    let df = mkt_ingest::load_dataset(&args.input)?;
    let platform_means = group_means(&df, col::PLATFORM)?;
    let correlations = correlation_matrix(&df)?;
    render_charts(&df, &platform_means, &correlations, &args.output_dir)?;
    Ok(ChartsResult {
        output_dir: args.output_dir.clone(),
        files: vec![DASHBOARD_FILE.to_string(), HEATMAP_FILE.to_string()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn sample_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "Campaign_Budget,Ad_Click_Rate,Conversion_Rate,Social_Media_Followers,\
             Email_Open_Rate,Customer_Retention_Rate,Platform,Campaign_Type,\
             Target_Audience,Region\n\
             100,2.5,1.2,500,20.0,75.0,Facebook,Email,Adults,North\n\
             200,3.5,2.2,600,25.0,80.0,Instagram,Social,Teens,South\n\
             300,4.5,3.2,700,30.0,85.0,Facebook,Email,Adults,North\n"
        )
        .unwrap();
        file
    }

    #[test]
    fn report_produces_all_artifacts() {
        let file = sample_csv();
        let args = ReportArgs {
            input: file.path().to_path_buf(),
        };
        let artifacts = run_report(&args).unwrap();

        assert_eq!(artifacts.row_count, 3);
        assert_eq!(artifacts.numeric.len(), 6);
        assert_eq!(artifacts.categorical.len(), 4);
        assert_eq!(artifacts.correlations.len(), 6);
        assert_eq!(artifacts.group_means.len(), 2);

        let budget = artifacts
            .numeric
            .iter()
            .find(|s| s.column == col::CAMPAIGN_BUDGET)
            .unwrap();
        assert_eq!(budget.mean, 200.0);
        assert_eq!(budget.median, 200.0);
        assert_eq!(budget.min, 100.0);
        assert_eq!(budget.max, 300.0);
    }

    #[test]
    fn report_fails_cleanly_on_missing_file() {
        let args = ReportArgs {
            input: Path::new("data/nowhere.csv").to_path_buf(),
        };
        let err = run_report(&args).unwrap_err();
        assert!(err.to_string().contains("data/nowhere.csv"));
    }
}
