//! Console report rendering.
//!
//! Section order is fixed: Dataset Overview, Numerical Variables Statistics,
//! Categorical Variables Distribution, Correlation Matrix, Campaign
//! Performance Metrics (by campaign type, then platform), Additional
//! Insights. NaN statistics render literally as `NaN`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mkt_model::schema::{STATISTIC_LABELS, col};
use mkt_model::{CategoricalDistribution, CorrelationMatrix, GroupMeans, NumericSummary};
use mkt_stats::AnalysisArtifacts;

use crate::commands::ChartsResult;

pub fn print_report(artifacts: &AnalysisArtifacts) {
    println!("=== Dataset Overview ===");
    println!("Total number of campaigns: {}", artifacts.row_count);
    println!(
        "Memory usage: {:.2} KB",
        artifacts.estimated_size as f64 / 1024.0
    );

    println!("\n=== Numerical Variables Statistics ===");
    print_numeric_table(&artifacts.numeric);

    println!("\n=== Categorical Variables Distribution ===");
    for distribution in &artifacts.categorical {
        println!("\n{} Distribution:", distribution.column);
        print_distribution_table(distribution);
    }

    println!("\n=== Correlation Matrix ===");
    print_correlation_table(&artifacts.correlations);

    println!("\n=== Campaign Performance Metrics ===");
    for table in &artifacts.group_means {
        println!("\nAverage Metrics by {}:", display_name(&table.key_column));
        print_group_table(table);
    }

    println!("\n=== Additional Insights ===");
    print_insights(&artifacts.numeric);

    println!("\nAnalysis complete!");
}

pub fn print_charts_summary(result: &ChartsResult) {
    println!("Visualizations have been created successfully!");
    println!(
        "Check the '{}' folder for the visualization files:",
        result.output_dir.display()
    );
    for file in &result.files {
        println!("- {file}");
    }
}

fn print_numeric_table(summaries: &[NumericSummary]) {
    let mut table = Table::new();
    let mut header = vec![header_cell("Statistic")];
    header.extend(summaries.iter().map(|s| header_cell(&s.column)));
    table.set_header(header);
    apply_table_style(&mut table);
    for idx in 1..=summaries.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }

    for (row_idx, label) in STATISTIC_LABELS.iter().enumerate() {
        let mut row = vec![Cell::new(label)];
        for summary in summaries {
            let value = summary.ordered_values()[row_idx];
            let text = if *label == "Count" {
                format!("{}", summary.count)
            } else {
                format_value2(value)
            };
            row.push(Cell::new(text));
        }
        table.add_row(row);
    }
    println!("{table}");
}

fn print_distribution_table(distribution: &CategoricalDistribution) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Value"),
        header_cell("Count"),
        header_cell("Percentage"),
        header_cell("Cumulative %"),
    ]);
    apply_table_style(&mut table);
    for idx in 1..=3 {
        align_column(&mut table, idx, CellAlignment::Right);
    }

    for row in &distribution.rows {
        table.add_row(vec![
            Cell::new(&row.value),
            Cell::new(row.count),
            Cell::new(format_value2(row.percentage)),
            Cell::new(format_value2(row.cumulative)),
        ]);
    }
    println!("{table}");
}

fn print_correlation_table(matrix: &CorrelationMatrix) {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(matrix.columns.iter().map(|name| header_cell(name)));
    table.set_header(header);
    apply_table_style(&mut table);
    for idx in 1..=matrix.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }

    for (i, name) in matrix.columns.iter().enumerate() {
        let mut row = vec![Cell::new(name).add_attribute(Attribute::Bold)];
        for j in 0..matrix.len() {
            row.push(Cell::new(format_value3(matrix.get(i, j))));
        }
        table.add_row(row);
    }
    println!("{table}");
}

fn print_group_table(group_means: &GroupMeans) {
    let mut table = Table::new();
    let mut header = vec![header_cell(&group_means.key_column)];
    header.extend(group_means.metric_columns.iter().map(|m| header_cell(m)));
    table.set_header(header);
    apply_table_style(&mut table);
    for idx in 1..=group_means.metric_columns.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }

    for group in &group_means.groups {
        let mut row = vec![Cell::new(&group.key)];
        row.extend(group.means.iter().map(|v| Cell::new(format_value2(*v))));
        table.add_row(row);
    }
    println!("{table}");
}

fn print_insights(summaries: &[NumericSummary]) {
    let budget = summary_for(summaries, col::CAMPAIGN_BUDGET);
    let conversion = summary_for(summaries, col::CONVERSION_RATE);
    if let Some(budget) = budget {
        println!("Most expensive campaign: {}", format_currency(budget.max));
        println!("Average campaign budget: {}", format_currency(budget.mean));
    }
    if let Some(conversion) = conversion {
        println!(
            "Most successful conversion rate: {}",
            format_percent(conversion.max)
        );
        println!(
            "Average conversion rate: {}",
            format_percent(conversion.mean)
        );
    }
}

fn summary_for<'a>(summaries: &'a [NumericSummary], name: &str) -> Option<&'a NumericSummary> {
    summaries.iter().find(|s| s.column == name)
}

/// `Campaign_Type` -> `Campaign Type`.
fn display_name(column: &str) -> String {
    column.replace('_', " ")
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn format_value2(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.2}")
    }
}

fn format_value3(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.3}")
    }
}

fn format_percent(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.2}%")
    }
}

/// Currency with thousands separators, e.g. `$2,500,000.00`.
fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let negative = value < 0.0;
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(2_500_000.0), "$2,500,000.00");
        assert_eq!(format_currency(999.5), "$999.50");
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(-1234.56), "-$1,234.56");
        assert_eq!(format_currency(f64::NAN), "NaN");
    }

    #[test]
    fn nan_renders_literally() {
        assert_eq!(format_value2(f64::NAN), "NaN");
        assert_eq!(format_value3(f64::NAN), "NaN");
        assert_eq!(format_percent(f64::NAN), "NaN");
        assert_eq!(format_value2(66.666), "66.67");
        assert_eq!(format_value3(0.1234), "0.123");
        assert_eq!(format_percent(3.2), "3.20%");
    }

    #[test]
    fn key_columns_display_without_underscores() {
        assert_eq!(display_name("Campaign_Type"), "Campaign Type");
        assert_eq!(display_name("Platform"), "Platform");
    }

    #[test]
    fn empty_dataset_report_prints_all_sections() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Campaign_Budget,Ad_Click_Rate,Conversion_Rate,Social_Media_Followers,\
             Email_Open_Rate,Customer_Retention_Rate,Platform,Campaign_Type,\
             Target_Audience,Region\n"
        )
        .unwrap();
        let df = mkt_ingest::load_dataset(file.path()).unwrap();
        let artifacts = mkt_stats::analyze(&df).unwrap();

        assert_eq!(artifacts.row_count, 0);
        assert!(
            artifacts
                .numeric
                .iter()
                .all(|s| s.count == 0 && s.mean.is_nan())
        );
        assert!(artifacts.categorical.iter().all(|d| d.rows.is_empty()));
        assert!(artifacts.correlations.get(0, 0).is_nan());
        assert!(artifacts.group_means.iter().all(|t| t.groups.is_empty()));

        // Every section must render with empty tables and NaN insights.
        print_report(&artifacts);
    }
}
