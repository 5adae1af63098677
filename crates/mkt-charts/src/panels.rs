//! The six-panel analysis dashboard.
//!
//! Panel layout mirrors the report: budget histogram, platform rate bars,
//! retention by campaign type, regional rate heatmap, budget by audience,
//! and rate box plots. All panels draw into one 2x3 bitmap.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::{
    BitMapBackend, ChartBuilder, DrawingArea, IntoDrawingArea, IntoFont, PathElement, Rectangle,
    Text, BLACK, WHITE,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, TextStyle};
use polars::prelude::DataFrame;
use tracing::info;

use mkt_model::GroupMeans;
use mkt_model::schema::col;
use mkt_stats::describe::{max as sample_max, median, min as sample_min, quantile};
use mkt_stats::group_means;

use crate::error::{ChartError, Result};
use crate::style::{
    MISSING_CELL, SERIES_COLORS, histogram_bins, normalize, sequential_ramp,
};

type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const HISTOGRAM_BINS: usize = 30;

/// Renders the 2x3 dashboard PNG.
pub fn render_dashboard(df: &DataFrame, platform_means: &GroupMeans, path: &Path) -> Result<()> {
    let region_means =
        group_means(df, col::REGION).map_err(|e| ChartError::MissingData(e.to_string()))?;
    let audience_means =
        group_means(df, col::TARGET_AUDIENCE).map_err(|e| ChartError::MissingData(e.to_string()))?;
    let budgets = column_values(df, col::CAMPAIGN_BUDGET)?;
    let rates = [
        (col::AD_CLICK_RATE, column_values(df, col::AD_CLICK_RATE)?),
        (col::CONVERSION_RATE, column_values(df, col::CONVERSION_RATE)?),
        (col::EMAIL_OPEN_RATE, column_values(df, col::EMAIL_OPEN_RATE)?),
    ];

    let root = BitMapBackend::new(path, (2000, 1500)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;
    let areas = root.split_evenly((2, 3));

    budget_histogram(&areas[0], &budgets)?;
    platform_rate_bars(&areas[1], platform_means)?;
    let campaign_type_means =
        group_means(df, col::CAMPAIGN_TYPE).map_err(|e| ChartError::MissingData(e.to_string()))?;
    horizontal_mean_bars(
        &areas[2],
        "Customer Retention by Campaign Type",
        "Average Retention Rate (%)",
        &ascending_means(&campaign_type_means, col::CUSTOMER_RETENTION_RATE)?,
    )?;
    regional_heatmap(&areas[3], &region_means)?;
    horizontal_mean_bars(
        &areas[4],
        "Average Budget by Target Audience",
        "Average Budget ($)",
        &ascending_means(&audience_means, col::CAMPAIGN_BUDGET)?,
    )?;
    rate_box_plots(&areas[5], &rates)?;

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;
    info!(path = %path.display(), "rendered analysis dashboard");
    Ok(())
}

fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let values = mkt_ingest::numeric_column_f64(df, name)
        .map_err(|e| ChartError::MissingData(e.to_string()))?;
    Ok(values.into_iter().flatten().collect())
}

/// (key, mean) pairs for one metric, NaN groups dropped, ascending by mean.
fn ascending_means(table: &GroupMeans, metric: &str) -> Result<Vec<(String, f64)>> {
    let idx = table
        .metric_columns
        .iter()
        .position(|m| m == metric)
        .ok_or_else(|| ChartError::MissingData(format!("metric {metric} not aggregated")))?;
    let mut pairs: Vec<(String, f64)> = table
        .groups
        .iter()
        .filter(|group| !group.means[idx].is_nan())
        .map(|group| (group.key.clone(), group.means[idx]))
        .collect();
    pairs.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    Ok(pairs)
}

fn centered_label_style() -> TextStyle<'static> {
    TextStyle::from(("sans-serif", 16).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center))
}

/// Maps a fractional axis position back to a category index label.
fn index_label(names: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 0.3 || idx < 0.0 {
        return String::new();
    }
    names
        .get(idx as usize)
        .cloned()
        .unwrap_or_default()
}

fn budget_histogram(area: &Panel<'_>, budgets: &[f64]) -> Result<()> {
    let bins = histogram_bins(budgets, HISTOGRAM_BINS);
    let x_min = bins.first().map_or(0.0, |b| b.start);
    let x_max = bins.last().map_or(1.0, |b| b.end);
    let y_max = bins.iter().map(|b| b.count).max().unwrap_or(1).max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption("Campaign Budget Distribution", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max.max(x_min + 1.0), 0.0..y_max * 1.05)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Budget ($)")
        .y_desc("Count")
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(bins.iter().filter(|b| b.count > 0).map(|b| {
            Rectangle::new(
                [(b.start, 0.0), (b.end, b.count as f64)],
                SERIES_COLORS[0].mix(0.8).filled(),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;
    Ok(())
}

fn platform_rate_bars(area: &Panel<'_>, platform_means: &GroupMeans) -> Result<()> {
    let keys: Vec<String> = platform_means.groups.iter().map(|g| g.key.clone()).collect();
    let click: Vec<f64> = keys
        .iter()
        .map(|k| platform_means.mean_of(k, col::AD_CLICK_RATE).unwrap_or(f64::NAN))
        .collect();
    let conversion: Vec<f64> = keys
        .iter()
        .map(|k| {
            platform_means
                .mean_of(k, col::CONVERSION_RATE)
                .unwrap_or(f64::NAN)
        })
        .collect();
    let y_max = click
        .iter()
        .chain(conversion.iter())
        .copied()
        .filter(|v| !v.is_nan())
        .fold(1.0_f64, f64::max);
    let x_max = keys.len().max(1) as f64 - 0.5;

    let formatter = |x: &f64| index_label(&keys, *x);
    let mut chart = ChartBuilder::on(area)
        .caption("Platform Performance Comparison", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..x_max, 0.0..y_max * 1.15)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Platform")
        .y_desc("Rate (%)")
        .x_labels(keys.len().max(1))
        .x_label_formatter(&formatter)
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    for (series_idx, values) in [&click, &conversion].into_iter().enumerate() {
        let offset = if series_idx == 0 { -0.35 } else { 0.02 };
        chart
            .draw_series(values.iter().enumerate().filter(|(_, v)| !v.is_nan()).map(
                |(i, v)| {
                    let x0 = i as f64 + offset;
                    Rectangle::new(
                        [(x0, 0.0), (x0 + 0.33, *v)],
                        SERIES_COLORS[series_idx].filled(),
                    )
                },
            ))
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
    }
    Ok(())
}

fn horizontal_mean_bars(
    area: &Panel<'_>,
    title: &str,
    x_desc: &str,
    pairs: &[(String, f64)],
) -> Result<()> {
    let keys: Vec<String> = pairs.iter().map(|(k, _)| k.clone()).collect();
    let x_max = pairs
        .iter()
        .map(|(_, v)| *v)
        .fold(1.0_f64, f64::max);
    let y_max = pairs.len().max(1) as f64 - 0.5;

    let formatter = |y: &f64| index_label(&keys, *y);
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(130)
        .build_cartesian_2d(0.0..x_max * 1.1, -0.5..y_max)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_labels(pairs.len().max(1))
        .y_label_formatter(&formatter)
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(pairs.iter().enumerate().map(|(i, (_, v))| {
            Rectangle::new(
                [(0.0, i as f64 - 0.4), (*v, i as f64 + 0.4)],
                SERIES_COLORS[0].mix(0.85).filled(),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;
    Ok(())
}

const REGION_METRICS: [&str; 3] = [col::AD_CLICK_RATE, col::CONVERSION_RATE, col::EMAIL_OPEN_RATE];

fn regional_heatmap(area: &Panel<'_>, region_means: &GroupMeans) -> Result<()> {
    let regions: Vec<String> = region_means.groups.iter().map(|g| g.key.clone()).collect();
    let cells: Vec<(usize, usize, f64)> = regions
        .iter()
        .enumerate()
        .flat_map(|(r, key)| {
            REGION_METRICS.iter().enumerate().map(move |(m, metric)| {
                let value = region_means.mean_of(key, metric).unwrap_or(f64::NAN);
                (r, m, value)
            })
        })
        .collect();
    let observed: Vec<f64> = cells
        .iter()
        .map(|(_, _, v)| *v)
        .filter(|v| !v.is_nan())
        .collect();
    let lo = observed.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = observed.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let metric_names: Vec<String> = REGION_METRICS.iter().map(|s| (*s).to_string()).collect();
    let x_formatter = |x: &f64| index_label(&metric_names, *x - 0.5);
    let y_formatter = |y: &f64| index_label(&regions, *y - 0.5);

    let mut chart = ChartBuilder::on(area)
        .caption("Regional Performance Heatmap", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(110)
        .build_cartesian_2d(
            0.0..REGION_METRICS.len() as f64,
            0.0..regions.len().max(1) as f64,
        )
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(REGION_METRICS.len())
        .y_labels(regions.len().max(1))
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(cells.iter().map(|(r, m, value)| {
            let color = if value.is_nan() {
                MISSING_CELL
            } else {
                sequential_ramp(normalize(*value, lo, hi))
            };
            Rectangle::new(
                [(*m as f64, *r as f64), (*m as f64 + 1.0, *r as f64 + 1.0)],
                color.filled(),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    let style = centered_label_style();
    chart
        .draw_series(cells.iter().map(|(r, m, value)| {
            let label = if value.is_nan() {
                "NaN".to_string()
            } else {
                format!("{value:.2}")
            };
            Text::new(label, (*m as f64 + 0.5, *r as f64 + 0.5), style.clone())
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;
    Ok(())
}

fn rate_box_plots(area: &Panel<'_>, rates: &[(&str, Vec<f64>)]) -> Result<()> {
    let names: Vec<String> = rates.iter().map(|(n, _)| (*n).to_string()).collect();
    let y_max = rates
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .fold(1.0_f64, f64::max);

    let formatter = |x: &f64| index_label(&names, *x);
    let mut chart = ChartBuilder::on(area)
        .caption("Performance Metrics Distribution", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..rates.len() as f64 - 0.5, 0.0..y_max * 1.1)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .y_desc("Rate (%)")
        .x_labels(rates.len())
        .x_label_formatter(&formatter)
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    for (i, (_, values)) in rates.iter().enumerate() {
        if values.is_empty() {
            continue;
        }
        let x = i as f64;
        let (lo, q1, med, q3, hi) = (
            sample_min(values),
            quantile(values, 0.25),
            median(values),
            quantile(values, 0.75),
            sample_max(values),
        );

        // Quartile box with median line, then whiskers with caps.
        chart
            .draw_series([
                Rectangle::new([(x - 0.25, q1), (x + 0.25, q3)], SERIES_COLORS[0].mix(0.4).filled()),
                Rectangle::new([(x - 0.25, q1), (x + 0.25, q3)], BLACK.stroke_width(1)),
            ])
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
        chart
            .draw_series([
                PathElement::new(vec![(x - 0.25, med), (x + 0.25, med)], BLACK.stroke_width(2)),
                PathElement::new(vec![(x, q3), (x, hi)], BLACK.stroke_width(1)),
                PathElement::new(vec![(x, lo), (x, q1)], BLACK.stroke_width(1)),
                PathElement::new(vec![(x - 0.12, hi), (x + 0.12, hi)], BLACK.stroke_width(1)),
                PathElement::new(vec![(x - 0.12, lo), (x + 0.12, lo)], BLACK.stroke_width(1)),
            ])
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
    }
    Ok(())
}
