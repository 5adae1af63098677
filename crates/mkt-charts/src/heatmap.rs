//! Standalone correlation heatmap.

use std::path::Path;

use plotters::prelude::{
    BitMapBackend, ChartBuilder, IntoDrawingArea, IntoFont, Rectangle, Text, BLACK, WHITE,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, TextStyle};
use tracing::info;

use mkt_model::CorrelationMatrix;

use crate::error::{ChartError, Result};
use crate::style::{MISSING_CELL, diverging_ramp};

/// Renders the annotated correlation matrix PNG.
///
/// Cells use a diverging blue-white-red scale centered at 0; undefined
/// coefficients render grey with a NaN annotation. Matrix row 0 is drawn at
/// the top, matching the tabular report.
pub fn render_correlation_heatmap(matrix: &CorrelationMatrix, path: &Path) -> Result<()> {
    let n = matrix.len();

    let root = BitMapBackend::new(path, (1000, 800)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let x_formatter = |x: &f64| column_label(matrix, *x);
    let y_formatter = |y: &f64| row_label(matrix, *y);
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Correlation Heatmap of Numerical Variables",
            ("sans-serif", 30),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(170)
        .build_cartesian_2d(0.0..n.max(1) as f64, 0.0..n.max(1) as f64)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n.max(1))
        .y_labels(n.max(1))
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    let cells: Vec<(usize, usize, f64)> = (0..n)
        .flat_map(|row| (0..n).map(move |col| (row, col)))
        .map(|(row, col)| (row, col, matrix.get(row, col)))
        .collect();

    chart
        .draw_series(cells.iter().map(|(row, col, value)| {
            let color = if value.is_nan() {
                MISSING_CELL
            } else {
                diverging_ramp(*value)
            };
            let y = (n - 1 - row) as f64;
            Rectangle::new(
                [(*col as f64, y), (*col as f64 + 1.0, y + 1.0)],
                color.filled(),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    let style = TextStyle::from(("sans-serif", 18).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(cells.iter().map(|(row, col, value)| {
            let label = if value.is_nan() {
                "NaN".to_string()
            } else {
                format!("{value:.2}")
            };
            let y = (n - 1 - row) as f64 + 0.5;
            Text::new(label, (*col as f64 + 0.5, y), style.clone())
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;
    info!(path = %path.display(), "rendered correlation heatmap");
    Ok(())
}

fn column_label(matrix: &CorrelationMatrix, x: f64) -> String {
    axis_label(matrix, x)
}

fn row_label(matrix: &CorrelationMatrix, y: f64) -> String {
    // Row 0 is drawn at the top.
    let n = matrix.len();
    if n == 0 {
        return String::new();
    }
    axis_label(matrix, n as f64 - y)
}

/// Label for the cell whose span contains the tick position.
fn axis_label(matrix: &CorrelationMatrix, position: f64) -> String {
    let idx = (position - 0.5).round();
    if idx < 0.0 || (position - 0.5 - idx).abs() > 0.3 {
        return String::new();
    }
    matrix
        .columns
        .get(idx as usize)
        .cloned()
        .unwrap_or_default()
}
