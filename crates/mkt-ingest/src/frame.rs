//! Column extraction helpers shared by the cleaning and summarization layers.

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use crate::cell::{any_to_f64, any_to_string};
use crate::error::Result;

/// All values of a string-typed column, trimmed. Nulls become empty strings.
pub fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = any_to_string(series.get(idx).unwrap_or(AnyValue::Null));
        values.push(value.trim().to_string());
    }
    Ok(values)
}

/// All values of a numeric column; nulls and unparsable cells become `None`.
pub fn numeric_column_f64(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        values.push(any_to_f64(value));
    }
    Ok(values)
}

/// Replaces (or appends) a Float64 column.
pub fn set_f64_column(df: &mut DataFrame, name: &str, values: Vec<Option<f64>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Replaces (or appends) an Int64 column.
pub fn set_i64_column(df: &mut DataFrame, name: &str, values: Vec<Option<i64>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataFrame;

    fn sample_frame() -> DataFrame {
        let names = Series::new("name".into(), vec!["a", "b", "c"]);
        let scores = Series::new("score".into(), vec![Some(1.5), None, Some(3.0)]);
        DataFrame::new(vec![names.into(), scores.into()]).expect("build frame")
    }

    #[test]
    fn extracts_strings_and_numbers() {
        let df = sample_frame();
        assert_eq!(string_column(&df, "name").unwrap(), vec!["a", "b", "c"]);
        assert_eq!(
            numeric_column_f64(&df, "score").unwrap(),
            vec![Some(1.5), None, Some(3.0)]
        );
    }

    #[test]
    fn replaces_column_in_place() {
        let mut df = sample_frame();
        set_f64_column(&mut df, "score", vec![Some(0.0), Some(0.0), Some(0.0)]).unwrap();
        assert_eq!(
            numeric_column_f64(&df, "score").unwrap(),
            vec![Some(0.0); 3]
        );
        assert_eq!(df.width(), 2);
    }
}
