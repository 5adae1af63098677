//! Campaign dataset ingestion: CSV loading, schema checks, and cleaning.

pub mod cell;
pub mod error;
pub mod frame;
pub mod loader;

pub use cell::{any_to_f64, any_to_i64, any_to_string, parse_f64, parse_i64};
pub use error::{IngestError, Result};
pub use frame::{numeric_column_f64, set_f64_column, set_i64_column, string_column};
pub use loader::{clean_dataset, load_dataset};
