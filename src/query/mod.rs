//! Query engine over materialized catalog tables.
//!
//! Every operation takes a table by reference and returns a new value; a
//! failed operation returns a [`QueryError`] and no partial output.

pub mod columns;
pub mod cursor;
mod error;
pub mod filter;
pub mod natural;
pub mod prune;
pub mod sidecar;
pub mod unique;

pub use columns::resolve_column;
pub use cursor::{CursorStep, Record, SortedCursor};
pub use error::{QueryError, Result};
pub use filter::{FilterSpec, filter};
pub use natural::version_cmp;
pub use prune::drop_na_columns;
pub use sidecar::{JSON_PATH_COLUMN, associate_sidecars};
pub use unique::{UniqueOptions, column_values};
