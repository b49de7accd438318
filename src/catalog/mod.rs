//! Dataset catalog wiring.
//!
//! This module turns a dataset root into a [`Table`](crate::Table): the
//! discovery pattern selects files, the filename parser decomposes each one,
//! and [`CatalogBuilder`] lays the records out in the fixed column schema.
//! Callers use [`catalog_header`] when they need the schema without walking
//! a tree.

pub mod builder;

pub use builder::{CatalogBuilder, catalog_header, record_row};

/// Column holding the derivatives pipeline name.
pub const DERIVATIVES_COLUMN: &str = "derivatives";
/// Column holding the modality folder.
pub const DATA_TYPE_COLUMN: &str = "data_type";
pub const SUFFIX_COLUMN: &str = "suffix";
pub const EXTENSION_COLUMN: &str = "extension";
pub const PATH_COLUMN: &str = "path";
