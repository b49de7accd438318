//! Catalog and query BIDS-style dataset trees.
//!
//! A [`Vocabulary`] describes the filename grammar, [`CatalogBuilder`] walks a
//! dataset root into a [`Table`], and the [`query`] module filters, prunes,
//! joins and iterates that table.

pub mod catalog;
pub mod config;
pub mod metadata;
pub mod parser;
pub mod pattern;
pub mod query;
pub mod table;
pub mod vocabulary;

pub use catalog::{CatalogBuilder, catalog_header};
pub use config::Settings;
pub use parser::{FileRecord, parse_path};
pub use pattern::DiscoveryPattern;
pub use query::{
    CursorStep, FilterSpec, QueryError, Record, SortedCursor, UniqueOptions, associate_sidecars,
    column_values, drop_na_columns, filter,
};
pub use table::{Cell, NA, Table, TableError};
pub use vocabulary::{EntityDef, Vocabulary};
