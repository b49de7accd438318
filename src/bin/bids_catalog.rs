//! Command-line front end for cataloging and querying BIDS datasets.
//!
//! Usage:
//!   bids-catalog catalog /data/ds001 > ds001.csv
//!   bids-catalog filter --input ds001.csv --where task=rest --columns subject,path
//!   bids-catalog sidecars < ds001.csv | bids-catalog drop-na
//!
//! Tables travel as comma-separated text on stdin/stdout; diagnostics go to
//! stderr and any failure exits with status 1.

use anyhow::{Context, Result, anyhow};
use bids_catalog::{
    CatalogBuilder, FilterSpec, Settings, SortedCursor, Table, UniqueOptions, associate_sidecars,
    column_values, drop_na_columns, filter, metadata,
};
use bids_catalog::table::cell_text;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, BufWriter, Read, Write, stdin};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "bids-catalog")]
#[command(about = "Catalog BIDS dataset trees and query the resulting tables")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk a dataset root and print its catalog table.
    Catalog {
        root: PathBuf,
        #[command(flatten)]
        vocabulary: VocabularyArgs,
        /// Visit directory entries in name order.
        #[arg(long)]
        sorted: bool,
    },
    /// Print the discovery pattern for the active vocabulary.
    Pattern {
        #[command(flatten)]
        vocabulary: VocabularyArgs,
    },
    /// Project columns and keep rows matching every predicate.
    Filter {
        #[command(flatten)]
        input: InputArgs,
        /// Output columns (names or 1-based indices, comma separated or repeated).
        #[arg(long = "columns", short = 'c')]
        columns: Vec<String>,
        /// Row predicate COLUMN=REGEX; repeat to AND several.
        #[arg(long = "where", short = 'w')]
        predicates: Vec<String>,
        /// Drop rows with NA in this column; repeatable.
        #[arg(long = "drop-na")]
        drop_na: Vec<String>,
    },
    /// Remove columns that are NA in every row.
    DropNa {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the values of one column, one per line.
    Column {
        column: String,
        #[command(flatten)]
        input: InputArgs,
        /// Keep repeated values.
        #[arg(long)]
        keep_duplicates: bool,
        /// Keep NA values.
        #[arg(long)]
        keep_na: bool,
    },
    /// Fold JSON sidecar rows into a json_path column.
    Sidecars {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print rows as key=value blocks in version-sorted order.
    Iterate {
        #[command(flatten)]
        input: InputArgs,
        /// Sort columns in priority order; defaults to every column.
        #[arg(long = "sort", short = 's')]
        sort: Vec<String>,
        #[arg(long, short = 'r')]
        reverse: bool,
    },
    /// Print a JSON sidecar as key=type:value lines.
    Metadata { file: PathBuf },
}

#[derive(Args, Debug)]
struct VocabularyArgs {
    /// Vocabulary extension document or directory; repeatable.
    #[arg(long = "extension", short = 'e')]
    extensions: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Table file; reads stdin when omitted.
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Catalog {
            root,
            vocabulary,
            sorted,
        } => {
            let builder = catalog_builder(&vocabulary)?.sorted(sorted);
            let table = builder
                .build(&root)
                .with_context(|| format!("cataloging {}", root.display()))?;
            table.write_csv(&mut out)?;
        }
        Command::Pattern { vocabulary } => {
            let builder = catalog_builder(&vocabulary)?;
            writeln!(out, "{}", builder.pattern().as_str())?;
        }
        Command::Filter {
            input,
            columns,
            predicates,
            drop_na,
        } => {
            let table = read_table(input.input.as_deref())?;
            let spec = FilterSpec {
                columns: expand_lists(&columns),
                predicates: predicates
                    .iter()
                    .map(|raw| parse_predicate(raw))
                    .collect::<Result<_>>()?,
                drop_na: expand_lists(&drop_na),
            };
            filter(&table, &spec)?.write_csv(&mut out)?;
        }
        Command::DropNa { input } => {
            let table = read_table(input.input.as_deref())?;
            drop_na_columns(&table).write_csv(&mut out)?;
        }
        Command::Column {
            column,
            input,
            keep_duplicates,
            keep_na,
        } => {
            let table = read_table(input.input.as_deref())?;
            let options = UniqueOptions {
                unique: !keep_duplicates,
                exclude_na: !keep_na,
            };
            for value in column_values(&table, &column, options)? {
                writeln!(out, "{value}")?;
            }
        }
        Command::Sidecars { input } => {
            let table = read_table(input.input.as_deref())?;
            associate_sidecars(&table)?.write_csv(&mut out)?;
        }
        Command::Iterate {
            input,
            sort,
            reverse,
        } => {
            let table = read_table(input.input.as_deref())?;
            let cursor = SortedCursor::new(&table, &expand_lists(&sort), reverse)?;
            for (idx, record) in cursor.enumerate() {
                if idx > 0 {
                    writeln!(out)?;
                }
                for (key, value) in record.fields() {
                    writeln!(out, "{key}={}", cell_text(value))?;
                }
            }
        }
        Command::Metadata { file } => {
            for (key, value) in metadata::load_sidecar(&file)? {
                writeln!(out, "{key}={value}")?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn catalog_builder(args: &VocabularyArgs) -> Result<CatalogBuilder> {
    let settings = Settings::resolve(&args.extensions);
    CatalogBuilder::new(settings.vocabulary())
}

fn read_table(path: Option<&Path>) -> Result<Table> {
    let mut buf = String::new();
    if let Some(path) = path {
        buf = fs::read_to_string(path)
            .with_context(|| format!("reading table {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading table from stdin")?;
    }
    Table::from_csv_str(&buf).context("parsing table")
}

/// Flattens repeated flags whose values may also be comma separated.
fn expand_lists(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_predicate(raw: &str) -> Result<(String, String)> {
    let (column, pattern) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("predicate '{raw}' must look like COLUMN=REGEX"))?;
    Ok((column.to_string(), pattern.to_string()))
}
