//! Resolution of vocabulary extension sources.
//!
//! Sources come from `BIDS_CATALOG_EXTENSIONS` (a platform path list) and
//! then from explicit CLI paths. A directory contributes every `*.json` file
//! directly inside it, sorted by name.

use crate::vocabulary::Vocabulary;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_EXTENSIONS: &str = "BIDS_CATALOG_EXTENSIONS";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub extension_sources: Vec<PathBuf>,
}

impl Settings {
    /// Environment sources followed by `cli_sources`.
    pub fn resolve(cli_sources: &[PathBuf]) -> Self {
        Self::from_parts(env::var_os(ENV_EXTENSIONS), cli_sources)
    }

    pub fn from_parts(env_value: Option<OsString>, cli_sources: &[PathBuf]) -> Self {
        let mut roots: Vec<PathBuf> = env_value
            .map(|raw| {
                env::split_paths(&raw)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        roots.extend(cli_sources.iter().cloned());

        let mut extension_sources = Vec::new();
        for root in roots {
            if root.is_dir() {
                extension_sources.extend(json_files_in(&root));
            } else {
                extension_sources.push(root);
            }
        }
        Self { extension_sources }
    }

    /// Built-in vocabulary plus every loadable extension source.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::with_extension_files(&self.extension_sources)
    }
}

fn json_files_in(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("cannot list extension directory {}: {err}", dir.display());
            return Vec::new();
        }
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}
