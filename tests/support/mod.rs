#![allow(dead_code)]

use anyhow::{Context, Result};
use bids_catalog::{Table, query::Record};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Small on-disk BIDS tree that lives as long as the value.
pub struct Dataset {
    dir: TempDir,
}

impl Dataset {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("failed to allocate temp dataset")?,
        })
    }

    /// The canonical fixture used across the integration tests.
    pub fn sample() -> Result<Self> {
        let ds = Self::new()?;
        for rel in SAMPLE_FILES {
            ds.touch(rel)?;
        }
        Ok(ds)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn touch(&self, rel: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, "").with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    pub fn write(&self, rel: &str, contents: &str) -> Result<PathBuf> {
        let path = self.touch(rel)?;
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

pub const SAMPLE_FILES: &[&str] = &[
    "participants.tsv",
    "dataset_description.json",
    "README",
    "sub-01/anat/sub-01_T1w.nii.gz",
    "sub-01/anat/sub-01_T1w.json",
    "sub-01/func/sub-01_task-rest_bold.nii.gz",
    "sub-01/func/sub-01_task-rest_bold.json",
    "sub-01/func/sub-01_task-rest_events.tsv",
    "sub-02/ses-1/func/sub-02_ses-1_task-nback_run-1_bold.nii.gz",
    "sub-02/ses-1/func/sub-02_ses-1_task-nback_run-2_bold.nii.gz",
    "sub-02/ses-1/dwi/sub-02_ses-1_dwi.nii.gz",
    "sub-02/ses-1/dwi/sub-02_ses-1_dwi.bval",
    "sub-10/anat/sub-10_T1w.nii.gz",
    "sub-9/anat/sub-9_T1w.nii.gz",
    "sub-01/func/task-rest_sub-01_bold.nii.gz",
    "derivatives/fmriprep/sub-01/anat/sub-01_desc-preproc_T1w.nii.gz",
    "derivatives/fmriprep/sub-01/anat/sub-01_desc-brain_mask.nii.gz",
];

/// Number of SAMPLE_FILES the discovery grammar accepts.
pub const SAMPLE_MATCHES: usize = 14;

pub fn cell<'a>(table: &'a Table, row: usize, column: &str) -> Option<&'a str> {
    let idx = table.column_index(column)?;
    table.rows[row][idx].as_deref()
}

pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

pub fn record_file_name(record: &Record) -> String {
    file_name(record.text("path").unwrap_or_default()).to_string()
}
