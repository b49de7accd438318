#![cfg(unix)]

// bids-catalog binary behavior: stdout carries tables, stderr diagnostics,
// exit status 1 on any failure.
mod support;

use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Output, Stdio};
use support::{Dataset, SAMPLE_MATCHES};
use tempfile::NamedTempFile;

fn bids_catalog() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bids-catalog"));
    cmd.env_remove("BIDS_CATALOG_EXTENSIONS");
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Result<Output> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn bids-catalog")?;
    child
        .stdin
        .take()
        .context("stdin not captured")?
        .write_all(input.as_bytes())?;
    child.wait_with_output().context("waiting for bids-catalog")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

const SIDECAR_TABLE: &str = "subject,data_type,suffix,extension,path\n\
sub-01,func,bold,.nii.gz,/d/sub-01_task-rest_bold.nii.gz\n\
sub-01,func,bold,.json,/d/sub-01_task-rest_bold.json\n";

#[test]
fn catalog_prints_header_and_rows() -> Result<()> {
    let ds = Dataset::sample()?;
    let output = bids_catalog()
        .arg("catalog")
        .arg(ds.root())
        .arg("--sorted")
        .output()
        .context("failed to run catalog")?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), SAMPLE_MATCHES + 1);
    assert!(lines[0].starts_with("derivatives,data_type,subject,session,"));
    assert!(lines[0].ends_with(",suffix,extension,path"));
    Ok(())
}

#[test]
fn catalog_of_missing_root_fails() -> Result<()> {
    let ds = Dataset::new()?;
    let output = bids_catalog()
        .arg("catalog")
        .arg(ds.root().join("missing"))
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn filter_reads_stdin_and_projects() -> Result<()> {
    let mut cmd = bids_catalog();
    cmd.args(["filter", "--columns", "path,subject", "--where", "extension=json"]);
    let output = run_with_stdin(cmd, SIDECAR_TABLE)?;
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "path,subject\n/d/sub-01_task-rest_bold.json,sub-01\n"
    );
    Ok(())
}

#[test]
fn filter_with_unknown_column_prints_nothing() -> Result<()> {
    let mut cmd = bids_catalog();
    cmd.args(["filter", "--where", "session=1"]);
    let output = run_with_stdin(cmd, SIDECAR_TABLE)?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("session"));
    Ok(())
}

#[test]
fn sidecars_and_drop_na_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(SIDECAR_TABLE.as_bytes())?;

    let output = bids_catalog()
        .arg("sidecars")
        .arg("--input")
        .arg(file.path())
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "subject,data_type,suffix,extension,path,json_path\n\
         sub-01,func,bold,.nii.gz,/d/sub-01_task-rest_bold.nii.gz,/d/sub-01_task-rest_bold.json\n"
    );

    let mut cmd = bids_catalog();
    cmd.arg("drop-na");
    let output = run_with_stdin(cmd, "a,b\n1,NA\n2,NA\n")?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "a\n1\n2\n");
    Ok(())
}

#[test]
fn column_lists_unique_values() -> Result<()> {
    let mut cmd = bids_catalog();
    cmd.args(["column", "subject"]);
    let output = run_with_stdin(cmd, "subject\nsub-02\nNA\nsub-01\nsub-02\n")?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "sub-02\nsub-01\n");

    let mut cmd = bids_catalog();
    cmd.args(["column", "1", "--keep-na", "--keep-duplicates"]);
    let output = run_with_stdin(cmd, "subject\nsub-02\nNA\nsub-02\n")?;
    assert_eq!(stdout_of(&output), "sub-02\nNA\nsub-02\n");
    Ok(())
}

#[test]
fn iterate_prints_sorted_blocks() -> Result<()> {
    let mut cmd = bids_catalog();
    cmd.args(["iterate", "--sort", "sub"]);
    let output = run_with_stdin(cmd, "sub,task\nsub-10,a\nsub-9,NA\n")?;
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "sub=sub-9\ntask=NA\n\nsub=sub-10\ntask=a\n"
    );
    Ok(())
}

#[test]
fn metadata_prints_type_tagged_pairs() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(br#"{"TaskName": "rest", "RepetitionTime": 2}"#)?;
    let output = bids_catalog().arg("metadata").arg(file.path()).output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "RepetitionTime=number:2\nTaskName=string:rest\n"
    );
    Ok(())
}

#[test]
fn pattern_reflects_extension_documents() -> Result<()> {
    let mut ext = NamedTempFile::new()?;
    ext.write_all(br#"{"suffixes": ["zzcustom"]}"#)?;
    let output = bids_catalog()
        .arg("pattern")
        .env("BIDS_CATALOG_EXTENSIONS", ext.path())
        .output()?;
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("zzcustom"));
    Ok(())
}
