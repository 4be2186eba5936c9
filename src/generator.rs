//! The Scaffolder: creates the bot project skeleton and its files.
//!
//! Creation is idempotent: an entity that already exists is left untouched
//! and recorded as skipped. A partially completed run is never rolled back;
//! re-running with the same options resumes through the same checks.

use crate::args::{DbLibrary, EnvLoader};
use crate::error::{Result, ScaffoldError};
use crate::installer;
use crate::templates;
use log::info;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved configuration for one scaffolder run. Immutable after parsing.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub name: String,
    pub path: PathBuf,
    pub dblib: DbLibrary,
    pub varenv: EnvLoader,
}

impl ScaffoldOptions {
    /// Root directory of the generated project.
    pub fn root_dir(&self) -> PathBuf {
        self.path.join(&self.name)
    }
}

/// What happened to a single directory or file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Debug)]
pub struct ReportEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub outcome: Outcome,
}

/// Summary of one run: per-entity outcomes plus the installed dependencies.
///
/// This is terminal output only; nothing consumes it programmatically.
#[derive(Debug, Default)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    pub dependencies: Vec<&'static str>,
}

impl Report {
    fn record(&mut self, path: &Path, kind: EntryKind, outcome: Outcome) {
        self.entries.push(ReportEntry {
            path: path.to_path_buf(),
            kind,
            outcome,
        });
    }

    /// Outcome recorded for `path`, if any.
    pub fn outcome_of(&self, path: &Path) -> Option<Outcome> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.outcome)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            let outcome = match entry.outcome {
                Outcome::Created => "created",
                Outcome::AlreadyExists => "exists ",
            };
            let kind = match entry.kind {
                EntryKind::Directory => "dir ",
                EntryKind::File => "file",
            };
            writeln!(f, "  {} {} {}", outcome, kind, entry.path.display())?;
        }
        write!(f, "Dependencies installed: {}", self.dependencies.join(", "))
    }
}

/// Creates a directory unless it already exists.
fn create_dir(path: &Path, report: &mut Report) -> Result<()> {
    if path.exists() {
        info!("Folder already exists: {}", path.display());
        report.record(path, EntryKind::Directory, Outcome::AlreadyExists);
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Folder created: {}", path.display());
    report.record(path, EntryKind::Directory, Outcome::Created);
    Ok(())
}

/// Writes a file unless it already exists. Existing files are never overwritten.
fn create_file(path: &Path, content: &str, report: &mut Report) -> Result<()> {
    if path.exists() {
        info!("File already exists: {}", path.display());
        report.record(path, EntryKind::File, Outcome::AlreadyExists);
        return Ok(());
    }
    fs::write(path, content).map_err(|source| ScaffoldError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    info!("File created: {}", path.display());
    report.record(path, EntryKind::File, Outcome::Created);
    Ok(())
}

/// Creates the directory skeleton and writes every generated file.
///
/// This is the filesystem phase of [`run`]; it performs no process
/// invocation, which keeps it exercisable against scratch directories.
pub fn scaffold(options: &ScaffoldOptions) -> Result<Report> {
    let root = options.root_dir();
    let mut report = Report::default();

    create_dir(&root, &mut report)?;
    create_dir(&root.join("Events"), &mut report)?;
    create_dir(&root.join("Commands"), &mut report)?;

    report.dependencies = templates::dependency_list(options.dblib, options.varenv);

    create_file(
        &root.join("index.js"),
        &templates::render_index(options.dblib, options.varenv),
        &mut report,
    )?;
    create_file(
        &root.join("Events").join("InteractionCreate.js"),
        templates::INTERACTION_CREATE_EVENT,
        &mut report,
    )?;
    create_file(
        &root.join("Commands").join("hello.js"),
        templates::HELLO_COMMAND,
        &mut report,
    )?;
    create_file(
        &root.join("package.json"),
        &templates::render_package_json(&options.name)?,
        &mut report,
    )?;
    create_file(&root.join(".gitignore"), templates::GITIGNORE, &mut report)?;
    if options.varenv == EnvLoader::Dotenv {
        create_file(
            &root.join(".env"),
            &templates::render_env_file(options.dblib),
            &mut report,
        )?;
    }

    Ok(report)
}

/// Runs the full scaffolder: filesystem phase, then dependency installation.
///
/// The install step runs even when every entity already existed, so a
/// re-run against an existing project still brings its packages in.
pub fn run(options: &ScaffoldOptions) -> Result<Report> {
    let report = scaffold(options)?;
    installer::install(&options.root_dir(), &report.dependencies)?;
    Ok(report)
}
