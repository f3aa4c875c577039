//! Perform Migrate
//!
//! Batch entry point: enumerates component files, runs the pure transform
//! on each and writes the results. Documents are isolated: a failing file
//! is reported and skipped, no partial output is written for it, and the
//! batch continues.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use vue_migrator::{transform_with_report, MigrateOptions};

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct MigrateSummary {
    /// Files converted and written.
    pub converted: Vec<PathBuf>,
    /// Files skipped with the reported reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl MigrateSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Enumerates candidate files: direct children of `input` matching the
/// include patterns, `(name, path)` pairs in directory order.
pub fn enumerate_files(input: &Path, include: &[String]) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    let default_patterns = vec!["*.vue".to_string()];
    let patterns: &[String] = if include.is_empty() {
        &default_patterns
    } else {
        include
    };
    for pattern in patterns {
        let pattern_str = input.join(pattern).to_string_lossy().into_owned();
        let entries = glob::glob(&pattern_str)
            .with_context(|| format!("invalid include pattern {pattern:?}"))?;
        for entry in entries {
            let path = entry?;
            if !path.is_file() {
                continue;
            }
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if !files.iter().any(|(_, p)| p == &path) {
                files.push((name, path));
            }
        }
    }
    Ok(files)
}

/// Migrates every enumerated file from `input` into `output`.
pub fn perform_migration(
    input: &Path,
    output: &Path,
    include: &[String],
    options: &MigrateOptions,
) -> Result<MigrateSummary> {
    let files = enumerate_files(input, include)?;
    std::fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory {}", output.display()))?;

    let mut summary = MigrateSummary::default();
    for (name, path) in files {
        println!("Processing {name}");
        match migrate_file(&path, &output.join(&name), options) {
            Ok(log) => {
                for line in log {
                    println!("  {line}");
                }
                summary.converted.push(path);
            }
            Err(err) => {
                eprintln!("Error: {name}: {err:#}");
                summary.failed.push((path, format!("{err:#}")));
            }
        }
    }
    Ok(summary)
}

fn migrate_file(source: &Path, destination: &Path, options: &MigrateOptions) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(source)
        .with_context(|| format!("failed to read {}", source.display()))?;
    let (converted, log) = transform_with_report(&content, options)?;
    std::fs::write(destination, converted)
        .with_context(|| format!("failed to write {}", destination.display()))?;
    Ok(log)
}
