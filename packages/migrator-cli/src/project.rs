//! Project File
//!
//! Optional `vmig.json` describing a migration batch. Command-line flags
//! win over file values. Comment lines are tolerated for parity with the
//! editors that produce these files.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use vue_migrator::{MigrateOptions, RuleFlags, TargetVersion};

/// Parsed `vmig.json` contents. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectFile {
    /// Source directory holding the component files.
    pub input: Option<String>,
    /// Destination directory; file names are preserved.
    pub output: Option<String>,
    /// Target framework version, `"2"` or `"3"`.
    pub target: Option<String>,
    /// Hoist state declarations into the grouped section.
    pub group_state: Option<bool>,
    /// Attach the explanatory comment to synthesized helper imports.
    pub annotate_imports: Option<bool>,
    /// Apply project-specific global accessor substitutions.
    pub env_substitutions: Option<bool>,
    /// Glob patterns, relative to `input`, selecting the files to migrate.
    /// Defaults to `["*.vue"]`.
    pub include: Vec<String>,
}

impl ProjectFile {
    /// Folds the file values into migration options.
    pub fn to_options(&self) -> Result<MigrateOptions> {
        let mut options = MigrateOptions::default();
        if let Some(target) = self.target.as_deref() {
            options.target = parse_target(target)?;
        }
        if let Some(group) = self.group_state {
            options.group_state = group;
        }
        if let Some(annotate) = self.annotate_imports {
            options.annotate_imports = annotate;
        }
        if self.env_substitutions == Some(false) {
            options.rules.remove(RuleFlags::ENV);
        }
        Ok(options)
    }
}

/// Parses a target version selector as written on the command line or in
/// the project file.
pub fn parse_target(value: &str) -> Result<TargetVersion> {
    match value {
        "2" => Ok(TargetVersion::Vue2),
        "3" => Ok(TargetVersion::Vue3),
        other => anyhow::bail!("invalid target version {other:?}, expected \"2\" or \"3\""),
    }
}

/// Reads and parses a project file.
pub fn load(path: &Path) -> Result<ProjectFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read project file {}", path.display()))?;
    let content = strip_json_comments(&content);
    serde_json::from_str(&content)
        .with_context(|| format!("invalid project file {}", path.display()))
}

fn strip_json_comments(input: &str) -> String {
    let mut result = String::new();
    for line in input.lines() {
        let trimmed = line.trim();
        if !trimmed.starts_with("//") && !trimmed.starts_with("/*") {
            result.push_str(line);
            result.push('\n');
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_comment_lines() {
        let parsed: ProjectFile =
            serde_json::from_str(&strip_json_comments("{\n// note\n\"target\": \"2\"\n}"))
                .unwrap();
        assert_eq!(parsed.target.as_deref(), Some("2"));
    }

    #[test]
    fn rejects_unknown_target() {
        assert!(parse_target("4").is_err());
    }
}
