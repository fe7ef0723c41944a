use std::fs;
use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::Value;
use walkdir::WalkDir;

use crate::error::{CragError, Result};
use crate::jsonl::{jsonl_all_lines_invalid, parse_jsonl_tolerant};
use crate::models::Area;

pub const DEFAULT_INCLUDE_GLOBS: &[&str] = &["*.json", "*.jsonl"];

/// Supplies raw area records to [`super::Corpus::load`].
pub trait CorpusSource {
    fn describe(&self) -> String;
    fn load_areas(&self) -> Result<Vec<Area>>;
}

/// Reads scrape exports from disk: one `.json` file (array of areas or a
/// single area), one `.jsonl` file (one area per line), or a directory of
/// either.
#[derive(Debug, Clone)]
pub struct JsonCorpusSource {
    path: PathBuf,
    include_globs: Vec<String>,
}

impl JsonCorpusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            include_globs: DEFAULT_INCLUDE_GLOBS
                .iter()
                .map(|glob| (*glob).to_string())
                .collect(),
        }
    }

    #[must_use]
    pub fn with_include_globs<I, S>(mut self, globs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_globs = globs.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_directory(&self) -> Result<Vec<Area>> {
        let include = build_include_set(&self.include_globs)?;
        let mut areas = Vec::new();
        let mut loaded_files = 0usize;
        let mut skipped_files = 0usize;

        let entries = WalkDir::new(&self.path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.path() == self.path || !path_has_hidden_component(entry.path(), &self.path)
            });

        for entry in entries {
            let entry = entry.map_err(|err| CragError::CorpusLoad(err.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Ok(relative) = path.strip_prefix(&self.path) else {
                continue;
            };
            if !include.is_match(relative_to_unix_path(relative)) {
                continue;
            }
            match load_file(path) {
                Ok(mut parsed) => {
                    loaded_files += 1;
                    areas.append(&mut parsed);
                }
                Err(err) => {
                    skipped_files += 1;
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "skipping unreadable corpus file"
                    );
                }
            }
        }

        tracing::debug!(
            root = %self.path.display(),
            loaded_files,
            skipped_files,
            "scanned corpus directory"
        );
        Ok(areas)
    }
}

impl CorpusSource for JsonCorpusSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load_areas(&self) -> Result<Vec<Area>> {
        let metadata = fs::metadata(&self.path).map_err(|err| {
            CragError::CorpusLoad(format!("{}: {err}", self.path.display()))
        })?;
        if metadata.is_dir() {
            self.load_directory()
        } else {
            load_file(&self.path)
        }
    }
}

/// Areas already in memory, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticCorpusSource {
    areas: Vec<Area>,
}

impl StaticCorpusSource {
    #[must_use]
    pub const fn new(areas: Vec<Area>) -> Self {
        Self { areas }
    }
}

impl CorpusSource for StaticCorpusSource {
    fn describe(&self) -> String {
        format!("memory ({} areas)", self.areas.len())
    }

    fn load_areas(&self) -> Result<Vec<Area>> {
        Ok(self.areas.clone())
    }
}

fn load_file(path: &Path) -> Result<Vec<Area>> {
    let raw = fs::read_to_string(path)?;
    let is_jsonl = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"));
    if is_jsonl {
        parse_jsonl_areas(&raw, &path.display().to_string())
    } else {
        parse_json_areas(&raw)
    }
}

pub(crate) fn parse_json_areas(raw: &str) -> Result<Vec<Area>> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value::<Area>(item).map_err(CragError::from))
            .collect(),
        object @ Value::Object(_) => Ok(vec![serde_json::from_value::<Area>(object)?]),
        other => Err(CragError::CorpusLoad(format!(
            "expected an area object or array, found {}",
            json_kind(&other)
        ))),
    }
}

pub(crate) fn parse_jsonl_areas(raw: &str, label: &str) -> Result<Vec<Area>> {
    let outcome = parse_jsonl_tolerant::<Area>(raw);
    if outcome.items.is_empty() {
        return Err(jsonl_all_lines_invalid(
            label,
            outcome.skipped_lines,
            outcome.first_error.as_ref(),
        ));
    }
    if outcome.skipped_lines > 0 {
        tracing::warn!(
            source = label,
            skipped_lines = outcome.skipped_lines,
            first_error_line = outcome.first_error.as_ref().map(|(line, _)| *line),
            "skipped invalid area lines"
        );
    }
    Ok(outcome.items)
}

fn build_include_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let mut added = 0usize;
    for pattern in patterns {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            continue;
        }
        let glob = Glob::new(trimmed).map_err(|err| {
            CragError::Validation(format!("invalid corpus include glob '{trimmed}': {err}"))
        })?;
        builder.add(glob);
        added += 1;
    }
    if added == 0 {
        return Err(CragError::Validation(
            "corpus include globs must not be empty".to_string(),
        ));
    }
    builder
        .build()
        .map_err(|err| CragError::Validation(format!("invalid corpus include globs: {err}")))
}

fn path_has_hidden_component(path: &Path, root: &Path) -> bool {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|component| match component {
            Component::Normal(value) => value.to_string_lossy().starts_with('.'),
            _ => false,
        })
}

fn relative_to_unix_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(value) => Some(value.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
