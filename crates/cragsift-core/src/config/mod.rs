use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CragError, Result};
use crate::grade::ScaleVariant;

mod env;
mod query;
mod search;

pub use query::QueryConfig;
pub use search::SearchConfig;

use env::read_non_empty_env;
use query::QueryFileSection;
use search::SearchFileSection;

pub const ENV_GRADE_SCALE: &str = "CRAGSIFT_GRADE_SCALE";
pub const ENV_DATA: &str = "CRAGSIFT_DATA";

/// Runtime settings. Layers apply in order: built-in defaults, an optional
/// TOML file, then `CRAGSIFT_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub grade_scale: ScaleVariant,
    pub data_path: Option<PathBuf>,
    pub search: SearchConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    grade_scale: Option<ScaleVariant>,
    data: Option<PathBuf>,
    #[serde(default)]
    search: SearchFileSection,
    #[serde(default)]
    query: QueryFileSection,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::default().with_env()
    }

    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let base = match config_file {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|err| {
                    CragError::Validation(format!(
                        "config file {} unreadable: {err}",
                        path.display()
                    ))
                })?;
                let config = Self::default().merge_toml(&raw)?;
                tracing::debug!(path = %path.display(), "config file applied");
                config
            }
            None => Self::default(),
        };
        base.with_env()
    }

    pub fn merge_toml(self, raw: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(raw)?;
        Ok(Self {
            grade_scale: file.grade_scale.unwrap_or(self.grade_scale),
            data_path: file.data.or(self.data_path),
            search: self.search.merge_file(file.search)?,
            query: self.query.merge_file(file.query)?,
        })
    }

    pub fn with_env(self) -> Result<Self> {
        let grade_scale = match read_non_empty_env(ENV_GRADE_SCALE) {
            Some(raw) => raw.parse::<ScaleVariant>().map_err(|_| {
                CragError::Validation(format!(
                    "invalid {ENV_GRADE_SCALE}: {raw} (expected standard|extended)"
                ))
            })?,
            None => self.grade_scale,
        };
        Ok(Self {
            grade_scale,
            data_path: read_non_empty_env(ENV_DATA)
                .map(PathBuf::from)
                .or(self.data_path),
            search: self.search.with_env(),
            query: self.query.with_env(),
        })
    }
}
