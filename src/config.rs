//! Resolved pipeline configuration.
//!
//! One `AnalysisConfig` is loaded by the caller and passed down; it is
//! immutable for the duration of a computation. The YAML layout keeps the
//! `dictionary:` section of the original config files so existing ones load
//! unchanged.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{AnalysisError, Result};

/// Parameters controlling lexicon and stopword loading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Path to the positive-sentiment dictionary (one word per line)
    pub positive_dictionary_path: PathBuf,
    /// Path to the negative-sentiment dictionary (one word per line)
    pub negative_dictionary_path: PathBuf,
    /// Folder of extra stopword files; `None` or absent contributes nothing
    #[serde(default)]
    pub custom_stopword_folder: Option<PathBuf>,
    /// Ordered encoding labels to attempt when reading resource files
    #[serde(default = "default_encodings")]
    pub encodings: Vec<String>,
}

fn default_encodings() -> Vec<String> {
    vec!["utf-8".to_string(), "latin-1".to_string()]
}

/// On-disk layout: the analysis parameters live under a `dictionary:` key
#[derive(Debug, Deserialize)]
struct ConfigFile {
    dictionary: AnalysisConfig,
}

impl AnalysisConfig {
    /// Load configuration from a YAML file with a top-level `dictionary:` section
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| AnalysisError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: ConfigFile =
            serde_yaml_ng::from_str(&raw).map_err(|source| AnalysisError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Loaded analysis configuration from {}", path.display());
        Ok(parsed.dictionary)
    }
}
