//! JSON configuration and table loading for the command-line host.

use crate::catalog::EmojiCatalog;
use crate::emoji::{EmojiStrategy, MatchCase};
use crate::error::{Result, TransformError};
use crate::keyword_index::KeywordIndex;
use crate::leet::LeetPreset;
use crate::transformer::TextTransformer;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name looked up in the per-user config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `emoji,name` table with a header row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_table: Option<PathBuf>,
    /// JSON array of emoji records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_catalog: Option<PathBuf>,
    pub emoji_strategy: EmojiStrategy,
    pub leet_preset: LeetPreset,
    pub catalog_match: MatchCase,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// `config.json` in the platform config directory, when one exists
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "randomcase")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from an explicit path, or from the default location.
    ///
    /// A missing default file yields the default config; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (expand_tilde(p), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !explicit && !path.exists() {
            debug!(path = %path.display(), "No config file; using defaults");
            return Ok(Self::default());
        }

        let text = read_file(&path)?;
        let config = Self::from_json_str(&text).map_err(|e| {
            TransformError::Config(format!("{}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Read the configured tables and assemble a transformer
    pub fn build_transformer(&self) -> Result<TextTransformer> {
        let mut transformer = TextTransformer::new()
            .with_emoji_strategy(self.emoji_strategy)
            .with_leet_preset(self.leet_preset)
            .with_catalog_match(self.catalog_match);

        if let Some(path) = &self.keyword_table {
            transformer = transformer.with_keyword_index(load_keyword_table(path)?);
        }
        if let Some(path) = &self.emoji_catalog {
            transformer = transformer.with_catalog(load_catalog(path)?);
        }
        Ok(transformer)
    }
}

/// Read and parse a delimited keyword table
pub fn load_keyword_table(path: &Path) -> Result<KeywordIndex> {
    let path = expand_tilde(path);
    let text = read_file(&path)?;
    let index = KeywordIndex::parse_table(&text);
    info!(path = %path.display(), keywords = index.len(), "Loaded keyword table");
    Ok(index)
}

/// Read and parse a JSON emoji catalog
pub fn load_catalog(path: &Path) -> Result<EmojiCatalog> {
    let path = expand_tilde(path);
    let text = read_file(&path)?;
    let catalog = EmojiCatalog::from_json(&text)?;
    info!(path = %path.display(), records = catalog.len(), "Loaded emoji catalog");
    Ok(catalog)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| TransformError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Expands a leading `~/` in a path to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Ok(home) = env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    path.to_path_buf()
}
