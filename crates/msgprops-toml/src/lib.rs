#![doc = include_str!("../README.md")]

use msgprops_generate::CodecOptions;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up by [`MsgpropsConfig::read_from_manifest_dir`].
pub const CONFIG_FILE_NAME: &str = "msgprops.toml";

#[derive(Debug, Error)]
pub enum MsgpropsConfigError {
    /// Configuration file not found.
    #[error("msgprops.toml configuration file not found")]
    NotFound,
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A locale field was present but blank.
    #[error("'{field}' must not be empty")]
    EmptyLocale {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// The configuration for `msgprops`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MsgpropsConfig {
    /// Locale of the extracted source messages (e.g., "en").
    pub source_locale: String,
    /// Locale of the translated file (e.g., "nl").
    pub target_locale: String,
    /// Whether generated files carry the source message as a comment.
    #[serde(default = "default_source_comments")]
    pub source_comments: bool,
}

fn default_source_comments() -> bool {
    true
}

impl MsgpropsConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, MsgpropsConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(MsgpropsConfigError::NotFound);
        }

        let content = fs_err::read_to_string(path)?;

        let config: MsgpropsConfig = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Reads the configuration from the manifest directory.
    pub fn read_from_manifest_dir() -> Result<Self, MsgpropsConfigError> {
        Self::read_from_path(Self::manifest_config_path()?)
    }

    /// Returns `<CARGO_MANIFEST_DIR>/msgprops.toml`.
    pub fn manifest_config_path() -> Result<PathBuf, MsgpropsConfigError> {
        let manifest_dir =
            env::var("CARGO_MANIFEST_DIR").map_err(|_| MsgpropsConfigError::NotFound)?;

        Ok(Path::new(&manifest_dir).join(CONFIG_FILE_NAME))
    }

    /// Converts the configuration into codec options.
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::builder()
            .source_locale(self.source_locale.as_str())
            .target_locale(self.target_locale.as_str())
            .source_comments(self.source_comments)
            .build()
    }

    fn validate(&self) -> Result<(), MsgpropsConfigError> {
        if self.source_locale.trim().is_empty() {
            return Err(MsgpropsConfigError::EmptyLocale {
                field: "source_locale",
            });
        }
        if self.target_locale.trim().is_empty() {
            return Err(MsgpropsConfigError::EmptyLocale {
                field: "target_locale",
            });
        }
        Ok(())
    }
}
