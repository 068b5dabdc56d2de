//! Configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── selects    # [selects]
//! │   ├── covers     # [covers]
//! │   └── nav        # [nav]
//! ├── error.rs       # ConfigError
//! └── mod.rs         # FolioConfig (this file)
//! ```
//!
//! Every section has working defaults matching the catalogue templates, so
//! a missing config file is not an error: defaults apply.

mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{CoversConfig, NavConfig, SelectsConfig};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::dom::Selector;
use crate::log;

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FolioConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Searchable-select settings
    pub selects: SelectsConfig,

    /// Wizard cover thumbnail settings
    pub covers: CoversConfig,

    /// Nav search toggle settings
    pub nav: NavConfig,
}

impl FolioConfig {
    /// Load configuration, searching upward from cwd for the config file.
    ///
    /// A missing file is not an error: defaults cover the stock catalogue
    /// markup.
    pub fn load(config_arg: &Path) -> Result<Self> {
        let Some(path) = find_config_file(config_arg) else {
            let mut config = Self::default();
            config.validate()?;
            return Ok(config);
        };

        let mut config = Self::from_path(&path)?;
        config.config_path = Some(path);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}: {}", path.display(), ignored.join(", "));
        }
        Ok(config)
    }

    /// Parse TOML while collecting unknown field paths.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate selectors and the cover URL template.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let selectors = [
            ("selects.tags_selector", &self.selects.tags_selector),
            ("selects.generic_selector", &self.selects.generic_selector),
            ("covers.options_selector", &self.covers.options_selector),
            ("nav.link", &self.nav.link),
            ("nav.menu", &self.nav.menu),
            ("nav.form", &self.nav.form),
        ];
        for (field, selector) in selectors {
            if Selector::parse(selector).is_none() {
                return Err(ConfigError::InvalidSelector {
                    field: field.to_string(),
                    selector: selector.clone(),
                });
            }
        }

        if self.nav.hidden_class.trim().is_empty() {
            return Err(ConfigError::InvalidSelector {
                field: "nav.hidden_class".to_string(),
                selector: self.nav.hidden_class.clone(),
            });
        }

        if !self.covers.template.contains("{id}") {
            return Err(ConfigError::InvalidTemplate(
                "template must contain an `{id}` placeholder".to_string(),
            ));
        }
        // The substituted template must form a valid absolute URL.
        let sample = self.covers.template.replace("{id}", "OL0");
        if let Err(e) = url::Url::parse(&sample) {
            return Err(ConfigError::InvalidTemplate(format!(
                "`{}` is not a valid URL template: {e}",
                self.covers.template
            )));
        }

        Ok(())
    }
}

/// Search for the config file upward from the current directory.
///
/// An absolute path is used as-is (when it exists).
fn find_config_file(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = FolioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.selects.tags_selector, "select#id_tags");
        assert_eq!(config.nav.hidden_class, "hidden");
        assert!(config.covers.template.contains("{id}"));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = FolioConfig::from_str("[selects]\ngeneric = false\n").unwrap();
        assert!(!config.selects.generic);
        assert!(config.selects.tags);
        assert!(config.covers.enable);
    }

    #[test]
    fn unknown_fields_are_collected() {
        let (_, ignored) =
            FolioConfig::parse_with_ignored("[selects]\nbogus = 1\n[mystery]\nx = 2\n").unwrap();
        assert!(ignored.contains(&"selects.bogus".to_string()));
        assert!(ignored.iter().any(|p| p.starts_with("mystery")));
    }

    #[test]
    fn template_without_placeholder_rejected() {
        let mut config = FolioConfig::default();
        config.covers.template = "https://example.com/cover.jpg".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn relative_template_rejected() {
        let mut config = FolioConfig::default();
        config.covers.template = "/covers/{id}.jpg".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn bad_selector_rejected() {
        let mut config = FolioConfig::default();
        config.nav.link = "#".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSelector { .. })
        ));
    }
}
