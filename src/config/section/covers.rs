//! `[covers]` configuration for wizard cover thumbnails.
//!
//! # Example
//!
//! ```toml
//! [covers]
//! enable = true
//! template = "https://covers.openlibrary.org/b/olid/{id}-S.jpg"
//! ```

use serde::{Deserialize, Serialize};

/// Cover decoration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoversConfig {
    /// Enable the wizard cover pass.
    pub enable: bool,

    /// Element id marking the edition-selection wizard step.
    pub marker: String,

    /// Selector for the option labels to decorate.
    pub options_selector: String,

    /// Cover image URL template; `{id}` is replaced with the option value.
    pub template: String,
}

impl Default for CoversConfig {
    fn default() -> Self {
        Self {
            enable: true,
            marker: "wizard-edition".to_string(),
            options_selector: "#id_edition-edition_selection label".to_string(),
            template: "https://covers.openlibrary.org/b/olid/{id}-S.jpg".to_string(),
        }
    }
}
