//! `[selects]` configuration for searchable-select attachment.
//!
//! # Example
//!
//! ```toml
//! [selects]
//! tags = true
//! generic = true
//! close_after_select = false
//! ```

use serde::{Deserialize, Serialize};

/// Searchable-select enhancement settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectsConfig {
    /// Enhance the tags field with fixed options (allow empty, close after
    /// select).
    pub tags: bool,

    /// Selector for the tags field.
    pub tags_selector: String,

    /// Enhance every other select; allow-empty follows the `required`
    /// attribute.
    pub generic: bool,

    /// Selector for the generic pass.
    pub generic_selector: String,

    /// `close_after_select` for the generic pass.
    pub close_after_select: bool,
}

impl Default for SelectsConfig {
    fn default() -> Self {
        Self {
            tags: true,
            tags_selector: "select#id_tags".to_string(),
            generic: true,
            generic_selector: "select".to_string(),
            close_after_select: false,
        }
    }
}
