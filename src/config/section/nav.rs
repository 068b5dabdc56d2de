//! `[nav]` configuration for the catalogue search toggle.
//!
//! # Example
//!
//! ```toml
//! [nav]
//! enable = true
//! hidden_class = "hidden"
//! ```

use serde::{Deserialize, Serialize};

/// Nav search toggle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Bind the toggle on page ready.
    pub enable: bool,

    /// Selector for the catalogue link that triggers the swap.
    pub link: String,

    /// Selector for the nav menu container.
    pub menu: String,

    /// Selector for the search form container (must contain an `input`).
    pub form: String,

    /// Class that marks a container hidden.
    pub hidden_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            enable: true,
            link: "nav #catalogue-link".to_string(),
            menu: "nav#nav-links".to_string(),
            form: "nav#catalogue-form".to_string(),
            hidden_class: "hidden".to_string(),
        }
    }
}
