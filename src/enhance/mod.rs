//! Document-level page enhancements.
//!
//! Each enhancement is a single pass over a parsed page, applied once per
//! page load by the page runtime (or once per file by the `enhance`
//! command):
//!
//! - `select`: attaches searchable-dropdown behavior to `<select>` elements
//! - `wizard`: prepends cover thumbnails to edition-picker radio labels
//!
//! Passes touch disjoint subtrees and never depend on each other.

pub mod select;
pub mod wizard;

pub use select::{MarkupWidget, SelectEnhancer, SelectWidget, WidgetOptions};
pub use wizard::CoverDecorator;
