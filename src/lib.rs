//! Folio - page-behavior engine for the catalogue web UI.
//!
//! Three behaviors over server-rendered catalogue pages: searchable select
//! widgets, wizard cover thumbnails, and the nav search toggle.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── cli/       # enhance / check commands
//! ├── config/    # folio.toml
//! ├── dom/       # owned HTML document (parse, query, mutate, render)
//! ├── enhance/   # select widgets + wizard cover thumbnails
//! ├── page/      # page lifecycle: ready, click, blur
//! ├── toggle/    # nav search toggle state machine
//! ├── logger.rs  # log!/debug! macros, progress line
//! └── utils/     # html escaping, pluralization
//! ```

pub mod cli;
pub mod config;
pub mod dom;
pub mod enhance;
pub mod logger;
pub mod page;
pub mod toggle;
pub mod utils;
