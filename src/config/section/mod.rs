//! Configuration section definitions.

mod covers;
mod nav;
mod selects;

pub use covers::CoversConfig;
pub use nav::NavConfig;
pub use selects::SelectsConfig;
