//! Configuration loading and schema definitions
//!
//! Settings come from a TOML file; every field has a default so an empty
//! or missing file is valid.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
