//! Core utilities for Asteria Local tools
//!
//! This crate provides shared functionality used by the command-line tools:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use asteria_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("Searching within {} km", config.schema.search.radius_km);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};
