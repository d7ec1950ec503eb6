//! CLI utilities for Asteria Local tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Duration and count formatting

#![warn(missing_docs)]

pub mod output;
