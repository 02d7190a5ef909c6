//! Core utilities and types for the printwright output assembler.
//!
//! This crate provides the pure building blocks shared by generators:
//! import path normalization, identifier sanitization, indentation styles
//! and the printer configuration file.

mod config;
mod indent;
mod utils;

// Configuration
pub use config::PrinterConfig;
// Fundamental types
pub use indent::Indent;
// String utilities
pub use utils::{default_alias, sanitize, unvendor};
