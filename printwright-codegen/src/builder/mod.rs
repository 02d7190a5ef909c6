//! Indented content buffer.
//!
//! - [`CodeBuilder`] - Line-oriented buffer with indentation tracking
//! - [`Indent`] - Indentation configuration

mod code_builder;

pub use code_builder::CodeBuilder;
pub use printwright_core::Indent;
