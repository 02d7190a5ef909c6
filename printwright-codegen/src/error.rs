//! Error types.
//!
//! Writing the assembled file is the only recoverable failure and surfaces as
//! [`WriteError`]. Everything else either succeeds or is a [`ContractViolation`]:
//! a bug in the calling generator that aborts via [`violation`].

use std::io;

use miette::Diagnostic;
use thiserror::Error;

/// Failure while writing the assembled file to its sink.
#[derive(Debug, Error, Diagnostic)]
#[error("failed to write generated file after {written} bytes")]
#[diagnostic(code(printwright::write))]
pub struct WriteError {
    /// Bytes accepted by the sink before the failure.
    pub written: u64,
    #[source]
    pub source: io::Error,
}

/// Misuse of the printer by the calling generator.
///
/// These are never returned as values; see [`violation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("unindenting more than has been indented")]
    UnbalancedDedent,

    #[error("non unique import alias '{alias}': '{existing}' != '{requested}'")]
    AmbiguousImport {
        alias: String,
        existing: String,
        requested: String,
    },

    #[error("no alias can be derived for import path '{path}'")]
    EmptyAlias { path: String },
}

/// Abort on a caller contract violation.
#[track_caller]
pub fn violation(v: ContractViolation) -> ! {
    panic!("bug in code generator: {v}")
}
