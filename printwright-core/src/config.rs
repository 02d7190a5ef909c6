//! Printer configuration loaded from TOML.

use std::{path::Path, str::FromStr};

use eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::Indent;

/// Settings that shape the assembled output file.
///
/// ```toml
/// generator = "goderive"
/// indent = "tab"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrinterConfig {
    /// Tool name written into the provenance header.
    pub generator: String,
    /// Indentation unit for the content buffer.
    pub indent: Indent,
}

impl PrinterConfig {
    /// Load a configuration file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        src.parse()
            .wrap_err_with(|| format!("invalid printer config '{}'", path.display()))
    }

    /// The provenance line marking the output as generated.
    pub fn header(&self) -> String {
        format!("// Code generated by {} DO NOT EDIT.", self.generator)
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            generator: "printwright".to_string(),
            indent: Indent::default(),
        }
    }
}

impl FromStr for PrinterConfig {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
