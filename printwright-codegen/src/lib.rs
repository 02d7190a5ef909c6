//! Output assembly for generated Go source files.
//!
//! A generator decides *what* to emit; this crate decides how the resulting
//! file is put together: an indented content buffer, a lazily populated
//! import registry with deterministic alias resolution, and a serializer
//! that writes header, imports and content to any [`std::io::Write`] sink.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented content buffer ([`CodeBuilder`])
//! - [`generation`] - Import registry and file assembly ([`Printer`], [`Import`])
//! - [`error`] - Recoverable write errors and caller contract violations
//! - [`testing`] - Test utilities (feature-gated)
//!
//! # Example
//!
//! ```
//! use printwright_codegen::Printer;
//!
//! let mut p = Printer::new("main");
//! let fmt = p.new_import("fmt", "fmt");
//! p.push_line("func main() {");
//! p.push_indent();
//! p.push_fmt(format_args!("{}.Println(\"hello\")", fmt.resolve()));
//! p.push_dedent();
//! p.push_line("}");
//!
//! assert_eq!(
//!     p.render(),
//!     "// Code generated by printwright DO NOT EDIT.\n\
//!      \n\
//!      package main\n\
//!      \n\
//!      import (\n\
//!      \t\"fmt\"\n\
//!      )\n\
//!      func main() {\n\
//!      \tfmt.Println(\"hello\")\n\
//!      }\n"
//! );
//! ```

pub mod builder;
pub mod error;
pub mod generation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::CodeBuilder;
pub use error::{ContractViolation, WriteError};
pub use generation::{Import, ImportRegistry, Printer};
pub use printwright_core::{Indent, PrinterConfig};
