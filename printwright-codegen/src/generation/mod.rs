//! File assembly.
//!
//! - [`ImportRegistry`] - Alias resolution and deduplication of imports
//! - [`Import`] - Deferred import handle, registered on first use
//! - [`Printer`] - Content buffer plus imports, serialized as one file

mod imports;
mod printer;

pub use imports::{Import, ImportRegistry};
pub use printer::Printer;
