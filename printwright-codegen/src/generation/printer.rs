//! Assembly of a single generated file.

use std::{cell::RefCell, fmt, io, rc::Rc};

use printwright_core::PrinterConfig;

use super::{Import, ImportRegistry};
use crate::{CodeBuilder, error::WriteError};

/// Assembles one generated Go file.
///
/// Content is appended line by line while imports are requested through
/// deferred [`Import`] handles. Only imports that were resolved end up in
/// the import block, sorted by path so output is stable regardless of the
/// order in which the generator touched them.
///
/// A `Printer` is owned by a single generation pass; [`Import`] handles share
/// its registry and must not outlive that pass in any meaningful way.
pub struct Printer {
    package: String,
    header: String,
    code: CodeBuilder,
    imports: Rc<RefCell<ImportRegistry>>,
}

impl Printer {
    /// Create a printer for `package` with the default configuration.
    pub fn new(package: impl Into<String>) -> Self {
        Self::with_config(package, &PrinterConfig::default())
    }

    /// Create a printer for `package` with a custom configuration.
    pub fn with_config(package: impl Into<String>, config: &PrinterConfig) -> Self {
        Self {
            package: package.into(),
            header: config.header(),
            code: CodeBuilder::new(config.indent),
            imports: Rc::new(RefCell::new(ImportRegistry::new())),
        }
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.code.push_line(s);
        self
    }

    /// Add a formatted line with current indentation.
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.code.push_fmt(args);
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.code.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.code.push_indent();
        self
    }

    /// Decrease indentation level.
    ///
    /// # Panics
    ///
    /// Panics when nothing is indented.
    #[track_caller]
    pub fn push_dedent(&mut self) -> &mut Self {
        self.code.push_dedent();
        self
    }

    /// Add a header line, an indented body and a closing line.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_indent();
        f(self);
        self.push_dedent().push_line(close)
    }

    /// Whether any content line has been added.
    pub fn has_content(&self) -> bool {
        self.code.has_content()
    }

    /// Whether any import has been resolved.
    pub fn has_imports(&self) -> bool {
        !self.imports.borrow().is_empty()
    }

    /// Request an import under a preferred alias.
    ///
    /// Nothing is registered until the returned handle is resolved.
    pub fn new_import(&self, name: impl Into<String>, path: impl Into<String>) -> Import {
        Import::new(name, path, Rc::clone(&self.imports))
    }

    /// Request an import aliased by the last segment of its path.
    pub fn import_path(&self, path: impl Into<String>) -> Import {
        self.new_import(String::new(), path)
    }

    /// Write the assembled file and return the number of bytes written.
    ///
    /// The header block (provenance line, package clause, imports) is written
    /// before the content. The first failing write aborts the rest; the error
    /// reports how many bytes the sink had accepted.
    pub fn write_to<W>(&self, w: &mut W) -> Result<u64, WriteError>
    where
        W: io::Write + ?Sized,
    {
        let header = self.header_block();
        let mut written = 0;
        for part in [header.as_bytes(), self.code.as_str().as_bytes()] {
            if let Err(source) = write_counted(w, part, &mut written) {
                return Err(WriteError { written, source });
            }
        }
        tracing::trace!(package = %self.package, written, "wrote generated file");
        Ok(written)
    }

    /// Render the assembled file to a string.
    pub fn render(&self) -> String {
        let mut out = self.header_block();
        out.push_str(self.code.as_str());
        out
    }

    fn header_block(&self) -> String {
        let mut top = CodeBuilder::go();
        top.push_line(&self.header)
            .push_blank()
            .push_fmt(format_args!("package {}", self.package));

        let imports = self.imports.borrow();
        if !imports.is_empty() {
            top.push_blank().push_line("import (").push_indent();
            for (alias, path) in imports.entries() {
                if alias == path {
                    top.push_fmt(format_args!("\"{path}\""));
                } else {
                    top.push_fmt(format_args!("{alias} \"{path}\""));
                }
            }
            top.push_dedent().push_line(")");
        }
        top.build()
    }
}

impl fmt::Debug for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("package", &self.package)
            .field("imports", &self.imports.borrow())
            .field("has_content", &self.has_content())
            .finish()
    }
}

/// Write all of `buf`, counting accepted bytes even when a later write fails.
fn write_counted<W>(w: &mut W, mut buf: &[u8], written: &mut u64) -> io::Result<()>
where
    W: io::Write + ?Sized,
{
    while !buf.is_empty() {
        match w.write(buf) {
            Ok(0) => return Err(io::ErrorKind::WriteZero.into()),
            Ok(n) => {
                *written += n as u64;
                buf = &buf[n..];
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
