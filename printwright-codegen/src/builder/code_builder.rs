//! Code builder utility for generating properly indented code.

use std::fmt::{self, Write as _};

use crate::error::{ContractViolation, violation};

use super::Indent;

/// Line-oriented buffer that prefixes every line with the current indentation.
///
/// # Example
///
/// ```
/// use printwright_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .push_line("func main() {")
///     .push_indent()
///     .push_line("println(\"hello\")")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "func main() {\n\tprintln(\"hello\")\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
    has_content: bool,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
            has_content: false,
        }
    }

    /// Create a new CodeBuilder with tab indentation (Go default).
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self.has_content = true;
        self
    }

    /// Add a formatted line with current indentation.
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.write_indent();
        // Writing into a String cannot fail.
        let _ = self.buffer.write_fmt(args);
        self.buffer.push('\n');
        self.has_content = true;
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.has_content = true;
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    ///
    /// # Panics
    ///
    /// Panics when the level is already zero: enter/exit calls in the
    /// generator are unbalanced.
    #[track_caller]
    pub fn push_dedent(&mut self) -> &mut Self {
        match self.indent_level.checked_sub(1) {
            Some(level) => self.indent_level = level,
            None => violation(ContractViolation::UnbalancedDedent),
        }
        self
    }

    /// Add a block: header line, indented body, closing line.
    ///
    /// ```
    /// use printwright_codegen::CodeBuilder;
    ///
    /// let mut builder = CodeBuilder::go();
    /// builder.push_block("if ok {", "}", |b| {
    ///     b.push_line("return");
    /// });
    /// assert_eq!(builder.as_str(), "if ok {\n\treturn\n}\n");
    /// ```
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_indent();
        f(self);
        self.push_dedent().push_line(close)
    }

    /// Whether any line has been added.
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}
