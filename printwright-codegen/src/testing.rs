//! Test utilities for generators built on the printer.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    io,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

use crate::Printer;

/// A sink that accepts a fixed number of bytes and then fails every write.
#[derive(Debug, Default)]
pub struct FailingWriter {
    buffer: Vec<u8>,
    limit: u64,
    failures: usize,
}

impl FailingWriter {
    /// Create a sink that fails once `limit` bytes have been accepted.
    pub fn new(limit: u64) -> Self {
        Self {
            buffer: Vec::new(),
            limit,
            failures: 0,
        }
    }

    /// Number of bytes accepted so far.
    pub fn accepted(&self) -> u64 {
        self.buffer.len() as u64
    }

    /// Write calls made after the first failing one.
    pub fn attempts_after_failure(&self) -> usize {
        self.failures.saturating_sub(1)
    }

    /// The bytes accepted so far.
    pub fn contents(&self) -> &[u8] {
        &self.buffer
    }
}

impl io::Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = (self.limit - self.accepted()) as usize;
        if room == 0 {
            self.failures += 1;
            return Err(io::Error::other("sink full"));
        }
        let n = room.min(buf.len());
        self.buffer.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        // Simple line-by-line diff
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
            }
        }

        if diff.is_empty() {
            diff.push_str("  (trailing newline differs)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Write a printer's output to `file_name` inside a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn write_to_temp(
    printer: &Printer,
    file_name: impl AsRef<Path>,
) -> Result<(tempfile::TempDir, PathBuf)> {
    let temp_dir = tempfile::TempDir::new()?;
    let path = temp_dir.path().join(file_name);
    let mut file = std::fs::File::create(&path)
        .wrap_err_with(|| format!("failed to create '{}'", path.display()))?;
    printer.write_to(&mut file)?;
    Ok((temp_dir, path))
}
