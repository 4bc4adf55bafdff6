/*!
 * Aggregate output writer for codedump
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, ResultExt};
use crate::types::FileRecord;

/// Line written above and below each `FILE_PATH:` line
pub const DELIMITER: &str = "==================================================";

/// Fixed preamble at the top of every dump
pub const HEADER: &str = "# FULL PROJECT DUMP\n\
# This file contains the entire codebase structure and content.\n\
# Treat each section below as a separate file path.\n\n";

/// Writes the header and file records of a dump
pub struct DumpWriter<W: Write> {
    inner: W,
}

impl DumpWriter<BufWriter<File>> {
    /// Create (or truncate) the output file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> DumpWriter<W> {
    /// Wrap any writer
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write the fixed preamble
    pub fn write_header(&mut self) -> Result<()> {
        self.inner.write_all(HEADER.as_bytes())?;
        Ok(())
    }

    /// Append one file record
    pub fn write_record(&mut self, record: &FileRecord) -> Result<()> {
        writeln!(self.inner, "{}", DELIMITER)?;
        writeln!(self.inner, "FILE_PATH: {}", record.path)?;
        writeln!(self.inner, "{}", DELIMITER)?;
        self.inner.write_all(record.content.as_bytes())?;
        self.inner.write_all(b"\n\n")?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
