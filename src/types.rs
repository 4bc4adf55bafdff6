/*!
 * Core types and data structures for codedump
 */

use std::path::PathBuf;

/// A text file read successfully and ready to be written to the dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the traversal root, `/`-separated
    pub path: String,
    /// Raw file content
    pub content: String,
}

impl FileRecord {
    /// Number of lines in the content
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Number of characters in the content
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// An eligible file that could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path relative to the traversal root
    pub path: String,
    /// Human readable failure reason
    pub reason: String,
}

/// Per-file numbers kept for the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedFile {
    /// Path relative to the traversal root
    pub path: String,
    /// Number of lines
    pub lines: usize,
    /// Number of characters
    pub chars: usize,
}

/// Outcome of a completed run
#[derive(Debug, Clone, Default)]
pub struct DumpSummary {
    /// Output file that was written
    pub output_file: PathBuf,
    /// Files written as records, in traversal order
    pub processed: Vec<ProcessedFile>,
    /// Files that failed to read, in traversal order
    pub skipped: Vec<SkippedFile>,
}

impl DumpSummary {
    /// Total lines across processed files
    pub fn total_lines(&self) -> usize {
        self.processed.iter().map(|f| f.lines).sum()
    }

    /// Total characters across processed files
    pub fn total_chars(&self) -> usize {
        self.processed.iter().map(|f| f.chars).sum()
    }
}
