/*!
 * codedump - Concatenate a project's source files into one text dump
 *
 * This library walks a directory tree, keeps files whose names end with an
 * allowed suffix, prunes excluded directories, and writes every kept file
 * under a `FILE_PATH:` header into a single output suited for LLM context.
 */

pub mod aggregator;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use aggregator::Aggregator;
pub use config::Config;
pub use error::{DumpError, Result};
pub use report::{DumpReport, ReportFormat, Reporter};
pub use scanner::Scanner;
pub use types::{DumpSummary, FileRecord, ProcessedFile, SkippedFile};
pub use utils::{count_files, display_path, format_file_size};
pub use writer::DumpWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
