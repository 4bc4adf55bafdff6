/*!
 * The dump routine: traverse, filter, read, write, report
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::scanner::Scanner;
use crate::types::{DumpSummary, FileRecord, ProcessedFile, SkippedFile};
use crate::utils::display_path;
use crate::writer::DumpWriter;

/// Concatenates every eligible file under the target directory into one output
pub struct Aggregator {
    /// Run configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Aggregator {
    /// Create a new aggregator
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Run the dump.
    ///
    /// Fails only if the output cannot be created or written, or if the
    /// traversal itself fails. A file that cannot be read is reported on the
    /// console, recorded in the summary and skipped.
    pub fn run(&self) -> Result<DumpSummary> {
        info!(
            "Dumping {} into {}",
            self.config.target_dir.display(),
            self.config.output_file.display()
        );

        let mut writer = DumpWriter::create(&self.config.output_file)?;
        writer.write_header()?;

        let mut summary = DumpSummary {
            output_file: self.config.output_file.clone(),
            ..DumpSummary::default()
        };

        let scanner = Scanner::new(self.config.clone());
        scanner.scan(|abs_path, rel_path| {
            let path = display_path(rel_path);
            self.progress.inc(1);
            self.progress.set_message(path.clone());

            match read_text(abs_path) {
                Ok(content) => {
                    let record = FileRecord { path, content };
                    writer.write_record(&record)?;
                    if !self.config.quiet {
                        self.progress
                            .suspend(|| println!("Processed: {}", record.path));
                    }
                    summary.processed.push(ProcessedFile {
                        lines: record.line_count(),
                        chars: record.char_count(),
                        path: record.path,
                    });
                }
                Err(reason) => {
                    debug!("Skipping {}: {}", path, reason);
                    self.progress
                        .suspend(|| println!("Skipped {}: {}", path, reason));
                    summary.skipped.push(SkippedFile { path, reason });
                }
            }
            Ok(())
        })?;

        writer.finish()?;

        self.progress.suspend(|| {
            println!(
                "\n✅ Success! All files merged into: {}",
                self.config.output_file.display()
            )
        });
        info!(
            "Wrote {} records, skipped {}",
            summary.processed.len(),
            summary.skipped.len()
        );

        Ok(summary)
    }
}

/// Read a whole file as UTF-8, turning any failure into a printable reason
fn read_text(path: &Path) -> std::result::Result<String, String> {
    fs::read_to_string(path).map_err(|e| e.to_string())
}
