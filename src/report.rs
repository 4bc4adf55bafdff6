/*!
 * Reporting functionality for codedump
 *
 * Renders a post-run summary of the dump using the tabled library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::DumpSummary;
use crate::utils::format_file_size;

/// Statistics for a completed dump
#[derive(Debug, Clone)]
pub struct DumpReport {
    /// Summary returned by the aggregator
    pub summary: DumpSummary,
    /// Time taken by the run
    pub duration: Duration,
    /// Size of the output file in bytes
    pub output_size: u64,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for dump results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &DumpReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &DumpReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Keep the tail of long paths, cut on a separator
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.len() <= max_len {
            return path.to_string();
        }

        let mut segments = Vec::new();
        let mut current_len = 3; // "..."
        for part in path.split('/').rev() {
            let part_len = part.len() + 1;
            if current_len + part_len > max_len {
                break;
            }
            segments.push(part);
            current_len += part_len;
        }

        if segments.is_empty() {
            let tail: String = path
                .chars()
                .rev()
                .take(max_len.saturating_sub(3))
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            return format!("...{}", tail);
        }

        let mut result = String::from("...");
        for part in segments.iter().rev() {
            result.push('/');
            result.push_str(part);
        }
        result
    }

    fn create_summary_table(&self, report: &DumpReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let summary = &report.summary;
        let rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: summary.output_file.display().to_string(),
            },
            SummaryRow {
                key: "💾 Output Size".to_string(),
                value: format_file_size(report.output_size),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Processed".to_string(),
                value: self.format_number(summary.processed.len()),
            },
            SummaryRow {
                key: "⚠️ Files Skipped".to_string(),
                value: self.format_number(summary.skipped.len()),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(summary.total_lines()),
            },
            SummaryRow {
                key: "📦 LLM Tokens".to_string(),
                value: format!(
                    "{} tokens (estimated)",
                    self.format_number(summary.total_chars() / 4)
                ),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_files_table(&self, report: &DumpReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        let mut files: Vec<_> = report.summary.processed.iter().collect();
        files.sort_by(|a, b| b.chars.cmp(&a.chars));
        if files.len() > 15 {
            files.truncate(10);
        }

        let rows: Vec<FileRow> = files
            .iter()
            .map(|info| FileRow {
                path: self.format_path(&info.path, 60),
                lines: self.format_number(info.lines),
                tokens: self.format_number(info.chars / 4),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &DumpReport) -> String {
        let summary_table = self.create_summary_table(report);
        let files_table = self.create_files_table(report);

        let files_title = if report.summary.processed.len() > 15 {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT  📋"
        } else {
            "📋  PROCESSED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title, files_table, "✅  DUMP COMPLETE", summary_table
        )
    }
}
