/*!
 * Command-line interface for codedump
 */

use std::fs;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use codedump::config::{Args, Config};
use codedump::report::{DumpReport, ReportFormat, Reporter};
use codedump::utils::count_files;
use codedump::Aggregator;

fn main() -> io::Result<()> {
    // Logs go to stderr so they never mix with the dump's console lines
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let config = Config::from_args(args);
    config.validate()?;

    let progress = if config.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(0)
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len}")
    {
        progress.set_style(style);
    }
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("📊 Setup");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    // Count files for progress tracking
    let total_files = match count_files(&config) {
        Ok(count) => count,
        Err(e) => {
            progress.set_message(format!("⚠️ Warning: Failed to count files: {}", e));
            0
        }
    };
    progress.set_length(total_files);
    progress.set_prefix("📊 Processing");

    let aggregator = Aggregator::new(config.clone(), Arc::new(progress.clone()));

    let start_time = Instant::now();
    let result = aggregator.run();
    progress.finish_and_clear();
    let summary = result?;
    let duration = start_time.elapsed();

    if !config.quiet {
        let output_size = fs::metadata(&config.output_file)
            .map(|m| m.len())
            .unwrap_or(0);
        let report = DumpReport {
            summary,
            duration,
            output_size,
        };
        Reporter::new(ReportFormat::ConsoleTable).print_report(&report);
    }

    Ok(())
}
