/*!
 * Utility functions for codedump
 */

use std::path::{Component, Path};

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::error::Result;
use crate::scanner::Scanner;

/// Default name of the aggregate output
pub const DEFAULT_OUTPUT_FILE: &str = "DASHBOARD_FULL_CODEBASE.txt";

/// Count eligible files for progress tracking
pub fn count_files(config: &Config) -> Result<u64> {
    let scanner = Scanner::new(config.clone());
    let mut count = 0;
    scanner.scan(|_, _| {
        count += 1;
        Ok(())
    })?;
    Ok(count)
}

/// Render a relative path with `/` separators and no leading `./`
pub fn display_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Default file-name suffixes to include
pub static DEFAULT_EXTENSIONS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec![".ts", ".html", ".css", ".json", ".md"]);

/// Default directory names to prune
pub static DEFAULT_IGNORE_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "node_modules",
        "dist",
        ".git",
        ".idea",
        ".vscode",
        "__pycache__",
        "legacy old",
    ]
});

/// Default file names to skip, including earlier dumps under the default name
pub static DEFAULT_IGNORE_FILES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "package-lock.json",
        "dump_project.py",
        "FULL_CODEBASE.txt",
        DEFAULT_OUTPUT_FILE,
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_path() {
        assert_eq!(display_path(Path::new("src/app.ts")), "src/app.ts");
        assert_eq!(display_path(Path::new("./README.md")), "README.md");
        let nested: PathBuf = ["a", "b c", "d.ts"].iter().collect();
        assert_eq!(display_path(&nested), "a/b c/d.ts");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(12), "12 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }
}
