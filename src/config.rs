/*!
 * Configuration handling for codedump
 */

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::utils::{
    DEFAULT_EXTENSIONS, DEFAULT_IGNORE_DIRS, DEFAULT_IGNORE_FILES, DEFAULT_OUTPUT_FILE,
};

/// Command-line arguments for codedump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "codedump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate a project's source files into a single text dump",
    long_about = "Walks a directory tree, selects files by extension and writes their contents into one text file with a FILE_PATH header per file, ready to feed into a document-ingestion or LLM tool."
)]
pub struct Args {
    /// Directory to dump
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output text file
    #[clap(default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Comma-separated list of file suffixes to include (replaces the defaults)
    #[clap(long, value_delimiter = ',')]
    pub ext: Vec<String>,

    /// Comma-separated list of extra directory names to skip
    #[clap(long, value_delimiter = ',')]
    pub ignore_dirs: Vec<String>,

    /// Comma-separated list of extra file names to skip
    #[clap(long, value_delimiter = ',')]
    pub ignore_files: Vec<String>,

    /// Sort directory listings by name for a deterministic record order
    #[clap(long)]
    pub sort: bool,

    /// Only print skipped files and the final message
    #[clap(long, short)]
    pub quiet: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration, fixed for the whole run
#[derive(Clone, Debug)]
pub struct Config {
    /// Traversal root
    pub target_dir: PathBuf,

    /// Aggregate output path
    pub output_file: PathBuf,

    /// File-name suffixes that make a file eligible
    pub extensions: Vec<String>,

    /// Directory names pruned at any depth
    pub ignore_dirs: HashSet<String>,

    /// Exact file names skipped anywhere
    pub ignore_files: HashSet<String>,

    /// Sort each directory listing by file name
    pub sort_entries: bool,

    /// Suppress per-file progress lines and the report
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(PathBuf::from("."), PathBuf::from(DEFAULT_OUTPUT_FILE))
    }
}

impl Config {
    /// Configuration with the built-in sets for the given root and output
    pub fn new(target_dir: PathBuf, output_file: PathBuf) -> Self {
        Self {
            target_dir,
            output_file,
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
            ignore_files: DEFAULT_IGNORE_FILES.iter().map(|s| s.to_string()).collect(),
            sort_entries: false,
            quiet: false,
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let mut config = Self::new(
            PathBuf::from(args.directory_path),
            PathBuf::from(args.output_file),
        );

        if !args.ext.is_empty() {
            config.extensions = args.ext.into_iter().filter(|e| !e.is_empty()).collect();
        }
        config
            .ignore_dirs
            .extend(args.ignore_dirs.into_iter().filter(|d| !d.is_empty()));
        config
            .ignore_files
            .extend(args.ignore_files.into_iter().filter(|f| !f.is_empty()));
        config.sort_entries = args.sort;
        config.quiet = args.quiet;

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            PathNotFound,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent.as_os_str().is_empty() || parent.is_dir(),
                PathNotFound,
                "Output directory not found: {}",
                parent.display()
            );
        }

        ensure!(
            !self.extensions.is_empty(),
            Config,
            "At least one file extension must be allowed"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_defaults() {
        let args = Args::parse_from(["codedump"]);
        let config = Config::from_args(args);

        assert_eq!(config.target_dir, PathBuf::from("."));
        assert_eq!(config.output_file, PathBuf::from("DASHBOARD_FULL_CODEBASE.txt"));
        assert_eq!(config.extensions, vec![".ts", ".html", ".css", ".json", ".md"]);
        assert!(config.ignore_dirs.contains("node_modules"));
        assert!(config.ignore_dirs.contains("legacy old"));
        assert!(config.ignore_files.contains("package-lock.json"));
        assert!(config.ignore_files.contains("DASHBOARD_FULL_CODEBASE.txt"));
        assert!(!config.sort_entries);
        assert!(!config.quiet);
    }

    #[test]
    fn test_args_extend_sets() {
        let args = Args::parse_from([
            "codedump",
            "src",
            "out.txt",
            "--ext",
            ".rs,.toml",
            "--ignore-dirs",
            "target,vendor",
            "--ignore-files",
            "Cargo.lock",
            "--sort",
        ]);
        let config = Config::from_args(args);

        assert_eq!(config.target_dir, PathBuf::from("src"));
        assert_eq!(config.extensions, vec![".rs", ".toml"]);
        assert!(config.ignore_dirs.contains("target"));
        assert!(config.ignore_dirs.contains(".git"));
        assert!(config.ignore_files.contains("Cargo.lock"));
        // only the default dump name is excluded by name; a custom output is
        // excluded by path alone
        assert!(!config.ignore_files.contains("out.txt"));
        assert!(config.ignore_files.contains("DASHBOARD_FULL_CODEBASE.txt"));
        assert!(config.sort_entries);
    }

    #[test]
    fn test_validate_missing_target() {
        let config = Config::new(
            PathBuf::from("/definitely/not/here"),
            PathBuf::from("out.txt"),
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Target directory not found"));
    }

    #[test]
    fn test_validate_empty_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new(dir.path().to_path_buf(), dir.path().join("out.txt"));
        assert!(config.validate().is_ok());

        config.extensions.clear();
        assert!(config.validate().is_err());
    }
}
