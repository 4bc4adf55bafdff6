/*!
 * Directory traversal and file eligibility
 */

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::Result;

/// Walks the target directory and hands every eligible file to a visitor
pub struct Scanner {
    /// Scanner configuration
    config: Config,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scan the target directory depth-first, pre-order.
    ///
    /// The visitor receives `(absolute path, path relative to the root)` for
    /// each eligible file, in traversal order. Within a directory, files are
    /// visited before subdirectories are entered. Every entry that is not a
    /// directory is a file candidate, dangling symlinks included, so a file
    /// that cannot be read still reaches the visitor. Symlinks to directories
    /// are never followed. Traversal errors and errors returned by the
    /// visitor abort the scan.
    pub fn scan<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&Path, &Path) -> Result<()>,
    {
        let root = fs::canonicalize(&self.config.target_dir)?;
        // The output may not exist yet, e.g. for a counting pass
        let output = fs::canonicalize(&self.config.output_file).ok();

        self.scan_directory(&root, Path::new(""), output.as_deref(), &mut visit)
    }

    fn scan_directory<F>(
        &self,
        abs_path: &Path,
        rel_path: &Path,
        output: Option<&Path>,
        visit: &mut F,
    ) -> Result<()>
    where
        F: FnMut(&Path, &Path) -> Result<()>,
    {
        let mut walker = WalkDir::new(abs_path).min_depth(1).max_depth(1);
        if self.config.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                dirs.push(entry);
            } else if is_symlinked_dir(&entry) {
                debug!("Not following directory link {}", entry.path().display());
            } else {
                files.push(entry);
            }
        }

        for entry in files {
            if !self.is_eligible_file(entry.path(), output) {
                continue;
            }
            let new_rel_path = rel_path.join(entry.file_name());
            visit(entry.path(), &new_rel_path)?;
        }

        for entry in dirs {
            let name = entry.file_name().to_string_lossy();
            if self.is_excluded_dir(&name) {
                debug!("Pruned directory {}", entry.path().display());
                continue;
            }
            let new_rel_path: PathBuf = rel_path.join(entry.file_name());
            self.scan_directory(entry.path(), &new_rel_path, output, visit)?;
        }

        Ok(())
    }

    /// Check if a directory name is in the exclusion set
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.config.ignore_dirs.contains(name)
    }

    /// Check if a file passes the name exclusion and extension allowlist,
    /// and is not the output file itself
    pub fn is_eligible_file(&self, path: &Path, output: Option<&Path>) -> bool {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();

        if self.config.ignore_files.contains(file_name.as_ref()) {
            debug!("Excluded by name: {}", path.display());
            return false;
        }

        if !self
            .config
            .extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
        {
            return false;
        }

        // Don't process the output file itself
        if output.is_some_and(|out| out == path) {
            debug!("Excluded output file: {}", path.display());
            return false;
        }

        true
    }
}

fn is_symlinked_dir(entry: &DirEntry) -> bool {
    entry.path_is_symlink() && entry.path().is_dir()
}
