//! File scanner: recursive discovery filtered by extension and build-directory markers

use crate::domain::{default_exclude_segments, extension_of, FileEntry, ScanStats};
use crate::utils::relative_display;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Discovers files under a root directory.
///
/// Symlinks are not followed unless [`FileScanner::follow_symlinks`] is set;
/// unfollowed links are neither files nor directories and are skipped.
pub struct FileScanner {
    root_path: PathBuf,
    include_extensions: BTreeSet<String>,
    exclude_segments: Vec<String>,
    exclude_globs: Vec<String>,
    skip_paths: Vec<PathBuf>,
    respect_gitignore: bool,
    follow_symlinks: bool,
    skip_hidden: bool,
    stats: ScanStats,
}

impl FileScanner {
    /// Create a new FileScanner with default settings.
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            include_extensions: BTreeSet::new(),
            exclude_segments: default_exclude_segments(),
            exclude_globs: Vec::new(),
            skip_paths: Vec::new(),
            respect_gitignore: false,
            follow_symlinks: false,
            skip_hidden: false,
            stats: ScanStats::default(),
        }
    }

    /// Set file extensions to include (e.g., ".cs", "py")
    pub fn include_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include_extensions = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref().trim().to_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        self
    }

    /// Set path-component markers that exclude a file (case-insensitive substring)
    pub fn exclude_segments(mut self, segments: Vec<String>) -> Self {
        self.exclude_segments = segments
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    /// Set glob patterns to exclude
    pub fn exclude_globs(mut self, globs: Vec<String>) -> Self {
        self.exclude_globs = globs;
        self
    }

    /// Never return this exact path (used for the bundle being written)
    pub fn skip_path(mut self, path: PathBuf) -> Self {
        self.skip_paths.push(path);
        self
    }

    /// Set whether to respect gitignore files
    pub fn respect_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Set whether to follow symbolic links
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Set whether to skip hidden files and directories
    pub fn skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    fn build_exclude_globset(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude_globs {
            let glob = Glob::new(pattern)
                .with_context(|| format!("Invalid exclude glob '{pattern}'"))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    /// Whether any component of the relative path contains an excluded marker.
    fn has_excluded_segment(&self, rel_path: &str) -> bool {
        rel_path.split('/').any(|component| {
            let component = component.to_lowercase();
            self.exclude_segments.iter().any(|marker| component.contains(marker.as_str()))
        })
    }

    fn should_include_extension(&self, path: &Path) -> bool {
        let ext = extension_of(path);
        !ext.is_empty() && self.include_extensions.contains(&ext)
    }

    /// Scan the root and return the matching files.
    ///
    /// Files are returned in deterministic order by relative path.
    pub fn scan(&mut self) -> Result<Vec<FileEntry>> {
        self.stats = ScanStats::default();
        let exclude_globset = self.build_exclude_globset()?;

        let mut builder = WalkBuilder::new(&self.root_path);
        builder
            .standard_filters(false)
            .hidden(self.skip_hidden)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .ignore(self.respect_gitignore)
            .parents(self.respect_gitignore)
            .follow_links(self.follow_symlinks);

        let mut files: Vec<FileEntry> = Vec::new();
        for entry_result in builder.build() {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            if self.skip_paths.iter().any(|skip| skip == path) {
                debug!(path = %path.display(), "skipping output file");
                continue;
            }

            self.stats.files_scanned += 1;

            let Some(rel_path) = relative_display(&self.root_path, path) else {
                continue;
            };

            if !self.should_include_extension(path) {
                self.stats.files_skipped_extension += 1;
                continue;
            }

            if self.has_excluded_segment(&rel_path) {
                debug!(path = %rel_path, "skipping build output");
                self.stats.files_skipped_segment += 1;
                continue;
            }

            if exclude_globset.is_match(&rel_path) {
                debug!(path = %rel_path, "skipping excluded glob");
                self.stats.files_skipped_glob += 1;
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            self.stats.files_included += 1;
            self.stats.total_bytes_included += size;

            files.push(FileEntry::new(path.to_path_buf(), rel_path));
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Get scanning statistics
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }
}
