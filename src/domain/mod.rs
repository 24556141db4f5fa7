//! Core domain types: languages, discovered files, bundle settings and errors.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod error;
pub mod language;

pub use error::BundleError;
pub use language::{validate as validate_languages, Language, LanguageSelection, ALL_IDENTIFIER};

/// Default bundle file name when no output is given.
pub const DEFAULT_OUTPUT: &str = "bundle.txt";

/// Fixed name of the file produced by `create-rsp`.
pub const RESPONSE_FILE_NAME: &str = "response.rsp";

/// How discovered files are ordered in the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Alphabetically by file name
    #[default]
    #[value(name = "abc", alias = "name")]
    #[serde(alias = "name")]
    Abc,
    /// By file extension
    #[value(name = "type", alias = "extension")]
    #[serde(alias = "extension")]
    Type,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Abc => "abc",
            SortMode::Type => "type",
        }
    }
}

/// A source file selected for bundling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path to the file
    pub path: PathBuf,

    /// Final path component
    pub name: String,

    /// Lower-case extension with leading dot
    pub extension: String,

    /// Directory containing the file
    pub parent: PathBuf,

    /// Path relative to the scan root, `/`-separated
    pub relative_path: String,
}

impl FileEntry {
    pub fn new(path: PathBuf, relative_path: String) -> Self {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("").to_string();
        let extension = extension_of(&path);
        let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self { path, name, extension, parent, relative_path }
    }
}

/// Lower-case extension of `path` with a leading dot, or an empty string.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// Settings for a single `bundle` run.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub output: PathBuf,
    pub languages: LanguageSelection,
    pub include_source_comment: bool,
    pub sort: SortMode,
    pub remove_blank_lines: bool,
    pub author: Option<String>,
    /// Leading token of annotation lines, e.g. `//`
    pub comment_prefix: String,
}

impl BundleConfig {
    pub fn new(output: PathBuf, languages: LanguageSelection) -> Self {
        Self {
            output,
            languages,
            include_source_comment: false,
            sort: SortMode::default(),
            remove_blank_lines: false,
            author: None,
            comment_prefix: "//".to_string(),
        }
    }

    /// Author, if one was given and is not blank.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().map(str::trim).filter(|a| !a.is_empty())
    }
}

/// Settings loaded from a config file, before CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path components containing any of these (case-insensitive) are skipped
    pub exclude_segments: Vec<String>,

    /// Glob patterns matched against the root-relative path
    pub exclude_globs: Vec<String>,

    pub follow_symlinks: bool,

    pub respect_gitignore: bool,

    /// Skip hidden files and directories
    pub skip_hidden: bool,

    /// Leading token of annotation lines
    pub comment_prefix: String,

    /// Bundle path used when `--output` is absent
    pub output: PathBuf,

    /// Sort mode used when `--sort` is absent
    pub sort: SortMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude_segments: default_exclude_segments(),
            exclude_globs: Vec::new(),
            follow_symlinks: false,
            respect_gitignore: false,
            skip_hidden: false,
            comment_prefix: "//".to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sort: SortMode::default(),
        }
    }
}

/// Build-output directory markers excluded from every scan by default.
pub fn default_exclude_segments() -> Vec<String> {
    vec!["bin".into(), "debug".into(), "obj".into()]
}

/// Statistics from scanning
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Total files visited
    pub files_scanned: usize,

    /// Files matching the requested languages
    pub files_included: usize,

    /// Files skipped due to extension filtering
    pub files_skipped_extension: usize,

    /// Files skipped because a path component names a build directory
    pub files_skipped_segment: usize,

    /// Files skipped due to exclude globs
    pub files_skipped_glob: usize,

    /// Total bytes of included files
    pub total_bytes_included: u64,
}

impl ScanStats {
    pub fn files_skipped(&self) -> usize {
        self.files_skipped_extension + self.files_skipped_segment + self.files_skipped_glob
    }
}
