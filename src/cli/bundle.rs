//! Bundle command implementation

use anyhow::{Context, Result};
use clap::{ArgAction, Args};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{validate_languages, BundleConfig, BundleError, SortMode};
use crate::order::order;
use crate::render::write_bundle;
use crate::scan::FileScanner;

#[derive(Args, Debug)]
pub struct BundleArgs {
    /// File path and name of the bundle [default: bundle.txt]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Languages of code to include (comma separated or 'all'):
    /// csharp, c, cpp, java, js, html, css, scss, ts, sql, python
    #[arg(short, long, value_name = "LANGS", required = true)]
    pub language: String,

    /// Add source file comments to the bundle
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub note: bool,

    /// Sort files by name (abc) or by type (type) [default: abc]
    #[arg(short, long, value_enum, value_name = "MODE")]
    pub sort: Option<SortMode>,

    /// Remove empty lines from the code
    #[arg(short = 'e', long, action = ArgAction::SetTrue)]
    pub remove_empty_lines: bool,

    /// Name of the file author
    #[arg(short, long, value_name = "NAME")]
    pub author: Option<String>,

    /// Directory to scan [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Path to config file (files-bundler.toml or .files-bundler.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Follow symbolic links when scanning
    #[arg(long)]
    pub follow_symlinks: bool,
}

pub fn run(args: BundleArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("unable to determine working directory")?;
    let root = args.path.clone().unwrap_or_else(|| cwd.clone());
    let root = root
        .canonicalize()
        .with_context(|| format!("Cannot access directory: {}", root.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let languages = validate_languages(&args.language)?;

    let file_config = load_config(&root, args.config.as_deref())?;
    let settings = merge_cli_with_config(
        file_config,
        CliOverrides {
            output: args.output.clone(),
            sort: args.sort,
            follow_symlinks: args.follow_symlinks.then_some(true),
        },
    );

    let mut config = BundleConfig::new(settings.output.clone(), languages);
    config.include_source_comment = args.note;
    config.sort = settings.sort;
    config.remove_blank_lines = args.remove_empty_lines;
    config.author = args.author;
    config.comment_prefix = settings.comment_prefix.clone();

    let mut scanner = FileScanner::new(root.clone())
        .include_extensions(config.languages.extensions())
        .exclude_segments(settings.exclude_segments)
        .exclude_globs(settings.exclude_globs)
        .respect_gitignore(settings.respect_gitignore)
        .follow_symlinks(settings.follow_symlinks)
        .skip_hidden(settings.skip_hidden)
        .skip_path(existing_absolute(&cwd, &config.output));

    let files = scanner.scan()?;
    let stats = scanner.stats();
    info!(
        scanned = stats.files_scanned,
        included = stats.files_included,
        skipped = stats.files_skipped(),
        "scan complete"
    );
    if files.is_empty() {
        return Err(BundleError::NoMatchingFiles { root }.into());
    }

    let files = order(files, config.sort);
    let written = write_bundle(&files, &config)?;

    println!("Files bundled successfully into {}", written.display());
    println!(
        "  {} file(s) from {} ({} bytes, sorted by {})",
        files.len(),
        root.display(),
        stats.total_bytes_included,
        config.sort.as_str()
    );
    Ok(())
}

/// Absolute form of `path`, resolved through symlinks when it already exists.
fn existing_absolute(cwd: &Path, path: &Path) -> PathBuf {
    let absolute = cwd.join(path);
    absolute.canonicalize().unwrap_or(absolute)
}
