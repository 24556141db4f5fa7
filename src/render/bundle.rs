//! Bundle file writer.
//!
//! Layout of a bundle:
//! 1. one source comment per file (when requested), in bundle order
//! 2. an author comment (when an author is set)
//! 3. each file's content followed by a line terminator

use crate::domain::{BundleConfig, BundleError, FileEntry};
use crate::utils::{read_source, LINE_ENDING};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Write `files` into the bundle described by `config`.
///
/// The output's parent directory must already exist. Every source is read
/// before the output is opened, so a failed read leaves an existing bundle
/// untouched. Returns the absolute path of the written bundle.
pub fn write_bundle(files: &[FileEntry], config: &BundleConfig) -> Result<PathBuf, BundleError> {
    let output = resolve_output(&config.output)?;
    let sources = read_sources(files, config)?;

    let file = File::create(&output).map_err(|source| BundleError::BundleWriteFailed {
        path: output.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    write_bundle_to(&mut writer, &output, files, &sources, config)?;
    writer
        .flush()
        .map_err(|source| BundleError::BundleWriteFailed { path: output.clone(), source })?;

    info!(path = %output.display(), files = files.len(), "bundle written");
    Ok(output)
}

/// Contents of `files` in order, with blank lines stripped when requested.
pub fn read_sources(files: &[FileEntry], config: &BundleConfig) -> Result<Vec<String>, BundleError> {
    files
        .iter()
        .map(|file| {
            let content = read_source(&file.path).map_err(|source| {
                BundleError::SourceReadFailed { path: file.path.clone(), source }
            })?;
            debug!(path = %file.relative_path, bytes = content.len(), "read source");
            Ok(if config.remove_blank_lines { strip_blank_lines(&content) } else { content })
        })
        .collect()
}

/// Absolute output path, checked to have an existing parent directory.
pub fn resolve_output(output: &Path) -> Result<PathBuf, BundleError> {
    let absolute = if output.is_absolute() {
        output.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|_| BundleError::OutputPathInvalid { path: output.to_path_buf() })?
            .join(output)
    };

    match absolute.parent() {
        Some(parent) if parent.is_dir() && absolute.file_name().is_some() => Ok(absolute),
        _ => Err(BundleError::OutputPathInvalid { path: absolute }),
    }
}

/// Render the bundle into any writer. `sources` holds the contents of
/// `files` in the same order; `output` is only used for error reports.
pub fn write_bundle_to<W: Write>(
    writer: &mut W,
    output: &Path,
    files: &[FileEntry],
    sources: &[String],
    config: &BundleConfig,
) -> Result<(), BundleError> {
    let write_failed =
        |source: io::Error| BundleError::BundleWriteFailed { path: output.to_path_buf(), source };

    if config.include_source_comment {
        for file in files {
            write_line(writer, &source_comment(&config.comment_prefix, file))
                .map_err(write_failed)?;
        }
    }

    if let Some(author) = config.author() {
        write_line(writer, &format!("{} Author: {}", config.comment_prefix, author))
            .map_err(write_failed)?;
    }

    for content in sources {
        write_line(writer, content).map_err(write_failed)?;
    }

    Ok(())
}

fn source_comment(prefix: &str, file: &FileEntry) -> String {
    format!("{} Source file: {}, Path: {}", prefix, file.name, file.path.display())
}

fn write_line<W: Write>(writer: &mut W, line: &str) -> io::Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(LINE_ENDING.as_bytes())
}

/// Drop every empty or whitespace-only line, rejoining the rest with the
/// platform line separator.
pub fn strip_blank_lines(content: &str) -> String {
    content.lines().filter(|line| !line.trim().is_empty()).collect::<Vec<_>>().join(LINE_ENDING)
}
