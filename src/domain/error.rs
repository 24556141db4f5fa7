//! Errors reported by the bundling and response-file workflows.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::language::supported_identifiers;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("{}", describe_invalid_languages(tokens))]
    InvalidLanguage { tokens: Vec<String> },

    #[error("no files found matching the specified language(s) under {}", root.display())]
    NoMatchingFiles { root: PathBuf },

    #[error("the directory for the output file does not exist: {}", path.display())]
    OutputPathInvalid { path: PathBuf },

    #[error("failed to write bundle {}", path.display())]
    BundleWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read source file {}", path.display())]
    SourceReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input ended before all prompts were answered")]
    PromptAborted,

    #[error("console I/O failed")]
    Prompt(#[source] io::Error),

    #[error("failed to access response file {}", path.display())]
    ResponseFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn describe_invalid_languages(tokens: &[String]) -> String {
    if tokens.is_empty() {
        format!("no language given. Supported languages are: {}, all", supported_identifiers())
    } else {
        format!(
            "invalid language(s): {}. Supported languages are: {}, all",
            tokens.iter().map(|t| format!("'{t}'")).collect::<Vec<_>>().join(", "),
            supported_identifiers()
        )
    }
}
