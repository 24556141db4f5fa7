//! Utility functions

pub mod encoding;
pub mod paths;

pub use encoding::read_source;
pub use paths::{normalize_path, relative_display};

/// Line separator used when rejoining filtered content.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Interpret a yes/no answer. Anything other than `yes`/`y` is "no".
pub fn parse_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "yes" | "y")
}
