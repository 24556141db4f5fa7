//! Output rendering

pub mod bundle;

pub use bundle::{read_sources, resolve_output, strip_blank_lines, write_bundle, write_bundle_to};
