//! files-bundler: bundle source files into a single text file

use anyhow::Result;

fn main() -> Result<()> {
    files_bundler::cli::run()
}
