//! File discovery

use crate::domain::FileEntry;
use anyhow::Result;
use std::path::Path;

pub mod scanner;

pub use scanner::FileScanner;

/// Discover files under `root` whose extension is one of `extensions`,
/// skipping the default build-output directories.
pub fn discover<I, S>(root: &Path, extensions: I) -> Result<Vec<FileEntry>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FileScanner::new(root.to_path_buf()).include_extensions(extensions).scan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn discover_applies_default_build_exclusions() {
        let tmp = TempDir::new().expect("tmp");
        fs::create_dir_all(tmp.path().join("build/obj")).expect("mkdir");
        fs::write(tmp.path().join("main.cs"), "class Main {}").expect("write");
        fs::write(tmp.path().join("util.cs"), "class Util {}").expect("write");
        fs::write(tmp.path().join("build/obj/gen.cs"), "class Gen {}").expect("write");

        let files = discover(tmp.path(), [".cs"]).expect("scan");
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["main.cs", "util.cs"]);
    }
}
