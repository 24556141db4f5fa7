//! Bundle ordering by file name or extension

use crate::domain::{FileEntry, SortMode};

/// Sort `files` for bundling.
///
/// Both modes are stable byte-wise sorts: files that compare equal keep the
/// order they arrived in.
pub fn order(mut files: Vec<FileEntry>, mode: SortMode) -> Vec<FileEntry> {
    match mode {
        SortMode::Abc => files.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes())),
        SortMode::Type => {
            files.sort_by(|a, b| a.extension.as_bytes().cmp(b.extension.as_bytes()))
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(rel: &str) -> FileEntry {
        FileEntry::new(PathBuf::from("/repo").join(rel), rel.to_string())
    }

    fn names(files: &[FileEntry]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn by_name_sorts_ascending() {
        let files = vec![entry("b.cs"), entry("a.cs"), entry("c.cs")];
        assert_eq!(names(&order(files, SortMode::Abc)), vec!["a.cs", "b.cs", "c.cs"]);
    }

    #[test]
    fn by_name_ignores_directories() {
        let files = vec![entry("a/zeta.cs"), entry("z/alpha.cs")];
        assert_eq!(names(&order(files, SortMode::Abc)), vec!["alpha.cs", "zeta.cs"]);
    }

    #[test]
    fn by_name_is_ordinal() {
        let files = vec![entry("b.cs"), entry("B.cs"), entry("a.cs")];
        assert_eq!(names(&order(files, SortMode::Abc)), vec!["B.cs", "a.cs", "b.cs"]);
    }

    #[test]
    fn by_name_keeps_input_order_for_equal_names() {
        let files = vec![entry("src/x.cs"), entry("lib/x.cs")];
        let ordered = order(files, SortMode::Abc);
        let rels: Vec<_> = ordered.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(rels, vec!["src/x.cs", "lib/x.cs"]);
    }

    #[test]
    fn by_extension_groups_and_preserves_group_order() {
        let files = vec![entry("x.cpp"), entry("y.c"), entry("z.cpp")];
        assert_eq!(names(&order(files, SortMode::Type)), vec!["y.c", "x.cpp", "z.cpp"]);
    }

    #[test]
    fn by_extension_does_not_sort_within_group() {
        let files = vec![entry("z.ts"), entry("a.css"), entry("m.ts"), entry("b.ts")];
        assert_eq!(
            names(&order(files, SortMode::Type)),
            vec!["a.css", "z.ts", "m.ts", "b.ts"]
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(order(Vec::new(), SortMode::Type).is_empty());
    }
}
