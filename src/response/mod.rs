//! Response files: serialized `bundle` arguments and `@file` expansion.
//!
//! A response file holds one `--flag value` pair per line, switches included
//! (`--note true`). Lines starting with `#` and blank lines are ignored when
//! expanding.

use crate::domain::BundleError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix marking a command-line argument as a response file reference.
pub const RESPONSE_PREFIX: char = '@';

/// Values collected for a reusable `bundle` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseFile {
    pub language: String,
    pub output: String,
    pub note: bool,
    pub sort: String,
    pub remove_empty_lines: bool,
    pub author: String,
}

impl ResponseFile {
    /// Ordered `--flag value` lines. Empty text values are omitted; the two
    /// boolean flags are always present.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        push_text(&mut lines, "language", &self.language);
        push_text(&mut lines, "output", &self.output);
        lines.push(format!("--note {}", bool_token(self.note)));
        push_text(&mut lines, "sort", &self.sort);
        lines.push(format!("--remove-empty-lines {}", bool_token(self.remove_empty_lines)));
        push_text(&mut lines, "author", &self.author);
        lines
    }

    pub fn render(&self) -> String {
        let mut out = self.lines().join("\n");
        out.push('\n');
        out
    }

    pub fn write_to(&self, path: &Path) -> Result<(), BundleError> {
        fs::write(path, self.render())
            .map_err(|source| BundleError::ResponseFile { path: path.to_path_buf(), source })
    }
}

fn push_text(lines: &mut Vec<String>, flag: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        lines.push(format!("--{flag} {value}"));
    }
}

/// Token written for a boolean flag.
pub fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Flags that take no value on the command line but are stored with an
/// explicit `true`/`false` token.
const SWITCHES: &[&str] = &["--note", "-n", "--remove-empty-lines", "-e"];

/// Split one response-file line into arguments.
///
/// The flag ends at the first whitespace; everything after it, trimmed, is a
/// single value so names with spaces survive. A switch followed by `true`
/// becomes the bare switch and one followed by `false` is dropped.
pub fn parse_line(line: &str) -> Vec<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Vec::new();
    }
    let Some((flag, value)) = line.split_once(char::is_whitespace) else {
        return vec![line.to_string()];
    };
    let value = value.trim();
    if value.is_empty() {
        return vec![flag.to_string()];
    }
    if SWITCHES.contains(&flag) {
        match parse_bool_token(value) {
            Some(true) => return vec![flag.to_string()],
            Some(false) => return Vec::new(),
            None => {}
        }
    }
    vec![flag.to_string(), value.to_string()]
}

fn parse_bool_token(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case(bool_token(true)) {
        Some(true)
    } else if token.eq_ignore_ascii_case(bool_token(false)) {
        Some(false)
    } else {
        None
    }
}

/// Parse the contents of a response file into arguments.
pub fn parse_response(content: &str) -> Vec<String> {
    content.lines().flat_map(parse_line).collect()
}

/// Replace every `@path` argument with the arguments stored in that file.
///
/// The first argument (the program name) is never expanded. Expansion is not
/// recursive.
pub fn expand_args<I>(args: I) -> Result<Vec<OsString>, BundleError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut expanded = Vec::new();
    for (idx, arg) in args.into_iter().enumerate() {
        let reference = arg.to_str().and_then(|s| s.strip_prefix(RESPONSE_PREFIX));
        match reference {
            Some(path) if idx > 0 && !path.is_empty() => {
                let path = PathBuf::from(path);
                let content = fs::read_to_string(&path)
                    .map_err(|source| BundleError::ResponseFile { path: path.clone(), source })?;
                tracing::debug!(path = %path.display(), "expanding response file");
                expanded.extend(parse_response(&content).into_iter().map(OsString::from));
            }
            _ => expanded.push(arg),
        }
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn full_response_file_renders_every_line() {
        let rsp = ResponseFile {
            language: "csharp,js".into(),
            output: "out/bundle.txt".into(),
            note: true,
            sort: "type".into(),
            remove_empty_lines: false,
            author: "Ann Lee".into(),
        };
        insta::assert_snapshot!(rsp.lines().join("\n"), @r"
        --language csharp,js
        --output out/bundle.txt
        --note true
        --sort type
        --remove-empty-lines false
        --author Ann Lee
        ");
    }

    #[test]
    fn empty_values_are_omitted_but_flags_are_kept() {
        let rsp = ResponseFile { language: "all".into(), ..ResponseFile::default() };
        assert_eq!(rsp.lines(), vec!["--language all", "--note false", "--remove-empty-lines false"]);
    }

    #[test]
    fn parse_line_splits_flag_from_value() {
        assert_eq!(parse_line("--author Ann Lee"), vec!["--author", "Ann Lee"]);
        assert_eq!(parse_line("--sort   type "), vec!["--sort", "type"]);
        assert_eq!(parse_line("--note"), vec!["--note"]);
        assert!(parse_line("# comment").is_empty());
        assert!(parse_line("   ").is_empty());
    }

    #[test]
    fn switch_tokens_become_bare_flags() {
        assert_eq!(parse_line("  --note   true "), vec!["--note"]);
        assert_eq!(parse_line("--remove-empty-lines TRUE"), vec!["--remove-empty-lines"]);
        assert_eq!(parse_line("-n true"), vec!["-n"]);
        assert!(parse_line("--note false").is_empty());
        assert!(parse_line("-e False").is_empty());
        assert_eq!(parse_line("--note maybe"), vec!["--note", "maybe"]);
        assert_eq!(parse_line("--author true"), vec!["--author", "true"]);
    }

    #[test]
    fn rendered_file_parses_back_to_arguments() {
        let rsp = ResponseFile {
            language: "python".into(),
            note: true,
            author: "Ann".into(),
            ..ResponseFile::default()
        };
        assert_eq!(
            parse_response(&rsp.render()),
            vec!["--language", "python", "--note", "--author", "Ann"]
        );
    }

    #[test]
    fn expand_args_inlines_response_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("response.rsp");
        fs::write(&path, "--language csharp\n--sort type\n").unwrap();

        let reference = format!("@{}", path.display());
        let args = expand_args(os(&["files-bundler", "bundle", reference.as_str(), "-n"])).unwrap();
        assert_eq!(args, os(&["files-bundler", "bundle", "--language", "csharp", "--sort", "type", "-n"]));
    }

    #[test]
    fn expand_args_leaves_other_arguments_alone() {
        let args = expand_args(os(&["@prog", "bundle", "-a", "user@example.com", "@"])).unwrap();
        assert_eq!(args, os(&["@prog", "bundle", "-a", "user@example.com", "@"]));
    }

    #[test]
    fn expand_args_reports_missing_file() {
        let err = expand_args(os(&["files-bundler", "@does-not-exist.rsp"])).unwrap_err();
        assert!(matches!(err, BundleError::ResponseFile { .. }));
    }
}
