//! Language registry: fixed identifier → extension table and list validation.

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use super::error::BundleError;

/// Meta-identifier selecting every supported language.
pub const ALL_IDENTIFIER: &str = "all";

/// A supported source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    CSharp,
    C,
    Cpp,
    Java,
    Js,
    Html,
    Css,
    Scss,
    Ts,
    Sql,
    Python,
}

/// Static registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSpec {
    pub language: Language,
    pub identifier: &'static str,
    pub extension: &'static str,
}

/// Every concrete language, in registry order.
pub const LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec { language: Language::CSharp, identifier: "csharp", extension: ".cs" },
    LanguageSpec { language: Language::C, identifier: "c", extension: ".c" },
    LanguageSpec { language: Language::Cpp, identifier: "cpp", extension: ".cpp" },
    LanguageSpec { language: Language::Java, identifier: "java", extension: ".java" },
    LanguageSpec { language: Language::Js, identifier: "js", extension: ".js" },
    LanguageSpec { language: Language::Html, identifier: "html", extension: ".html" },
    LanguageSpec { language: Language::Css, identifier: "css", extension: ".css" },
    LanguageSpec { language: Language::Scss, identifier: "scss", extension: ".scss" },
    LanguageSpec { language: Language::Ts, identifier: "ts", extension: ".ts" },
    LanguageSpec { language: Language::Sql, identifier: "sql", extension: ".sql" },
    LanguageSpec { language: Language::Python, identifier: "python", extension: ".py" },
];

static BY_IDENTIFIER: Lazy<HashMap<&'static str, Language>> =
    Lazy::new(|| LANGUAGES.iter().map(|spec| (spec.identifier, spec.language)).collect());

impl Language {
    fn spec(self) -> &'static LanguageSpec {
        // LANGUAGES is declared in enum order.
        &LANGUAGES[self as usize]
    }

    pub fn identifier(self) -> &'static str {
        self.spec().identifier
    }

    /// File extension including the leading dot.
    pub fn extension(self) -> &'static str {
        self.spec().extension
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        BY_IDENTIFIER.get(identifier.trim().to_ascii_lowercase().as_str()).copied()
    }

    pub fn all() -> impl Iterator<Item = Language> {
        LANGUAGES.iter().map(|spec| spec.language)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Comma-separated list of concrete identifiers, used in help and error text.
pub fn supported_identifiers() -> String {
    LANGUAGES.iter().map(|spec| spec.identifier).collect::<Vec<_>>().join(", ")
}

/// Validated language choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSelection {
    All,
    Only(BTreeSet<Language>),
}

impl LanguageSelection {
    /// Concrete languages covered by this selection (never includes `all`).
    pub fn languages(&self) -> BTreeSet<Language> {
        match self {
            LanguageSelection::All => Language::all().collect(),
            LanguageSelection::Only(set) => set.clone(),
        }
    }

    /// Requested extensions, each with a leading dot.
    pub fn extensions(&self) -> BTreeSet<&'static str> {
        self.languages().into_iter().map(Language::extension).collect()
    }
}

impl fmt::Display for LanguageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageSelection::All => f.write_str(ALL_IDENTIFIER),
            LanguageSelection::Only(set) => {
                let ids = set.iter().map(|lang| lang.identifier()).collect::<Vec<_>>();
                f.write_str(&ids.join(","))
            }
        }
    }
}

/// Validate a user-supplied language list such as `"csharp, js"` or `"ALL"`.
///
/// Tokens are trimmed and matched case-insensitively. Every unknown token is
/// reported, not just the first one.
pub fn validate(input: &str) -> Result<LanguageSelection, BundleError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case(ALL_IDENTIFIER) {
        return Ok(LanguageSelection::All);
    }

    let tokens: Vec<String> = trimmed.split(',').map(|t| t.trim().to_ascii_lowercase()).collect();
    if tokens.iter().all(|t| t.is_empty()) {
        return Err(BundleError::InvalidLanguage { tokens: Vec::new() });
    }

    let mut selected = BTreeSet::new();
    let mut invalid = Vec::new();
    let mut wants_all = false;
    for token in tokens {
        if token == ALL_IDENTIFIER {
            wants_all = true;
            continue;
        }
        match Language::from_identifier(&token) {
            Some(language) => {
                selected.insert(language);
            }
            None => invalid.push(token),
        }
    }

    if !invalid.is_empty() {
        return Err(BundleError::InvalidLanguage { tokens: invalid });
    }
    if wants_all {
        return Ok(LanguageSelection::All);
    }
    Ok(LanguageSelection::Only(selected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_matches_enum_order() {
        for (idx, spec) in LANGUAGES.iter().enumerate() {
            assert_eq!(spec.language as usize, idx, "{} out of order", spec.identifier);
        }
    }

    #[test]
    fn all_expands_to_every_concrete_language() {
        let selection = validate("ALL").unwrap();
        assert_eq!(selection, LanguageSelection::All);
        let langs = selection.languages();
        assert_eq!(langs.len(), LANGUAGES.len());
        assert!(langs.iter().all(|l| l.identifier() != ALL_IDENTIFIER));
    }

    #[test]
    fn list_is_trimmed_lowercased_and_deduplicated() {
        let selection = validate(" CSharp , js,csharp ").unwrap();
        let langs: Vec<_> = selection.languages().into_iter().collect();
        assert_eq!(langs, vec![Language::CSharp, Language::Js]);
        assert_eq!(selection.to_string(), "csharp,js");
    }

    #[test]
    fn each_single_identifier_round_trips() {
        for spec in LANGUAGES {
            let selection = validate(spec.identifier).unwrap();
            assert_eq!(selection.extensions().into_iter().collect::<Vec<_>>(), vec![spec.extension]);
        }
    }

    #[test]
    fn unknown_token_rejected_in_any_position() {
        for input in ["rust,csharp,js", "csharp,rust,js", "csharp,js,rust"] {
            match validate(input) {
                Err(BundleError::InvalidLanguage { tokens }) => assert_eq!(tokens, vec!["rust"]),
                other => panic!("expected InvalidLanguage for {input}, got {other:?}"),
            }
        }
    }

    #[test]
    fn all_unknown_tokens_are_reported() {
        let err = validate("go,csharp,Kotlin").unwrap_err();
        assert!(matches!(
            err,
            BundleError::InvalidLanguage { ref tokens } if tokens == &["go".to_string(), "kotlin".to_string()]
        ));
        assert!(err.to_string().contains("'go', 'kotlin'"));
    }

    #[test]
    fn empty_input_is_invalid() {
        for input in ["", "   ", ",", " , ,"] {
            assert!(matches!(validate(input), Err(BundleError::InvalidLanguage { .. })));
        }
    }

    #[test]
    fn empty_token_inside_list_is_invalid() {
        assert!(validate("csharp,,js").is_err());
    }

    #[test]
    fn all_inside_list_selects_everything() {
        assert_eq!(validate("csharp,all").unwrap(), LanguageSelection::All);
    }

    #[test]
    fn python_maps_to_py_extension() {
        assert_eq!(Language::Python.extension(), ".py");
    }
}
