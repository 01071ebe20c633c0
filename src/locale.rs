use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// U+FEFF counts as whitespace, as it does for the editor's own counter.
static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x{FEFF}]+").unwrap());

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

// ---------------------------------------------------------------------------
// Word counter
// ---------------------------------------------------------------------------

pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(text.trim_matches(is_blank), " ").into_owned()
}

/// Count space-delimited tokens. Approximate for scripts that do not put
/// spaces between words.
pub fn count_words(text: &str) -> usize {
    let cleaned = normalize_whitespace(text);
    if cleaned.is_empty() {
        0
    } else {
        cleaned.split(' ').count()
    }
}

// ---------------------------------------------------------------------------
// Language hint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Auto,
    English,
    Persian,
}

impl Language {
    /// Unrecognized or empty tags fall back to [`Language::Auto`].
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" | "eng" => Language::English,
            "fa" | "fas" | "per" => Language::Persian,
            _ => Language::Auto,
        }
    }

    fn vocabularies(self) -> &'static [&'static Vocabulary] {
        match self {
            Language::Auto => &[&ENGLISH, &PERSIAN],
            Language::English => &[&ENGLISH],
            Language::Persian => &[&PERSIAN, &ENGLISH],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Language::Auto => "auto",
            Language::English => "en",
            Language::Persian => "fa",
        };
        f.write_str(tag)
    }
}

// ---------------------------------------------------------------------------
// Structural vocabulary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Introduction,
    Body,
    Conclusion,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Introduction, Role::Body, Role::Conclusion];

    pub fn label(self) -> &'static str {
        match self {
            Role::Introduction => "introduction",
            Role::Body => "body",
            Role::Conclusion => "conclusion",
        }
    }
}

struct Vocabulary {
    introduction: &'static [&'static str],
    body: &'static [&'static str],
    conclusion: &'static [&'static str],
}

impl Vocabulary {
    fn markers(&self, role: Role) -> &'static [&'static str] {
        match role {
            Role::Introduction => self.introduction,
            Role::Body => self.body,
            Role::Conclusion => self.conclusion,
        }
    }
}

const ENGLISH: Vocabulary = Vocabulary {
    introduction: &["intro"],
    body: &["body"],
    conclusion: &["conclusion"],
};

const PERSIAN: Vocabulary = Vocabulary {
    introduction: &["مقدمه"],
    body: &["متن"],
    conclusion: &["نتیجه"],
};

pub fn title_has_role(title: &str, role: Role, language: Language) -> bool {
    let lowered = title.to_lowercase();
    language
        .vocabularies()
        .iter()
        .flat_map(|vocab| vocab.markers(role))
        .any(|marker| lowered.contains(marker))
}
