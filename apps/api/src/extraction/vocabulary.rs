//! Skill vocabulary and the text normalization used to match it.

use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Canonical skill and tool spellings recognised in résumés.
const SKILL_TOKENS: &[&str] = &[
    // languages
    "c",
    "c++",
    "c#",
    "python",
    "javascript",
    "sql",
    "kotlin",
    // frameworks / libraries
    "fastapi",
    "react",
    "flutter",
    "express",
    "node.js",
    // datastores / cloud
    "mongodb",
    "firebase",
    "aws",
    // tools
    "git",
    "github",
    "postman",
    "vs code",
    "docker",
    "faiss",
];

pub static SKILL_VOCABULARY: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new(SKILL_TOKENS));

/// Lowercases, spells out `&`, drops dots and turns hyphens into spaces.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace('&', "and")
        .replace('.', "")
        .replace('-', " ")
}

#[derive(Debug)]
struct Token {
    canonical: &'static str,
    normalized: String,
    single_char: bool,
}

/// A fixed list of tokens matched by substring against normalized text.
#[derive(Debug)]
pub struct Vocabulary {
    tokens: Vec<Token>,
}

impl Vocabulary {
    pub fn new(tokens: &[&'static str]) -> Self {
        Self {
            tokens: tokens
                .iter()
                .map(|&canonical| Token {
                    canonical,
                    normalized: normalize(canonical),
                    single_char: canonical.chars().count() == 1,
                })
                .collect(),
        }
    }

    /// Canonical tokens found in `text`, sorted and deduplicated.
    ///
    /// Single-character tokens only count as a space-delimited word so that
    /// `c` is not found inside every other word.
    pub fn find_in(&self, text: &str) -> BTreeSet<String> {
        let subject = normalize(text);
        let padded_subject = format!(" {subject} ");

        self.tokens
            .iter()
            .filter(|token| {
                if token.single_char {
                    padded_subject.contains(&format!(" {} ", token.normalized))
                } else {
                    subject.contains(&token.normalized)
                }
            })
            .map(|token| token.canonical.to_string())
            .collect()
    }
}

/// Skills named anywhere in a block of text.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    if text.trim().is_empty() {
        return BTreeSet::new();
    }
    SKILL_VOCABULARY.find_in(text)
}

/// Skills on a `Tech:` / `Technologies:` line; any other line yields nothing.
pub fn extract_tech_stack(line: &str) -> BTreeSet<String> {
    if !starts_with_tech(line) {
        return BTreeSet::new();
    }
    SKILL_VOCABULARY.find_in(line)
}

pub fn starts_with_tech(line: &str) -> bool {
    line.trim_start().to_lowercase().starts_with("tech")
}
