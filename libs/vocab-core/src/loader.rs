//! Loading word lists into a [`Vocabulary`].
//!
//! # Format
//! ```text
//! # colours
//! geel = yellow
//! rood = red
//!
//! Nederland = Netherlands
//! ```
//!
//! One pair per line. Blank lines and lines starting with `#` are skipped.

use std::collections::HashSet;

use crate::error::{ParseError, Result};
use crate::vocabulary::Vocabulary;

/// Parse a plain-text word list.
pub fn parse_word_list(content: &str) -> Result<Vocabulary> {
    let mut vocab = Vocabulary::new();
    let mut seen = HashSet::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        match parse_line(line) {
            LineType::Empty | LineType::Comment => {}
            LineType::Pair(word, translation) => {
                let (word, translation) = validate_pair(word, translation, line_num)?;
                if !seen.insert(word) {
                    return Err(ParseError::DuplicateWord {
                        word: word.to_string(),
                        line: line_num,
                    });
                }
                vocab.insert(word, translation);
            }
            LineType::Invalid => return Err(ParseError::MissingSeparator { line: line_num }),
        }
    }

    tracing::debug!(entries = vocab.len(), "parsed word list");
    Ok(vocab)
}

impl Vocabulary {
    /// Parse a JSON object of word to translation.
    pub fn from_json(content: &str) -> Result<Self> {
        let vocab: Self = serde_json::from_str(content)?;
        tracing::debug!(entries = vocab.len(), "parsed JSON word list");
        Ok(vocab)
    }
}

enum LineType<'a> {
    Pair(&'a str, &'a str),
    Comment,
    Empty,
    Invalid,
}

fn parse_line(line: &str) -> LineType<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        LineType::Empty
    } else if trimmed.starts_with('#') {
        LineType::Comment
    } else if let Some((word, translation)) = trimmed.split_once('=') {
        LineType::Pair(word.trim(), translation.trim())
    } else {
        LineType::Invalid
    }
}

fn validate_pair<'a>(word: &'a str, translation: &'a str, line: usize) -> Result<(&'a str, &'a str)> {
    if word.is_empty() {
        return Err(ParseError::EmptyWord { line });
    }
    if translation.is_empty() {
        return Err(ParseError::EmptyTranslation { line });
    }
    Ok((word, translation))
}
