//! Text normalization shared by alias building and query matching.
//!
//! Every character is canonically decomposed, combining marks are dropped,
//! the rest is lower-cased and folded to ASCII. Anything that is not
//! `[a-z0-9]` afterwards separates tokens.

use regex::RegexBuilder;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Trailing law-title suffixes removed by [`stem`], longest first.
const LAW_SUFFIXES: [&str; 6] = ["slovens", "lovens", "sloven", "loven", "slov", "lov"];

const MIN_STEM_LEN: usize = 5;

/// A normalized token and the byte range of the raw text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// The raw slice of `source` that produced this token.
    pub fn surface<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Letters without a canonical decomposition that still carry a base letter.
fn fold_letter(c: char) -> Option<&'static str> {
    match c {
        'ø' => Some("o"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ß' => Some("ss"),
        'ð' => Some("d"),
        'þ' => Some("th"),
        'đ' => Some("d"),
        'ł' => Some("l"),
        'ı' => Some("i"),
        _ => None,
    }
}

enum Piece {
    Text(String),
    Mark,
    Separator,
}

fn fold_char(c: char) -> Piece {
    if is_combining_mark(c) {
        return Piece::Mark;
    }

    let mut decomposed = Vec::with_capacity(2);
    decompose_canonical(c, |d| decomposed.push(d));

    let mut out = String::new();
    for d in decomposed {
        for lower in d.to_lowercase() {
            if is_combining_mark(lower) {
                continue;
            }
            if let Some(folded) = fold_letter(lower) {
                out.push_str(folded);
            } else if lower.is_ascii_alphanumeric() {
                out.push(lower);
            } else {
                return if out.is_empty() {
                    Piece::Separator
                } else {
                    Piece::Text(out)
                };
            }
        }
    }

    if out.is_empty() {
        Piece::Separator
    } else {
        Piece::Text(out)
    }
}

/// Splits `text` into normalized tokens, keeping raw byte spans.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Option<Token> = None;

    for (offset, c) in text.char_indices() {
        match fold_char(c) {
            Piece::Text(folded) => {
                let token = current.get_or_insert_with(|| Token {
                    text: String::new(),
                    start: offset,
                    end: offset,
                });
                token.text.push_str(&folded);
                token.end = offset + c.len_utf8();
            }
            Piece::Mark => {
                // A combining mark belongs to the word it decorates.
                if let Some(token) = current.as_mut() {
                    token.end = offset + c.len_utf8();
                }
            }
            Piece::Separator => {
                if let Some(token) = current.take() {
                    tokens.push(token);
                }
            }
        }
    }

    if let Some(token) = current {
        tokens.push(token);
    }

    tokens
}

/// Lower-case ASCII letters, digits and single spaces; total over all input.
pub fn normalize(text: &str) -> String {
    tokenize(text)
        .into_iter()
        .map(|token| token.text)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes every case-insensitive whole-word occurrence of `word` and
/// collapses whitespace. Word boundaries only apply at ends of `word` that
/// are alphanumeric, so values like `Fredning mv.` still match. Returns
/// `None` when nothing was removed.
pub fn remove_whole_word(text: &str, word: &str) -> Option<String> {
    let word = word.trim();
    let first = word.chars().next()?;
    let last = word.chars().last()?;

    let pattern = format!(
        "{}{}{}",
        if first.is_alphanumeric() { r"\b" } else { "" },
        regex::escape(word),
        if last.is_alphanumeric() { r"\b" } else { "" },
    );
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()?;

    let stripped = re.replace_all(text, " ");
    if stripped == text {
        return None;
    }
    Some(collapse_whitespace(&stripped))
}

/// Strips one trailing law suffix from a normalized alias
/// (`miljobeskyttelsesloven` -> `miljobeskyttelse`). Stems shorter than five
/// letters are not returned.
pub fn stem(alias: &str) -> Option<&str> {
    for suffix in LAW_SUFFIXES {
        if let Some(stem) = alias.strip_suffix(suffix) {
            return (stem.len() >= MIN_STEM_LEN).then_some(stem);
        }
    }
    None
}
