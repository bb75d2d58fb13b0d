use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Error, Result};

/// Tokenization policy
/// Selects how a document's raw text is split into tokens.
///
/// Tokenization never alters case. Lowercasing and other normalization
/// belong to the caller as a pre-processing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenPolicy {
    /// Split on runs of whitespace
    Whitespace,
    /// Split on matches of a regular expression
    /// Fragments between matches become tokens, empty fragments are dropped
    Regex(String),
    /// Unicode word boundaries, keeping segments with at least one
    /// alphanumeric scalar
    Word,
    /// Word n-grams over whitespace words
    /// All sizes in `n_min..=n` are produced, smallest size first,
    /// words joined by a single space
    Ngram { n: usize, n_min: usize },
    /// Every Unicode scalar value as one token
    Character,
    /// Character shingles over the whole text, no word boundary awareness
    /// All sizes in `n_min..=n` are produced, smallest size first
    CharShingle { n: usize, n_min: usize },
}

impl TokenPolicy {
    /// Parse a textual policy spec
    ///
    /// Accepted forms:
    /// * `whitespace`
    /// * `regex:PATTERN`
    /// * `word`
    /// * `ngram:N` or `ngram:N:MIN`
    /// * `char`
    /// * `shingle:N` or `shingle:N:MIN`
    ///
    /// # Returns
    /// * `TokenPolicy` - the parsed policy
    /// * `Error::InvalidPolicy` - on unknown names or bad window sizes
    pub fn parse(spec: &str) -> Result<Self> {
        let (head, rest) = match spec.split_once(':') {
            Some((head, rest)) => (head, Some(rest)),
            None => (spec, None),
        };
        match (head, rest) {
            ("whitespace", None) => Ok(TokenPolicy::Whitespace),
            ("word", None) => Ok(TokenPolicy::Word),
            ("char", None) | ("character", None) => Ok(TokenPolicy::Character),
            ("regex", Some(pattern)) if !pattern.is_empty() => {
                // compile once here so a bad pattern fails at parse time
                Regex::new(pattern)
                    .map_err(|e| Error::InvalidPolicy(format!("bad pattern {pattern:?}: {e}")))?;
                Ok(TokenPolicy::Regex(pattern.to_string()))
            }
            ("ngram", Some(args)) => {
                let (n, n_min) = parse_window(spec, args)?;
                Ok(TokenPolicy::Ngram { n, n_min })
            }
            ("shingle", Some(args)) => {
                let (n, n_min) = parse_window(spec, args)?;
                Ok(TokenPolicy::CharShingle { n, n_min })
            }
            _ => Err(Error::InvalidPolicy(spec.to_string())),
        }
    }
}

/// parse "N" or "N:MIN" window args
fn parse_window(spec: &str, args: &str) -> Result<(usize, usize)> {
    let (n_str, min_str) = match args.split_once(':') {
        Some((n, min)) => (n, Some(min)),
        None => (args, None),
    };
    let n: usize = n_str
        .parse()
        .map_err(|_| Error::InvalidPolicy(spec.to_string()))?;
    let n_min: usize = match min_str {
        Some(s) => s
            .parse()
            .map_err(|_| Error::InvalidPolicy(spec.to_string()))?,
        None => n,
    };
    check_window(n, n_min)?;
    Ok((n, n_min))
}

/// window sizes must satisfy `1 <= n_min <= n`
fn check_window(n: usize, n_min: usize) -> Result<()> {
    if n_min == 0 || n == 0 || n_min > n {
        return Err(Error::InvalidPolicy(format!(
            "window sizes must satisfy 1 <= n_min <= n, got n={n} n_min={n_min}"
        )));
    }
    Ok(())
}

/// Split raw text into an ordered token sequence under the given policy.
///
/// Pure function of `(text, policy)`: identical inputs always produce the
/// identical sequence. Order within the text is preserved and duplicate
/// tokens are kept. Empty text yields an empty sequence for every policy.
pub fn tokenize(text: &str, policy: &TokenPolicy) -> Result<Vec<String>> {
    match policy {
        TokenPolicy::Whitespace => Ok(split_whitespace(text)),
        TokenPolicy::Regex(pattern) => split_regex(text, pattern),
        TokenPolicy::Word => Ok(split_words(text)),
        TokenPolicy::Ngram { n, n_min } => {
            check_window(*n, *n_min)?;
            Ok(word_ngrams(text, *n, *n_min))
        }
        TokenPolicy::Character => Ok(text.chars().map(String::from).collect()),
        TokenPolicy::CharShingle { n, n_min } => {
            check_window(*n, *n_min)?;
            Ok(char_shingles(text, *n, *n_min))
        }
    }
}

#[inline]
fn split_whitespace(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

fn split_regex(text: &str, pattern: &str) -> Result<Vec<String>> {
    let re = Regex::new(pattern)
        .map_err(|e| Error::InvalidPolicy(format!("bad pattern {pattern:?}: {e}")))?;
    Ok(re
        .split(text)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect())
}

fn split_words(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|segment| segment.chars().any(|c| c.is_alphanumeric()))
        .map(str::to_string)
        .collect()
}

fn word_ngrams(text: &str, n: usize, n_min: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut tokens = Vec::new();
    for size in n_min..=n {
        for window in words.windows(size) {
            tokens.push(window.join(" "));
        }
    }
    tokens
}

fn char_shingles(text: &str, n: usize, n_min: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    for size in n_min..=n {
        for window in chars.windows(size) {
            tokens.push(window.iter().collect());
        }
    }
    tokens
}
