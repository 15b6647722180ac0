//! Numeric-run tokenization
//!
//! Normalized text is cut around every maximal run of an optional minus sign
//! followed by digits and/or decimal points. The result always alternates
//! text, number, text, ... and starts and ends with a (possibly empty) text
//! token:
//!
//!     "v1.2-rc"  -> ["v", "1.2", "-rc"]
//!     "9"        -> ["", "9", ""]
//!     "-1-2"     -> ["", "-1", "", "-2", ""]
//!
//! Concatenating the tokens gives back the input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

static NUMERIC_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?[0-9.]+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Text,
    Number,
}

/// A slice of normalized text, tagged with its run kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Token { kind, text }
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }
}

/// Byte range of one token within the text it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    pub kind: TokenKind,
    pub range: Range<usize>,
}

pub(crate) fn spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for run in NUMERIC_RUN.find_iter(text) {
        spans.push(Span {
            kind: TokenKind::Text,
            range: cursor..run.start(),
        });
        spans.push(Span {
            kind: TokenKind::Number,
            range: run.range(),
        });
        cursor = run.end();
    }
    spans.push(Span {
        kind: TokenKind::Text,
        range: cursor..text.len(),
    });
    spans
}

/// Split text into alternating text and numeric-run tokens.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    spans(text)
        .into_iter()
        .map(|span| Token::new(span.kind, &text[span.range]))
        .collect()
}
