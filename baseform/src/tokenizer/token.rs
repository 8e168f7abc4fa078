use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A unit of text with its position in the source
pub struct Token {
    /// the token text
    pub text: SmolStr,
    /// byte offset of the first character in the source text
    pub start: usize,
    /// byte offset one past the last character in the source text
    pub end: usize,
    /// distance in positions from the previous token
    pub position_increment: u32,
    /// keyword tokens are protected from rewriting by filters
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub keyword: bool,
}

impl Token {
    pub fn new<S: Into<SmolStr>>(text: S, start: usize, end: usize) -> Token {
        Token {
            text: text.into(),
            start,
            end,
            position_increment: 1,
            keyword: false,
        }
    }

    pub fn with_position_increment(mut self, position_increment: u32) -> Token {
        self.position_increment = position_increment;
        self
    }

    pub fn with_keyword(mut self, keyword: bool) -> Token {
        self.keyword = keyword;
        self
    }

    /// Replaces the text, keeping offsets and flags as they were.
    pub fn with_text<S: Into<SmolStr>>(mut self, text: S) -> Token {
        self.text = text.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
