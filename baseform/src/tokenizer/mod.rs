//! Tokens and token streams.
//!
//! Word segmentation itself follows Unicode word boundaries via
//! `unic-segment`; [`TextTokenStream`] wraps it as an upstream source for
//! filters.
use unic_segment::WordBoundIndices;

mod stream;
mod token;

pub use self::stream::{StreamError, TextTokenStream, TokenStream, VecTokenStream};
pub use self::token::Token;

pub trait Tokenize {
    fn word_bound_indices(&self) -> WordBoundIndices;
}

impl Tokenize for str {
    fn word_bound_indices(&self) -> WordBoundIndices {
        WordBoundIndices::new(self)
    }
}

#[inline(always)]
pub(crate) fn is_word(segment: &str) -> bool {
    segment.chars().any(|ch| ch.is_alphanumeric())
}
