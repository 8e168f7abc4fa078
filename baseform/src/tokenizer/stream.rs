use unic_segment::WordBoundIndices;

use super::{is_word, Token, Tokenize};

/// Errors reported by token streams.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StreamError {
    /// The stream cannot seek back to its first token
    #[error("Token stream cannot be reset")]
    ResetUnsupported,
}

/// A single-pass, pull-driven sequence of tokens.
///
/// Once `next_token` returns `None`, or after `close`, the stream stays
/// exhausted until a successful `reset`.
pub trait TokenStream {
    fn next_token(&mut self) -> Option<Token>;

    /// Seeks back to the first token so the same sequence is replayed.
    fn reset(&mut self) -> Result<(), StreamError> {
        Err(StreamError::ResetUnsupported)
    }

    fn close(&mut self);
}

impl<S: TokenStream + ?Sized> TokenStream for Box<S> {
    #[inline]
    fn next_token(&mut self) -> Option<Token> {
        (**self).next_token()
    }

    fn reset(&mut self) -> Result<(), StreamError> {
        (**self).reset()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Replays a fixed list of tokens.
#[derive(Clone, Debug, Default)]
pub struct VecTokenStream {
    tokens: Vec<Token>,
    cursor: usize,
    closed: bool,
}

impl VecTokenStream {
    pub fn new(tokens: Vec<Token>) -> VecTokenStream {
        VecTokenStream {
            tokens,
            cursor: 0,
            closed: false,
        }
    }

    /// Tokens for each word with made-up offsets, as if the words were
    /// separated by single spaces.
    pub fn from_words<I, S>(words: I) -> VecTokenStream
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut offset = 0;
        let tokens = words
            .into_iter()
            .map(|word| {
                let word = word.as_ref();
                let token = Token::new(word, offset, offset + word.len());
                offset += word.len() + 1;
                token
            })
            .collect();

        VecTokenStream::new(tokens)
    }
}

impl TokenStream for VecTokenStream {
    fn next_token(&mut self) -> Option<Token> {
        if self.closed {
            return None;
        }

        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn reset(&mut self) -> Result<(), StreamError> {
        self.cursor = 0;
        self.closed = false;
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Word tokens of a borrowed text, split on Unicode word boundaries.
///
/// Segments without any alphanumeric character (spaces, punctuation) are
/// not emitted.
pub struct TextTokenStream<'a> {
    text: &'a str,
    segments: WordBoundIndices<'a>,
    closed: bool,
}

impl<'a> TextTokenStream<'a> {
    pub fn new(text: &'a str) -> TextTokenStream<'a> {
        TextTokenStream {
            text,
            segments: text.word_bound_indices(),
            closed: false,
        }
    }
}

impl<'a> std::fmt::Debug for TextTokenStream<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextTokenStream")
            .field("text", &self.text)
            .field("closed", &self.closed)
            .finish()
    }
}

impl<'a> TokenStream for TextTokenStream<'a> {
    fn next_token(&mut self) -> Option<Token> {
        if self.closed {
            return None;
        }

        self.segments
            .find(|(_, segment)| is_word(segment))
            .map(|(start, segment)| Token::new(segment, start, start + segment.len()))
    }

    fn reset(&mut self) -> Result<(), StreamError> {
        self.segments = self.text.word_bound_indices();
        self.closed = false;
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
