//! The base form token filter.
use std::sync::Arc;

use crate::dictionary::LemmaDictionary;
use crate::tokenizer::{StreamError, Token, TokenStream};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Open,
    Closed,
}

/// Rewrites each token of an upstream stream to its base form.
///
/// Exactly one token is emitted per upstream token, in upstream order.
/// Tokens without a dictionary entry, and keyword tokens, are passed
/// through unchanged. When a surface form has several base forms the first
/// listed one is used.
#[derive(Debug)]
pub struct BaseformFilter<S> {
    dictionary: Arc<LemmaDictionary>,
    input: S,
    state: StreamState,
}

impl<S: TokenStream> BaseformFilter<S> {
    pub fn new(dictionary: Arc<LemmaDictionary>, input: S) -> BaseformFilter<S> {
        BaseformFilter {
            dictionary,
            input,
            state: StreamState::Open,
        }
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn dictionary(&self) -> &LemmaDictionary {
        &self.dictionary
    }

    /// The base form of a single token.
    pub fn rewrite(&self, token: Token) -> Token {
        if token.keyword {
            return token;
        }

        let lemma = self
            .dictionary
            .lookup(token.text())
            .and_then(|candidates| candidates.first());

        match lemma {
            Some(lemma) if lemma.as_str() != token.text() => token.with_text(lemma.clone()),
            _ => token,
        }
    }
}

impl<S: TokenStream> TokenStream for BaseformFilter<S> {
    fn next_token(&mut self) -> Option<Token> {
        if self.state == StreamState::Closed {
            return None;
        }

        match self.input.next_token() {
            Some(token) => Some(self.rewrite(token)),
            None => {
                self.state = StreamState::Closed;
                None
            }
        }
    }

    fn reset(&mut self) -> Result<(), StreamError> {
        self.input.reset()?;
        self.state = StreamState::Open;
        Ok(())
    }

    fn close(&mut self) {
        self.input.close();
        self.state = StreamState::Closed;
    }
}

impl<S: TokenStream> Iterator for BaseformFilter<S> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Creates [`BaseformFilter`]s that share one dictionary.
#[derive(Debug, Clone)]
pub struct BaseformFilterFactory {
    dictionary: Arc<LemmaDictionary>,
}

impl BaseformFilterFactory {
    pub fn new(dictionary: Arc<LemmaDictionary>) -> BaseformFilterFactory {
        BaseformFilterFactory { dictionary }
    }

    pub fn create<S: TokenStream>(&self, input: S) -> BaseformFilter<S> {
        BaseformFilter::new(Arc::clone(&self.dictionary), input)
    }

    pub fn dictionary(&self) -> &Arc<LemmaDictionary> {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::LemmaDictionary;
    use crate::tokenizer::VecTokenStream;

    fn dictionary() -> Arc<LemmaDictionary> {
        let dict: LemmaDictionary = vec![
            ("Autos", "Auto"),
            ("die", "der"),
            ("Nudeln", "Nudel"),
            ("transportieren", "transportieren"),
            ("Sucht", "Sucht"),
            ("Sucht", "suchen"),
        ]
        .into_iter()
        .collect();
        Arc::new(dict)
    }

    fn texts<I: Iterator<Item = Token>>(tokens: I) -> Vec<String> {
        tokens.map(|t| t.text.to_string()).collect()
    }

    #[test]
    fn rewrites_known_and_passes_unknown() {
        let words = ["Das", "sind", "Autos", "die", "Nudeln", "transportieren"];
        let filter = BaseformFilter::new(dictionary(), VecTokenStream::from_words(words));

        assert_eq!(
            texts(filter),
            vec!["Das", "sind", "Auto", "der", "Nudel", "transportieren"]
        );
    }

    #[test]
    fn keeps_offsets_and_increments() {
        let input = vec![
            Token::new("Autos", 10, 15).with_position_increment(3),
            Token::new("Bahn", 16, 20),
        ];
        let out: Vec<Token> =
            BaseformFilter::new(dictionary(), VecTokenStream::new(input.clone())).collect();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text(), "Auto");
        assert_eq!((out[0].start, out[0].end), (10, 15));
        assert_eq!(out[0].position_increment, 3);
        assert_eq!(out[1], input[1]);
    }

    #[test]
    fn keyword_tokens_are_left_alone() {
        let input = vec![Token::new("Autos", 0, 5).with_keyword(true)];
        let out: Vec<Token> = BaseformFilter::new(dictionary(), VecTokenStream::new(input)).collect();
        assert_eq!(out[0].text(), "Autos");
    }

    #[test]
    fn first_candidate_wins() {
        let filter = BaseformFilter::new(dictionary(), VecTokenStream::from_words(["Sucht"]));
        assert_eq!(texts(filter), vec!["Sucht"]);
    }

    #[test]
    fn closes_on_exhaustion_and_reopens_on_reset() {
        let mut filter =
            BaseformFilter::new(dictionary(), VecTokenStream::from_words(["Autos", "die"]));

        let first: Vec<Token> = filter.by_ref().collect();
        assert_eq!(filter.state(), StreamState::Closed);
        assert!(filter.next_token().is_none());

        filter.reset().unwrap();
        assert_eq!(filter.state(), StreamState::Open);
        let second: Vec<Token> = filter.by_ref().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn close_stops_emitting() {
        let mut filter =
            BaseformFilter::new(dictionary(), VecTokenStream::from_words(["Autos", "die"]));
        assert!(filter.next_token().is_some());

        filter.close();
        assert_eq!(filter.state(), StreamState::Closed);
        assert!(filter.next_token().is_none());
    }

    #[test]
    fn factory_shares_dictionary() {
        let dict = dictionary();
        let factory = BaseformFilterFactory::new(Arc::clone(&dict));

        let a = factory.create(VecTokenStream::from_words(["Autos"]));
        let b = factory.create(VecTokenStream::from_words(["Nudeln"]));

        assert!(std::ptr::eq(a.dictionary(), b.dictionary()));
        assert_eq!(Arc::strong_count(&dict), 4);
    }
}
