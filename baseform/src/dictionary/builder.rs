use hashbrown::HashMap;
use smol_str::SmolStr;

use super::{LemmaDictionary, LoadReport};

/// Accumulates (surface, base) pairs into a [`LemmaDictionary`].
///
/// Repeated pairs are dropped; distinct base forms for the same surface form
/// are kept in insertion order.
#[derive(Debug, Default)]
pub struct LemmaDictionaryBuilder {
    entries: HashMap<SmolStr, Vec<SmolStr>>,
    pub(crate) report: LoadReport,
}

impl LemmaDictionaryBuilder {
    pub fn new() -> LemmaDictionaryBuilder {
        LemmaDictionaryBuilder::default()
    }

    /// Returns `true` if the pair was added, `false` if it was a duplicate
    /// or had an empty field.
    ///
    /// Empty fields are ignored without touching the report: `malformed`
    /// only counts lines of a loaded word list.
    pub fn insert(&mut self, surface: &str, base: &str) -> bool {
        if surface.is_empty() || base.is_empty() {
            return false;
        }

        let candidates = self.entries.entry(SmolStr::new(surface)).or_default();

        if candidates.iter().any(|c| c.as_str() == base) {
            self.report.duplicates += 1;
            return false;
        }

        candidates.push(SmolStr::new(base));
        self.report.pairs += 1;
        true
    }

    pub fn build(mut self) -> LemmaDictionary {
        self.entries.shrink_to_fit();

        LemmaDictionary {
            entries: self.entries,
            report: self.report,
        }
    }
}

impl<'a> Extend<(&'a str, &'a str)> for LemmaDictionaryBuilder {
    fn extend<I: IntoIterator<Item = (&'a str, &'a str)>>(&mut self, iter: I) {
        for (surface, base) in iter {
            self.insert(surface, base);
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for LemmaDictionary {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> LemmaDictionary {
        let mut builder = LemmaDictionaryBuilder::new();
        builder.extend(iter);
        builder.build()
    }
}
