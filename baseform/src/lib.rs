/*! Dictionary-driven base form reduction for text-analysis pipelines.

Rewrites each token of a token stream to its dictionary base form (lemma),
so that search and indexing can match regardless of inflection: German
"Autos" becomes "Auto", "gekostet" becomes "kosten". Tokens missing from the
dictionary pass through unchanged.

A [`LemmaDictionary`](dictionary::LemmaDictionary) is loaded once from a
plain-text word list and shared via [`Arc`](std::sync::Arc) by any number of
[`BaseformFilter`](filter::BaseformFilter) instances, one per token stream.

# Usage examples

```no_run
use std::sync::Arc;

use baseform::dictionary::{DictionaryConfig, LemmaDictionary};
use baseform::filter::BaseformFilter;
use baseform::tokenizer::TextTokenStream;

let dictionary = LemmaDictionary::open("de-lemma-utf8.txt", &DictionaryConfig::default())
    .expect("dictionary");
let dictionary = Arc::new(dictionary);

let stream = TextTokenStream::new("Das sind Autos, die Nudeln transportieren.");
let lemmas: Vec<String> = BaseformFilter::new(dictionary, stream)
    .map(|token| token.text.to_string())
    .collect();
```

Filters can also be configured by name from a JSON settings document, see
[`analysis::AnalysisRegistry`].
*/

pub mod analysis;
pub mod dictionary;
pub mod filter;
pub mod tokenizer;
pub mod vfs;
