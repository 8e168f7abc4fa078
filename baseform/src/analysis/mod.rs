//! Named filter configuration.
//!
//! Filters are declared in a JSON settings document and resolved by name:
//!
//! ```json
//! {
//!     "filter": {
//!         "baseform": {
//!             "type": "baseform",
//!             "dictionary": "de-lemma-utf8.txt",
//!             "delimiter": "\t"
//!         }
//!     }
//! }
//! ```
//!
//! Every dictionary is loaded while the registry is built, so a missing
//! word list fails setup before any token is filtered.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::dictionary::{DictionaryConfig, LemmaDictionary};
use crate::filter::BaseformFilterFactory;
use crate::vfs::Filesystem;

pub mod error;

pub use self::error::AnalysisError;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default)]
    pub filter: HashMap<String, FilterSettings>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterSettings {
    Baseform(BaseformSettings),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaseformSettings {
    /// Location of the word list
    pub dictionary: PathBuf,
    #[serde(default)]
    pub delimiter: Option<char>,
}

impl BaseformSettings {
    pub fn dictionary_config(&self) -> DictionaryConfig {
        DictionaryConfig {
            delimiter: self.delimiter,
        }
    }
}

impl std::str::FromStr for AnalysisSettings {
    type Err = AnalysisError;

    fn from_str(string: &str) -> Result<AnalysisSettings, AnalysisError> {
        Ok(serde_json::from_str(string)?)
    }
}

impl AnalysisSettings {
    /// Reads a settings file. Relative dictionary paths are resolved against
    /// the directory containing the file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnalysisSettings, AnalysisError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::Io(path.to_path_buf(), e))?;
        let mut settings: AnalysisSettings = data.parse()?;

        if let Some(base) = path.parent() {
            settings.resolve_paths(base);
        }

        Ok(settings)
    }

    pub fn resolve_paths(&mut self, base: &Path) {
        for filter in self.filter.values_mut() {
            match filter {
                FilterSettings::Baseform(s) if s.dictionary.is_relative() => {
                    s.dictionary = base.join(&s.dictionary);
                }
                FilterSettings::Baseform(_) => {}
            }
        }
    }
}

/// Filter factories by name, ready to wrap token streams.
#[derive(Debug, Default)]
pub struct AnalysisRegistry {
    filters: HashMap<String, BaseformFilterFactory>,
}

impl AnalysisRegistry {
    /// Loads every dictionary named in `settings`. Filters that name the same
    /// word list with the same delimiter share one dictionary.
    ///
    /// Filters are set up in name order, so the first failing filter by name
    /// is the one reported.
    pub fn from_settings<FS: Filesystem>(
        fs: &FS,
        settings: &AnalysisSettings,
    ) -> Result<AnalysisRegistry, AnalysisError> {
        let mut loaded: HashMap<(PathBuf, Option<char>), Arc<LemmaDictionary>> = HashMap::new();
        let mut filters = HashMap::with_capacity(settings.filter.len());

        let mut names: Vec<&String> = settings.filter.keys().collect();
        names.sort();

        for name in names {
            let filter = &settings.filter[name];
            let factory = match filter {
                FilterSettings::Baseform(s) => {
                    let key = (s.dictionary.clone(), s.delimiter);

                    let dictionary = match loaded.get(&key) {
                        Some(dictionary) => Arc::clone(dictionary),
                        None => {
                            let dictionary =
                                LemmaDictionary::from_fs(fs, &s.dictionary, &s.dictionary_config())
                                    .map_err(|e| AnalysisError::Load(name.clone(), e))?;
                            let dictionary = Arc::new(dictionary);
                            loaded.insert(key, Arc::clone(&dictionary));
                            dictionary
                        }
                    };

                    BaseformFilterFactory::new(dictionary)
                }
            };

            log::debug!("registered token filter '{}'", name);
            filters.insert(name.clone(), factory);
        }

        Ok(AnalysisRegistry { filters })
    }

    pub fn token_filter(&self, name: &str) -> Option<&BaseformFilterFactory> {
        self.filters.get(name)
    }

    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }
}
