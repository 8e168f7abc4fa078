//! Surface form to base form lookup.
//!
//! A word list holds one `<surface> <base>` pair per line. A surface form
//! may appear on several lines when it has more than one plausible base
//! form; lookups return the candidates in file order.
//!
//! ```text
//! Autos	Auto
//! gekostet	kosten
//! Sucht	Sucht
//! Sucht	suchen
//! ```
use std::fmt;
use std::io::Read;
use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use self::parse::Line;
use crate::vfs::{File, Filesystem, Fs};

mod builder;
pub mod error;
mod parse;

pub use self::builder::LemmaDictionaryBuilder;
pub use self::error::LoadError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Field separator. `None` splits on any run of whitespace.
    pub delimiter: Option<char>,
}

impl DictionaryConfig {
    pub const fn default() -> DictionaryConfig {
        DictionaryConfig { delimiter: None }
    }

    pub const fn with_delimiter(delimiter: char) -> DictionaryConfig {
        DictionaryConfig {
            delimiter: Some(delimiter),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig::default()
    }
}

/// Counters collected while building a dictionary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// lines read from the resource, blank ones included
    pub lines: usize,
    /// distinct (surface, base) pairs stored
    pub pairs: usize,
    /// repeated (surface, base) pairs that were dropped
    pub duplicates: usize,
    /// lines skipped for not having exactly two fields
    pub malformed: usize,
}

/// Immutable map from surface forms to their base forms.
///
/// Keys are exact, case-sensitive surface forms. Every key has at least one
/// candidate. Once built the dictionary is never modified, so it can be
/// shared through an `Arc` by filters on any number of threads.
pub struct LemmaDictionary {
    entries: HashMap<SmolStr, Vec<SmolStr>>,
    report: LoadReport,
}

impl LemmaDictionary {
    /// Memory-maps and parses the word list at `path`.
    pub fn open<P: AsRef<Path>>(
        path: P,
        config: &DictionaryConfig,
    ) -> Result<LemmaDictionary, LoadError> {
        LemmaDictionary::from_fs(&Fs, path, config)
    }

    pub fn from_fs<FS, P>(
        fs: &FS,
        path: P,
        config: &DictionaryConfig,
    ) -> Result<LemmaDictionary, LoadError>
    where
        FS: Filesystem,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut file = fs.open(path).map_err(|e| LoadError::from_io(path, e))?;

        // Zero-length files cannot be mapped on every platform.
        if file.is_empty().map_err(|e| LoadError::from_io(path, e))? {
            return Ok(LemmaDictionary::from_bytes(&[], config));
        }

        let mmap = unsafe { file.memory_map() }.map_err(|e| LoadError::from_io(path, e))?;

        let dictionary = match mmap {
            Some(mmap) => LemmaDictionary::from_bytes(&mmap, config),
            None => {
                let mut buf = vec![];
                file.read_to_end(&mut buf)
                    .map_err(|e| LoadError::from_io(path, e))?;
                LemmaDictionary::from_bytes(&buf, config)
            }
        };

        log::debug!("loaded dictionary '{}'", path.display());
        Ok(dictionary)
    }

    pub fn from_reader<R: Read>(
        mut reader: R,
        config: &DictionaryConfig,
    ) -> Result<LemmaDictionary, LoadError> {
        let mut buf = vec![];
        reader.read_to_end(&mut buf).map_err(LoadError::Read)?;
        Ok(LemmaDictionary::from_bytes(&buf, config))
    }

    /// Builds a dictionary from an in-memory word list. Lines without exactly
    /// two fields, or that are not valid UTF-8, are skipped.
    pub fn from_bytes(bytes: &[u8], config: &DictionaryConfig) -> LemmaDictionary {
        let mut builder = LemmaDictionaryBuilder::new();

        for (index, raw) in parse::lines(bytes).enumerate() {
            builder.report.lines += 1;

            match parse::parse_line(raw, config.delimiter) {
                Line::Blank => {}
                Line::Pair(surface, base) => {
                    builder.insert(surface, base);
                }
                Line::Malformed => {
                    log::trace!("skipping malformed line {}", index + 1);
                    builder.report.malformed += 1;
                }
            }
        }

        let dictionary = builder.build();
        dictionary.log_report();
        dictionary
    }

    fn log_report(&self) {
        let LoadReport {
            lines,
            pairs,
            duplicates,
            malformed,
        } = self.report;

        log::debug!(
            "{} surface forms, {} pairs from {} lines ({} duplicate, {} malformed)",
            self.len(),
            pairs,
            lines,
            duplicates,
            malformed
        );

        let non_blank = pairs + duplicates + malformed;
        if malformed > 0 && malformed * 2 > non_blank {
            log::warn!(
                "{} of {} lines were malformed; is the delimiter configured correctly?",
                malformed,
                non_blank
            );
        }
    }

    /// All base forms for `surface`, in word list order.
    #[inline]
    pub fn lookup(&self, surface: &str) -> Option<&[SmolStr]> {
        self.entries.get(surface).map(Vec::as_slice)
    }

    /// The first-listed base form for `surface`.
    #[inline]
    pub fn lemma(&self, surface: &str) -> Option<&str> {
        self.lookup(surface)
            .and_then(|candidates| candidates.first())
            .map(SmolStr::as_str)
    }

    pub fn contains(&self, surface: &str) -> bool {
        self.entries.contains_key(surface)
    }

    /// Number of distinct surface forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}

impl fmt::Debug for LemmaDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LemmaDictionary")
            .field("entries", &self.entries.len())
            .field("report", &self.report)
            .finish()
    }
}
