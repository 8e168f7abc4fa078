//! Resource access for word lists.
//!
//! Dictionaries are opened through a [`Filesystem`], either the operating
//! system's ([`Fs`]) or a set of named in-memory resources ([`MemoryFs`])
//! for word lists bundled with the host application.
use hashbrown::HashMap;
use memmap2::{Mmap, MmapOptions};
use std::fmt::Debug;
use std::io::{Cursor, Read, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub trait Filesystem {
    type File: File;

    fn open<P: AsRef<Path>>(&self, path: P) -> Result<Self::File>;
}

pub trait File: Read + Debug {
    fn len(&self) -> Result<u64>;

    fn is_empty(&self) -> Result<bool> {
        self.len().map(|x| x == 0)
    }

    /// Maps the whole file into memory. Backends that hold their data in
    /// memory already return `None` and are read instead.
    unsafe fn memory_map(&self) -> Result<Option<Mmap>>;
}

impl File for std::fs::File {
    fn len(&self) -> Result<u64> {
        self.metadata().map(|m| m.len())
    }

    unsafe fn memory_map(&self) -> Result<Option<Mmap>> {
        MmapOptions::new().map(self).map(Some)
    }
}

pub struct Fs;

impl Filesystem for Fs {
    type File = std::fs::File;

    #[inline(always)]
    fn open<P: AsRef<Path>>(&self, path: P) -> Result<Self::File> {
        std::fs::File::open(path)
    }
}

#[derive(Debug)]
pub struct MemoryFile(Cursor<Arc<[u8]>>);

impl Read for MemoryFile {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.0.read(buf)
    }
}

impl File for MemoryFile {
    fn len(&self) -> Result<u64> {
        Ok(self.0.get_ref().len() as u64)
    }

    unsafe fn memory_map(&self) -> Result<Option<Mmap>> {
        Ok(None)
    }
}

/// Named in-memory resources, looked up by exact path.
#[derive(Debug, Default, Clone)]
pub struct MemoryFs {
    files: HashMap<PathBuf, Arc<[u8]>>,
}

impl MemoryFs {
    pub fn new() -> MemoryFs {
        MemoryFs::default()
    }

    pub fn insert<P: Into<PathBuf>, B: Into<Vec<u8>>>(&mut self, path: P, bytes: B) {
        let bytes: Vec<u8> = bytes.into();
        self.files.insert(path.into(), Arc::from(bytes));
    }

    pub fn with<P: Into<PathBuf>, B: Into<Vec<u8>>>(mut self, path: P, bytes: B) -> MemoryFs {
        self.insert(path, bytes);
        self
    }
}

impl Filesystem for MemoryFs {
    type File = MemoryFile;

    fn open<P: AsRef<Path>>(&self, path: P) -> Result<Self::File> {
        match self.files.get(path.as_ref()) {
            Some(data) => Ok(MemoryFile(Cursor::new(Arc::clone(data)))),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "not found",
            )),
        }
    }
}
