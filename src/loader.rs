use crate::error::{Error, Result};
use crate::types::{TypeId, TypeRecord};
use indexmap::IndexMap;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Raw contents of a type database file.
pub struct DatabaseFile {
    path: PathBuf,
    // Empty files cannot be mapped on every platform.
    mmap: Option<Mmap>,
}

impl DatabaseFile {
    pub fn load(path: &Path) -> Result<Self> {
        let io_err = |source| Error::Io { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(io_err)?;
        let len = file.metadata().map_err(io_err)?.len();
        let mmap = if len == 0 {
            None
        } else {
            // SAFETY: the database is mapped read-only and only read through
            // `bytes()` while `self` is alive. Concurrent modification of the file
            // by another process is outside what this tool guards against.
            Some(unsafe { Mmap::map(&file) }.map_err(io_err)?)
        };

        Ok(Self { path: path.to_path_buf(), mmap })
    }

    fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    pub fn parse(&self) -> Result<TypeDatabase> {
        TypeDatabase::from_slice(self.bytes())
            .map_err(|source| Error::Parse { path: self.path.clone(), source })
    }
}

/// Parsed type database. Records keep the order they were stored in.
#[derive(Debug, Default)]
pub struct TypeDatabase {
    records: IndexMap<TypeId, TypeRecord>,
}

impl TypeDatabase {
    /// Parse a database from JSON. The top level is either an object keyed by
    /// type id or an array, whose entries are keyed by index.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let is_array = bytes.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'[');

        let records = if is_array {
            let list: Vec<TypeRecord> = serde_json::from_slice(bytes)?;
            list.into_iter().enumerate().map(|(i, r)| (TypeId::new(i.to_string()), r)).collect()
        } else {
            let map: IndexMap<String, TypeRecord> = serde_json::from_slice(bytes)?;
            map.into_iter().map(|(k, r)| (TypeId::new(k), r)).collect()
        };

        Ok(Self { records })
    }

    pub fn get(&self, id: &TypeId) -> Option<&TypeRecord> {
        self.records.get(id)
    }

    pub fn records(&self) -> impl Iterator<Item = (&TypeId, &TypeRecord)> {
        self.records.iter()
    }
}
