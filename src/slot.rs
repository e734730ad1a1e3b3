use anyhow::{Context, Error, Result};
use log::debug;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persistent key-value storage holding raw strings.
///
/// Encoding is up to the caller; the slot only stores and returns text.
pub trait Slot {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: Slot + ?Sized> Slot for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Slot kept in process memory only.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    values: HashMap<String, String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl Slot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Slot backed by a directory, one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        FileSlot { dir: dir.into() }
    }

    /// Build from a path that may contain `~` or environment variables.
    pub fn expand(dir: &str) -> Result<Self> {
        let path = shellexpand::full(dir)
            .with_context(|| format!("Storage directory {} is invalid", dir))?;
        Ok(Self::new(Path::new(path.as_ref())))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.contains(|c: char| c == '/' || c == '\\')
            || key.starts_with('.')
        {
            return Err(Error::msg(format!("Invalid storage key {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

fn read_if_found(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(&path) {
        Ok(c) => Ok(Some(c)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into())
    }
}

impl Slot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        debug!("Reading {:?}", path);
        read_if_found(&path).with_context(|| format!("Error reading {:?}", path))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Error ensuring path {:?} exists", self.dir))?;
        debug!("Writing {} bytes to {:?}", value.len(), path);
        std::fs::write(&path, value)
            .with_context(|| format!("Error writing {:?}", path))
    }
}
