use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Storage for the single default-preset name.
pub trait PreferenceStore {
    /// The stored name, or `None` when nothing is stored.
    fn load(&self) -> Result<Option<String>>;
    /// Replace the stored name.
    fn save(&mut self, name: &str) -> Result<()>;
    /// Store nothing.
    fn clear(&mut self) -> Result<()>;
}

/// Plain text file holding the preset name; truncated on every write.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(s) if s.trim().is_empty() => Ok(None),
            Ok(s) => Ok(Some(s.trim().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, name: &str) -> Result<()> {
        self.write(name)
    }

    fn clear(&mut self) -> Result<()> {
        self.write("")
    }
}

/// In-memory store, used when no preference path can be resolved.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
}

impl MemoryPreferenceStore {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.clone().filter(|v| !v.is_empty()))
    }

    fn save(&mut self, name: &str) -> Result<()> {
        self.value = Some(name.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.value = None;
        Ok(())
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&mut self, name: &str) -> Result<()> {
        (**self).save(name)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}
