//! Named-resource access for trace inputs

use std::fs::File;
use std::io::{Cursor, ErrorKind, Read};
use std::path::PathBuf;

use hashbrown::HashMap;

use crate::error::Error;

/// Capability handing out readable streams for named inputs.
///
/// A missing resource is an ordinary [`Error::ResourceMissing`] value,
/// batch callers skip the input and continue with the rest.
pub trait ResourceProvider: Send + Sync {
    /// Opens the named resource for reading.
    ///
    /// # Errors
    ///
    /// `ResourceMissing` when no resource with this name exists,
    /// `IoError` for any other access failure.
    fn open(&self, name: &str) -> Result<Box<dyn Read + Send>, Error>;
}

/// Provider resolving names against a root directory
#[derive(Debug, Clone)]
pub struct DirProvider {
    root: PathBuf,
}

impl DirProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceProvider for DirProvider {
    fn open(&self, name: &str) -> Result<Box<dyn Read + Send>, Error> {
        let path = self.root.join(name);
        match File::open(&path) {
            Ok(file) => Ok(Box::new(file)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(Error::ResourceMissing(path.display().to_string()))
            }
            Err(err) => Err(Error::IoError(err)),
        }
    }
}

/// In-memory provider, used by tests and embedders without a filesystem
#[derive(Debug, Default, Clone)]
pub struct MemoryProvider {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource under the given name, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.resources.insert(name.into(), bytes.into());
    }
}

impl ResourceProvider for MemoryProvider {
    fn open(&self, name: &str) -> Result<Box<dyn Read + Send>, Error> {
        match self.resources.get(name) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.clone()))),
            None => Err(Error::ResourceMissing(name.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_provider_serves_registered_bytes() {
        let mut provider = MemoryProvider::new();
        provider.insert("a.csv", "hello");

        let mut text = String::new();
        provider
            .open("a.csv")
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn missing_resource_is_reported_as_such() {
        let provider = MemoryProvider::new();
        assert!(matches!(
            provider.open("absent.csv"),
            Err(Error::ResourceMissing(name)) if name == "absent.csv"
        ));
    }

    #[test]
    fn dir_provider_distinguishes_missing_from_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("trace.csv"), "data").unwrap();
        let provider = DirProvider::new(dir.path());

        assert!(provider.open("trace.csv").is_ok());
        assert!(matches!(
            provider.open("other.csv"),
            Err(Error::ResourceMissing(_))
        ));
    }
}
