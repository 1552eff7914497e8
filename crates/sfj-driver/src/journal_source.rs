use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::DriverError;

/// One journal's identity plus however it opens a byte source. Real
/// deployments would implement this against object storage; enumerating
/// and fetching from a remote object store is explicitly out of scope
/// here, so the only implementation shipped is filesystem-backed.
pub trait JournalSource: Send {
    fn name(&self) -> &str;
    fn open(&self) -> Result<Box<dyn Read + Send>, DriverError>;
}

/// A journal backed by a local file. Stands in for the object-storage
/// source a production deployment would use — swapping in a real one
/// only touches this trait impl, not `sfj-decoder` or the rest of the
/// driver.
pub struct LocalFileJournalSource {
    name: String,
    path: PathBuf,
}

impl LocalFileJournalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path }
    }

    /// Enumerates every regular file directly under `dir`, sorted by
    /// name for deterministic batch ordering. Subdirectories and
    /// non-regular files are skipped.
    pub fn list_dir(dir: &Path) -> std::io::Result<Vec<Self>> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| p.is_file())
            .collect();
        paths.sort();
        Ok(paths.into_iter().map(Self::new).collect())
    }
}

impl JournalSource for LocalFileJournalSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self) -> Result<Box<dyn Read + Send>, DriverError> {
        let file = File::open(&self.path).map_err(|source| DriverError::OpenSource {
            name: self.name.clone(),
            source,
        })?;
        Ok(Box::new(file))
    }
}
