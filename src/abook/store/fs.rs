use super::{DataStore, StoredBook, FORMAT_VERSION};
use crate::book::AddressBook;
use crate::error::{AbookError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AbookError::Io)?;
            }
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no address book yet, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(AbookError::Io(e)),
        };

        let stored: StoredBook =
            serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        if stored.version != FORMAT_VERSION {
            return Err(AbookError::Store(format!(
                "{} has format version {}, expected {}",
                self.path.display(),
                stored.version,
                FORMAT_VERSION
            )));
        }

        let book = AddressBook::from(stored);
        debug!(path = %self.path.display(), contacts = book.len(), "address book loaded");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;

        let content = serde_json::to_string_pretty(&StoredBook::from(book))
            .map_err(AbookError::Serialization)?;

        // Write beside the target and rename so a crash never leaves half a file.
        let tmp = self.temp_path();
        fs::write(&tmp, content).map_err(AbookError::Io)?;
        fs::rename(&tmp, &self.path).map_err(AbookError::Io)?;

        debug!(path = %self.path.display(), contacts = book.len(), "address book saved");
        Ok(())
    }
}
