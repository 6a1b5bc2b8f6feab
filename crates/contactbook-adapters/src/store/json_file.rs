//! JSON file store using std::fs.
//!
//! The file holds exactly what [`BookSnapshot::encode`] produces, plus a
//! trailing newline.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use contactbook_core::{
    application::{ApplicationError, BookSnapshot, ports::BookStore},
    domain::AddressBook,
    error::{ContactBookError, ContactBookResult},
};

/// Production store: one pretty-printed JSON snapshot per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. Nothing is touched until `load`/`save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the snapshot is written to before being renamed over
    /// `path`.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("addressbook"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_snapshot(&self, target: &Path, book: &AddressBook) -> ContactBookResult<()> {
        let text = BookSnapshot::from_book(book).encode()?;

        let file = File::create(target).map_err(|e| map_io_error(target, e, "create file"))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush())
            .map_err(|e| map_io_error(target, e, "write file"))
    }
}

impl BookStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> ContactBookResult<AddressBook> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No address book file yet; starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(map_io_error(&self.path, e, "read file")),
        };

        BookSnapshot::decode(&text)
            .and_then(BookSnapshot::into_book)
            .inspect_err(|e| warn!(error = %e, "Address book file rejected"))
    }

    #[instrument(skip_all, fields(path = %self.path.display(), contacts = book.len()))]
    fn save(&self, book: &AddressBook) -> ContactBookResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
        }

        let temp = self.temp_path();
        if let Err(e) = self.write_snapshot(&temp, book) {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }

        fs::rename(&temp, &self.path).map_err(|e| map_io_error(&self.path, e, "replace file"))?;
        debug!("Address book written");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ContactBookError {
    ApplicationError::Storage {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
