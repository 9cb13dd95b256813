use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::BookStore;
use crate::book::PhoneBook;
use crate::error::{Result, RolodexError};
use crate::model::Contact;

/// File-backed storage: one gzip-compressed JSON blob holding the full
/// contact sequence.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for FileStore {
    fn save(&mut self, book: &PhoneBook) -> Result<()> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        serde_json::to_writer(&mut encoder, book.contacts())
            .map_err(RolodexError::Serialization)?;
        let blob = encoder.finish().map_err(RolodexError::Io)?;

        // Whole-file overwrite, not atomic.
        fs::write(&self.path, blob).map_err(RolodexError::Io)?;
        Ok(())
    }

    fn load(&self) -> Result<PhoneBook> {
        if !self.path.exists() {
            return Err(RolodexError::Store(format!(
                "No phone book at {}",
                self.path.display()
            )));
        }
        let file = File::open(&self.path).map_err(RolodexError::Io)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let contacts: Vec<Contact> =
            serde_json::from_reader(decoder).map_err(RolodexError::Serialization)?;
        Ok(PhoneBook::from_contacts(contacts))
    }
}
