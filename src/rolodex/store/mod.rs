//! # Storage Layer
//!
//! The [`BookStore`] trait abstracts how a whole [`PhoneBook`] is
//! persisted, so the command layer never touches the filesystem
//! directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. The entire contact
//!   sequence is written as one gzip-compressed JSON blob at a single
//!   path, overwritten on every save.
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests. No
//!   persistence, fast, isolated.
//!
//! ## Granularity
//!
//! Persistence is whole-book: `save` replaces the file, `load`
//! replaces the collection. There is no per-record storage and no
//! write-ahead log; a crash mid-save can truncate the file, which
//! `load` reports as a structured error the caller may recover from.

use crate::book::PhoneBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for phone book persistence.
pub trait BookStore {
    /// Persist the entire book, replacing whatever was stored before.
    fn save(&mut self, book: &PhoneBook) -> Result<()>;

    /// Read the stored book back. Errors if nothing has been stored
    /// or the stored blob cannot be decoded.
    fn load(&self) -> Result<PhoneBook>;
}
