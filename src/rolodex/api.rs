//! # API Facade
//!
//! The single entry point for phone book operations, regardless of the
//! UI driving them. The facade owns both the in-memory [`PhoneBook`]
//! and the [`BookStore`] it persists to — there is no process-wide
//! state; the shell constructs one instance and threads it through.
//!
//! The facade dispatches to `commands/*::run` and returns structured
//! `Result<CmdResult>` values. It never prints, never formats, and
//! never exits the process.
//!
//! ## Generic Over BookStore
//!
//! `PhoneBookApi<S: BookStore>` works against any storage backend:
//! production uses `FileStore`, tests use `InMemoryStore`.

use crate::book::PhoneBook;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Field;
use crate::store::BookStore;

pub struct PhoneBookApi<S: BookStore> {
    book: PhoneBook,
    store: S,
}

impl<S: BookStore> PhoneBookApi<S> {
    /// Starts with an empty book; call [`PhoneBookApi::open`] to pull
    /// in whatever the store holds.
    pub fn new(store: S) -> Self {
        Self {
            book: PhoneBook::new(),
            store,
        }
    }

    pub fn book(&self) -> &PhoneBook {
        &self.book
    }

    pub fn fields(&self) -> &'static [Field] {
        self.book.fields()
    }

    /// Loads the stored book, replacing the current one wholesale.
    ///
    /// A missing or undecodable store is recoverable: the current book
    /// is kept as-is and the failure comes back as a warning message.
    pub fn open(&mut self) -> CmdResult {
        let mut result = CmdResult::default();
        match self.store.load() {
            Ok(book) => {
                result.add_message(CmdMessage::info(format!(
                    "Loaded {} contacts.",
                    book.len()
                )));
                self.book = book;
            }
            Err(e) => {
                result.add_message(CmdMessage::warning(format!(
                    "Starting with an empty phone book ({})",
                    e
                )));
            }
        }
        result
    }

    /// Persists the current book. Unlike the saves folded into each
    /// mutating command, a failure here propagates — the exit path
    /// must not lose it.
    pub fn save(&mut self) -> Result<CmdResult> {
        self.store.save(&self.book)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Phone book saved."));
        Ok(result)
    }

    pub fn add_contact(
        &mut self,
        name: String,
        address: String,
        number: String,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.book, &mut self.store, name, address, number)
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn search_contacts(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.book, query)
    }

    pub fn count_contacts(&self) -> Result<CmdResult> {
        commands::count::run(&self.book)
    }

    pub fn edit_field(
        &mut self,
        position: usize,
        field_name: &str,
        value: String,
    ) -> Result<CmdResult> {
        commands::edit::run(&mut self.book, &mut self.store, position, field_name, value)
    }

    pub fn delete_contact(&mut self, position: usize) -> Result<CmdResult> {
        commands::delete::run(&mut self.book, &mut self.store, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> PhoneBookApi<InMemoryStore> {
        PhoneBookApi::new(InMemoryStore::new())
    }

    #[test]
    fn open_on_empty_store_keeps_the_empty_book() {
        let mut api = api();
        let result = api.open();
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
        assert!(api.book().is_empty());
    }

    #[test]
    fn add_search_count_scenario() {
        let mut api = api();
        api.add_contact("Alice".into(), "1 Main St".into(), "555-0100".into())
            .unwrap();
        api.add_contact("Bob".into(), "2 Oak Ave".into(), "555-0200".into())
            .unwrap();

        let all = api.search_contacts("").unwrap();
        assert_eq!(all.listed_contacts.len(), 2);
        assert_eq!(all.listed_contacts[0].contact.name, "Alice");
        assert_eq!(all.listed_contacts[1].contact.name, "Bob");

        let oak = api.search_contacts("oak").unwrap();
        assert_eq!(oak.listed_contacts.len(), 1);
        assert_eq!(oak.listed_contacts[0].contact.name, "Bob");

        assert_eq!(api.count_contacts().unwrap().count, Some(2));
    }

    #[test]
    fn edit_survives_reopen() {
        let mut api = api();
        api.add_contact("Bob".into(), "2 Oak Ave".into(), "555-0200".into())
            .unwrap();
        api.edit_field(0, "number", "555-9999".into()).unwrap();

        api.open();
        assert_eq!(api.book().get(0).unwrap().number, "555-9999");
    }

    #[test]
    fn delete_renumbers_the_next_listing() {
        let mut api = api();
        for name in ["Alice", "Bob", "Carol"] {
            api.add_contact(name.into(), "".into(), "".into()).unwrap();
        }
        api.delete_contact(1).unwrap();

        let listed = api.list_contacts().unwrap().listed_contacts;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].contact.name, "Carol");
        assert_eq!(listed[1].index, 2);
    }

    #[test]
    fn fields_exposes_the_editable_set() {
        let api = api();
        assert_eq!(api.fields().len(), 3);
    }
}
