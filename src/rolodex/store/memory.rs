use super::BookStore;
use crate::book::PhoneBook;
use crate::error::{Result, RolodexError};
use crate::model::Contact;

/// In-memory storage for tests. Keeps a copy of the last saved
/// contact sequence; nothing touches the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<Vec<Contact>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts in the last save, if any.
    pub fn saved_len(&self) -> Option<usize> {
        self.saved.as_ref().map(Vec::len)
    }
}

impl BookStore for InMemoryStore {
    fn save(&mut self, book: &PhoneBook) -> Result<()> {
        self.saved = Some(book.contacts().to_vec());
        Ok(())
    }

    fn load(&self) -> Result<PhoneBook> {
        self.saved
            .clone()
            .map(PhoneBook::from_contacts)
            .ok_or_else(|| RolodexError::Store("Nothing saved yet".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_before_save_is_a_store_error() {
        let store = InMemoryStore::new();
        assert!(matches!(store.load(), Err(RolodexError::Store(_))));
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemoryStore::new();
        let mut book = PhoneBook::new();
        book.add(Contact::new(
            "Alice".to_string(),
            "1 Main St".to_string(),
            "555-0100".to_string(),
        ));

        store.save(&book).unwrap();
        assert_eq!(store.load().unwrap(), book);
        assert_eq!(store.saved_len(), Some(1));
    }
}
