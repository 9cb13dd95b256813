use crate::book::PhoneBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_contacts;

/// Listing is the degenerate search: the empty pattern matches every
/// contact, so the whole book comes back in insertion order.
pub fn run(book: &PhoneBook) -> Result<CmdResult> {
    let listed = index_contacts(book, "")?;
    Ok(CmdResult::default().with_listed_contacts(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_all_contacts_in_insertion_order() {
        let mut book = PhoneBook::new();
        let mut store = InMemoryStore::new();
        add::run(
            &mut book,
            &mut store,
            "Alice".into(),
            "1 Main St".into(),
            "555-0100".into(),
        )
        .unwrap();
        add::run(
            &mut book,
            &mut store,
            "Bob".into(),
            "2 Oak Ave".into(),
            "555-0200".into(),
        )
        .unwrap();

        let result = run(&book).unwrap();
        assert_eq!(result.listed_contacts.len(), 2);
        assert_eq!(result.listed_contacts[0].contact.name, "Alice");
        assert_eq!(result.listed_contacts[0].index, 1);
        assert_eq!(result.listed_contacts[1].contact.name, "Bob");
        assert_eq!(result.listed_contacts[1].index, 2);
    }

    #[test]
    fn empty_book_lists_nothing() {
        let book = PhoneBook::new();
        assert!(run(&book).unwrap().listed_contacts.is_empty());
    }
}
