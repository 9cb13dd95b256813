use crate::book::PhoneBook;
use crate::error::Result;
use crate::model::Contact;

/// A contact paired with the transient numbering of one listing.
///
/// `index` is the 1-based number shown to the user, relative to the
/// listing (or search subsequence) it came from. `position` is the
/// contact's 0-based slot in the book, which is what mutations take.
/// Both are stale after the next mutation.
#[derive(Debug, Clone)]
pub struct DisplayContact {
    pub contact: Contact,
    pub index: usize,
    pub position: usize,
}

/// Runs `query` against the book and numbers the matches 1-based.
pub fn index_contacts(book: &PhoneBook, query: &str) -> Result<Vec<DisplayContact>> {
    let positions = book.search_positions(query)?;
    Ok(positions
        .into_iter()
        .enumerate()
        .map(|(i, position)| DisplayContact {
            contact: book.contacts()[position].clone(),
            index: i + 1,
            position,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_is_relative_to_the_subsequence() {
        let mut book = PhoneBook::new();
        for name in ["Alice", "Bob", "Carol"] {
            book.add(Contact::new(name.to_string(), String::new(), String::new()));
        }

        let all = index_contacts(&book, "").unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!((all[2].index, all[2].position), (3, 2));

        // Carol is hit 1 of the subsequence but still position 2.
        let hits = index_contacts(&book, "carol").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!((hits[0].index, hits[0].position), (1, 2));
    }
}
