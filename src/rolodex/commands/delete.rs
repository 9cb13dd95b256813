use crate::book::PhoneBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

/// Removes the contact at `position` and persists the shrunken book.
/// Positions after it shift down; the next listing renumbers.
pub fn run<S: BookStore>(
    book: &mut PhoneBook,
    store: &mut S,
    position: usize,
) -> Result<CmdResult> {
    let removed = book.remove(position)?;
    store.save(book)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact deleted: {}",
        removed.name
    )));
    result.affected_contacts.push(removed);
    Ok(result)
}
