use crate::book::PhoneBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Field;
use crate::store::BookStore;

/// Edits one field of the contact at `position` and persists the book.
///
/// `field_name` is parsed here, so an unknown name fails before the
/// contact is touched and nothing is written.
pub fn run<S: BookStore>(
    book: &mut PhoneBook,
    store: &mut S,
    position: usize,
    field_name: &str,
    value: String,
) -> Result<CmdResult> {
    let field: Field = field_name.parse()?;
    book.set_field(position, field, value)?;
    store.save(book)?;

    let contact = book.get(position).cloned();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Saved"));
    if let Some(contact) = contact {
        result.affected_contacts.push(contact);
    }
    Ok(result)
}
