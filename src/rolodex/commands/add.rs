use crate::book::PhoneBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::BookStore;

pub fn run<S: BookStore>(
    book: &mut PhoneBook,
    store: &mut S,
    name: String,
    address: String,
    number: String,
) -> Result<CmdResult> {
    let contact = Contact::new(name, address, number);
    book.add(contact.clone());
    store.save(book)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added: {}",
        contact.name
    )));
    result.affected_contacts.push(contact);
    Ok(result)
}
