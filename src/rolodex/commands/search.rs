use crate::book::PhoneBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_contacts;

pub fn run(book: &PhoneBook, query: &str) -> Result<CmdResult> {
    let listed = index_contacts(book, query)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Found {} results:", listed.len())));
    Ok(result.with_listed_contacts(listed))
}
