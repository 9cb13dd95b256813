use crate::book::PhoneBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Count is the other degenerate search: the size of the empty-query
/// result set.
pub fn run(book: &PhoneBook) -> Result<CmdResult> {
    let count = book.search("")?.len();
    let mut result = CmdResult::default().with_count(count);
    result.add_message(CmdMessage::info(format!(
        "The phone book has {} records.",
        count
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn counts_all_records() {
        let mut book = PhoneBook::new();
        let mut store = InMemoryStore::new();
        for name in ["Alice", "Bob"] {
            add::run(
                &mut book,
                &mut store,
                name.into(),
                "".into(),
                "".into(),
            )
            .unwrap();
        }

        let result = run(&book).unwrap();
        assert_eq!(result.count, Some(2));
        assert_eq!(result.messages[0].content, "The phone book has 2 records.");
    }
}
