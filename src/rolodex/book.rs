//! The phone book: an ordered, in-memory collection of contacts.
//!
//! Insertion order is canonical — listings and the positions handed to
//! [`PhoneBook::set_field`] and friends refer to it. Positions are only
//! meaningful until the next mutation; callers re-list after mutating.

use regex::RegexBuilder;

use crate::error::{Result, RolodexError};
use crate::model::{Contact, Field};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneBook {
    contacts: Vec<Contact>,
}

impl PhoneBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    pub fn get(&self, position: usize) -> Option<&Contact> {
        self.contacts.get(position)
    }

    /// Removes the contact at `position`. Contacts after it shift down;
    /// the next listing renumbers.
    pub fn remove(&mut self, position: usize) -> Result<Contact> {
        if position >= self.contacts.len() {
            return Err(RolodexError::ContactNotFound(position));
        }
        Ok(self.contacts.remove(position))
    }

    /// The editable fields, in the order the shell prompts for them.
    pub fn fields(&self) -> &'static [Field] {
        &Field::ALL
    }

    pub fn field_value(&self, position: usize, field: Field) -> Result<&str> {
        let contact = self
            .contacts
            .get(position)
            .ok_or(RolodexError::ContactNotFound(position))?;
        Ok(contact.field(field))
    }

    pub fn set_field(&mut self, position: usize, field: Field, value: String) -> Result<()> {
        let contact = self
            .contacts
            .get_mut(position)
            .ok_or(RolodexError::ContactNotFound(position))?;
        contact.set_field(field, value);
        Ok(())
    }

    /// Positions of every contact whose concatenated fields contain a
    /// match for `query`, compiled as a case-insensitive regex.
    ///
    /// The empty query matches everything, so `search_positions("")`
    /// enumerates the whole book — `list` and `count` are built on it.
    /// A malformed pattern propagates as [`RolodexError::Pattern`].
    pub fn search_positions(&self, query: &str) -> Result<Vec<usize>> {
        let pattern = RegexBuilder::new(query).case_insensitive(true).build()?;
        Ok(self
            .contacts
            .iter()
            .enumerate()
            .filter(|(_, c)| pattern.is_match(&c.search_text()))
            .map(|(i, _)| i)
            .collect())
    }

    /// Matching contacts in book order. See [`PhoneBook::search_positions`].
    pub fn search(&self, query: &str) -> Result<Vec<&Contact>> {
        let positions = self.search_positions(query)?;
        Ok(positions.into_iter().map(|i| &self.contacts[i]).collect())
    }
}
