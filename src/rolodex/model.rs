use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RolodexError;

/// One of the three user-settable attributes of a [`Contact`].
///
/// Field selection arrives from the shell as free text; the `FromStr`
/// impl is the single place where an unknown name becomes
/// [`RolodexError::UnknownField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Address,
    Number,
}

impl Field {
    /// All editable fields, in canonical prompt order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Address, Field::Number];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::Number => "number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "address" => Ok(Field::Address),
            "number" => Ok(Field::Number),
            other => Err(RolodexError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub address: String,
    pub number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(name: String, address: String, number: String) -> Self {
        let now = Utc::now();
        Self {
            name,
            address,
            number,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Number => &self.number,
        }
    }

    /// Overwrites a field and stamps `updated_at`, even when the new
    /// value equals the old one.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Address => self.address = value,
            Field::Number => self.number = value,
        }
        self.updated_at = Utc::now();
    }

    /// The text a search pattern is matched against: all three fields
    /// joined with single spaces, in field order.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.address, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Contact {
        Contact::new(
            "Alice".to_string(),
            "1 Main St".to_string(),
            "555-0100".to_string(),
        )
    }

    #[test]
    fn new_contact_timestamps_match() {
        let c = alice();
        assert_eq!(c.created_at, c.updated_at);
    }

    #[test]
    fn set_field_refreshes_updated_at() {
        let mut c = alice();
        let created = c.created_at;
        let before = c.updated_at;
        c.set_field(Field::Number, "555-9999".to_string());
        assert_eq!(c.number, "555-9999");
        assert!(c.updated_at >= before);
        assert_eq!(c.created_at, created);
    }

    #[test]
    fn set_field_stamps_even_when_value_is_unchanged() {
        let mut c = alice();
        let created = c.created_at;
        c.set_field(Field::Name, "Alice".to_string());
        assert_eq!(c.name, "Alice");
        assert!(c.updated_at >= created);
        assert_eq!(c.created_at, created);
    }

    #[test]
    fn field_round_trips_through_strings() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_field_name_is_an_error() {
        let err = "birthday".parse::<Field>().unwrap_err();
        assert!(matches!(err, RolodexError::UnknownField(ref s) if s == "birthday"));
    }

    #[test]
    fn search_text_joins_fields_in_order() {
        assert_eq!(alice().search_text(), "Alice 1 Main St 555-0100");
    }
}
