use bson::oid::ObjectId;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ServiceError;

pub mod payload;
pub use payload::ContactPayload;


pub const NAME_MIN_LENGTH: usize = 3;
pub const NUMBER_MIN_LENGTH: usize = 8;

/// Prefix of schema messages when a contact is created.
pub const CREATE_CONTEXT: &str = "Person validation failed";
/// Prefix of schema messages when a contact is updated.
pub const UPDATE_CONTEXT: &str = "Validation failed";

lazy_static! {
    /// Two or three digits, a dash, then at least five more.
    static ref PHONE_NUMBER: Regex = Regex::new(r"^(\d{2,3})-(\d{5,})$").expect("bad phone number pattern");
}

/// What a caller supplies to make or replace a contact. The id is never theirs to pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub number: String,
}

/// A contact as it sits in the `people` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub number: String,
    #[serde(rename = "__v", default)]
    pub revision: i32,
}

/// A contact as clients see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub number: String,
}

impl From<ContactDocument> for Contact {
    fn from(doc: ContactDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            number: doc.number,
        }
    }
}

impl ContactDocument {
    /// Stamps a fresh id onto a new contact.
    pub fn assign_id(contact: NewContact) -> Self {
        Self {
            id: ObjectId::new(),
            name: contact.name,
            number: contact.number,
            revision: 0,
        }
    }
}

/// One field that broke its constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub path: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

fn required(path: &'static str, value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError {
            path,
            message: format!("Path `{}` is required.", path),
        })
    } else {
        None
    }
}

fn min_length(path: &'static str, value: &str, min: usize) -> Option<FieldError> {
    if value.chars().count() < min {
        Some(FieldError {
            path,
            message: format!(
                "Path `{}` (`{}`) is shorter than the minimum allowed length ({}).",
                path, value, min
            ),
        })
    } else {
        None
    }
}

fn phone_number(path: &'static str, value: &str) -> Option<FieldError> {
    if PHONE_NUMBER.is_match(value) {
        None
    } else {
        Some(FieldError {
            path,
            message: format!("{} is not a valid phone number!", value),
        })
    }
}

impl NewContact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Every field that breaks the schema, reporting only the first broken rule per field.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let name = required("name", &self.name)
            .or_else(|| min_length("name", &self.name, NAME_MIN_LENGTH));
        let number = required("number", &self.number)
            .or_else(|| min_length("number", &self.number, NUMBER_MIN_LENGTH))
            .or_else(|| phone_number("number", &self.number));

        name.into_iter().chain(number).collect()
    }

    /// Checks the schema, producing a `ValidationFailed` prefixed with `context` on failure.
    /// ```
    /// use phonebook::{NewContact, ServiceError};
    ///
    /// assert!(NewContact::new("Arto Hellas", "040-123456").validate("x").is_ok());
    /// assert_eq!(
    ///     NewContact::new("Arto Hellas", "12-34-567").validate("Person validation failed"),
    ///     Err(ServiceError::ValidationFailed(
    ///         "Person validation failed: number: 12-34-567 is not a valid phone number!".to_string()
    ///     )),
    /// );
    /// ```
    pub fn validate(&self, context: &str) -> Result<(), ServiceError> {
        let errors = self.field_errors();
        if errors.is_empty() {
            return Ok(());
        }

        let fields = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(ServiceError::ValidationFailed(format!("{}: {}", context, fields)))
    }
}

/// Parses a path id into the store's id type.
pub fn parse_id(id: &str) -> Result<ObjectId, ServiceError> {
    Ok(ObjectId::parse_str(id)?)
}
