//! # API Flow
//! The phonebook backend stores contacts in MongoDB and serves them over a small JSON API.
//!
//! ## Creating a contact
//! `POST /api/people` with `{"name": ..., "number": ...}`. The payload is checked for
//! presence of both fields, then the [`PhoneBook`] checks the field constraints and writes it.
//!
//! ## Everything else
//! Contacts are read, replaced and removed by the id they were assigned on creation,
//! at `/api/people/{id}`. `GET /info` reports how many contacts are stored.

#![warn(clippy::pedantic)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use log::*;
use std::fmt;

pub mod config;
pub use config::{Config, ConfigError};

pub mod contact;
pub use contact::{Contact, ContactDocument, NewContact};

pub mod data;

pub mod store;
pub use store::{MongoPhoneBook, PhoneBook};

pub mod routes;

#[derive(Debug, Clone, PartialEq)]
/// The phonebook was unable to service you, for any of these reasons.
pub enum ServiceError {
    /// A create or update payload lacked a field; holds what was missing,
    /// e.g. `"name"` or `"name and number"`.
    MissingField(&'static str),
    /// The id in the path can't be an id the store hands out.
    MalformedId,
    /// The request body wasn't a JSON object we could read.
    MalformedBody(String),
    /// The contact breaks the field constraints; holds a readable reason.
    ValidationFailed(String),
    /// We don't know anything about what you requested.
    NotFound,
    /// Something went wrong on our end.
    Unhandled,
}
impl ServiceError {
    /// A shortcut for making a `ServiceError::ValidationFailed`.
    /// ```
    /// use phonebook::ServiceError;
    ///
    /// let vf = ServiceError::validation_failed("number: 123 is not a valid phone number!");
    /// let is_vf = matches!(vf, ServiceError::ValidationFailed(_));
    /// assert!(is_vf, "ServiceError::validation_failed() should always return a ValidationFailed variant");
    /// ```
    pub fn validation_failed<T: ToString + ?Sized>(t: &T) -> Self {
        Self::ValidationFailed(t.to_string())
    }

    /// The message sent to the client under the `error` key, if this error has a body at all.
    pub fn reason(&self) -> Option<String> {
        use ServiceError::*;

        match self {
            MissingField(what) => Some(format!("{} missing", what)),
            MalformedId => Some("malformatted id".to_string()),
            MalformedBody(s) => Some(format!("malformatted body: {}", s)),
            ValidationFailed(s) => Some(s.clone()),
            NotFound => None,
            Unhandled => Some("internal server error".to_string()),
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ServiceError::*;

        match self {
            MissingField(what) => write!(f, "Bad Request: {} missing", what),
            MalformedId => write!(f, "Bad Request: malformatted id"),
            MalformedBody(s) => write!(f, "Bad Request: malformatted body: {}", s),
            ValidationFailed(s) => write!(f, "Bad Request: {}", s),
            NotFound => write!(f, "No data found"),
            Unhandled => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServiceError {}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        use ServiceError::*;

        match self {
            MissingField(_) | MalformedId | MalformedBody(_) | ValidationFailed(_) => {
                StatusCode::BAD_REQUEST
            }
            NotFound => StatusCode::NOT_FOUND,
            Unhandled => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Unhandled => error!("{}", self),
            _ => info!("{}", self),
        }

        let mut res = HttpResponse::build(self.status_code());
        match self.reason() {
            Some(error) => res.json(ErrorBody { error }),
            None => res.finish(),
        }
    }
}

impl From<mongodb::error::Error> for ServiceError {
    fn from(e: mongodb::error::Error) -> ServiceError {
        error!("mongodb error: {}", e);
        ServiceError::Unhandled
    }
}

impl From<bson::oid::Error> for ServiceError {
    fn from(e: bson::oid::Error) -> ServiceError {
        debug!("bad object id: {}", e);
        ServiceError::MalformedId
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> ServiceError {
        error!("serde json error: {}", e);
        ServiceError::Unhandled
    }
}
