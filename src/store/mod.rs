//! The narrow door every contact read and write goes through.

use async_trait::async_trait;

use crate::{Contact, NewContact, ServiceError};

mod mongo;
pub use mongo::MongoPhoneBook;

#[cfg(test)]
pub mod memory;
#[cfg(test)]
pub use memory::MemoryPhoneBook;


/// CRUD over the stored contacts. Implementations own the canonical state;
/// callers keep nothing between requests.
///
/// Failures come back already classified: `MalformedId` for ids the store could never
/// have handed out, `ValidationFailed` for contacts that break the schema,
/// `NotFound` for updates of nothing, and `Unhandled` for the store itself failing.
#[async_trait]
pub trait PhoneBook: Send + Sync {
    /// How many contacts are stored.
    async fn count(&self) -> Result<u64, ServiceError>;

    /// Every stored contact, in whatever order the store keeps them.
    async fn list_all(&self) -> Result<Vec<Contact>, ServiceError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, ServiceError>;

    /// Checks `contact` against the schema, then stores it under a fresh id.
    async fn create(&self, contact: NewContact) -> Result<Contact, ServiceError>;

    /// Replaces both fields of an existing contact, returning it as it is after the update.
    async fn update_by_id(&self, id: &str, contact: NewContact) -> Result<Contact, ServiceError>;

    /// Removes a contact. Removing one that isn't there is fine too.
    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError>;
}
