//! A `PhoneBook` that forgets everything when dropped. Only for tests.

use async_trait::async_trait;
use std::{
    convert::TryFrom,
    sync::{Mutex, MutexGuard},
};

use super::PhoneBook;
use crate::{
    contact::{self, CREATE_CONTEXT, UPDATE_CONTEXT},
    Contact, ContactDocument, NewContact, ServiceError,
};

#[derive(Default)]
pub struct MemoryPhoneBook {
    people: Mutex<Vec<ContactDocument>>,
}

impl MemoryPhoneBook {
    fn people(&self) -> Result<MutexGuard<'_, Vec<ContactDocument>>, ServiceError> {
        self.people.lock().map_err(|_| ServiceError::Unhandled)
    }
}

#[async_trait]
impl PhoneBook for MemoryPhoneBook {
    async fn count(&self) -> Result<u64, ServiceError> {
        u64::try_from(self.people()?.len()).map_err(|_| ServiceError::Unhandled)
    }

    async fn list_all(&self) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.people()?.iter().cloned().map(Contact::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, ServiceError> {
        let id = contact::parse_id(id)?;

        Ok(self
            .people()?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .map(Contact::from))
    }

    async fn create(&self, contact: NewContact) -> Result<Contact, ServiceError> {
        contact.validate(CREATE_CONTEXT)?;

        let doc = ContactDocument::assign_id(contact);
        self.people()?.push(doc.clone());

        Ok(doc.into())
    }

    async fn update_by_id(&self, id: &str, contact: NewContact) -> Result<Contact, ServiceError> {
        let id = contact::parse_id(id)?;
        contact.validate(UPDATE_CONTEXT)?;

        let mut people = self.people()?;
        let doc = people
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ServiceError::NotFound)?;
        doc.name = contact.name;
        doc.number = contact.number;

        Ok(doc.clone().into())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        let id = contact::parse_id(id)?;
        self.people()?.retain(|p| p.id != id);

        Ok(())
    }
}
