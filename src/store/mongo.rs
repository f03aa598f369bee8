use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use log::*;
use mongodb::{
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};

use super::PhoneBook;
use crate::{
    contact::{self, CREATE_CONTEXT, UPDATE_CONTEXT},
    data, Contact, ContactDocument, NewContact, ServiceError,
};

/// Contacts kept in a MongoDB collection.
#[derive(Clone)]
pub struct MongoPhoneBook {
    people: Collection<ContactDocument>,
}

impl MongoPhoneBook {
    pub fn new(people: Collection<ContactDocument>) -> Self {
        Self { people }
    }

    /// Connects to the database named by `uri` and uses its `people` collection.
    pub async fn connect(uri: &str) -> Result<Self, ServiceError> {
        Ok(Self::new(data::people(uri).await?))
    }
}

#[async_trait]
impl PhoneBook for MongoPhoneBook {
    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.people.count_documents(None, None).await?)
    }

    async fn list_all(&self) -> Result<Vec<Contact>, ServiceError> {
        let docs: Vec<ContactDocument> = self.people.find(None, None).await?.try_collect().await?;
        trace!("listed {} contacts", docs.len());

        Ok(docs.into_iter().map(Contact::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, ServiceError> {
        let id = contact::parse_id(id)?;
        let found = self.people.find_one(doc! { "_id": id }, None).await?;

        Ok(found.map(Contact::from))
    }

    async fn create(&self, contact: NewContact) -> Result<Contact, ServiceError> {
        contact.validate(CREATE_CONTEXT)?;

        let doc = ContactDocument::assign_id(contact);
        self.people.insert_one(&doc, None).await?;
        debug!("created contact {}", doc.id);

        Ok(doc.into())
    }

    async fn update_by_id(&self, id: &str, contact: NewContact) -> Result<Contact, ServiceError> {
        let id = contact::parse_id(id)?;
        contact.validate(UPDATE_CONTEXT)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self
            .people
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": { "name": contact.name, "number": contact.number } },
                options,
            )
            .await?
            .ok_or(ServiceError::NotFound)?;
        debug!("updated contact {}", id);

        Ok(updated.into())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        let id = contact::parse_id(id)?;
        let res = self.people.delete_one(doc! { "_id": id }, None).await?;
        debug!("deleted {} contact(s) with id {}", res.deleted_count, id);

        Ok(())
    }
}
