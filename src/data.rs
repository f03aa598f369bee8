use mongodb::{options::ClientOptions, Client, Collection, Database};
use url::Url;

use crate::ContactDocument;

/// Database used when the connection string doesn't name one.
pub const DEFAULT_DATABASE: &str = "phonebook";
/// Collection that holds every contact.
pub const PEOPLE_COLLECTION: &str = "people";

/// Returns a mongo client for the given connection string.
pub async fn get_mongo_client(uri: &str) -> Result<Client, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(uri).await?;
    client_options
        .app_name
        .get_or_insert_with(|| "phonebook".to_string());

    Client::with_options(client_options)
}

/// The database named in the connection string, or `DEFAULT_DATABASE`.
pub fn get_mongo_database(client: &Client) -> Database {
    client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE))
}

/// Returns the collection of contacts.
pub async fn people(uri: &str) -> Result<Collection<ContactDocument>, mongodb::error::Error> {
    let client = get_mongo_client(uri).await?;
    log::info!("connecting to {}", redact(uri));

    Ok(get_mongo_database(&client).collection(PEOPLE_COLLECTION))
}

/// Hides the password in a connection string so it can be logged.
/// Strings that don't parse as a single URL (e.g. seed lists) aren't echoed at all.
pub fn redact(uri: &str) -> String {
    let mut url = match Url::parse(uri) {
        Ok(url) => url,
        Err(_) => return "<unparseable connection string>".to_string(),
    };
    if url.password().is_some() && url.set_password(Some("****")).is_err() {
        return "<unparseable connection string>".to_string();
    }

    url.to_string()
}
