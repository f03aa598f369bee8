//! The HTTP surface: `/info` and the `/api/people` resource.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Local;
use log::*;

use crate::{
    contact::{ContactPayload, CREATE_CONTEXT, UPDATE_CONTEXT},
    PhoneBook, ServiceError,
};


type Book = web::Data<dyn PhoneBook>;

/// Registers every route, plus a JSON body config that answers bad bodies
/// the same way as every other client error.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ServiceError::MalformedBody(err.to_string()).into()
    }))
    .service(info)
    .service(
        web::scope("/api")
            .service(list_people)
            .service(get_person)
            .service(create_person)
            .service(update_person)
            .service(delete_person),
    );
}

/// Renders a timestamp the way browsers print a `Date`,
/// e.g. `Mon Oct 19 2026 14:03:07 GMT+0200`.
fn now() -> String {
    Local::now().format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

#[get("/info")]
/// How many contacts there are, as a little bit of HTML.
pub async fn info(book: Book) -> Result<HttpResponse, ServiceError> {
    debug!("servicing info request");

    let count = book.count().await?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(format!(
            "<p>Phonebook has info for {} people</p>\n<p>{}</p>\n",
            count,
            now()
        )))
}

#[get("/people")]
pub async fn list_people(book: Book) -> Result<HttpResponse, ServiceError> {
    debug!("servicing list_people request");

    Ok(HttpResponse::Ok().json(book.list_all().await?))
}

#[get("/people/{id}")]
pub async fn get_person(
    book: Book,
    id: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    debug!("servicing get_person request");

    let person = book
        .find_by_id(&id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    trace!("found person: {:?}", person);

    Ok(HttpResponse::Ok().json(person))
}

#[post("/people")]
/// Adds a contact. Responds with it, id and all.
pub async fn create_person(
    book: Book,
    body: web::Json<ContactPayload>,
) -> Result<HttpResponse, ServiceError> {
    debug!("servicing create_person request");
    info!("POST /api/people {:?}", body);

    let contact = body.into_inner().into_contact(CREATE_CONTEXT)?;
    let created = book.create(contact).await?;

    Ok(HttpResponse::Ok().json(created))
}

#[put("/people/{id}")]
/// Replaces both the name and the number of a contact.
pub async fn update_person(
    book: Book,
    id: web::Path<String>,
    body: web::Json<ContactPayload>,
) -> Result<HttpResponse, ServiceError> {
    debug!("servicing update_person request");

    let contact = body.into_inner().into_contact(UPDATE_CONTEXT)?;
    let updated = book.update_by_id(&id, contact).await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/people/{id}")]
pub async fn delete_person(
    book: Book,
    id: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    debug!("servicing delete_person request");

    book.delete_by_id(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
