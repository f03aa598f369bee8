use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use phonebook::{Config, MongoPhoneBook, PhoneBook};
use std::{path::Path, sync::Arc};

/// Where the frontend build lives.
const STATIC_DIR: &str = "dist";

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init();

    let config = Config::from_env().map_err(|e| {
        log::error!("bad configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let book: Arc<dyn PhoneBook> = Arc::new(
        MongoPhoneBook::connect(&config.mongodb_uri)
            .await
            .map_err(|e| {
                log::error!("error connecting to MongoDB: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e)
            })?,
    );
    let book = web::Data::from(book);

    let serve_static = Path::new(STATIC_DIR).is_dir();
    if !serve_static {
        log::warn!("no {}/ folder, not serving a frontend", STATIC_DIR);
    }

    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::new("%r %s %b - %D ms"))
            .wrap(Cors::permissive())
            .app_data(book.clone())
            .configure(phonebook::routes::configure);

        // registered last, so that the API wins over any file of the same name
        if serve_static {
            app.service(actix_files::Files::new("/", STATIC_DIR).index_file("index.html"))
        } else {
            app
        }
    })
    .bind(config.bind_addr())?;

    log::info!("Server running on port {}", config.port);
    server.run().await
}
