use crate::routes::*;
use actix_web::dev::Server;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use notesvc::BoxedNoteStore;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// Build the HTTP server on an already bound listener.
///
/// The caller keeps a clone of `note_store` so that it can be closed once the server stops.
pub fn run(
    listener: TcpListener,
    note_store: Data<BoxedNoteStore>,
) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(TracingLogger::default())
            .service(web::scope("/notes").configure(notes_config))
            .configure(index_config)
            .app_data(note_store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
