use actix_web::web::Data;
use notesvc::BoxedNoteStore;
use notesvc_web::configuration::get_configuration;
use notesvc_web::errors::StartupError;
use notesvc_web::startup::run;
use notesvc_web::telemetry::{get_subscriber, init_tracing};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    let configuration = get_configuration()?;
    init_tracing(get_subscriber(&configuration, std::io::stdout));

    let note_store: Data<BoxedNoteStore> = Data::new(configuration.get_note_store().await?);
    let listener = TcpListener::bind(configuration.address())?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    run(listener, note_store.clone())?.await?;

    note_store
        .close()
        .await
        .map_err(StartupError::CloseNoteStore)?;
    Ok(())
}
