use crate::errors::NoteServiceError;
use actix_web::{get, web, HttpResponse};
use notesvc::BoxedNoteStore;

/// Succeeds when the note store answers a one-note list query.
#[get("/health_check")]
#[instrument(skip(store))]
async fn health_check(
    store: web::Data<BoxedNoteStore>,
) -> Result<HttpResponse, NoteServiceError> {
    store.read_note_list(1, 0).await?;
    Ok(HttpResponse::Ok().finish())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
}
