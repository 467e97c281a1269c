use crate::errors::NoteServiceError;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};
use notesvc::{BoxedNoteStore, Note, NoteID};

pub const HELP_MESSAGE: &str = "Available services\n\
    /notes/get/[note_id]\n\
    /notes/list/[list_size]\n\
    /notes/list/[list_size]/[page]\n\
    /notes/create\n \
    POST with a JSON note as body\n\
    /notes/update\n \
    POST with a JSON note as body\n\
    /notes/delete/[note_id]";

type NoteServiceResult = Result<HttpResponse, NoteServiceError>;

/// A missing path parameter reads as an empty string, which then fails to parse.
fn path_parameter<'a>(req: &'a HttpRequest, name: &str) -> &'a str {
    req.match_info().get(name).unwrap_or("")
}

/// Single notes are sent back as a one-element array too.
fn notes_response(notes: &[Note]) -> HttpResponse {
    HttpResponse::Ok().json(notes)
}

#[instrument]
async fn help() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(HELP_MESSAGE)
}

#[instrument(
    skip(req, store),
    fields(
        size = %path_parameter(&req, "size"),
        page = %path_parameter(&req, "page")
    )
)]
async fn list_notes(req: HttpRequest, store: web::Data<BoxedNoteStore>) -> NoteServiceResult {
    let size: i64 = path_parameter(&req, "size").parse()?;
    let page: i64 = match path_parameter(&req, "page") {
        "" => 0,
        page => page.parse()?,
    };
    let notes = store.read_note_list(size, page).await?;
    Ok(notes_response(&notes))
}

#[instrument(
    skip(req, store),
    fields(
        note_id = %path_parameter(&req, "id")
    )
)]
async fn get_note(req: HttpRequest, store: web::Data<BoxedNoteStore>) -> NoteServiceResult {
    let id: NoteID = path_parameter(&req, "id").parse()?;
    let note = store.read_note(id).await?;
    Ok(notes_response(&[note]))
}

#[instrument(skip(body, store))]
async fn create_note(body: web::Bytes, store: web::Data<BoxedNoteStore>) -> NoteServiceResult {
    let note: Note = serde_json::from_slice(&body)?;
    let id = store.add_note(note.clone()).await?;
    Ok(notes_response(&[note.with_id(id)]))
}

#[instrument(skip(body, store))]
async fn update_note(body: web::Bytes, store: web::Data<BoxedNoteStore>) -> NoteServiceResult {
    let note: Note = serde_json::from_slice(&body)?;
    let id = note.id;
    store.update_note(note).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!("Entry with id {} updated", id)))
}

#[instrument(
    skip(req, store),
    fields(
        note_id = %path_parameter(&req, "id")
    )
)]
async fn delete_note(req: HttpRequest, store: web::Data<BoxedNoteStore>) -> NoteServiceResult {
    let id: NoteID = path_parameter(&req, "id").parse()?;
    store.remove_note(id).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!("Entry with id {} deleted", id)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(help))
        .route("/list/{size}", web::get().to(list_notes))
        .route("/list/{size}/{page}", web::get().to(list_notes))
        .route("/get/{id}", web::get().to(get_note))
        .route("/create", web::post().to(create_note))
        .route("/update", web::post().to(update_note))
        .service(
            web::resource("/delete/{id}")
                .route(web::get().to(delete_note))
                .route(web::post().to(delete_note)),
        );
}
