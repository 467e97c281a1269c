use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use notesvc::errors::NoteStoreError;
use std::num::ParseIntError;
use thiserror::Error;

/// Failure of a request to the note service.
///
/// All failures share one HTTP status; the message is sent back as the response body.
#[derive(Error, Debug)]
pub enum NoteServiceError {
    #[error(transparent)]
    NoteStore(#[from] NoteStoreError),
    #[error(transparent)]
    PathParameter(#[from] ParseIntError),
    #[error(transparent)]
    RequestBody(#[from] serde_json::Error),
}

impl ResponseError for NoteServiceError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            NoteServiceError::NoteStore(e) => error!("Note store error {:?}", e),
            _ => debug!("Bad request {:?}", self),
        }
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("failed to read configuration")]
    Configuration(#[from] config::ConfigError),
    #[error("when notestoretype is set to PostgreSQL, you must configure the keys under database")]
    MissingDatabaseSettings,
    #[error("password expected when a database username is set")]
    MissingDatabasePassword,
    #[error("failed to open the note store")]
    NoteStore(#[from] NoteStoreError),
    #[error("failed to close the note store")]
    CloseNoteStore(#[source] NoteStoreError),
    #[error("failed to start the HTTP server")]
    Io(#[from] std::io::Error),
}
