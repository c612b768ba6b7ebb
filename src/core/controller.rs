use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

// AppState owns the collection for the lifetime of the process and hands it to every request.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) books: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        AppState {
            config,
            books: create_book_repository(store),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub(crate) struct ErrorDetail {
    pub detail: String,
}

pub(crate) type ServerError = (StatusCode, Json<ErrorDetail>);

fn server_error(status: StatusCode, detail: String) -> ServerError {
    (status, Json(ErrorDetail { detail }))
}

pub(crate) fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::UNPROCESSABLE_ENTITY, format!("{}", err))
}

pub(crate) fn rejection_to_server_error(err: JsonRejection) -> ServerError {
    server_error(StatusCode::UNPROCESSABLE_ENTITY, err.body_text())
}

pub(crate) async fn not_found() -> ServerError {
    server_error(StatusCode::NOT_FOUND, "Not Found".to_string())
}

pub(crate) async fn method_not_allowed() -> ServerError {
    server_error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { message } => {
                server_error(StatusCode::NOT_FOUND, message)
            }
            CommandError::Runtime { .. } => {
                server_error(StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { message } => {
                server_error(StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            CommandError::Validation { message, .. } => {
                server_error(StatusCode::UNPROCESSABLE_ENTITY, message)
            }
        }
    }
}
