use std::sync::Arc;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use crate::authors::factory::create_author_repository;
use crate::authors::repository::AuthorRepository;
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

// AppState is shared by every handler; the repositories are built once so
// that all requests see the same store.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
    pub(crate) author_repository: Arc<dyn AuthorRepository>,
    pub(crate) book_repository: Arc<dyn BookRepository>,
}

impl AppState {
    pub(crate) fn new(config: Configuration, store: RepositoryStore,
                      author_repository: Arc<dyn AuthorRepository>,
                      book_repository: Arc<dyn BookRepository>) -> AppState {
        AppState {
            config,
            store,
            author_repository,
            book_repository,
        }
    }

    pub async fn build(config: Configuration, store: RepositoryStore) -> AppState {
        let author_repository = create_author_repository(&config, store).await;
        let book_repository = create_book_repository(&config, store).await;
        AppState::new(config, store, author_repository, book_repository)
    }
}

// SearchQuery is the optional `q` parameter of the list endpoints
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    // an empty query lists everything
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct ErrorBody {
    pub kind: String,
    pub message: String,
}

#[derive(Debug)]
pub(crate) struct ServerError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ServerError {
    pub fn new(status: StatusCode, kind: &str, message: &str) -> ServerError {
        ServerError {
            status,
            body: ErrorBody { kind: kind.to_string(), message: message.to_string() },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::new(StatusCode::BAD_REQUEST, "Serialization", format!("{}", err).as_str())
}

pub fn rejection_to_server_error(err: JsonRejection) -> ServerError {
    ServerError::new(StatusCode::BAD_REQUEST, "Serialization", err.body_text().as_str())
}

pub fn query_rejection_to_server_error(err: QueryRejection) -> ServerError {
    ServerError::new(StatusCode::BAD_REQUEST, "Serialization", err.body_text().as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let (status, kind) = match err {
            CommandError::Database { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Database"),
            CommandError::DuplicateKey { .. } => (StatusCode::CONFLICT, "DuplicateKey"),
            CommandError::NotFound { .. } => (StatusCode::NOT_FOUND, "NotFound"),
            CommandError::Runtime { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Runtime"),
            CommandError::Serialization { .. } => (StatusCode::BAD_REQUEST, "Serialization"),
            CommandError::Validation { .. } => (StatusCode::BAD_REQUEST, "Validation"),
            // removing an author that still owns books is a client error
            CommandError::Conflict { .. } => (StatusCode::BAD_REQUEST, "Conflict"),
            CommandError::Unexpected { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Unexpected"),
        };
        ServerError::new(status, kind, err.message())
    }
}
