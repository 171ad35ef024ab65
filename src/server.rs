use axum::{
    body::HttpBody,
    routing::get,
    BoxError, Router,
};
use crate::catalog::controller::{add_book, find_author_books, find_book_by_id, find_books, remove_book, update_book};
use crate::core::controller::AppState;
use crate::registry::controller::{add_author, find_author_by_id, find_authors, remove_author, update_author};

// every endpoint is served under this prefix
pub const API_PREFIX: &str = "/api/v1";

pub fn app<B>(state: AppState) -> Router<(), B>
where
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    let routes = Router::new()
        .route("/authors", get(find_authors).post(add_author))
        .route("/authors/:id",
               get(find_author_by_id).put(update_author).delete(remove_author))
        .route("/authors/:id/books", get(find_author_books).post(add_book))
        .route("/books", get(find_books))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book));
    Router::new()
        .nest(API_PREFIX, routes)
        .with_state(state)
}
