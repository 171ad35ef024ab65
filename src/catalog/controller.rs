use axum::{
    extract::{Path, Query, State},
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::find_author_books_cmd::{FindAuthorBooksCommand, FindAuthorBooksCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, query_rejection_to_server_error, rejection_to_server_error, SearchQuery, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(state)
}

fn parse_book(payload: Result<Json<Value>, JsonRejection>) -> Result<BookDto, ServerError> {
    let json = payload.map_err(rejection_to_server_error)?;
    serde_json::from_value(json.0).map_err(json_to_server_error)
}

pub(crate) async fn find_books(
    State(state): State<AppState>,
    search: Result<Query<SearchQuery>, QueryRejection>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let Query(search) = search.map_err(query_rejection_to_server_error)?;
    let req = ListBooksCommandRequest::new(search.term());
    let res = ListBooksCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res.books))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<BookDto>, ServerError> {
    let req = GetBookCommandRequest::new(book_id);
    let res = GetBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res.book))
}

pub(crate) async fn find_author_books(
    State(state): State<AppState>,
    Path(author_id): Path<String>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let req = FindAuthorBooksCommandRequest::new(author_id);
    let res = FindAuthorBooksCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res.books))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<(StatusCode, Json<BookDto>), ServerError> {
    let req = AddBookCommandRequest::new(author_id.as_str(), parse_book(payload)?);
    let res = AddBookCommand::new(build_service(&state)).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res.book)))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<Json<BookDto>, ServerError> {
    let req = UpdateBookCommandRequest::new(book_id.as_str(), parse_book(payload)?);
    let res = UpdateBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res.book))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest::new(book_id);
    let _ = RemoveBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}
