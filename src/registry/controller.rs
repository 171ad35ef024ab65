use axum::{
    extract::{Path, Query, State},
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::authors::dto::AuthorDto;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, query_rejection_to_server_error, rejection_to_server_error, SearchQuery, ServerError};
use crate::registry::command::add_author_cmd::{AddAuthorCommand, AddAuthorCommandRequest};
use crate::registry::command::get_author_cmd::{GetAuthorCommand, GetAuthorCommandRequest};
use crate::registry::command::list_authors_cmd::{ListAuthorsCommand, ListAuthorsCommandRequest};
use crate::registry::command::remove_author_cmd::{RemoveAuthorCommand, RemoveAuthorCommandRequest};
use crate::registry::command::update_author_cmd::{UpdateAuthorCommand, UpdateAuthorCommandRequest};
use crate::registry::domain::RegistryService;
use crate::registry::factory;

fn build_service(state: &AppState) -> Box<dyn RegistryService> {
    factory::create_registry_service(state)
}

fn parse_author(payload: Result<Json<Value>, JsonRejection>) -> Result<AuthorDto, ServerError> {
    let json = payload.map_err(rejection_to_server_error)?;
    serde_json::from_value(json.0).map_err(json_to_server_error)
}

pub(crate) async fn find_authors(
    State(state): State<AppState>,
    search: Result<Query<SearchQuery>, QueryRejection>) -> Result<Json<Vec<AuthorDto>>, ServerError> {
    let Query(search) = search.map_err(query_rejection_to_server_error)?;
    let req = ListAuthorsCommandRequest::new(search.term());
    let res = ListAuthorsCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res.authors))
}

pub(crate) async fn find_author_by_id(
    State(state): State<AppState>,
    Path(author_id): Path<String>) -> Result<Json<AuthorDto>, ServerError> {
    let req = GetAuthorCommandRequest::new(author_id);
    let res = GetAuthorCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res.author))
}

pub(crate) async fn add_author(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<(StatusCode, Json<AuthorDto>), ServerError> {
    let req = AddAuthorCommandRequest::new(parse_author(payload)?);
    let res = AddAuthorCommand::new(build_service(&state)).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res.author)))
}

pub(crate) async fn update_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<Json<AuthorDto>, ServerError> {
    let req = UpdateAuthorCommandRequest::new(author_id.as_str(), parse_author(payload)?);
    let res = UpdateAuthorCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res.author))
}

pub(crate) async fn remove_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>) -> Result<StatusCode, ServerError> {
    let req = RemoveAuthorCommandRequest::new(author_id);
    let _ = RemoveAuthorCommand::new(build_service(&state)).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}
