use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::PaginationParams,
        group::{CreateGroupDto, GroupDto, UpdateGroupDto},
    },
    server::{
        error::AppError,
        model::group::{CreateGroupParams, UpdateGroupParams},
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// List groups.
///
/// Returns one page of groups ordered by name, each with its member contacts.
///
/// # Returns
/// - `200 OK` - JSON array of groups
/// - `400 Bad Request` - Page number less than 1
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/groups",
    tag = GROUP_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of groups", body = Vec<GroupDto>),
        (status = 400, description = "Invalid page number", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or rejected bearer token", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    security(("bearer" = [])),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let groups = service
        .get_paginated(params.page_number, params.page_size)
        .await?;

    let dtos: Vec<GroupDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a group by name.
///
/// # Returns
/// - `200 OK` - The group with its members
/// - `400 Bad Request` - Invalid group name
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `404 Not Found` - No group with that name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/groups/{name}",
    tag = GROUP_TAG,
    params(
        ("name" = String, Path, description = "Group name")
    ),
    responses(
        (status = 200, description = "The group", body = GroupDto),
        (status = 400, description = "Invalid group name", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or rejected bearer token", body = String, content_type = "text/plain"),
        (status = 404, description = "Group not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    security(("bearer" = [])),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let group = service.get_by_name(&name).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Create a group.
///
/// # Returns
/// - `201 Created` - The stored group, with its URL in the `Location` header
/// - `400 Bad Request` - Invalid group name
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `409 Conflict` - Group already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto,
            headers(("Location" = String, description = "URL of the new group"))),
        (status = 400, description = "Invalid group name", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or rejected bearer token", body = String, content_type = "text/plain"),
        (status = 409, description = "Group already exists", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    security(("bearer" = [])),
)]
pub async fn create_group(
    State(state): State<AppState>,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateGroupParams::from_dto(payload);
    params.validate()?;

    let service = GroupService::new(&state.db);

    let group = service.create(params).await?;

    let location = format!("/groups/{}", urlencoding::encode(&group.name));

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(group.into_dto()),
    ))
}

/// Rename a group.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `name` - Current name of the group
/// - `payload` - New name
///
/// # Returns
/// - `200 OK` - The renamed group
/// - `400 Bad Request` - Invalid current or new name
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `409 Conflict` - Group does not exist or the new name is taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/groups/{name}",
    tag = GROUP_TAG,
    params(
        ("name" = String, Path, description = "Current group name")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Group renamed", body = GroupDto),
        (status = 400, description = "Invalid group name", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or rejected bearer token", body = String, content_type = "text/plain"),
        (status = 409, description = "Group missing or name taken", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    security(("bearer" = [])),
)]
pub async fn update_group(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateGroupParams::from_dto(name, payload);
    params.validate()?;

    let service = GroupService::new(&state.db);

    let group = service.update(params).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group.
///
/// Member contacts are kept; they only lose their membership.
///
/// # Returns
/// - `200 OK` - The removed group
/// - `400 Bad Request` - Invalid group name
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `409 Conflict` - Group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/groups/{name}",
    tag = GROUP_TAG,
    params(
        ("name" = String, Path, description = "Group name")
    ),
    responses(
        (status = 200, description = "Group deleted", body = GroupDto),
        (status = 400, description = "Invalid group name", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or rejected bearer token", body = String, content_type = "text/plain"),
        (status = 409, description = "Group does not exist", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    security(("bearer" = [])),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let group = service.delete(&name).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}
