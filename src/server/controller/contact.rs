use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::PaginationParams, contact::ContactDto},
    server::{
        error::AppError, model::contact::ContactParams, service::contact::ContactService,
        state::AppState,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// List contacts.
///
/// Returns one page of contacts ordered by first name, each with the names of the
/// groups it belongs to.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (pageNumber and pageSize)
///
/// # Returns
/// - `200 OK` - JSON array of contacts
/// - `400 Bad Request` - Page number less than 1
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/contacts",
    tag = CONTACT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of contacts", body = Vec<ContactDto>),
        (status = 400, description = "Invalid page number", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or rejected bearer token", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    security(("bearer" = [])),
)]
pub async fn get_contacts(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ContactService::new(&state.db);

    let contacts = service
        .get_paginated(params.page_number, params.page_size)
        .await?;

    let dtos: Vec<ContactDto> = contacts.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a contact by name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `first_name` - Contact's first name
/// - `last_name` - Contact's last name
///
/// # Returns
/// - `200 OK` - The contact
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `404 Not Found` - No contact with that name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/contacts/{first_name}/{last_name}",
    tag = CONTACT_TAG,
    params(
        ("first_name" = String, Path, description = "Contact first name"),
        ("last_name" = String, Path, description = "Contact last name")
    ),
    responses(
        (status = 200, description = "The contact", body = ContactDto),
        (status = 400, description = "Invalid name", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or rejected bearer token", body = String, content_type = "text/plain"),
        (status = 404, description = "Contact not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    security(("bearer" = [])),
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path((first_name, last_name)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = ContactService::new(&state.db);

    let contact = service.get_by_name(&first_name, &last_name).await?;

    Ok((StatusCode::OK, Json(contact.into_dto())))
}

/// Create a contact.
///
/// Stores a new contact and joins it to the groups listed in `groupNames`, all of
/// which must already exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Contact to create
///
/// # Returns
/// - `201 Created` - The stored contact, with its URL in the `Location` header
/// - `400 Bad Request` - Invalid contact data
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `409 Conflict` - Contact already exists or a listed group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/contacts",
    tag = CONTACT_TAG,
    request_body = ContactDto,
    responses(
        (status = 201, description = "Contact created", body = ContactDto,
            headers(("Location" = String, description = "URL of the new contact"))),
        (status = 400, description = "Invalid contact data", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or rejected bearer token", body = String, content_type = "text/plain"),
        (status = 409, description = "Contact exists or group missing", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    security(("bearer" = [])),
)]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = ContactParams::from_dto(payload);
    params.validate()?;

    let service = ContactService::new(&state.db);

    let contact = service.create(params).await?;

    let location = format!(
        "/contacts/{}/{}",
        urlencoding::encode(&contact.first_name),
        urlencoding::encode(&contact.last_name)
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(contact.into_dto()),
    ))
}

/// Update a contact.
///
/// The contact is identified by `firstName` and `lastName`. Its phone number, email
/// and group memberships are replaced by the values in the body.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Contact with the new values
///
/// # Returns
/// - `200 OK` - The updated contact
/// - `400 Bad Request` - Invalid contact data
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `409 Conflict` - Contact or a listed group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/contacts",
    tag = CONTACT_TAG,
    request_body = ContactDto,
    responses(
        (status = 200, description = "Contact updated", body = ContactDto),
        (status = 400, description = "Invalid contact data", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or rejected bearer token", body = String, content_type = "text/plain"),
        (status = 409, description = "Contact or group missing", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    security(("bearer" = [])),
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = ContactParams::from_dto(payload);
    params.validate()?;

    let service = ContactService::new(&state.db);

    let contact = service.update(params).await?;

    Ok((StatusCode::OK, Json(contact.into_dto())))
}

/// Delete a contact.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Contact to delete, identified by `firstName` and `lastName`
///
/// # Returns
/// - `200 OK` - The removed contact
/// - `400 Bad Request` - Invalid contact data
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `409 Conflict` - Contact does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/contacts",
    tag = CONTACT_TAG,
    request_body = ContactDto,
    responses(
        (status = 200, description = "Contact deleted", body = ContactDto),
        (status = 400, description = "Invalid contact data", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or rejected bearer token", body = String, content_type = "text/plain"),
        (status = 409, description = "Contact does not exist", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    security(("bearer" = [])),
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = ContactParams::from_dto(payload);
    params.validate()?;

    let service = ContactService::new(&state.db);

    let contact = service.delete(params).await?;

    Ok((StatusCode::OK, Json(contact.into_dto())))
}
