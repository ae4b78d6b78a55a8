use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        contact::{self, CONTACT_TAG},
        group::{self, GROUP_TAG},
    },
    middleware::auth::require_bearer,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Address Book API", description = "Contacts and groups of an address book"),
    modifiers(&SecurityAddon),
    tags(
        (name = CONTACT_TAG, description = "Contact management"),
        (name = GROUP_TAG, description = "Group management")
    )
)]
struct ApiDoc;

/// Registers the bearer token security scheme referenced by every resource route.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// Builds the application router.
///
/// Resource routes sit behind the bearer token guard; the OpenAPI document and Swagger
/// UI are served without authentication.
///
/// # Arguments
/// - `state` - Shared application state
///
/// # Returns
/// - `Router` - Router ready to be served
pub fn router(state: AppState) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            contact::get_contacts,
            contact::create_contact,
            contact::update_contact,
            contact::delete_contact
        ))
        .routes(routes!(contact::get_contact))
        .routes(routes!(group::get_groups, group::create_group))
        .routes(routes!(group::get_group, group::update_group, group::delete_group))
        .split_for_parts();

    let api_router =
        api_router.route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    api_router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
