use oauth2::{basic::BasicClient, ClientId, ClientSecret, IntrospectionUrl};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::auth::IntrospectionTokenVerifier,
};

const DEFAULT_LOG_FILTER: &str = "addressbook=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to info level for this crate and
/// the HTTP trace layer.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used to call the token issuer.
///
/// Redirects are disabled so an introspection request can never be bounced to another
/// host along with the API's client credentials.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the bearer token verifier from configuration.
///
/// # Arguments
/// - `config` - Application configuration with the issuer's introspection endpoint,
///   the API's client credentials, and the required audience and scope
/// - `http_client` - HTTP client for introspection requests
///
/// # Returns
/// - `Ok(IntrospectionTokenVerifier)` - Verifier ready for use
/// - `Err(ConfigError::InvalidValue)` - Introspection URL is not a valid URL
pub fn setup_token_verifier(
    config: &Config,
    http_client: reqwest::Client,
) -> Result<IntrospectionTokenVerifier, AppError> {
    let introspection_url = IntrospectionUrl::new(config.auth_introspection_url.clone())
        .map_err(|e| ConfigError::InvalidValue {
            name: "AUTH_INTROSPECTION_URL".to_string(),
            reason: e.to_string(),
        })?;

    let oauth_client = BasicClient::new(ClientId::new(config.auth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.auth_client_secret.clone()))
        .set_introspection_url(introspection_url);

    Ok(IntrospectionTokenVerifier::new(
        oauth_client,
        http_client,
        config.auth_audience.clone(),
        config.auth_scope.clone(),
    ))
}
