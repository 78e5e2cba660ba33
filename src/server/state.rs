//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through Axum's state
//! extraction. Every field is cheap to clone: the database connection is a pool handle, the
//! HTTP and OAuth clients are reference counted internally, and the admin code service and
//! storage client wrap shared state in `Arc`s.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use super::service::{admin::code::AdminCodeService, photo::storage::StorageClient};

/// Type alias for the OAuth2 client with authorize and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for the OAuth provider. Redirects are disabled.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the authorization code flow.
    pub oauth_client: OAuth2Client,

    /// Endpoint returning the signed-in user's profile for an access token.
    pub oauth_userinfo_url: String,

    /// One-time codes granting admin to the first user when no admin exists.
    pub admin_code_service: AdminCodeService,

    /// Object storage client for photo uploads.
    pub storage: StorageClient,

    /// Public base URL of the web client.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        oauth_userinfo_url: String,
        admin_code_service: AdminCodeService,
        storage: StorageClient,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            oauth_userinfo_url,
            admin_code_service,
            storage,
            app_url,
        }
    }
}
