use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

/// Profile returned by the provider's userinfo endpoint.
///
/// OpenID providers identify the user with `sub`, others with a string or numeric `id`.
#[derive(Debug, Deserialize)]
pub struct ProviderUserInfo {
    pub sub: Option<String>,
    pub id: Option<serde_json::Value>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

impl ProviderUserInfo {
    /// Stable subject identifier of the account at the provider.
    pub fn provider_id(&self) -> Option<String> {
        if let Some(sub) = self.sub.as_ref().filter(|s| !s.is_empty()) {
            return Some(sub.clone());
        }

        match self.id.as_ref()? {
            serde_json::Value::String(id) if !id.is_empty() => Some(id.clone()),
            serde_json::Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Converts the profile into upsert parameters.
    ///
    /// Accounts without a name fall back to the local part of their email, then to the
    /// provider ID.
    pub fn into_upsert(self, set_admin: bool) -> Result<UpsertUserParam, AppError> {
        let provider_id = self.provider_id().ok_or_else(|| {
            AppError::InternalError("Provider profile has no subject identifier".to_string())
        })?;

        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .or_else(|| {
                self.email
                    .as_deref()
                    .and_then(|email| email.split('@').next())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| provider_id.clone());

        Ok(UpsertUserParam {
            provider_id,
            name,
            email: self.email,
            image: self.picture,
            is_admin: set_admin.then_some(true),
        })
    }
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    userinfo_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Builds the provider authorization URL.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - URL to redirect to and the state value to keep in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url()
    }

    /// Completes the authorization code flow and signs the user in.
    ///
    /// Exchanges the code, fetches the provider profile and upserts the local user.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the provider callback
    /// - `set_admin` - Grant admin, after a valid bootstrap code was presented at login
    ///
    /// # Returns
    /// - `Ok(User)` - Created or refreshed user
    /// - `Err(AuthError::TokenExchange)` - The provider rejected the code
    /// - `Err(AppError::ReqwestErr)` - Userinfo request failed
    /// - `Err(AppError::DbErr)` - Upsert failed
    pub async fn callback(
        &self,
        authorization_code: String,
        set_admin: bool,
    ) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let profile = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderUserInfo>()
            .await?;

        let user = UserRepository::new(self.db)
            .upsert(profile.into_upsert(set_admin)?)
            .await?;

        if set_admin {
            tracing::info!("User {} ({}) has been granted admin", user.name, user.id);
        }

        Ok(user)
    }
}
