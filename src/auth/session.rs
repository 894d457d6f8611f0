//! Login and user profile calls.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::auth::AuthError;
use crate::clients::RestClient;
use crate::config::AccessToken;

const LOGIN_PATH: &str = "auth/login";
const USER_INFO_PATH: &str = "user/info/";

/// Login credentials.
///
/// The password is masked in `Debug` output.
#[derive(Clone, Serialize)]
pub struct Credentials {
    /// The login name, usually an email address.
    pub email: String,
    password: String,
}

impl Credentials {
    /// Creates credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"*****")
            .finish()
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Profile of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Exchanges credentials for a bearer token.
///
/// # Errors
///
/// Returns [`AuthError::Rest`] if the login is rejected,
/// [`AuthError::Decode`] if the body is not a login response and
/// [`AuthError::MissingToken`] if it carries no non-empty token.
pub async fn login(client: &RestClient, credentials: &Credentials) -> Result<AccessToken, AuthError> {
    let body = serde_json::to_value(credentials).map_err(|source| AuthError::Decode {
        what: "login request",
        source,
    })?;

    tracing::debug!(email = %credentials.email, "logging in");
    let response = client.post(LOGIN_PATH, body).await?;

    let login: LoginResponse =
        serde_json::from_value(response.body).map_err(|source| AuthError::Decode {
            what: "login response",
            source,
        })?;

    login
        .token
        .and_then(|token| AccessToken::new(token).ok())
        .ok_or(AuthError::MissingToken)
}

/// Fetches the profile of the user the client is authenticated as.
///
/// # Errors
///
/// Returns [`AuthError::Rest`] if the request fails and
/// [`AuthError::Decode`] if the body is not a user profile.
pub async fn user_info(client: &RestClient) -> Result<UserInfo, AuthError> {
    let response = client.get(USER_INFO_PATH, None).await?;

    serde_json::from_value(response.body).map_err(|source| AuthError::Decode {
        what: "user info",
        source,
    })
}
