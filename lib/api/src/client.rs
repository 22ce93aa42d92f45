//! HTTP client for the portal backend.

use async_trait::async_trait;
use case_portal_access::{AccessConfig, Profile, ProfileError, ProfileResolver};
use case_portal_core::{Credential, Identity};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::ApiError;

/// Response wrapper used by every backend endpoint: `{"respuesta": ...}`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    respuesta: Option<T>,
}

/// Decodes an enveloped response body.
///
/// # Errors
///
/// Returns `ApiError::Decode` if the body is not JSON, the envelope is
/// missing, or the payload does not match `T`.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| ApiError::Decode {
        details: e.to_string(),
    })?;
    envelope.respuesta.ok_or_else(|| ApiError::Decode {
        details: "response has no 'respuesta' payload".to_string(),
    })
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginPayload {
    #[serde(alias = "jwt")]
    token: String,
}

/// REST client for login and profile resolution.
#[derive(Debug, Clone)]
pub struct PortalApi {
    http: reqwest::Client,
    config: AccessConfig,
}

impl PortalApi {
    /// Creates a client with a default HTTP client.
    #[must_use]
    pub fn new(config: AccessConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a client reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(http: reqwest::Client, config: AccessConfig) -> Self {
        Self { http, config }
    }

    /// Fetches the profile of `identity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is rejected, the request fails, or
    /// the response has no role.
    pub async fn fetch_profile(
        &self,
        credential: &Credential,
        identity: &Identity,
    ) -> case_portal_core::Result<Profile, ApiError> {
        Ok(self.request_profile(credential, identity).await?)
    }

    /// Exchanges an email and password for a bearer credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the login is rejected or the response carries no
    /// token.
    pub async fn sign_in(
        &self,
        identity: &Identity,
        secret: &str,
    ) -> case_portal_core::Result<Credential, ApiError> {
        Ok(self.request_login(identity, secret).await?)
    }

    #[instrument(skip_all, fields(identity = %identity))]
    async fn request_profile(
        &self,
        credential: &Credential,
        identity: &Identity,
    ) -> Result<Profile, ApiError> {
        let request = self
            .http
            .get(self.config.profile_url(identity.as_str()))
            .header(reqwest::header::AUTHORIZATION, credential.bearer_header());
        let profile: Profile = send_enveloped(request).await?;
        debug!(role = %profile.role(), "profile resolved");
        Ok(profile)
    }

    #[instrument(skip_all, fields(identity = %identity))]
    async fn request_login(&self, identity: &Identity, secret: &str) -> Result<Credential, ApiError> {
        let request = self.http.post(self.config.login_url()).json(&LoginRequest {
            email: identity.as_str(),
            password: secret,
        });
        let payload: LoginPayload = send_enveloped(request).await?;
        let credential = Credential::new(payload.token).map_err(|e| ApiError::Decode {
            details: e.to_string(),
        })?;
        debug!("login accepted");
        Ok(credential)
    }
}

async fn send_enveloped<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ApiError> {
    let response = request.send().await.map_err(|e| ApiError::Transport {
        details: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        debug!(status = status.as_u16(), "backend rejected request");
        return Err(ApiError::from_status(status.as_u16()));
    }

    let body = response.text().await.map_err(|e| ApiError::Transport {
        details: e.to_string(),
    })?;
    decode_envelope(&body)
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ProfileResolver for PortalApi {
    async fn resolve_profile(
        &self,
        credential: &Credential,
        identity: &Identity,
    ) -> Result<Profile, ProfileError> {
        self.fetch_profile(credential, identity).await.map_err(|e| {
            debug!(error = %e, identity = %identity, "profile request failed");
            ProfileError::from(e.current_context().clone())
        })
    }
}
