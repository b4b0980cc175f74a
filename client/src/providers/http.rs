//! HTTP implementation of the recipe API collaborator.
//!
//! Thin reqwest wrapper: builds the endpoint URLs, attaches the stored
//! token to authenticated requests, and converts every fault - error
//! statuses, transport failures, unusable bodies - into a
//! [`FailureDetail`] instead of propagating it.

use crate::config::ClientConfig;
use crate::constants::endpoints;
use crate::error::{FailureDetail, FieldError};
use crate::providers::api::{AuthSuccess, RecipeApi, RecipePage};
use crate::state::{RecipeId, SessionToken, SigninCredentials, SignupCredentials, UserId};
use serde::de::DeserializeOwned;

/// Production recipe API client backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpRecipeApi {
    /// Create a new API client for the configured base URL.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    fn favorites_url(&self, user_id: &UserId) -> String {
        format!("{}/api/v1/users/{user_id}/recipes", self.config.base_url)
    }
}

impl RecipeApi for HttpRecipeApi {
    async fn signup(
        &self,
        credentials: &SignupCredentials,
    ) -> Result<AuthSuccess, FailureDetail> {
        let response = self
            .client
            .post(self.url(endpoints::SIGNUP))
            .json(credentials)
            .send()
            .await
            .map_err(transport_failure)?;

        read_response(response).await
    }

    async fn signin(
        &self,
        credentials: &SigninCredentials,
    ) -> Result<AuthSuccess, FailureDetail> {
        let response = self
            .client
            .post(self.url(endpoints::SIGNIN))
            .json(credentials)
            .send()
            .await
            .map_err(transport_failure)?;

        read_response(response).await
    }

    async fn recipes_page(&self, page: u32) -> Result<RecipePage, FailureDetail> {
        let response = self
            .client
            .get(self.url(endpoints::RECIPES))
            .query(&[("page", page)])
            .send()
            .await
            .map_err(transport_failure)?;

        read_response(response).await
    }

    async fn add_favorite(
        &self,
        user_id: &UserId,
        recipe_id: &RecipeId,
        token: Option<&SessionToken>,
    ) -> Result<(), FailureDetail> {
        let mut request = self
            .client
            .post(self.favorites_url(user_id))
            .json(&serde_json::json!({ "recipeId": recipe_id }));

        if let Some(token) = token {
            request = request
                .header("x-access-token", token.as_str())
                .header("authorization", token.as_str());
        }

        let response = request.send().await.map_err(transport_failure)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(failure_from_body(
                status.as_u16(),
                response.json::<serde_json::Value>().await.ok(),
            ))
        }
    }
}

/// Convert a reqwest transport error into a status-less failure.
fn transport_failure(error: reqwest::Error) -> FailureDetail {
    tracing::warn!(error = %error, "Request transport failed");
    FailureDetail::transport(error.to_string())
}

/// Read a response: parse the typed body on success, classify otherwise.
async fn read_response<T>(response: reqwest::Response) -> Result<T, FailureDetail>
where
    T: DeserializeOwned,
{
    let status = response.status();

    if status.is_success() {
        response.json::<T>().await.map_err(|error| {
            tracing::warn!(error = %error, "Success response carried an unusable body");
            FailureDetail::transport("malformed response body")
        })
    } else {
        Err(failure_from_body(
            status.as_u16(),
            response.json::<serde_json::Value>().await.ok(),
        ))
    }
}

/// Build a [`FailureDetail`] from an error-status body.
///
/// The server contract is `{"message": "..."}` for single-message failures
/// and `{"message": [{"msg": ..., "param": ...}, ...]}` for field-level
/// validation. Anything else degrades to a status-less generic failure so
/// classification lands on the unknown branch instead of surfacing an
/// invented server message.
fn failure_from_body(status_code: u16, body: Option<serde_json::Value>) -> FailureDetail {
    match body.as_ref().and_then(|body| body.get("message")) {
        Some(serde_json::Value::String(text)) => FailureDetail::text(status_code, text.clone()),
        Some(serde_json::Value::Array(entries)) => {
            let fields: Vec<FieldError> = entries.iter().filter_map(field_entry).collect();
            if fields.is_empty() {
                tracing::warn!(status_code, "Error response carried no usable field entries");
                FailureDetail::transport("unrecognized error response")
            } else {
                FailureDetail::fields(status_code, fields)
            }
        },
        _ => {
            tracing::warn!(status_code, "Error response carried no usable message");
            FailureDetail::transport("unrecognized error response")
        },
    }
}

/// Parse one entry of a field-level validation array, tolerating the key
/// variations the server has used (`msg`/`message`, `param`/`field`).
fn field_entry(entry: &serde_json::Value) -> Option<FieldError> {
    let message = entry
        .get("msg")
        .or_else(|| entry.get("message"))?
        .as_str()?
        .to_owned();

    let field = entry
        .get("param")
        .or_else(|| entry.get("field"))
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_owned();

    Some(FieldError { field, message })
}
