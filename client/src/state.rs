//! Client state types.
//!
//! This module defines the state slices the reducers operate on and the
//! domain values they carry. All types are `Clone` to support the
//! functional architecture pattern.

use crate::error::FailureDetail;
use serde::{Deserialize, Deserializer, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// ID Types
// ═══════════════════════════════════════════════════════════════════════

/// Deserialize a server-assigned id from either a JSON string or a JSON
/// number.
///
/// Ids are opaque to the client; the API surfaces them in both positions,
/// so the client accepts both and normalizes to a string.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number id, got {other}"
        ))),
    }
}

/// Server-assigned user identifier (opaque).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw id value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        id_string(deserializer).map(Self)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-assigned recipe identifier (opaque).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Wrap a raw id value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        id_string(deserializer).map(Self)
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Session Types
// ═══════════════════════════════════════════════════════════════════════

/// Opaque session credential.
///
/// The client stores and forwards the token; it never inspects the value.
/// `Debug` is redacted so the credential cannot leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value, for attaching to authenticated requests.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionToken(<redacted>)")
    }
}

/// Server-assigned user identity.
///
/// Owned by the session; immutable from the client's perspective except by
/// re-authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    pub user_id: UserId,

    /// First name.
    #[serde(default)]
    pub first_name: String,

    /// Last name.
    #[serde(default)]
    pub last_name: String,

    /// Email address.
    #[serde(default)]
    pub email: String,

    /// Phone number, when the server returns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Current session.
///
/// Created on successful signup/signin; absence of a token means
/// unauthenticated. Cleared by explicit logout, which is handled outside
/// this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session token, persisted via the token store on success.
    pub token: Option<SessionToken>,

    /// Authenticated user, when logged in.
    pub user: Option<User>,

    /// Whether the session is authenticated.
    pub logged_in: bool,
}

impl Session {
    /// An authenticated session.
    #[must_use]
    pub const fn authenticated(token: SessionToken, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            logged_in: true,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Credentials
// ═══════════════════════════════════════════════════════════════════════

/// Signup form values.
///
/// Doubles as the exact signup wire payload; no other fields are ever
/// sent. Transient - never persisted beyond the request. `Debug` redacts
/// the password fields.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupCredentials {
    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Email address.
    pub email: String,

    /// Phone number.
    pub phone: String,

    /// Password.
    pub password: String,

    /// Password confirmation; must match `password`.
    pub confirm_password: String,
}

impl std::fmt::Debug for SignupCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupCredentials")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

/// Sign-in form values.
///
/// Doubles as the exact sign-in wire payload: only email and password are
/// ever transmitted, whatever shape the form had. `Debug` redacts the
/// password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninCredentials {
    /// Email address.
    pub email: String,

    /// Password.
    pub password: String,
}

impl std::fmt::Debug for SigninCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigninCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Recipe Listing
// ═══════════════════════════════════════════════════════════════════════

/// Read-only projection of a recipe used for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// Server-assigned identifier.
    pub id: RecipeId,

    /// Recipe title.
    pub title: String,

    /// Short description shown on the listing card.
    #[serde(default)]
    pub description: String,

    /// Id of the user who published the recipe.
    pub user_id: UserId,
}

// ═══════════════════════════════════════════════════════════════════════
// Request Status
// ═══════════════════════════════════════════════════════════════════════

/// Status of one logical request operation.
///
/// Exactly one value is live per operation at a time; a new dispatch of the
/// same operation overwrites the prior status (last-write-wins, no
/// queuing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    /// No request has been dispatched yet.
    #[default]
    Idle,

    /// A request has been issued and no terminal event has arrived.
    InFlight,

    /// The most recent request completed successfully.
    Succeeded,

    /// The most recent request failed.
    Failed(FailureDetail),
}

impl RequestStatus {
    /// Whether a request is currently in flight.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Whether the status is terminal (succeeded or failed).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }

    /// The failure detail, when the status is `Failed`.
    #[must_use]
    pub const fn failure(&self) -> Option<&FailureDetail> {
        match self {
            Self::Failed(detail) => Some(detail),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// State Slices
// ═══════════════════════════════════════════════════════════════════════

/// Authentication slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Current session.
    pub session: Session,

    /// Status of the signup operation.
    pub signup: RequestStatus,

    /// Status of the sign-in operation.
    pub signin: RequestStatus,
}

/// Recipe-listing slice.
///
/// `items` reflects only the currently loaded page, never an accumulation
/// across pages. Once a fetch has succeeded,
/// `1 <= current_page <= total_pages` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeListState {
    /// Recipes of the currently loaded page, in server order.
    pub items: Vec<RecipeSummary>,

    /// Page the user most recently requested (updated optimistically while
    /// a fetch is in flight).
    pub current_page: u32,

    /// Total number of pages reported by the last successful fetch.
    pub total_pages: u32,

    /// Status of the page-fetch operation.
    pub fetch: RequestStatus,

    /// Status of the favorite-toggle operation.
    pub favorite: RequestStatus,
}

impl Default for RecipeListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
            fetch: RequestStatus::Idle,
            favorite: RequestStatus::Idle,
        }
    }
}
