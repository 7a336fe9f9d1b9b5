//! Request-scoped identity models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::user::UserDto;

/// The authenticated caller of a request.
///
/// Derived either from bearer token claims or from the cookie session; never
/// persisted beyond the session that carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Subject id issued by the identity provider.
    pub subject: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
    #[serde(default)]
    pub app_metadata: Map<String, Value>,
}

impl Identity {
    /// Display name from the `display_name` or `full_name` user metadata claim.
    pub fn display_name(&self) -> Option<String> {
        self.user_metadata
            .get("display_name")
            .or_else(|| self.user_metadata.get("full_name"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    pub fn into_dto(self, is_admin: bool) -> UserDto {
        UserDto {
            display_name: self.display_name(),
            id: self.subject,
            email: self.email,
            is_admin,
        }
    }
}

/// Claims carried in the middle segment of a bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    pub sub: Option<String>,
    pub email: Option<String>,
    /// Expiry as seconds since the Unix epoch. Issuers may send a fractional value.
    pub exp: Option<f64>,
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
    #[serde(default)]
    pub app_metadata: Map<String, Value>,
}

/// Outcome of identity resolution for a single request.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A strategy produced an identity.
    Resolved(Identity),
    /// No credentials were presented.
    Absent,
    /// Credentials were presented but rejected; the request proceeds unauthenticated.
    MalformedIgnored,
}

impl Resolution {
    pub fn into_identity(self) -> Option<Identity> {
        match self {
            Self::Resolved(identity) => Some(identity),
            _ => None,
        }
    }
}
