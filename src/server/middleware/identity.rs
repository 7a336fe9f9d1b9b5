//! Request identity resolution.
//!
//! Each request may carry a bearer token, a session cookie, both or neither. The
//! `IdentityResolver` asks each `IdentityStrategy` in a fixed order (token first, then
//! session) and the first one to produce an identity wins. A strategy that finds
//! credentials it cannot accept never fails the request; it only makes the resolver
//! move on to the next strategy.

use std::{convert::Infallible, sync::Arc};

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use chrono::Utc;
use tower_sessions::Session;

use crate::server::{
    middleware::{session::AuthSession, token::TokenDecoder},
    model::identity::{Identity, Resolution},
    state::AppState,
};

/// Raw credentials pulled from a request.
#[derive(Default)]
pub struct Credentials {
    /// Value of `Authorization: Bearer <token>`, without the scheme.
    pub bearer: Option<String>,
    /// Cookie session, present when the session layer is installed.
    pub session: Option<Session>,
}

impl Credentials {
    /// Extracts the bearer token from the `Authorization` header.
    ///
    /// Returns `None` when the header is missing, not valid UTF-8, uses another scheme
    /// or carries an empty token.
    pub fn bearer_from_headers(headers: &HeaderMap) -> Option<String> {
        let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        let (scheme, token) = value.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }

        let token = token.trim();
        (!token.is_empty()).then(|| token.to_string())
    }
}

/// Result of a single strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt {
    Resolved(Identity),
    /// The strategy's credential was not presented.
    NotPresented,
    /// The credential was presented but could not be accepted.
    Rejected,
}

/// One way of turning request credentials into an identity.
#[async_trait]
pub trait IdentityStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(&self, credentials: &Credentials) -> Attempt;
}

/// Resolves identity from a bearer token's claims.
pub struct TokenStrategy {
    decoder: Arc<TokenDecoder>,
}

impl TokenStrategy {
    pub fn new(decoder: Arc<TokenDecoder>) -> Self {
        Self { decoder }
    }
}

#[async_trait]
impl IdentityStrategy for TokenStrategy {
    fn name(&self) -> &'static str {
        "token"
    }

    async fn attempt(&self, credentials: &Credentials) -> Attempt {
        let Some(token) = credentials.bearer.as_deref() else {
            return Attempt::NotPresented;
        };

        match self.decoder.decode(token, Utc::now().timestamp()) {
            Ok(identity) => Attempt::Resolved(identity),
            Err(e) => {
                tracing::debug!("Ignoring bearer token: {}", e);
                Attempt::Rejected
            }
        }
    }
}

/// Resolves identity from the cookie session.
pub struct SessionStrategy;

#[async_trait]
impl IdentityStrategy for SessionStrategy {
    fn name(&self) -> &'static str {
        "session"
    }

    async fn attempt(&self, credentials: &Credentials) -> Attempt {
        let Some(session) = credentials.session.as_ref() else {
            return Attempt::NotPresented;
        };

        match AuthSession::new(session).get_identity().await {
            Ok(Some(identity)) => Attempt::Resolved(identity),
            Ok(None) => Attempt::NotPresented,
            Err(e) => {
                tracing::debug!("Ignoring unreadable session: {}", e);
                Attempt::Rejected
            }
        }
    }
}

/// Ordered chain of identity strategies.
pub struct IdentityResolver {
    strategies: Vec<Box<dyn IdentityStrategy>>,
}

impl IdentityResolver {
    pub fn new(strategies: Vec<Box<dyn IdentityStrategy>>) -> Self {
        Self { strategies }
    }

    /// Token strategy followed by session strategy.
    pub fn standard(decoder: Arc<TokenDecoder>) -> Self {
        Self::new(vec![
            Box::new(TokenStrategy::new(decoder)),
            Box::new(SessionStrategy),
        ])
    }

    /// Runs strategies in order until one resolves.
    ///
    /// # Returns
    /// - `Resolution::Resolved` - First identity produced
    /// - `Resolution::MalformedIgnored` - No identity, but at least one strategy rejected
    ///   presented credentials
    /// - `Resolution::Absent` - No credentials were presented at all
    pub async fn resolve(&self, credentials: &Credentials) -> Resolution {
        let mut rejected = false;

        for strategy in &self.strategies {
            match strategy.attempt(credentials).await {
                Attempt::Resolved(identity) => {
                    tracing::debug!(
                        "Resolved subject {} via {}",
                        identity.subject,
                        strategy.name()
                    );
                    return Resolution::Resolved(identity);
                }
                Attempt::Rejected => rejected = true,
                Attempt::NotPresented => {}
            }
        }

        if rejected {
            Resolution::MalformedIgnored
        } else {
            Resolution::Absent
        }
    }
}

/// Extractor yielding the caller's identity if one could be resolved.
///
/// Never rejects: handlers decide whether an absent identity is an error.
pub struct MaybeIdentity(pub Resolution);

impl MaybeIdentity {
    pub fn into_identity(self) -> Option<Identity> {
        self.0.into_identity()
    }
}

impl FromRequestParts<AppState> for MaybeIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credentials = Credentials {
            bearer: Credentials::bearer_from_headers(&parts.headers),
            session: Session::from_request_parts(parts, state).await.ok(),
        };

        let resolution = IdentityResolver::standard(state.token_decoder.clone())
            .resolve(&credentials)
            .await;

        Ok(Self(resolution))
    }
}
