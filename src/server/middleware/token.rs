//! Bearer token decoding.
//!
//! Tokens are three dot-separated URL-safe base64 segments (`header.payload.signature`).
//! The payload is decoded into `Claims`; the signature is only checked when a shared
//! secret is configured.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

use crate::server::model::identity::{Claims, Identity};

type HmacSha256 = Hmac<Sha256>;

/// Why a presented bearer token was not accepted.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token does not have three dot-separated segments")]
    InvalidFormat,
    #[error("token segment is not valid base64url: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    #[error("token claims are not valid JSON: {0}")]
    InvalidClaims(#[from] serde_json::Error),
    #[error("token signature mismatch")]
    InvalidSignature,
    #[error("token has no expiry claim")]
    MissingExpiry,
    #[error("token expired at {exp}, now {now}")]
    Expired { exp: f64, now: i64 },
    #[error("token has no subject claim")]
    MissingSubject,
}

/// Whether token signatures are checked.
#[derive(Clone)]
pub enum TokenVerification {
    /// Claims are trusted as decoded; the issuer must be trusted out-of-band.
    Unverified,
    /// The signature must be a valid HMAC-SHA256 of `header.payload` under this key.
    Hs256(Vec<u8>),
}

impl std::fmt::Debug for TokenVerification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unverified => write!(f, "Unverified"),
            Self::Hs256(_) => write!(f, "Hs256(..)"),
        }
    }
}

/// Decodes bearer tokens into identities.
#[derive(Debug, Clone)]
pub struct TokenDecoder {
    verification: TokenVerification,
}

impl TokenDecoder {
    pub fn new(verification: TokenVerification) -> Self {
        Self { verification }
    }

    pub fn unverified() -> Self {
        Self::new(TokenVerification::Unverified)
    }

    pub fn is_verifying(&self) -> bool {
        matches!(self.verification, TokenVerification::Hs256(_))
    }

    /// Decodes a token and accepts it only if it expires strictly after `now`.
    ///
    /// # Arguments
    /// - `token` - Raw token without the `Bearer ` prefix
    /// - `now` - Current time in seconds since the Unix epoch
    ///
    /// # Returns
    /// - `Ok(Identity)` - Built from the `sub`, `email` and metadata claims
    /// - `Err(TokenError)` - The token is malformed, unsigned, expired or has no subject
    pub fn decode(&self, token: &str, now: i64) -> Result<Identity, TokenError> {
        let mut segments = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::InvalidFormat);
        };
        if header.is_empty() || payload.is_empty() {
            return Err(TokenError::InvalidFormat);
        }

        if let TokenVerification::Hs256(secret) = &self.verification {
            verify_signature(secret, header, payload, signature)?;
        }

        let claims: Claims = serde_json::from_slice(&decode_segment(payload)?)?;

        let exp = claims.exp.ok_or(TokenError::MissingExpiry)?;
        if exp <= now as f64 {
            return Err(TokenError::Expired { exp, now });
        }

        let subject = claims
            .sub
            .filter(|sub| !sub.is_empty())
            .ok_or(TokenError::MissingSubject)?;

        Ok(Identity {
            subject,
            email: claims.email,
            user_metadata: claims.user_metadata,
            app_metadata: claims.app_metadata,
        })
    }
}

/// Decodes a base64url segment, tolerating trailing padding.
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(segment.trim_end_matches('='))
}

fn verify_signature(
    secret: &[u8],
    header: &str,
    payload: &str,
    signature: &str,
) -> Result<(), TokenError> {
    let expected = decode_segment(signature)?;
    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|_| TokenError::InvalidSignature)?;
    mac.update(header.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    mac.verify_slice(&expected)
        .map_err(|_| TokenError::InvalidSignature)
}

/// Builds a signed token for tests.
#[cfg(test)]
pub(crate) fn encode_token(claims: &serde_json::Value, secret: &[u8]) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    let mut mac = HmacSha256::new_from_slice(secret).unwrap();
    mac.update(format!("{}.{}", header, payload).as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
    format!("{}.{}.{}", header, payload, signature)
}
