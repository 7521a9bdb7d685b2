//! Bearer-token validation with `jsonwebtoken`.

use std::collections::HashMap;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::Value;

use crate::config::Config;
use crate::error_handling::AuthError;
use crate::identity::{Authenticator, Principal};

/// Validates HS256-signed JWTs against a shared secret.
///
/// `exp` is always required. Issuer and audience are checked only when configured.
/// Without a secret every token is rejected with `AuthError::NotConfigured`.
pub struct JwtAuthenticator {
    key: Option<DecodingKey>,
    validation: Validation,
    name_claim: String,
}

impl JwtAuthenticator {
    pub fn new(
        secret: Option<&str>,
        issuer: Option<&str>,
        audience: Option<&str>,
        name_claim: impl Into<String>,
    ) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }
        match audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            key: secret.map(|s| DecodingKey::from_secret(s.as_bytes())),
            validation,
            name_claim: name_claim.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        if config.jwt_secret.is_none() {
            log::warn!("No JWT secret configured; authenticated endpoints will reject every request");
        }
        Self::new(
            config.jwt_secret.as_deref(),
            config.jwt_issuer.as_deref(),
            config.jwt_audience.as_deref(),
            config.name_claim.clone(),
        )
    }
}

impl Authenticator for JwtAuthenticator {
    fn authenticate(&self, token: &str) -> Result<Principal, AuthError> {
        let key = self.key.as_ref().ok_or(AuthError::NotConfigured)?;
        let data = decode::<HashMap<String, Value>>(token, key, &self.validation)?;

        // Only scalar claims are exposed; arrays and objects are dropped
        let claims = data
            .claims
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::String(s) => Some((name, s)),
                Value::Number(n) => Some((name, n.to_string())),
                Value::Bool(b) => Some((name, b.to_string())),
                _ => None,
            })
            .collect();

        Ok(Principal::new(claims, self.name_claim.clone()))
    }
}
