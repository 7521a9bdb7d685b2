//! Authenticated caller identity.

use std::collections::HashMap;

/// Validated identity of an authenticated caller, as a set of named claims.
///
/// Produced by an [`Authenticator`](super::Authenticator); handlers only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    claims: HashMap<String, String>,
    name_claim: String,
}

impl Principal {
    /// Builds a principal whose display name is read from `name_claim`.
    pub fn new(claims: HashMap<String, String>, name_claim: impl Into<String>) -> Self {
        Self {
            claims,
            name_claim: name_claim.into(),
        }
    }

    /// Value of a single claim.
    pub fn claim(&self, name: &str) -> Option<&str> {
        self.claims.get(name).map(String::as_str)
    }

    /// The caller's name, verbatim from the configured name claim.
    pub fn name(&self) -> Option<&str> {
        self.claim(&self.name_claim)
    }
}

/// Returns the authenticated caller's name.
///
/// `None` when the validated principal carries no name claim.
pub fn current_user_name(principal: &Principal) -> Option<String> {
    principal.name().map(str::to_owned)
}
