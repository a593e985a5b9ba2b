/*
 * Responsibility
 * - Types describing "who is calling": UserId, Authority, Principal
 * - Constructed fresh per request and carried in the request extensions;
 *   never persisted, never stored in global state
 */
use std::fmt;

use crate::services::auth::token_verifier::VerifiedToken;

/// Opaque ownership key partitioning records per user.
///
/// The value comes either from a verified token subject or from the
/// gateway-forwarded identity header; this layer attaches no structure to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capability tag derived from the token's role claim.
///
/// Kept as a tagged variant (with a normalized fallback) instead of ad-hoc
/// `"ROLE_" + role` string building at call sites; the wire/log form is the
/// `Display` impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authority {
    /// Self-service customer access.
    Customer,
    /// Any other role claim, normalized to uppercase.
    Other(String),
}

impl Authority {
    /// Maps a raw role claim to an authority. Blank claims carry no
    /// authority; matching is case-insensitive.
    pub fn from_role(role: &str) -> Option<Self> {
        let role = role.trim();
        if role.is_empty() {
            return None;
        }
        let tag = role.to_ascii_uppercase();
        Some(match tag.as_str() {
            "CUSTOMER" => Authority::Customer,
            _ => Authority::Other(tag),
        })
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authority::Customer => f.write_str("ROLE_CUSTOMER"),
            Authority::Other(tag) => write!(f, "ROLE_{}", tag),
        }
    }
}

/// The verified acting identity of a request.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: UserId,
    /// Zero-or-more role-derived authorities. Nothing enforces them yet;
    /// they are attached for downstream authorization decisions and logging.
    pub authorities: Vec<Authority>,
}

impl From<VerifiedToken> for Principal {
    fn from(token: VerifiedToken) -> Self {
        let authorities = token
            .role
            .as_deref()
            .and_then(Authority::from_role)
            .into_iter()
            .collect();

        Self {
            user_id: UserId::new(token.subject),
            authorities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_role_maps_to_customer_authority() {
        assert_eq!(Authority::from_role("customer"), Some(Authority::Customer));
        assert_eq!(Authority::from_role("Customer"), Some(Authority::Customer));
        assert_eq!(Authority::from_role("CUSTOMER"), Some(Authority::Customer));
    }

    #[test]
    fn unknown_roles_are_normalized_to_uppercase_tags() {
        assert_eq!(
            Authority::from_role("mechanic"),
            Some(Authority::Other("MECHANIC".into()))
        );
    }

    #[test]
    fn blank_roles_carry_no_authority() {
        assert_eq!(Authority::from_role(""), None);
        assert_eq!(Authority::from_role("   "), None);
    }

    #[test]
    fn authority_display_matches_the_legacy_tag_form() {
        assert_eq!(Authority::Customer.to_string(), "ROLE_CUSTOMER");
        assert_eq!(
            Authority::Other("MECHANIC".into()).to_string(),
            "ROLE_MECHANIC"
        );
    }

    #[test]
    fn principal_from_token_carries_subject_and_authority() {
        let principal = Principal::from(VerifiedToken {
            subject: "u123".into(),
            role: Some("customer".into()),
        });
        assert_eq!(principal.user_id.as_str(), "u123");
        assert_eq!(principal.authorities, vec![Authority::Customer]);
    }

    #[test]
    fn principal_without_role_has_no_authorities() {
        let principal = Principal::from(VerifiedToken {
            subject: "u123".into(),
            role: None,
        });
        assert!(principal.authorities.is_empty());
    }
}
