/*
 * Responsibility
 * - Verify HS256 bearer tokens and map them to a request Principal
 * - Signature, issuer and (when present) expiry and not-before are
 *   checked here; a token without `exp` is still accepted
 * - `authenticate` never fails a request by itself: a bad token is
 *   logged and the request continues unauthenticated. Rejecting
 *   anonymous requests is the job of the identity extractors.
 */
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{error::Error as StdError, fmt};

use crate::services::auth::principal::Principal;

// Errors returned by bearer-token verification + claim validation.
#[derive(Debug)]
pub enum TokenError {
    Jwt(jsonwebtoken::errors::Error),
    EmptyClaim(&'static str),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::EmptyClaim(name) => write!(f, "empty '{}' claim", name),
        }
    }
}

impl StdError for TokenError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            Self::EmptyClaim(_) => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Claims this service consumes. `iss` and `exp` are enforced by
/// `jsonwebtoken::Validation` and not re-read here.
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    sub: String,
    #[serde(default)]
    role: Option<String>,
}

/// Verified claims in the form the rest of the app consumes.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    pub subject: String,
    pub role: Option<String>,
}

/// Outcome of inspecting a request's `Authorization` header.
///
/// Anonymous covers every failure mode: no header, wrong scheme, bad
/// signature, wrong issuer, expired or malformed token.
#[derive(Debug, Clone)]
pub enum Authentication {
    Verified(Principal),
    Anonymous,
}

/// HS256 bearer-token verifier.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &[u8], issuer: &str, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        // `exp` stays out of the required set: tokens without one are
        // accepted, tokens carrying one are still checked against the clock.
        // `nbf`, when present, is enforced the same way.
        validation.set_required_spec_claims(&["iss"]);
        validation.validate_aud = false;
        validation.validate_nbf = true;
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify signature, issuer and expiry, then lift the claims this
    /// service cares about into a `VerifiedToken`.
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        let claims = data.claims;
        if claims.sub.trim().is_empty() {
            return Err(TokenError::EmptyClaim("sub"));
        }

        Ok(VerifiedToken {
            subject: claims.sub,
            role: claims.role,
        })
    }

    /// Inspect an `Authorization` header value and classify the request.
    ///
    /// This is the entry-point for the bearer middleware. Only the exact
    /// `Bearer ` scheme prefix is honored.
    pub fn authenticate(&self, authorization: Option<&str>) -> Authentication {
        let Some(header) = authorization else {
            return Authentication::Anonymous;
        };
        let Some(token) = header.strip_prefix("Bearer ") else {
            return Authentication::Anonymous;
        };

        match self.verify(token) {
            Ok(verified) => Authentication::Verified(Principal::from(verified)),
            Err(e) => {
                tracing::debug!(error = %e, "bearer token rejected; continuing unauthenticated");
                Authentication::Anonymous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::principal::Authority;
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";
    const ISSUER: &str = "revamp-auth";

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(SECRET, ISSUER, 0)
    }

    fn mint_with_secret(secret: &[u8], claims: &serde_json::Value) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    fn mint(claims: &serde_json::Value) -> String {
        mint_with_secret(SECRET, claims)
    }

    fn now() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    #[test]
    fn valid_token_yields_subject_and_role() {
        let token = mint(&json!({
            "iss": ISSUER,
            "sub": "u123",
            "role": "customer",
            "exp": now() + 3600,
        }));

        let verified = verifier().verify(&token).unwrap();
        assert_eq!(verified.subject, "u123");
        assert_eq!(verified.role.as_deref(), Some("customer"));
    }

    #[test]
    fn token_without_expiry_is_accepted() {
        let token = mint(&json!({ "iss": ISSUER, "sub": "u123" }));

        let verified = verifier().verify(&token).unwrap();
        assert_eq!(verified.subject, "u123");
        assert_eq!(verified.role, None);
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = mint(&json!({ "iss": ISSUER, "sub": "u123", "exp": now() - 3600 }));

        assert!(matches!(
            verifier().verify(&token),
            Err(TokenError::Jwt(_))
        ));
    }

    #[test]
    fn leeway_tolerates_a_just_expired_token() {
        let token = mint(&json!({ "iss": ISSUER, "sub": "u123", "exp": now() - 30 }));

        let verifier = TokenVerifier::new(SECRET, ISSUER, 60);
        assert!(verifier.verify(&token).is_ok());
    }

    #[test]
    fn not_before_is_enforced_when_present() {
        let premature = mint(&json!({ "iss": ISSUER, "sub": "u123", "nbf": now() + 3600 }));
        assert!(matches!(
            verifier().verify(&premature),
            Err(TokenError::Jwt(_))
        ));

        let mature = mint(&json!({ "iss": ISSUER, "sub": "u123", "nbf": now() - 60 }));
        assert!(verifier().verify(&mature).is_ok());
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let token = mint(&json!({ "iss": "someone-else", "sub": "u123" }));

        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn missing_issuer_is_rejected() {
        let token = mint(&json!({ "sub": "u123" }));

        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = mint_with_secret(
            b"ffffffffffffffffffffffffffffffff",
            &json!({ "iss": ISSUER, "sub": "u123" }),
        );

        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn unexpected_algorithm_is_rejected() {
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS384),
            &json!({ "iss": ISSUER, "sub": "u123" }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn missing_or_blank_subject_is_rejected() {
        let absent = mint(&json!({ "iss": ISSUER }));
        let blank = mint(&json!({ "iss": ISSUER, "sub": "   " }));

        assert!(matches!(
            verifier().verify(&absent),
            Err(TokenError::EmptyClaim("sub"))
        ));
        assert!(matches!(
            verifier().verify(&blank),
            Err(TokenError::EmptyClaim("sub"))
        ));
    }

    #[test]
    fn authenticate_accepts_a_valid_bearer_token() {
        let token = mint(&json!({ "iss": ISSUER, "sub": "u123", "role": "customer" }));
        let header = format!("Bearer {}", token);

        match verifier().authenticate(Some(&header)) {
            Authentication::Verified(principal) => {
                assert_eq!(principal.user_id.as_str(), "u123");
                assert_eq!(principal.authorities, vec![Authority::Customer]);
            }
            Authentication::Anonymous => panic!("expected a verified principal"),
        }
    }

    #[test]
    fn authenticate_requires_the_bearer_scheme() {
        let token = mint(&json!({ "iss": ISSUER, "sub": "u123" }));

        let verifier = verifier();
        assert!(matches!(
            verifier.authenticate(None),
            Authentication::Anonymous
        ));
        assert!(matches!(
            verifier.authenticate(Some(&token)),
            Authentication::Anonymous
        ));
        assert!(matches!(
            verifier.authenticate(Some(&format!("Basic {}", token))),
            Authentication::Anonymous
        ));
        assert!(matches!(
            verifier.authenticate(Some(&format!("bearer {}", token))),
            Authentication::Anonymous
        ));
    }

    #[test]
    fn authenticate_swallows_invalid_tokens() {
        let verifier = verifier();
        assert!(matches!(
            verifier.authenticate(Some("Bearer not-a-jwt")),
            Authentication::Anonymous
        ));
        assert!(matches!(
            verifier.authenticate(Some("Bearer ")),
            Authentication::Anonymous
        ));
    }
}
