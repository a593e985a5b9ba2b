/*
 * Responsibility
 * - Resolve the acting user id from request parts and fail with 401
 *   when there is none. This is the access gate for every owner-scoped
 *   route.
 * - Inputs: the Principal placed in extensions by the bearer middleware
 *   and the configured forwarded identity header, combined by
 *   services::auth::identity under the policy's rule.
 * - Generic body lives here; the per-route policy tags live in types.
 */
use std::marker::PhantomData;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::services::auth::identity::{self, IdentityRule};
use crate::services::auth::{Principal, UserId};
use crate::state::AppState;

/// Declares which resolution rule an `Identity<P>` extractor applies.
pub trait IdentityPolicy {
    const RULE: IdentityRule;
}

/// The user id this request acts as, resolved under policy `P`.
pub struct Identity<P> {
    pub user_id: UserId,
    _marker: PhantomData<P>,
}

impl<P> Identity<P> {
    fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            _marker: PhantomData,
        }
    }
}

impl<P> FromRequestParts<AppState> for Identity<P>
where
    P: IdentityPolicy + Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let forwarded = state
            .forwarded_user_header
            .as_ref()
            .and_then(|name| parts.headers.get(name))
            .and_then(|v| v.to_str().ok());

        let principal = parts.extensions.get::<Principal>();

        identity::resolve_user_id(P::RULE, forwarded, principal)
            .map(Self::new)
            .ok_or(AppError::Unauthorized)
    }
}

impl<P> std::fmt::Debug for Identity<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("user_id", &self.user_id)
            .finish()
    }
}
