/*!
 * Acting-identity extractor
 *
 * Responsibility:
 * - Give handlers the user id a request acts as, resolved under an
 *   explicit per-route rule
 * - Reject with 401 when no identity can be resolved
 * - HTTP / axum wiring lives in core, the route-facing aliases in types
 *
 * Public API:
 * - VerifiedIdentity (token subject only)
 * - ForwardedIdentity (forwarded header first, then token subject)
 */

mod core;
mod types;

pub use self::core::{Identity, IdentityPolicy};
pub use types::{ForwardedIdentity, VerifiedIdentity};
