/*
 * Responsibility
 * - Per-route identity policies as zero-sized tags + the aliases
 *   handlers actually name
 * - No resolution logic here; that stays in core and
 *   services::auth::identity
 */
use super::core::{Identity, IdentityPolicy};
use crate::services::auth::identity::IdentityRule;

/// Profile routes: only the verified token subject counts.
pub enum VerifiedOnly {}

impl IdentityPolicy for VerifiedOnly {
    const RULE: IdentityRule = IdentityRule::VerifiedSubject;
}

/// Vehicle / history routes: the forwarded identity header, when
/// configured and non-blank, wins over the token subject.
pub enum ForwardedFirst {}

impl IdentityPolicy for ForwardedFirst {
    const RULE: IdentityRule = IdentityRule::ForwardedThenVerified;
}

pub type VerifiedIdentity = Identity<VerifiedOnly>;
pub type ForwardedIdentity = Identity<ForwardedFirst>;
