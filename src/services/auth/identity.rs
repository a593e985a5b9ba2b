/*
 * Responsibility
 * - Single place deciding which user a request acts as
 * - Every route states its IdentityRule explicitly; the precedence
 *   between the forwarded header and the verified subject lives here
 *   and nowhere else
 * - The forwarded header is trusted verbatim. That only holds behind a
 *   gateway that strips it from client traffic; see Config.
 */
use crate::services::auth::principal::{Principal, UserId};

/// How a route derives the acting user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRule {
    /// Only the verified token subject counts. Profile routes use this.
    VerifiedSubject,
    /// A non-blank forwarded identity header wins over the verified
    /// subject. Vehicle and history routes use this.
    ForwardedThenVerified,
}

/// Resolve the acting user id for a request.
///
/// Returns `None` when the request carries no usable identity; callers
/// turn that into a 401.
pub fn resolve_user_id(
    rule: IdentityRule,
    forwarded: Option<&str>,
    principal: Option<&Principal>,
) -> Option<UserId> {
    if rule == IdentityRule::ForwardedThenVerified
        && let Some(forwarded) = forwarded
        && !forwarded.trim().is_empty()
    {
        // Verbatim, not trimmed: the upstream contract is byte-for-byte.
        return Some(UserId::new(forwarded));
    }

    principal.map(|p| p.user_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(sub: &str) -> Principal {
        Principal {
            user_id: UserId::new(sub),
            authorities: Vec::new(),
        }
    }

    #[test]
    fn forwarded_header_wins_over_verified_subject() {
        let resolved = resolve_user_id(
            IdentityRule::ForwardedThenVerified,
            Some("u999"),
            Some(&principal("u123")),
        );
        assert_eq!(resolved, Some(UserId::new("u999")));
    }

    #[test]
    fn forwarded_header_counts_without_a_principal() {
        let resolved = resolve_user_id(IdentityRule::ForwardedThenVerified, Some("u999"), None);
        assert_eq!(resolved, Some(UserId::new("u999")));
    }

    #[test]
    fn blank_forwarded_header_falls_back_to_subject() {
        let resolved = resolve_user_id(
            IdentityRule::ForwardedThenVerified,
            Some("   "),
            Some(&principal("u123")),
        );
        assert_eq!(resolved, Some(UserId::new("u123")));
    }

    #[test]
    fn subject_is_used_when_no_header_is_present() {
        let resolved = resolve_user_id(
            IdentityRule::ForwardedThenVerified,
            None,
            Some(&principal("u123")),
        );
        assert_eq!(resolved, Some(UserId::new("u123")));
    }

    #[test]
    fn verified_subject_rule_ignores_the_header() {
        let resolved = resolve_user_id(
            IdentityRule::VerifiedSubject,
            Some("u999"),
            Some(&principal("u123")),
        );
        assert_eq!(resolved, Some(UserId::new("u123")));
    }

    #[test]
    fn header_alone_is_not_enough_for_profile_routes() {
        let resolved = resolve_user_id(IdentityRule::VerifiedSubject, Some("u999"), None);
        assert_eq!(resolved, None);
    }

    #[test]
    fn no_identity_resolves_to_none() {
        assert_eq!(
            resolve_user_id(IdentityRule::VerifiedSubject, None, None),
            None
        );
        assert_eq!(
            resolve_user_id(IdentityRule::ForwardedThenVerified, None, None),
            None
        );
    }

    #[test]
    fn forwarded_value_is_used_verbatim() {
        let resolved = resolve_user_id(IdentityRule::ForwardedThenVerified, Some(" u999 "), None);
        assert_eq!(resolved, Some(UserId::new(" u999 ")));
    }

    #[test]
    fn resolution_is_stable_for_the_same_inputs() {
        let p = principal("u123");
        for rule in [IdentityRule::VerifiedSubject, IdentityRule::ForwardedThenVerified] {
            let first = resolve_user_id(rule, Some("u999"), Some(&p));
            let second = resolve_user_id(rule, Some("u999"), Some(&p));
            assert_eq!(first, second);
        }
    }
}
