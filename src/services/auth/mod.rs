pub mod identity;
pub mod principal;
pub mod token_verifier;

pub use principal::{Authority, Principal, UserId};
pub use token_verifier::{Authentication, TokenVerifier};
