/*
 * Responsibility
 * - Extractors shared by the v1 handlers
 * - identity: who the request acts as (the 401 gate)
 * - public_id: opaque public ids in path segments
 * - json_body: request bodies, rejections in the error envelope
 */
pub mod identity;
pub mod json_body;
pub mod public_id;

pub use identity::{ForwardedIdentity, VerifiedIdentity};
pub use json_body::JsonBody;
pub use public_id::PublicVehicleId;
