/*
 * Responsibility
 * - Resource-specific id types; one tag + alias per resource that
 *   appears in a path
 * - No decode logic, no extractor impls
 */
use super::core::PublicId;

// vehicles
pub enum VehicleTag {}
pub type PublicVehicleId = PublicId<VehicleTag>;
