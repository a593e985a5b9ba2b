/*
 * Responsibility
 * - SQLx data access, one module per table
 * - Every query that touches owned records is scoped by the ownership
 *   key column; handlers never widen that scope
 */
pub mod customer_repo;
pub mod error;
pub mod history_repo;
pub mod vehicle_repo;
