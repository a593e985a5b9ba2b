/*
 * Responsibility
 * - Request/response DTOs for the v1 API, one module per resource
 * - Wire field names are camelCase (the contract the gateway and
 *   frontend already speak)
 */
pub mod customers;
pub mod history;
pub mod vehicles;
