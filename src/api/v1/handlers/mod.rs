/*
 * Responsibility
 * - v1 handlers, one module per resource
 */
pub mod customers;
pub mod health;
pub mod history;
pub mod vehicles;
