/*
 * Responsibility
 * - Router-level middleware (re-export)
 * - Authentication, CORS, security headers, transport concerns
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
