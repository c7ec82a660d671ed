//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, query string)
//! 2. Delegates validation and business rules to a service
//! 3. Returns an HTTP response (status code and body)

/// Service health endpoint
pub mod health;
/// Payment processing endpoint
pub mod payments;
/// User registration and listing endpoints
pub mod users;
