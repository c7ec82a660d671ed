//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They own the in-memory stores and enforce validation and business rules.

pub mod payment_service;
pub mod user_service;
