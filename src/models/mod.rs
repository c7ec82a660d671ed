//! Data models for requests, responses and stored records.

/// Payment model
pub mod payment;
/// User model and listing filter
pub mod user;
