//! Shared application state.
//!
//! Both stores live for the whole process. The payment service is built
//! with a handle to the user service so it can check card ownership.

use std::sync::Arc;

use crate::services::{payment_service::PaymentService, user_service::UserService};

/// State injected into every handler through axum's `State` extractor.
///
/// Cloning is cheap: only the `Arc` handles are copied.
#[derive(Debug, Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub payments: Arc<PaymentService>,
}

impl AppState {
    pub fn new() -> Self {
        let users = Arc::new(UserService::new());
        let payments = Arc::new(PaymentService::new(users.clone()));

        Self { users, payments }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
