//! Payment service - validates payments and links them to registered cards.
//!
//! No external gateway is called; an accepted payment is only recorded.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::payment::Payment,
    services::user_service::UserService,
    validation,
};

/// Owns the processed payments, in processing order.
#[derive(Debug)]
pub struct PaymentService {
    payments: RwLock<Vec<Payment>>,

    /// Registered users, consulted for card lookups
    users: Arc<UserService>,
}

impl PaymentService {
    pub fn new(users: Arc<UserService>) -> Self {
        Self {
            payments: RwLock::new(Vec::new()),
            users,
        }
    }

    /// Process a payment.
    ///
    /// # Process
    ///
    /// 1. Validate card number format and amount range
    /// 2. Require the card to belong to a registered user
    /// 3. Record the payment
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: malformed card number or amount outside 100..=999
    /// - `CardNotRegistered`: no registered user holds the card
    pub async fn process_payment(&self, payment: Payment) -> Result<(), AppError> {
        if !payment.is_valid() {
            tracing::debug!(amount = payment.amount, "payment failed validation");
            return Err(AppError::InvalidRequest);
        }

        let card = validation::mask_card_number(&payment.credit_card_number);

        if !self
            .users
            .has_registered_card(&payment.credit_card_number)
            .await
        {
            tracing::warn!(%card, "payment with unregistered card");
            return Err(AppError::CardNotRegistered);
        }

        tracing::info!(%card, amount = payment.amount, "payment accepted");
        self.payments.write().await.push(payment);

        Ok(())
    }

    /// Snapshot of processed payments, oldest first.
    pub async fn payments(&self) -> Vec<Payment> {
        self.payments.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.payments.read().await.len()
    }
}
