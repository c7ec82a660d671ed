//! User service - registration rules and the registered-user store.
//!
//! This service handles:
//! - Field validation of registration requests
//! - Username uniqueness
//! - Minimum age
//! - Filtered listing and card lookups for the payment service
//!
//! # Consistency
//!
//! The uniqueness check and the append happen under a single write lock,
//! so two concurrent registrations of one username cannot both succeed.

use chrono::{Local, Months, NaiveDate};
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::user::{CreditCardFilter, User},
    validation,
};

/// Minimum age, in years, required to register.
pub const MINIMUM_AGE_YEARS: u32 = 18;

/// Owns the registered users, in registration order.
#[derive(Debug, Default)]
pub struct UserService {
    users: RwLock<Vec<User>>,
}

impl UserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user, judging age against the local calendar date.
    pub async fn register_user(&self, user: User) -> Result<(), AppError> {
        self.register_user_on(user, Local::now().date_naive()).await
    }

    /// Register a user as of `today`.
    ///
    /// # Process
    ///
    /// 1. Validate every field
    /// 2. Reject a username that is already registered
    /// 3. Reject a user born after `today` minus 18 years
    /// 4. Append the user
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: a field fails its format rule
    /// - `UsernameTaken`: username already registered
    /// - `Underage`: user has not reached their 18th birthday
    pub async fn register_user_on(&self, user: User, today: NaiveDate) -> Result<(), AppError> {
        if !user.is_valid() {
            tracing::debug!(username = %user.username, "registration failed validation");
            return Err(AppError::InvalidRequest);
        }
        let dob = validation::parse_iso_date(&user.dob).ok_or(AppError::InvalidRequest)?;

        let mut users = self.users.write().await;

        if users.iter().any(|u| u.username == user.username) {
            tracing::info!(username = %user.username, "username already taken");
            return Err(AppError::UsernameTaken);
        }

        if is_underage(dob, today)? {
            tracing::info!(username = %user.username, "user is under the minimum age");
            return Err(AppError::Underage);
        }

        tracing::info!(
            username = %user.username,
            has_credit_card = user.has_credit_card(),
            "user registered"
        );
        users.push(user);

        Ok(())
    }

    /// Registered users matching `filter`, in registration order.
    pub async fn list_users(&self, filter: CreditCardFilter) -> Vec<User> {
        self.users
            .read()
            .await
            .iter()
            .filter(|u| filter.matches(u))
            .cloned()
            .collect()
    }

    /// Whether any registered user holds exactly this card number.
    pub async fn has_registered_card(&self, card_number: &str) -> bool {
        self.users
            .read()
            .await
            .iter()
            .any(|u| u.credit_card_number.as_deref() == Some(card_number))
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

/// True when `dob` falls after the date exactly 18 years before `today`.
///
/// Turning 18 today is old enough. From February 29 the cutoff clamps
/// to February 28.
fn is_underage(dob: NaiveDate, today: NaiveDate) -> Result<bool, AppError> {
    let cutoff = today
        .checked_sub_months(Months::new(MINIMUM_AGE_YEARS * 12))
        .ok_or_else(|| AppError::Internal(format!("no age cutoff for {today}")))?;
    Ok(dob > cutoff)
}
