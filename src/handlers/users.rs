//! User HTTP handlers.
//!
//! This module implements the user-related API endpoints:
//! - POST /users - Register a new user
//! - GET /users - List registered users, optionally filtered by card ownership

use crate::{
    error::AppError,
    models::user::{CreditCardFilter, ListUsersQuery, User},
    state::AppState,
};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

/// Register a new user.
///
/// # Request Body
///
/// ```json
/// {
///   "username": "ruby",
///   "password": "Passw0rd!",
///   "email": "ruby@example.com",
///   "dob": "1990-01-01",
///   "creditCardNumber": "1234567891234567"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: "User successfully registered."
/// - **Error (400)**: a field is malformed, empty body
/// - **Error (409)**: "Username is taken. Please select a different username."
/// - **Error (403)**: "User must be over 18 years old to register."
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<(StatusCode, &'static str), AppError> {
    let Json(user) = payload?;

    state.users.register_user(user).await?;

    Ok((StatusCode::CREATED, "User successfully registered."))
}

/// List registered users.
///
/// # Query Parameters
///
/// - `creditCard=Yes` - only users with a card
/// - `creditCard=No` - only users without a card
/// - omitted or empty - every user
///
/// Any other value, including a repeated `creditCard` key, yields an
/// empty list. Users are returned in registration order.
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Json<Vec<User>> {
    let filter = match query {
        Ok(Query(query)) => CreditCardFilter::from_param(query.credit_card.as_deref()),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "unrecognized user filter");
            CreditCardFilter::Unrecognized
        }
    };

    Json(state.users.list_users(filter).await)
}
