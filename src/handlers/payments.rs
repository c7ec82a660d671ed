//! Payment HTTP handlers.
//!
//! - POST /payments - Process a payment against a registered card

use crate::{error::AppError, models::payment::Payment, state::AppState};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// Process a payment.
///
/// # Request Body
///
/// ```json
/// {
///   "creditCardNumber": "1234567891234567",
///   "amount": 121
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: "Payment is successful."
/// - **Error (400)**: malformed card number or amount, empty body
/// - **Error (404)**: "Credit card is not registered against a registered user."
pub async fn process_payment(
    State(state): State<AppState>,
    payload: Result<Json<Payment>, JsonRejection>,
) -> Result<(StatusCode, &'static str), AppError> {
    let Json(payment) = payload?;

    state.payments.process_payment(payment).await?;

    Ok((StatusCode::CREATED, "Payment is successful."))
}
