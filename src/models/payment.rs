//! Payment data model.

use serde::{Deserialize, Serialize};

use crate::validation;

/// A payment request, and once accepted, a processed payment.
///
/// # JSON Example
///
/// ```json
/// {
///   "creditCardNumber": "1234567891234567",
///   "amount": 121
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Card being charged; must belong to a registered user
    pub credit_card_number: String,

    /// Three-digit amount, 100 to 999 inclusive
    pub amount: i64,
}

impl Payment {
    /// Card number is 16 digits and amount is within range.
    pub fn is_valid(&self) -> bool {
        validation::is_valid_card_number(&self.credit_card_number)
            && validation::is_valid_payment_amount(self.amount)
    }
}
