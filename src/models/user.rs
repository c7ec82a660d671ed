//! User data models and API request/query types.
//!
//! This module defines:
//! - `User`: a registration request, and once accepted, a registered user
//! - `ListUsersQuery`: query string of the user listing endpoint
//! - `CreditCardFilter`: the parsed listing filter

use serde::{Deserialize, Serialize};

use crate::validation;

/// A user record.
///
/// The same shape is accepted by `POST /users` and returned by
/// `GET /users`. Records are returned in full, password included.
///
/// # JSON Example
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
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Alphanumeric, unique across registered users
    pub username: String,

    pub password: String,

    pub email: String,

    /// Date of birth as an ISO-8601 `YYYY-MM-DD` string
    pub dob: String,

    /// 16-digit card number; `null` or missing when the user has no card
    #[serde(default)]
    pub credit_card_number: Option<String>,
}

impl User {
    /// Run the field validation chain.
    ///
    /// Checks username, password, email, date of birth and card number in
    /// that order, stopping at the first failure.
    pub fn is_valid(&self) -> bool {
        validation::is_valid_username(&self.username)
            && validation::is_valid_password(&self.password)
            && validation::is_valid_email(&self.email)
            && validation::parse_iso_date(&self.dob).is_some()
            && validation::is_valid_optional_card_number(self.credit_card_number.as_deref())
    }

    pub fn has_credit_card(&self) -> bool {
        self.credit_card_number.is_some()
    }
}

/// Query parameters for `GET /users`.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    #[serde(rename = "creditCard")]
    pub credit_card: Option<String>,
}

/// Which registered users a listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditCardFilter {
    /// No filter given: every user
    All,
    /// "Yes": users holding a card
    WithCard,
    /// "No": users without a card
    WithoutCard,
    /// Any other value matches nobody
    Unrecognized,
}

impl CreditCardFilter {
    /// Interpret the raw `creditCard` query value (case-insensitive).
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("") => CreditCardFilter::All,
            Some(v) if v.eq_ignore_ascii_case("yes") => CreditCardFilter::WithCard,
            Some(v) if v.eq_ignore_ascii_case("no") => CreditCardFilter::WithoutCard,
            Some(_) => CreditCardFilter::Unrecognized,
        }
    }

    pub fn matches(self, user: &User) -> bool {
        match self {
            CreditCardFilter::All => true,
            CreditCardFilter::WithCard => user.has_credit_card(),
            CreditCardFilter::WithoutCard => !user.has_credit_card(),
            CreditCardFilter::Unrecognized => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(card: Option<&str>) -> User {
        User {
            username: "ruby".to_string(),
            password: "Passw0rd!".to_string(),
            email: "ruby@example.com".to_string(),
            dob: "1990-01-01".to_string(),
            credit_card_number: card.map(str::to_string),
        }
    }

    #[test]
    fn valid_user_passes_chain() {
        assert!(user(Some("1234567891234567")).is_valid());
        assert!(user(None).is_valid());
    }

    #[test]
    fn each_field_can_fail_chain() {
        let mut u = user(None);
        u.username = "ruby granger".to_string();
        assert!(!u.is_valid());

        let mut u = user(None);
        u.password = "Passw0r".to_string();
        assert!(!u.is_valid());

        let mut u = user(None);
        u.email = "ruby@".to_string();
        assert!(!u.is_valid());

        let mut u = user(None);
        u.dob = "1990-21-01".to_string();
        assert!(!u.is_valid());

        assert!(!user(Some("123456789123456")).is_valid());
    }

    #[test]
    fn deserializes_camel_case_with_missing_card() {
        let json = r#"{"username":"ruby","password":"Passw0rd!","email":"ruby@example.com","dob":"1990-01-01"}"#;
        let parsed: User = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, user(None));

        let json = r#"{"username":"ruby","password":"Passw0rd!","email":"ruby@example.com","dob":"1990-01-01","creditCardNumber":null}"#;
        let parsed: User = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, user(None));
    }

    #[test]
    fn serializes_absent_card_as_null() {
        let value = serde_json::to_value(user(None)).unwrap();
        assert!(value["creditCardNumber"].is_null());
        assert_eq!(value["dob"], "1990-01-01");
    }

    #[rstest]
    #[case(None, CreditCardFilter::All)]
    #[case(Some(""), CreditCardFilter::All)]
    #[case(Some("Yes"), CreditCardFilter::WithCard)]
    #[case(Some("yEs"), CreditCardFilter::WithCard)]
    #[case(Some("No"), CreditCardFilter::WithoutCard)]
    #[case(Some("NO"), CreditCardFilter::WithoutCard)]
    #[case(Some("maybe"), CreditCardFilter::Unrecognized)]
    fn parses_filter(#[case] raw: Option<&str>, #[case] expected: CreditCardFilter) {
        assert_eq!(CreditCardFilter::from_param(raw), expected);
    }

    #[test]
    fn filter_matches_card_presence() {
        let with = user(Some("1234567891234567"));
        let without = user(None);

        assert!(CreditCardFilter::WithCard.matches(&with));
        assert!(!CreditCardFilter::WithCard.matches(&without));
        assert!(CreditCardFilter::WithoutCard.matches(&without));
        assert!(!CreditCardFilter::Unrecognized.matches(&with));
    }
}
