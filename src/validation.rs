//! Field-level format rules shared by user registration and payments.
//!
//! Every rule is a pure predicate over the raw request field. The services
//! combine them into their validation chains.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

// `.` in the regex crate matches anything except a line feed.
static PASSWORD_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.{8,}$").unwrap());
static HAS_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());
static HAS_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

// `\d` would also accept non-ASCII digits.
static CARD_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{16}$").unwrap());

/// Smallest accepted payment amount.
pub const MIN_PAYMENT_AMOUNT: i64 = 100;
/// Largest accepted payment amount.
pub const MAX_PAYMENT_AMOUNT: i64 = 999;

/// Non-empty and strictly alphanumeric.
pub fn is_valid_username(username: &str) -> bool {
    USERNAME.is_match(username)
}

/// At least 8 characters with one digit and one upper-case letter.
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_SHAPE.is_match(password)
        && HAS_DIGIT.is_match(password)
        && HAS_UPPER.is_match(password)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// Returns `None` for other layouts and for dates that do not exist on the
/// calendar (month 21, February 30, ...).
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if !ISO_DATE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Exactly 16 ASCII digits.
pub fn is_valid_card_number(card_number: &str) -> bool {
    CARD_NUMBER.is_match(card_number)
}

/// An absent card is allowed; a present one must be well-formed.
pub fn is_valid_optional_card_number(card_number: Option<&str>) -> bool {
    card_number.is_none_or(is_valid_card_number)
}

pub fn is_valid_payment_amount(amount: i64) -> bool {
    (MIN_PAYMENT_AMOUNT..=MAX_PAYMENT_AMOUNT).contains(&amount)
}

/// Card number reduced to its last four digits, for logs.
pub fn mask_card_number(card_number: &str) -> String {
    let tail: String = card_number
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ruby", true)]
    #[case("Ruby1990", true)]
    #[case("ruby granger", false)]
    #[case("ruby!", false)]
    #[case("ruby_granger", false)]
    #[case("", false)]
    #[case("rübý", false)]
    fn username_rule(#[case] username: &str, #[case] expected: bool) {
        assert_eq!(is_valid_username(username), expected);
    }

    #[rstest]
    #[case("Passw0rd!", true)]
    #[case("PASSWORD1", true)]
    #[case("Passw0r", false)]
    #[case("passw0rd!", false)]
    #[case("Password!", false)]
    #[case("Pass\nw0rd!", false)]
    fn password_rule(#[case] password: &str, #[case] expected: bool) {
        assert_eq!(is_valid_password(password), expected);
    }

    #[test]
    fn removing_digit_or_upper_case_flips_password() {
        let valid = "Sunny1Days";
        assert!(is_valid_password(valid));
        assert!(!is_valid_password(&valid.replace('1', "x")));
        assert!(!is_valid_password(&valid.replace('S', "s").replace('D', "d")));
    }

    #[rstest]
    #[case("ruby@example.com", true)]
    #[case("ruby.granger+test@mail.example.co", true)]
    #[case("ruby@", false)]
    #[case("ruby@example", false)]
    #[case("ruby@example.c", false)]
    #[case("@example.com", false)]
    #[case("ruby granger@example.com", false)]
    fn email_rule(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }

    #[rstest]
    #[case("1990-01-01", true)]
    #[case("2000-02-29", true)]
    #[case("1990-21-01", false)]
    #[case("1990-01-32", false)]
    #[case("1990-02-30", false)]
    #[case("1990-1-1", false)]
    #[case("01-01-1990", false)]
    #[case("1990-01-01T00:00:00", false)]
    #[case("+1990-01-01", false)]
    #[case("", false)]
    fn iso_date_rule(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(parse_iso_date(value).is_some(), expected);
    }

    #[test]
    fn iso_date_parses_components() {
        assert_eq!(
            parse_iso_date("1990-01-12"),
            NaiveDate::from_ymd_opt(1990, 1, 12)
        );
    }

    #[rstest]
    #[case("1234567891234567", true)]
    #[case("123456789123456", false)]
    #[case("12345678912345678", false)]
    #[case("1234-5678-9123-45", false)]
    #[case("123456789123456a", false)]
    #[case("١٢٣٤٥٦٧٨٩١٢٣٤٥٦٧", false)]
    fn card_number_rule(#[case] card: &str, #[case] expected: bool) {
        assert_eq!(is_valid_card_number(card), expected);
    }

    #[test]
    fn absent_card_is_valid_but_empty_is_not() {
        assert!(is_valid_optional_card_number(None));
        assert!(is_valid_optional_card_number(Some("1234567891234567")));
        assert!(!is_valid_optional_card_number(Some("")));
    }

    #[rstest]
    #[case(100, true)]
    #[case(121, true)]
    #[case(999, true)]
    #[case(99, false)]
    #[case(1000, false)]
    #[case(3, false)]
    #[case(-121, false)]
    fn payment_amount_rule(#[case] amount: i64, #[case] expected: bool) {
        assert_eq!(is_valid_payment_amount(amount), expected);
    }

    #[test]
    fn masks_all_but_last_four() {
        assert_eq!(mask_card_number("1234567891234567"), "****4567");
        assert_eq!(mask_card_number("12"), "****12");
    }
}
