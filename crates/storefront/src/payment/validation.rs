//! Live payment-form feedback.
//!
//! These checks are stricter than what [`SimulatedGateway`](super::SimulatedGateway) enforces
//! and are never consulted when a payment is processed.

use chrono::{DateTime, TimeZone, Utc};

/// Strips whitespace and puts a space after every run of four digits:
/// `"4111111111111111"` -> `"4111 1111 1111 1111"`. Other characters are kept and restart the run.
pub fn format_card_number(card_number: &str) -> String {
    let mut formatted = String::with_capacity(card_number.len() + 4);
    let mut run = 0;
    for c in card_number.chars().filter(|c| !c.is_whitespace()) {
        formatted.push(c);
        if c.is_ascii_digit() {
            run += 1;
            if run == 4 {
                formatted.push(' ');
                run = 0;
            }
        } else {
            run = 0;
        }
    }
    formatted.trim_end().to_string()
}

/// 13 to 19 digits once whitespace is removed. No checksum is applied.
pub fn validate_card_number(card_number: &str) -> bool {
    let cleaned: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    (13..=19).contains(&cleaned.len()) && cleaned.chars().all(|c| c.is_ascii_digit())
}

/// Reformats raw expiry input as typed: non-digits dropped, `/` inserted after the month.
pub fn format_expiry_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= 2 {
        let year: String = digits.chars().skip(2).take(2).collect();
        format!("{}/{}", &digits[..2], year)
    } else {
        digits
    }
}

/// Keeps at most four digits of CVV input.
pub fn sanitize_cvv_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(4).collect()
}

/// `MM/YY` naming a month whose first day is after the current time.
pub fn validate_expiry(expiry: &str) -> bool {
    validate_expiry_at(expiry, Utc::now())
}

/// [`validate_expiry`] against an explicit clock. Two-digit years are in the 2000s.
pub fn validate_expiry_at(expiry: &str, now: DateTime<Utc>) -> bool {
    let Some((month, year)) = parse_expiry(expiry) else {
        return false;
    };
    if !(1..=12).contains(&month) {
        return false;
    }
    match Utc.with_ymd_and_hms(2000 + year, month, 1, 0, 0, 0).single() {
        Some(expires) => expires > now,
        None => false,
    }
}

fn parse_expiry(expiry: &str) -> Option<(u32, i32)> {
    let (month, year) = expiry.split_once('/')?;
    if month.len() != 2 || year.len() != 2 {
        return None;
    }
    if !month.chars().chain(year.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((month.parse().ok()?, year.parse().ok()?))
}

/// Three or four digits.
pub fn validate_cvv(cvv: &str) -> bool {
    (3..=4).contains(&cvv.len()) && cvv.chars().all(|c| c.is_ascii_digit())
}
