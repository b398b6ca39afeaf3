//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// E.164 with a 10-15 digit subscriber part
static E164_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{9,14}$").unwrap()
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Validate phone number format (E.164)
///
/// Checks if the phone number is in valid E.164 format:
/// - Starts with '+'
/// - Contains only digits after '+'
/// - Length between 10 and 15 digits (excluding '+')
pub fn is_valid_phone_number(phone: &str) -> bool {
    E164_PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for logging
///
/// Shows only the last 4 digits of the phone number.
///
/// ```
/// use lk_shared::phone::mask_phone_number;
/// assert_eq!(mask_phone_number("+1234567890"), "+******7890");
/// ```
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible_digits = 4;
    let masked_count = chars.len() - visible_digits;
    let last_digits: String = chars[chars.len() - visible_digits..].iter().collect();

    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(masked_count - 1), last_digits)
    } else {
        format!("{}{}", "*".repeat(masked_count), last_digits)
    }
}
