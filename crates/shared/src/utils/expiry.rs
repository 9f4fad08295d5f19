use crate::errors::GenerationError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

pub const EXPIRY_YEAR_MIN: u16 = 2024;
pub const EXPIRY_YEAR_MAX: u16 = 2030;

static EXPIRY_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})$").ok());

pub fn random_expiry<R: Rng + ?Sized>(rng: &mut R) -> String {
    let month: u8 = rng.random_range(1..=12);
    let year: u16 = rng.random_range(EXPIRY_YEAR_MIN..=EXPIRY_YEAR_MAX);
    format!("{month:02}/{:02}", year % 100)
}

/// Zero-pads both halves of an `M/Y` string. Month and year values are not range-checked.
pub fn normalize_expiry(value: &str) -> Result<String, GenerationError> {
    let invalid = || GenerationError::InvalidExpiry(value.to_string());

    let re = EXPIRY_REGEX.as_ref().ok_or_else(invalid)?;
    let caps = re.captures(value).ok_or_else(invalid)?;
    let (month, year) = match (caps.get(1), caps.get(2)) {
        (Some(m), Some(y)) => (m.as_str(), y.as_str()),
        _ => return Err(invalid()),
    };

    Ok(format!("{month:0>2}/{year:0>2}"))
}
