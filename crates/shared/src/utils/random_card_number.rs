use crate::{
    errors::GenerationError,
    model::card::{CARD_NUMBER_LENGTH, CardPrefix},
    utils::luhn::luhn_check_digit,
};
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

static CARD_NUMBER_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{16}$").ok());

/// Pads `prefix` with random digits to 15 places and appends the Luhn check digit.
pub fn random_card_number<R: Rng + ?Sized>(
    rng: &mut R,
    prefix: &CardPrefix,
) -> Result<String, GenerationError> {
    let invalid = || GenerationError::InvalidPrefix(prefix.to_string());
    let re = CARD_NUMBER_REGEX.as_ref().ok_or_else(invalid)?;

    let mut candidate = String::with_capacity(CARD_NUMBER_LENGTH);
    candidate.push_str(prefix.as_str());

    while candidate.len() < CARD_NUMBER_LENGTH - 1 {
        let digit: u8 = rng.random_range(0..10);
        candidate.push(char::from(b'0' + digit));
    }

    let check = luhn_check_digit(&candidate).ok_or_else(invalid)?;
    candidate.push(char::from(b'0' + check));

    if re.is_match(&candidate) {
        Ok(candidate)
    } else {
        Err(invalid())
    }
}

pub fn random_cvv<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    rng.random_range(100..=999)
}
