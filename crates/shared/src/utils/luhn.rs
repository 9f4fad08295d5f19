/// Alternating-doubled digit sum, doubling the rightmost digit first.
///
/// Returns `None` if `digits` contains anything other than ASCII digits.
fn doubled_sum(digits: &str, double_rightmost: bool) -> Option<u32> {
    let mut sum = 0;
    let mut should_double = double_rightmost;

    for byte in digits.bytes().rev() {
        if !byte.is_ascii_digit() {
            return None;
        }

        let mut digit = u32::from(byte - b'0');
        if should_double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        sum += digit;
        should_double = !should_double;
    }

    Some(sum)
}

/// Check digit that makes `body` followed by it Luhn-valid.
pub fn luhn_check_digit(body: &str) -> Option<u8> {
    let sum = doubled_sum(body, true)?;
    Some(((10 - sum % 10) % 10) as u8)
}

pub fn is_luhn_valid(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }

    matches!(doubled_sum(number, false), Some(sum) if sum % 10 == 0)
}
