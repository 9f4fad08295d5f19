pub fn mask_card_number(number: &str) -> String {
    let len = number.len();
    if len < 8 || !number.is_ascii() {
        "****".to_string()
    } else {
        let prefix = &number[..4];
        let suffix = &number[len - 4..];
        format!("{prefix}****{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_and_last_four() {
        assert_eq!(mask_card_number("4111111111111111"), "4111****1111");
        assert_eq!(mask_card_number("4111"), "****");
    }
}
