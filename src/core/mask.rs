//! Masking transforms, one per recognized field type.
//!
//! Every transform checks its own precondition and returns the input
//! unchanged when it is not met. Transforms never panic on malformed
//! input; the detectors decide what gets masked, the transforms only
//! decide how.

/// Fixed marker for fields that are redacted wholesale.
pub const REDACTED: &str = "[REDACTED_PII]";

/// First 2 digits + `XXXXXX` + last 2 digits. No-op unless the value is
/// exactly 10 characters.
pub fn mask_phone(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 10 {
        return value.to_string();
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[8..].iter().collect();
    format!("{}XXXXXX{}", head, tail)
}

/// `XXXX XXXX ` + last 4 digits. No-op unless the value is exactly 12
/// characters.
pub fn mask_aadhar(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 12 {
        return value.to_string();
    }
    let tail: String = chars[8..].iter().collect();
    format!("XXXX XXXX {}", tail)
}

/// First character + `XXXXX` + last 2 characters. No-op unless the value
/// is one uppercase letter followed by exactly 7 digits.
pub fn mask_passport(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let well_formed = chars.len() == 8
        && chars[0].is_ascii_uppercase()
        && chars[1..].iter().all(|c| c.is_ascii_digit());
    if !well_formed {
        return value.to_string();
    }
    let tail: String = chars[6..].iter().collect();
    format!("{}XXXXX{}", chars[0], tail)
}

/// Masks the local part of a `local@domain` handle, keeping the domain.
/// Locals longer than 2 characters keep their first 2; shorter locals are
/// replaced entirely. No-op when the value has no `@`.
///
/// Used for both UPI handles and emails, which share this shape.
pub fn mask_handle(value: &str) -> String {
    let Some((local, domain)) = value.split_once('@') else {
        return value.to_string();
    };
    let chars: Vec<char> = local.chars().collect();
    if chars.len() > 2 {
        let head: String = chars[..2].iter().collect();
        format!("{}XXX@{}", head, domain)
    } else {
        format!("XX@{}", domain)
    }
}

/// Per whitespace-separated token: first character + one `X` per remaining
/// character, tokens re-joined by single spaces.
pub fn mask_name(value: &str) -> String {
    value
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first, "X".repeat(chars.count())),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_phone_keeps_edges() {
        assert_eq!(mask_phone("9876543210"), "98XXXXXX10");
        // Precondition unmet, left alone
        assert_eq!(mask_phone("12345"), "12345");
        assert_eq!(mask_phone(""), "");
    }

    #[test]
    fn test_mask_phone_is_idempotent() {
        let once = mask_phone("9876543210");
        assert_eq!(mask_phone(&once), once);
    }

    #[test]
    fn test_mask_aadhar_keeps_last_four() {
        assert_eq!(mask_aadhar("123412349876"), "XXXX XXXX 9876");
        assert_eq!(mask_aadhar("1234"), "1234");
    }

    #[test]
    fn test_mask_passport() {
        assert_eq!(mask_passport("P1234567"), "PXXXXX67");
        // Re-masking a masked value is a no-op: Xs fail the digit check
        assert_eq!(mask_passport("PXXXXX67"), "PXXXXX67");
        assert_eq!(mask_passport("p1234567"), "p1234567");
    }

    #[test]
    fn test_mask_handle_local_lengths() {
        assert_eq!(mask_handle("alice@okhdfc"), "alXXX@okhdfc");
        assert_eq!(mask_handle("ab@okhdfc"), "XX@okhdfc");
        assert_eq!(mask_handle("a@okhdfc"), "XX@okhdfc");
        assert_eq!(mask_handle("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn test_mask_name_per_token() {
        assert_eq!(mask_name("Jane Doe"), "JXXX DXX");
        assert_eq!(mask_name("Jane"), "JXXX");
        // Masked names re-mask to the same value
        assert_eq!(mask_name("JXXX DXX"), "JXXX DXX");
        assert_eq!(mask_name(""), "");
    }
}
