//! Form input validation.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Validate a contact phone number: `0` or `+84` followed by exactly nine
/// digits. The backend enforces the same pattern, but checking here keeps
/// the round trip out of the common typo case.
#[must_use]
pub fn is_valid_phone(raw: &str) -> bool {
    let rest = if let Some(stripped) = raw.strip_prefix("+84") {
        stripped
    } else if let Some(stripped) = raw.strip_prefix('0') {
        stripped
    } else {
        return false;
    };
    rest.len() == 9 && rest.bytes().all(|b| b.is_ascii_digit())
}
