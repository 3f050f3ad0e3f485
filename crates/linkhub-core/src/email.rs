use once_cell::sync::Lazy;
use regex::Regex;

/// Something before an `@`, then a domain with at least one dot. No
/// whitespace or extra `@` anywhere.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(EMAIL_PATTERN).ok());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .as_ref()
        .is_some_and(|regex| regex.is_match(email))
}
