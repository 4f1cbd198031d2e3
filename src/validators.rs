//! Field validators applied before any payload leaves the client.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

// The TLD group may end early and hand the rest to the path group, so long TLDs pass
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/0-9A-Za-z_ .-]*)*/?$")
        .expect("valid url pattern")
});

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("valid phone pattern"));

static PHONE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s()\-]").expect("valid separator pattern"));

static PASSWORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,}$").expect("valid password pattern"));

// No lookahead in `regex`: each required class is its own pattern
static PASSWORD_CLASSES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    ["[a-z]", "[A-Z]", "[0-9]", "[@$!%*?&]"]
        .map(|class| Regex::new(class).expect("valid password class"))
});

/// `local@domain.tld` with no whitespace and a single `@`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(&email.to_lowercase())
}

/// Loose web URL check. Empty input is accepted: optional URL fields are valid when blank.
pub fn is_valid_url(url: &str) -> bool {
    url.is_empty() || URL.is_match(&url.to_lowercase())
}

/// Optional leading `+`, first digit 1-9, at most 16 digits. Spaces, parentheses and dashes are ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(&PHONE_SEPARATORS.replace_all(phone, ""))
}

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn has_min_length(value: &str, min: usize) -> bool {
    is_present(value) && value.trim().chars().count() >= min
}

pub fn has_max_length(value: &str, max: usize) -> bool {
    is_present(value) && value.trim().chars().count() <= max
}

/// At least 8 characters with a lowercase letter, an uppercase letter, a digit and one of `@$!%*?&`
pub fn is_strong_password(password: &str) -> bool {
    PASSWORD_CHARS.is_match(password) && PASSWORD_CLASSES.iter().all(|class| class.is_match(password))
}
