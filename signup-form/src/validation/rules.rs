//! Pure predicates behind the built-in rules.
//!
//! Lengths are counted in characters, not bytes, so Cyrillic names get the
//! same limits as Latin ones.

use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;

static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]").expect("uppercase pattern is valid"));

static LOCAL_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]$").expect("local part pattern is valid")
});

static DOMAIN_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9\-]*$").expect("domain label pattern is valid")
});

static TLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z]{2,}$").expect("tld pattern is valid"));

/// Number of characters in `value`.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn min_length(value: &str, min: usize) -> bool {
    char_len(value) >= min
}

pub fn max_length(value: &str, max: usize) -> bool {
    char_len(value) <= max
}

/// At least one ASCII uppercase letter.
pub fn has_uppercase(value: &str) -> bool {
    UPPERCASE.is_match(value)
}

/// A plain `local@domain.tld` address.
///
/// The local part is limited to ASCII letters, digits and `_'+-.`, may not
/// start with a dot or contain two dots in a row, and may not end in `'` or
/// `.`. Each domain label starts with a letter or digit and holds only
/// letters, digits and hyphens; the top-level label is at least two letters.
pub fn is_email(value: &str) -> bool {
    if !EmailAddress::is_valid(value) {
        return false;
    }

    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.starts_with('.') || local.contains("..") || !LOCAL_PART.is_match(local) {
        return false;
    }

    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    TLD.is_match(tld) && labels.split('.').all(|label| DOMAIN_LABEL.is_match(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_count_chars() {
        assert!(min_length("Жан", 3));
        assert!(!min_length("ab", 3));
        assert!(max_length(&"я".repeat(20), 20));
        assert!(!max_length(&"я".repeat(21), 20));
    }

    #[test]
    fn test_astral_chars_count_once() {
        assert_eq!(char_len("😀😀"), 2);
        assert!(!min_length("😀😀", 3));
        assert!(min_length("😀😀😀", 3));
    }

    #[test]
    fn test_uppercase() {
        assert!(has_uppercase("longEnough"));
        assert!(!has_uppercase("longenough1"));
        assert!(!has_uppercase("пароль"));
    }

    #[test]
    fn test_email() {
        assert!(is_email("a@b.co"));
        assert!(is_email("alice@example.com"));
        assert!(is_email("first.last+tag@mail.example.org"));

        assert!(!is_email(""));
        assert!(!is_email("alice"));
        assert!(!is_email("alice@"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("alice@example"));
        assert!(!is_email("alice@example.c"));
        assert!(!is_email("alice @example.com"));
        assert!(!is_email("Alice <alice@example.com>"));
    }

    #[test]
    fn test_email_character_classes() {
        assert!(is_email("o'neil@example.com"));
        assert!(is_email("user_1-x@sub-domain.example.com"));

        for email in [
            "a!b@example.com",
            "a#b@example.com",
            "a{b}@example.com",
            "a~@example.com",
            "алиса@example.com",
            "a@example.co_m.com",
            ".a@example.com",
            "a..b@example.com",
            "a.@example.com",
            "a@-example.com",
            "a@example..com",
        ] {
            assert!(!is_email(email), "{:?}", email);
        }
    }

    #[test]
    fn test_presence() {
        assert!(is_present("x"));
        assert!(!is_present("   "));
    }
}
