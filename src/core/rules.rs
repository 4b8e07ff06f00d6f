//! Individual field predicates. Each returns `true` when the value passes.

use crate::domain::model::is_form_whitespace;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

pub const MIN_USERNAME_LENGTH: usize = 4;
pub const MIN_DISTINCT_USERNAME_CHARS: usize = 2;
pub const MIN_PASSWORD_LENGTH: usize = 12;
pub const BLOCKED_EMAIL_SUFFIX: &str = "@example.com";
pub const FORBIDDEN_PASSWORD_WORD: &str = "password";

pub const USERNAME_FORMAT_MESSAGE: &str = "Username must be at least four characters long, contain only alphanumeric characters, and include at least two unique characters.";
pub const USERNAME_TAKEN_MESSAGE: &str = "That username is already taken.";
pub const EMAIL_MESSAGE: &str =
    "Please enter a valid email address that is not from \"example.com\".";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 12 characters long and include uppercase, lowercase, a number, and a special character. It cannot contain the word \"password\" or your username.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";
pub const TERMS_MESSAGE: &str = "You must agree to the terms.";
pub const USERNAME_BLANK_MESSAGE: &str = "Username cannot be blank.";
pub const USERNAME_MISSING_MESSAGE: &str = "Username does not exist.";
pub const INCORRECT_PASSWORD_MESSAGE: &str = "Incorrect password.";
pub const ACCOUNT_INVALID_MESSAGE: &str = "Account data is invalid.";

// Unanchored, matches anywhere in the value. The class is `\S` with U+0085
// counted as non-space and U+FEFF as space.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    let non_space = r"[[\S\x{85}]&&[^\x{FEFF}]]";
    Regex::new(&format!(r"{0}+@{0}+\.{0}+", non_space)).expect("email pattern is valid")
});

pub fn username_format_ok(username: &str) -> bool {
    !username.is_empty()
        && utf16_len(username) >= MIN_USERNAME_LENGTH
        && username.chars().all(|c| c.is_ascii_alphanumeric())
        && distinct_chars(username) >= MIN_DISTINCT_USERNAME_CHARS
}

pub fn email_ok(email: &str) -> bool {
    !email.is_empty() && EMAIL_SHAPE.is_match(email) && !email.ends_with(BLOCKED_EMAIL_SUFFIX)
}

pub fn password_strength_ok(password: &str, username: &str) -> bool {
    utf16_len(password) >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_special_char)
        && !contains_forbidden_word(password)
        && !password.contains(username)
}

pub fn passwords_match(password: &str, password_check: &str) -> bool {
    password == password_check
}

/// Neither a word character (`[A-Za-z0-9_]`) nor whitespace.
pub fn is_special_char(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_' || is_form_whitespace(c))
}

/// Lengths are measured in UTF-16 code units, as the browser does.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn contains_forbidden_word(password: &str) -> bool {
    password
        .to_ascii_lowercase()
        .contains(FORBIDDEN_PASSWORD_WORD)
}

fn distinct_chars(value: &str) -> usize {
    value.chars().collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_format() {
        assert!(username_format_ok("user1"));
        assert!(username_format_ok("ab12"));
        assert!(!username_format_ok(""));
        assert!(!username_format_ok("abc"));
        assert!(!username_format_ok("aaaa"));
        assert!(!username_format_ok("user_1"));
        assert!(!username_format_ok("usér1"));
    }

    #[test]
    fn test_short_usernames_always_fail() {
        for name in ["a", "ab", "a1b", "xyz"] {
            assert!(!username_format_ok(name), "{name} should fail");
        }
    }

    #[test]
    fn test_email() {
        assert!(email_ok("user1@mail.com"));
        assert!(email_ok("a@b.co"));
        assert!(!email_ok(""));
        assert!(!email_ok("user1mail.com"));
        assert!(!email_ok("user1@mailcom"));
        assert!(!email_ok("someone@example.com"));
        assert!(email_ok("someone@example.com.au"));
        assert!(!email_ok("a\u{FEFF}@b.com"));
        assert!(email_ok("a\u{85}@b.com"));
    }

    #[test]
    fn test_password_strength() {
        assert!(password_strength_ok("Str0ng!Pass#99", "user1"));
        assert!(!password_strength_ok("Sh0rt!Pass", "user1"));
        assert!(!password_strength_ok("str0ng!pass#99", "user1"));
        assert!(!password_strength_ok("STR0NG!PASS#99", "user1"));
        assert!(!password_strength_ok("Strong!Pass#xx", "user1"));
        assert!(!password_strength_ok("Str0ngPass99xx", "user1"));
        assert!(!password_strength_ok("Password1234!", "ab12"));
        assert!(!password_strength_ok("xPaSsWoRd1234!", "ab12"));
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // Four astral characters are eight UTF-16 units.
        assert!(password_strength_ok("Ab1!😀😀😀😀", "user1"));
        assert!(!password_strength_ok("Ab1!😀😀😀", "user1"));
        assert!(!password_strength_ok("Ab1!😀😀😀x", "user1"));
        assert!(password_strength_ok("Ab1!😀😀😀xy", "user1"));
    }

    #[test]
    fn test_password_containing_username_fails() {
        assert!(!password_strength_ok("Str0ng!user1#99", "user1"));
        // An empty username is a substring of anything.
        assert!(!password_strength_ok("Str0ng!Pass#99", ""));
    }

    #[test]
    fn test_underscore_and_space_are_not_special() {
        assert!(!is_special_char('_'));
        assert!(!is_special_char(' '));
        assert!(is_special_char('!'));
        assert!(is_special_char('é'));
        assert!(is_special_char('\u{85}'));
        assert!(!is_special_char('\u{FEFF}'));
        assert!(!password_strength_ok("Str0ng_Pass 99", "user1"));
    }

    #[test]
    fn test_passwords_match_is_exact() {
        assert!(passwords_match("Str0ng!Pass#99", "Str0ng!Pass#99"));
        assert!(!passwords_match("Str0ng!Pass#99", "Str0ng!Pass#99 "));
    }
}
