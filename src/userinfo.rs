//! Module with the user-info extraction helpers.
//!
//! A keyword (`password`, `pw`, `username`, ...) followed by a separator (`:`, `=` or ` is `) and
//! a token of non-whitespace characters. Please use these for benevolent purposes.
use crate::{Flags, Matcher, Result};

use crate::registry::{PASSWORD, USERNAME};

macro_rules! userinfo_tail {
    () => {
        r"(?:\s*[:=]\s*|\s+is\s+)(?P<token>\S+)"
    };
}

macro_rules! password_keyword {
    () => {
        r"p(?:ass)?w(?:ord)?"
    };
}

macro_rules! username_keyword {
    () => {
        r"user(?:name)?"
    };
}

/// The keyword that introduces a password: `password`, `passw`, `pword` or `pw`.
pub const PASSWORD_KEYWORD: &str = password_keyword!();

/// The keyword that introduces a user name: `user` or `username`.
pub const USERNAME_KEYWORD: &str = username_keyword!();

pub(crate) const PASSWORD_PATTERN: &str = concat!(password_keyword!(), userinfo_tail!());

pub(crate) const USERNAME_PATTERN: &str = concat!(username_keyword!(), userinfo_tail!());

/// The name of the group that captures the value.
pub const TOKEN_GROUP: &str = "token";

/// Build a user-info matcher for a keyword.
///
/// `keyword` is a regex fragment, inserted unescaped. The value is captured in the group named
/// [`TOKEN_GROUP`].
pub fn userinfo_pattern(keyword: &str, flags: Flags) -> Result<Matcher> {
    Matcher::with_flags(&format!("{}{}", keyword, userinfo_tail!()), flags)
}

/// Extracts every password value in the text, in order of occurrence.
/// ```rust
/// let found = re101::extract_password("user: bob, password: hunter2");
/// assert_eq!(found, ["hunter2"]);
/// ```
pub fn extract_password(text: &str) -> Vec<String> {
    PASSWORD.extract(text, TOKEN_GROUP)
}

/// Extracts every user name value in the text, in order of occurrence.
pub fn extract_username(text: &str) -> Vec<String> {
    USERNAME.extract(text, TOKEN_GROUP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::colon("password: s3cret", &["s3cret"])]
    #[case::equals("PW=abc123 and pword = xyz", &["abc123", "xyz"])]
    #[case::is("my passw is open-sesame.", &["open-sesame."])]
    #[case::none("no credentials here", &[])]
    fn test_extract_password(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(extract_password(text), expected);
    }

    #[rstest]
    #[case::colon("username: alice", &["alice"])]
    #[case::several("user=bob\nUSER is carol", &["bob", "carol"])]
    #[case::missing_separator("username alice", &[])]
    fn test_extract_username(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(extract_username(text), expected);
    }

    #[test]
    fn test_extraction_is_restartable() {
        let text = "pw: one, pw: two";
        assert_eq!(extract_password(text), extract_password(text));
    }

    #[test]
    fn test_custom_keyword() {
        let matcher = userinfo_pattern(r"api[_-]?key", Flags::CASE_INSENSITIVE).unwrap();
        assert_eq!(matcher.extract("API_KEY=abc apikey: def", TOKEN_GROUP), ["abc", "def"]);
        assert_eq!(format!("{}{}", PASSWORD_KEYWORD, userinfo_tail!()), PASSWORD_PATTERN);
        assert_eq!(format!("{}{}", USERNAME_KEYWORD, userinfo_tail!()), USERNAME_PATTERN);
    }
}
