//! Module with the lexical-context helpers.
//!
//! A token is a maximal run of word characters bordered by word boundaries. The helpers restrict
//! tokens by the word that follows them, skipping any non-word characters in between.
use crate::{Flags, Lookahead, Matcher, Result};

const TOKEN: &str = r"\b\w+\b";

fn context_pattern(is_positive: bool, fragment: &str) -> String {
    let lookahead = Lookahead::new(is_positive, format!(r"\W+{}\b", fragment));
    format!("{}{}", TOKEN, lookahead)
}

fn compile_context(is_positive: bool, fragment: &str) -> Result<Matcher> {
    Matcher::new(&context_pattern(is_positive, fragment))
}

/// Matches a token only when the next token is `word`.
///
/// `word` is escaped, so regex metacharacters in it match literally.
/// ```rust
/// let matcher = re101::followed_by("fox").unwrap();
/// assert_eq!(matcher.find("the quick fox jumps").unwrap().as_str(), "quick");
/// ```
pub fn followed_by(word: &str) -> Result<Matcher> {
    compile_context(true, &regex_syntax::escape(word))
}

/// Matches a token only when the next token is not `word`.
///
/// `word` is escaped, so regex metacharacters in it match literally.
pub fn not_followed_by(word: &str) -> Result<Matcher> {
    compile_context(false, &regex_syntax::escape(word))
}

/// Like [`followed_by`], but `fragment` is inserted as regex syntax, e.g. `(?:fox|dog)`.
///
/// The caller is responsible for the fragment being well-formed; a malformed fragment is reported
/// as an error.
pub fn followed_by_pattern(fragment: &str) -> Result<Matcher> {
    compile_context(true, fragment)
}

/// Like [`not_followed_by`], but `fragment` is inserted as regex syntax.
pub fn not_followed_by_pattern(fragment: &str) -> Result<Matcher> {
    compile_context(false, fragment)
}

/// Matches an element `<name ...>content</name>` and captures its content in the group `content`.
///
/// `name` is escaped. The content is matched lazily, so nested elements of the same name are not
/// balanced.
pub fn html_tag(name: &str) -> Result<Matcher> {
    let name = regex_syntax::escape(name);
    Matcher::with_flags(
        &format!(r"<{name}\b[^>]*>(?P<content>.*?)</{name}>", name = name),
        Flags::CASE_INSENSITIVE | Flags::DOT_MATCHES_NEW_LINE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "the quick fox jumps";

    fn words<'h>(matcher: &Matcher, text: &'h str) -> Vec<&'h str> {
        matcher.find_iter(text).map(|m| m.as_str()).collect()
    }

    #[test]
    fn test_followed_by() {
        let matcher = followed_by("fox").unwrap();
        assert!(matcher.is_fancy());
        assert_eq!(matcher.find(TEXT).unwrap().as_str(), "quick");
        assert_eq!(words(&matcher, TEXT), ["quick"]);
        assert_eq!(words(&matcher, "a fox, a dog, a fox"), ["a", "a"]);
    }

    #[test]
    fn test_not_followed_by() {
        let matcher = not_followed_by("fox").unwrap();
        let found = words(&matcher, TEXT);
        assert!(found.contains(&"the"));
        assert!(found.contains(&"jumps"));
        assert!(!found.contains(&"quick"));
    }

    #[test]
    fn test_followed_by_requires_whole_word() {
        let matcher = followed_by("fox").unwrap();
        assert!(matcher.find("the quick foxes jump").is_none());
    }

    #[test]
    fn test_word_is_escaped() {
        let matcher = followed_by("a.c").unwrap();
        assert_eq!(words(&matcher, "x a.c"), ["x"]);
        assert!(words(&matcher, "x abc").is_empty());

        let matcher = not_followed_by("a.c").unwrap();
        assert_eq!(words(&matcher, "x abc"), ["x", "abc"]);
    }

    #[test]
    fn test_fragment_is_not_escaped() {
        let matcher = followed_by_pattern("a.c").unwrap();
        assert_eq!(words(&matcher, "x abc"), ["x"]);

        let matcher = followed_by_pattern("(?:fox|dog)").unwrap();
        assert_eq!(words(&matcher, "lazy dog and quick fox"), ["lazy", "quick"]);

        let matcher = not_followed_by_pattern("(?:fox|dog)").unwrap();
        assert_eq!(words(&matcher, "lazy dog and quick fox"), ["dog", "and", "fox"]);

        assert!(followed_by_pattern("(fox").is_err());
    }

    #[test]
    fn test_html_tag() {
        let matcher = html_tag("b").unwrap();
        let text = r#"<p>plain <B class="x">bold</B> and <b>more
bold</b></p>"#;
        assert_eq!(matcher.extract(text, "content"), ["bold", "more\nbold"]);
        assert!(matcher.find("<br>no</br>").is_none());
    }
}
