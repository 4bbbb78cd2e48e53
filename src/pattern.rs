//! Module with the pattern types and their methods.
use regex_syntax::ast::{parse::Parser, ErrorKind};

use crate::{Flags, Matcher, ReError, ReErrorKind, Result};

/// A lookahead is used to restrict a match in the input.
/// The lookahead is a regular expression whose condition must be met after the pattern itself for
/// it to be considered a match.
///
/// If the lookahead is positive, it must match for the pattern to be considered a match.
/// If the lookahead is negative, it must not match for the pattern to be considered a match.
/// The characters read by the lookahead are not included in the match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lookahead {
    /// If the lookahead is positive.
    pub is_positive: bool,
    /// The lookahead pattern.
    pub pattern: String,
}

impl Lookahead {
    /// Create a new lookahead.
    pub fn new(is_positive: bool, pattern: String) -> Self {
        Self {
            is_positive,
            pattern,
        }
    }

    /// Get the pattern.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check if the lookahead is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.is_positive
    }
}

impl std::fmt::Display for Lookahead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_positive {
            write!(f, "(?={})", self.pattern)
        } else {
            write!(f, "(?!{})", self.pattern)
        }
    }
}

/// The regex engine a pattern is compiled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// The [`regex`] crate. Linear time, no lookaround.
    Basic,
    /// The [`fancy_regex`] crate. Backtracking, supports lookaround and backreferences.
    Fancy,
}

impl EngineKind {
    /// Select the engine for the given pattern text.
    ///
    /// The pattern is parsed with `regex-syntax`. If it parses, the basic engine suffices.
    /// Lookaround and backreferences are only understood by the fancy engine. Any other parse
    /// error is reported.
    pub fn detect(pattern: &str) -> Result<Self> {
        match Parser::new().parse(pattern) {
            Ok(_) => Ok(EngineKind::Basic),
            Err(e) => {
                if matches!(
                    e.kind(),
                    ErrorKind::UnsupportedLookAround | ErrorKind::UnsupportedBackreference
                ) {
                    Ok(EngineKind::Fancy)
                } else {
                    Err(ReError::new(ReErrorKind::RegexSyntaxError(
                        e,
                        pattern.to_string(),
                    )))
                }
            }
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Basic => write!(f, "regex"),
            EngineKind::Fancy => write!(f, "fancy-regex"),
        }
    }
}

/// The uncompiled source of a named, built-in pattern.
///
/// Sources are `const` so that the registry can hold them without allocation; they are compiled
/// on first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternSource {
    name: &'static str,
    pattern: &'static str,
    flags: Flags,
}

impl PatternSource {
    /// Create a new pattern source.
    pub const fn new(name: &'static str, pattern: &'static str, flags: Flags) -> Self {
        Self {
            name,
            pattern,
            flags,
        }
    }

    /// Get the name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the pattern without flags.
    #[inline]
    pub const fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Get the flags.
    #[inline]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Compile the source into a matcher.
    pub fn compile(&self) -> Result<Matcher> {
        Matcher::with_flags(self.pattern, self.flags)
    }
}

impl std::fmt::Display for PatternSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}{}", self.name, self.flags, self.pattern.escape_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain(r"\b\w+\b", EngineKind::Basic)]
    #[case::named_group(r"user(?P<token>\S+)", EngineKind::Basic)]
    #[case::positive_lookahead(r"\w+(?=\W+fox\b)", EngineKind::Fancy)]
    #[case::negative_lookbehind(r"(?<!-)\d{3}", EngineKind::Fancy)]
    #[case::backreference(r"(a)\1", EngineKind::Fancy)]
    fn test_engine_detection(#[case] pattern: &str, #[case] expected: EngineKind) {
        assert_eq!(EngineKind::detect(pattern).unwrap(), expected);
    }

    #[test]
    fn test_syntax_error() {
        let err = EngineKind::detect(r"(\d+").unwrap_err();
        assert!(matches!(err.kind(), ReErrorKind::RegexSyntaxError(_, p) if p == r"(\d+"));
    }

    #[rstest]
    #[case::positive(true, r"\W+fox\b", r"(?=\W+fox\b)")]
    #[case::negative(false, r"\W+fox\b", r"(?!\W+fox\b)")]
    fn test_lookahead_display(
        #[case] is_positive: bool,
        #[case] pattern: &str,
        #[case] expected: &str,
    ) {
        let lookahead = Lookahead::new(is_positive, pattern.to_string());
        assert_eq!(lookahead.to_string(), expected);
        assert_eq!(lookahead.is_positive(), is_positive);
    }

    #[test]
    fn test_pattern_source_compiles() {
        const SOURCE: PatternSource = PatternSource::new("ADVERB", r"\w+ly", Flags::NONE);
        let matcher = SOURCE.compile().unwrap();
        assert_eq!(matcher.as_str(), r"\w+ly");
        assert!(matcher.is_match("quickly"));
        assert_eq!(SOURCE.to_string(), r"ADVERB: \\w+ly");
    }
}
