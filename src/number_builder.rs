use log::debug;

use crate::{Flags, Matcher, NumberConfig, Result, TokenClass};

/// A builder for creating a numeric-token matcher.
///
/// Each call to [`NumberBuilder::build`] compiles a fresh matcher; nothing is cached.
/// ```rust
/// use re101::{NumberBuilder, TokenClass};
///
/// let integer = NumberBuilder::new(TokenClass::Integer)
///     .allow_leading_zeros(false)
///     .build()
///     .unwrap();
/// assert!(integer.is_match("1,234"));
/// assert!(!integer.is_match("076"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberBuilder {
    class: TokenClass,
    config: NumberConfig,
    flags: Flags,
}

impl NumberBuilder {
    /// Creates a new builder for the token class with the default configuration, which permits
    /// both leading zeros and commas.
    pub fn new(class: TokenClass) -> Self {
        Self {
            class,
            config: NumberConfig::default(),
            flags: Flags::NONE,
        }
    }

    /// Permit or forbid leading zeros.
    pub fn allow_leading_zeros(mut self, allow: bool) -> Self {
        self.config.allow_leading_zeros = allow;
        self
    }

    /// Permit or forbid thousands separators.
    pub fn allow_commas(mut self, allow: bool) -> Self {
        self.config.allow_commas = allow;
        self
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: NumberConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the flags passed to the regex engine.
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// The pattern text the builder would compile, without flags.
    pub fn pattern(&self) -> String {
        self.config.grammar().pattern(self.class)
    }

    /// Builds the matcher.
    pub fn build(self) -> Result<Matcher> {
        debug!("Building {} matcher, {}", self.class, self.config);
        Matcher::with_flags(&self.pattern(), self.flags)
    }
}

/// A matcher for standalone numbers: integers, decimals and scientific notation.
pub fn number(allow_leading_zeros: bool, allow_commas: bool, flags: Flags) -> Result<Matcher> {
    build(TokenClass::Number, allow_leading_zeros, allow_commas, flags)
}

/// A matcher for standalone integers.
pub fn integer(allow_leading_zeros: bool, allow_commas: bool, flags: Flags) -> Result<Matcher> {
    build(TokenClass::Integer, allow_leading_zeros, allow_commas, flags)
}

/// A matcher for standalone decimals, with or without exponent.
pub fn decimal(allow_leading_zeros: bool, allow_commas: bool, flags: Flags) -> Result<Matcher> {
    build(TokenClass::Decimal, allow_leading_zeros, allow_commas, flags)
}

fn build(
    class: TokenClass,
    allow_leading_zeros: bool,
    allow_commas: bool,
    flags: Flags,
) -> Result<Matcher> {
    NumberBuilder::new(class)
        .allow_leading_zeros(allow_leading_zeros)
        .allow_commas(allow_commas)
        .flags(flags)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_builder_defaults() {
        init();
        let builder = NumberBuilder::new(TokenClass::Number);
        assert_eq!(builder.config, NumberConfig::new(true, true));
        assert_eq!(builder.flags, Flags::NONE);
        let matcher = builder.build().unwrap();
        assert!(matcher.is_fancy());
        assert_eq!(matcher.as_str(), builder.pattern());
    }

    #[rstest]
    #[case::leading_zero_allowed(true, true)]
    #[case::leading_zero_forbidden(false, false)]
    fn test_leading_zero_gating(#[case] allow_leading_zeros: bool, #[case] expected: bool) {
        init();
        let matcher = integer(allow_leading_zeros, true, Flags::NONE).unwrap();
        assert_eq!(matcher.is_match("076"), expected);
        assert_eq!(matcher.is_match("0"), expected);
        assert!(matcher.is_match("76"));
    }

    #[rstest]
    #[case::with_commas(true)]
    #[case::without_commas(false)]
    fn test_comma_gating(#[case] allow_commas: bool) {
        init();
        let matcher = number(true, allow_commas, Flags::NONE).unwrap();
        assert_eq!(matcher.is_match("1,234"), allow_commas);
        assert_eq!(matcher.is_match("1,225,000.0"), allow_commas);
        assert!(matcher.is_match("1234"));
    }

    #[test]
    fn test_find_numbers_in_text() {
        init();
        let matcher = number(true, true, Flags::NONE).unwrap();
        let text = "pay 1,250.00 now, 3 times or 12 .5e3 (7) x9";
        let found: Vec<&str> = matcher.find_iter(text).map(|m| m.as_str()).collect();
        assert_eq!(found, ["1,250.00", "3", "12", ".5e3"]);
    }

    #[test]
    fn test_decimal_excludes_integers() {
        init();
        let matcher = decimal(true, true, Flags::NONE).unwrap();
        let found: Vec<&str> = matcher
            .find_iter("4 4. .4 4.4 4,000 4,000.5")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, ["4.", ".4", "4.4", "4,000.5"]);
    }

    #[test]
    fn test_flags_are_forwarded() {
        init();
        let matcher = decimal(true, true, Flags::MULTI_LINE).unwrap();
        assert_eq!(matcher.flags(), Flags::MULTI_LINE);
        let found: Vec<&str> = matcher.find_iter("1.5\n2.5").map(|m| m.as_str()).collect();
        assert_eq!(found, ["1.5", "2.5"]);
        assert!(decimal(true, true, Flags::NONE).unwrap().find("1.5\n2.5").is_none());
    }

    #[test]
    fn test_verbose_mode_keeps_the_boundary() {
        init();
        let matcher = number(true, true, Flags::IGNORE_WHITESPACE).unwrap();
        assert!(matcher.find("a12b 1,2").is_none());
        let found: Vec<&str> = matcher.find_iter("7 a12b 1,250").map(|m| m.as_str()).collect();
        assert_eq!(found, ["7", "1,250"]);
    }
}
