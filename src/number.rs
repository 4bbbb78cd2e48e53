//! Module with the numeric-token grammar.
//!
//! The lexical structure of a number follows the numeric constants of PostgreSQL:
//!
//! ```text
//! digits
//! digits.[digits][e[+-]digits]
//! .digits[e[+-]digits]
//! digitse(+|-)digits
//! ```
//!
//! At least one digit must be before or after the decimal point, and at least one digit must
//! follow the exponent marker. Without a decimal point the exponent needs an explicit sign, so
//! `1E-5` is a decimal while `5e10` is no number at all. On top of this, thousands separators
//! and leading zeros can be permitted or forbidden, which yields four grammar variants.
//!
//! A token is bounded on both sides by a single space or the start/end of the text. Other
//! punctuation does not delimit a token, so `(12)` contains no number.
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ReError, Result};

/// Wraps a sub-form body in the space-or-text boundary.
/// The space is escaped so that the boundary survives `(?x)`.
macro_rules! bounded {
    ($body:expr) => {
        concat!(r"(?:^|(?<=\x20))", $body, r"(?=\x20|$)")
    };
}

macro_rules! exponent {
    () => {
        r"(?:[eE][+-]?\d+)?"
    };
}

/// Integer part with leading zeros and thousands separators.
macro_rules! grouped_digits {
    () => {
        r"(?:\d{1,3}(?:,\d{3})+|\d+)"
    };
}

/// Integer part without leading zero, with thousands separators.
macro_rules! grouped_nonzero_digits {
    () => {
        r"(?:[1-9]\d{0,2}(?:,\d{3})+|[1-9]\d*)"
    };
}

macro_rules! signed_exponent {
    () => {
        r"[eE][+-]\d+"
    };
}

/// The bare fraction is the same in all variants; it has no integer part to constrain.
const FRACTION: &str = bounded!(concat!(r"\.\d+", exponent!()));

/// The sub-forms of one grammar variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberGrammar {
    /// Digits without a decimal point.
    pub integer: &'static str,
    /// Digits, a decimal point, optional digits and an optional exponent.
    pub decimal: &'static str,
    /// A decimal point, digits and an optional exponent.
    pub fraction: &'static str,
    /// Digits and a signed exponent, without a decimal point.
    pub scientific: &'static str,
}

/// Leading zeros permitted; commas permitted.
pub const LEADING_ZEROS_COMMAS: NumberGrammar = NumberGrammar {
    integer: bounded!(grouped_digits!()),
    decimal: bounded!(concat!(grouped_digits!(), r"\.\d*", exponent!())),
    fraction: FRACTION,
    scientific: bounded!(concat!(grouped_digits!(), signed_exponent!())),
};

/// Leading zeros permitted; commas not permitted.
pub const LEADING_ZEROS: NumberGrammar = NumberGrammar {
    integer: bounded!(r"\d+"),
    decimal: bounded!(concat!(r"\d+\.\d*", exponent!())),
    fraction: FRACTION,
    scientific: bounded!(concat!(r"\d+", signed_exponent!())),
};

/// Leading zeros not permitted; commas permitted.
pub const COMMAS: NumberGrammar = NumberGrammar {
    integer: bounded!(grouped_nonzero_digits!()),
    decimal: bounded!(concat!(grouped_nonzero_digits!(), r"\.\d*", exponent!())),
    fraction: FRACTION,
    scientific: bounded!(concat!(grouped_nonzero_digits!(), signed_exponent!())),
};

/// Neither leading zeros nor commas permitted.
pub const STRICT: NumberGrammar = NumberGrammar {
    integer: bounded!(r"[1-9]\d*"),
    decimal: bounded!(concat!(r"[1-9]\d*\.\d*", exponent!())),
    fraction: FRACTION,
    scientific: bounded!(concat!(r"[1-9]\d*", signed_exponent!())),
};

impl NumberGrammar {
    /// Select the grammar variant for the configuration.
    pub fn select(config: NumberConfig) -> &'static NumberGrammar {
        match (config.allow_leading_zeros, config.allow_commas) {
            (true, true) => &LEADING_ZEROS_COMMAS,
            (true, false) => &LEADING_ZEROS,
            (false, true) => &COMMAS,
            (false, false) => &STRICT,
        }
    }

    /// The sub-forms that make up the given token class, in alternation order.
    pub fn sub_forms(&self, class: TokenClass) -> Vec<&'static str> {
        match class {
            TokenClass::Number => vec![self.integer, self.decimal, self.fraction, self.scientific],
            TokenClass::Integer => vec![self.integer],
            TokenClass::Decimal => vec![self.decimal, self.fraction, self.scientific],
        }
    }

    /// The pattern text for the given token class.
    pub fn pattern(&self, class: TokenClass) -> String {
        self.sub_forms(class).join("|")
    }
}

/// The configuration that selects a grammar variant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumberConfig {
    /// Permit leading zeros, e.g. `042`, `095,000` or `09.05`.
    pub allow_leading_zeros: bool,
    /// Permit syntactically correct thousands separators, e.g. `1,234.09`.
    pub allow_commas: bool,
}

impl NumberConfig {
    /// Create a new configuration.
    pub const fn new(allow_leading_zeros: bool, allow_commas: bool) -> Self {
        Self {
            allow_leading_zeros,
            allow_commas,
        }
    }

    /// The grammar variant of this configuration.
    #[inline]
    pub fn grammar(&self) -> &'static NumberGrammar {
        NumberGrammar::select(*self)
    }
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl fmt::Display for NumberConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "leading zeros {}, commas {}",
            if self.allow_leading_zeros {
                "allowed"
            } else {
                "forbidden"
            },
            if self.allow_commas {
                "allowed"
            } else {
                "forbidden"
            }
        )
    }
}

/// The category of numeric text a matcher targets.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenClass {
    /// Integers and decimals: `12`, `1,234`, `094,509`, `12.0`, `.5`, `4.`, `12.0e-03`.
    Number,
    /// Digits without a decimal point: `12`, `1,234`.
    Integer,
    /// Numbers with a decimal point or a signed exponent: `12.0`, `.5`, `4.`, `1E-5`.
    Decimal,
}

impl TokenClass {
    /// All token classes.
    pub const ALL: [TokenClass; 3] = [TokenClass::Number, TokenClass::Integer, TokenClass::Decimal];
}

impl FromStr for TokenClass {
    type Err = ReError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "number" => Ok(TokenClass::Number),
            "integer" => Ok(TokenClass::Integer),
            "decimal" => Ok(TokenClass::Decimal),
            _ => Err(ReError::invalid_configuration(format!(
                "unknown token class '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenClass::Number => write!(f, "Number"),
            TokenClass::Integer => write!(f, "Integer"),
            TokenClass::Decimal => write!(f, "Decimal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::leading_zeros_commas(true, true, &LEADING_ZEROS_COMMAS)]
    #[case::leading_zeros(true, false, &LEADING_ZEROS)]
    #[case::commas(false, true, &COMMAS)]
    #[case::strict(false, false, &STRICT)]
    fn test_grammar_selection(
        #[case] allow_leading_zeros: bool,
        #[case] allow_commas: bool,
        #[case] expected: &'static NumberGrammar,
    ) {
        let config = NumberConfig::new(allow_leading_zeros, allow_commas);
        assert_eq!(config.grammar(), expected);
    }

    #[test]
    fn test_sub_form_text() {
        assert_eq!(STRICT.integer, r"(?:^|(?<=\x20))[1-9]\d*(?=\x20|$)");
        assert_eq!(STRICT.scientific, r"(?:^|(?<=\x20))[1-9]\d*[eE][+-]\d+(?=\x20|$)");
        assert_eq!(FRACTION, r"(?:^|(?<=\x20))\.\d+(?:[eE][+-]?\d+)?(?=\x20|$)");
    }

    #[test]
    fn test_number_is_integer_or_decimal() {
        for grammar in [&LEADING_ZEROS_COMMAS, &LEADING_ZEROS, &COMMAS, &STRICT] {
            let number = grammar.pattern(TokenClass::Number);
            let joined = format!(
                "{}|{}",
                grammar.pattern(TokenClass::Integer),
                grammar.pattern(TokenClass::Decimal)
            );
            assert_eq!(number, joined);
        }
    }

    #[rstest]
    #[case("number", TokenClass::Number)]
    #[case("Integer", TokenClass::Integer)]
    #[case("DECIMAL", TokenClass::Decimal)]
    fn test_token_class_from_str(#[case] name: &str, #[case] expected: TokenClass) {
        assert_eq!(name.parse::<TokenClass>().unwrap(), expected);
        assert_eq!(expected.to_string().parse::<TokenClass>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_token_class() {
        let err = "hexadecimal".parse::<TokenClass>().unwrap_err();
        assert!(matches!(err.kind(), crate::ReErrorKind::InvalidConfiguration(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = NumberConfig::new(false, true);
        let serialized = serde_json::to_string(&config).unwrap();
        assert_eq!(serialized, r#"{"allow_leading_zeros":false,"allow_commas":true}"#);
        let deserialized: NumberConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);

        let defaulted: NumberConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted, NumberConfig::default());
    }
}
