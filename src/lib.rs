#![forbid(missing_docs)]
//! # `re101`
//! The `re101` crate is a compendium of commonly-used regular expressions: email addresses,
//! phone numbers, IP addresses, URLs, ZIP codes, US states, social security and credit card
//! numbers, and more.
//! Next to the fixed patterns it provides builders that parameterize a pattern, most notably the
//! numeric-token grammar, which recognizes integers, decimals and scientific notation with or
//! without thousands separators and leading zeros.
//!
//! Patterns that the `regex` crate can express are compiled with it. Patterns that need
//! lookaround are compiled with `fancy-regex`. The selection is done by parsing the pattern with
//! the `regex-syntax` crate and is invisible to the caller.
//!
//! None of the patterns is 100% accurate. They are built to cover 99.x% of the cases they are
//! intended for.
//!
//! # Example
//! ```rust
//! use re101::{Flags, IPV4, US_STATE};
//!
//! assert!(IPV4.is_match("192.168.0.1"));
//!
//! let states: Vec<&str> = US_STATE
//!     .find_iter("Shipping from PA to NY and CA")
//!     .map(|m| m.as_str())
//!     .collect();
//! assert_eq!(states, ["PA", "NY", "CA"]);
//!
//! // Numbers are bounded by spaces or the start and end of the text.
//! let number = re101::number(true, true, Flags::NONE).unwrap();
//! let found: Vec<&str> = number
//!     .find_iter("1,225,000.0 and 12.0e-03 but not 12,34")
//!     .map(|m| m.as_str())
//!     .collect();
//! assert_eq!(found, ["1,225,000.0", "12.0e-03"]);
//!
//! let matcher = re101::followed_by("fox").unwrap();
//! assert_eq!(matcher.find("the quick fox jumps").unwrap().as_str(), "quick");
//! ```
//!
//! # Crate features
//! - `serde`: enabled by default. Implements `Serialize` and `Deserialize` for the configuration
//!   types [`Flags`], [`NumberConfig`] and [`TokenClass`] and for [`Span`].

/// Module with the lexical-context helpers
mod context;
pub use context::{
    followed_by, followed_by_pattern, html_tag, not_followed_by, not_followed_by_pattern,
};

/// Module with error definitions
mod errors;
pub use errors::{ReError, ReErrorKind, Result};

/// Module that provides a FindMatches type
mod find_matches;
pub use find_matches::FindMatches;

/// Module with the flags forwarded to the regex engines
mod flags;
pub use flags::Flags;

/// Module with the deprecated pattern names
pub mod legacy;

/// Module that provides a Match type and a Span type
mod match_type;
pub use match_type::{Match, Span};

/// The module with the compiled matcher.
mod matcher;
pub use matcher::Matcher;

/// Module with the numeric-token grammar
mod number;
pub use number::{NumberConfig, NumberGrammar, TokenClass};

/// The module with the number builder.
mod number_builder;
pub use number_builder::{decimal, integer, number, NumberBuilder};

/// Module that provides a Lookahead type, a PatternSource type and the engine selection
mod pattern;
pub use pattern::{EngineKind, Lookahead, PatternSource};

/// Module with the built-in patterns
pub mod registry;
pub use registry::{
    Builtin, ADVERB, CURRENCY_SIGN, EMAIL, IPV4, LOOSE_CREDIT_CARD, LOOSE_GLOBAL_PHONENUM,
    LOOSE_SSN, LOOSE_URL, MONEYSIGN, MULT_SPACES, MULT_WHITESPACE, PASSWORD, STRICT_CREDIT_CARD,
    STRICT_SSN, STRICT_URL, USERNAME, US_PHONENUM, US_STATE, US_ZIPCODE, WORD,
};

/// Module with the user-info extraction helpers
mod userinfo;
pub use userinfo::{
    extract_password, extract_username, userinfo_pattern, PASSWORD_KEYWORD, TOKEN_GROUP,
    USERNAME_KEYWORD,
};
