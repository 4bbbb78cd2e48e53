//! Module with the built-in patterns.
//!
//! Use these patterns with care. It is unlikely that any of them covers 100% of the cases it is
//! intended to cover; they are built to handle 99.x% of them. Covering an incremental 0.1% often
//! requires a large marginal amount of work. Unless noted otherwise the patterns are US-centric.
//!
//! Sources:
//! 1. Goyvaerts, Jan & Steven Levithan. Regular Expressions Cookbook, 2nd ed. O'Reilly, 2012.
//! 2. Goyvaerts, Jan. Regular Expressions: The Complete Tutorial.
//!    <https://www.regular-expressions.info/>
//! 3. Python `re` module documentation. <https://docs.python.org/3/library/re.html>
//! 4. Python `ipaddress` module documentation.
//!    <https://docs.python.org/3/library/ipaddress.html>
//! 5. nerdsrescueme/regex.txt. <https://gist.github.com/nerdsrescueme/1237767>
//!
//! Every pattern is compiled once, on first use, and shared read-only afterwards.
use std::{
    ops::Deref,
    sync::{LazyLock, OnceLock},
};

use log::trace;
use rustc_hash::FxHashMap;

use crate::{
    legacy::resolve_legacy,
    userinfo::{PASSWORD_PATTERN, USERNAME_PATTERN},
    Flags, Matcher, PatternSource, ReError, ReErrorKind, Result,
};

macro_rules! join_pattern {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        concat!($first $(, "|", $rest)*)
    };
}

macro_rules! moneysign {
    () => {
        "\u{0024}\u{00A2}\u{00A3}\u{00A4}\u{00A5}\u{058F}\u{060B}\u{09F2}\u{09F3}\
         \u{09FB}\u{0AF1}\u{0BF9}\u{0E3F}\u{17DB}\u{20A0}\u{20A1}\u{20A2}\u{20A3}\
         \u{20A4}\u{20A5}\u{20A6}\u{20A7}\u{20A8}\u{20A9}\u{20AA}\u{20AB}\u{20AC}\u{20AD}\
         \u{20AE}\u{20AF}\u{20B0}\u{20B1}\u{20B2}\u{20B3}\u{20B4}\u{20B5}\u{20B6}\u{20B7}\
         \u{20B8}\u{20B9}\u{20BA}\u{20BB}\u{20BC}\u{20BD}\u{20BE}\u{20BF}\u{A838}\u{FDFC}\
         \u{FE69}\u{FF04}\u{FFE0}\u{FFE1}\u{FFE5}\u{FFE6}"
    };
}

/// All currency symbols of the Unicode category `Sc` (Symbol, currency).
///
/// Source: <http://www.fileformat.info/info/unicode/category/Sc/list.htm>
pub const MONEYSIGN: &str = moneysign!();

/// A built-in pattern. Dereferences to its compiled [`Matcher`].
///
/// The outcome of the first compilation is kept, so a failure is reported by every later call to
/// [`Builtin::matcher`] without compiling again.
#[derive(Debug)]
pub struct Builtin {
    source: PatternSource,
    matcher: OnceLock<Result<Matcher>>,
}

impl Builtin {
    const fn new(name: &'static str, pattern: &'static str, flags: Flags) -> Self {
        Self {
            source: PatternSource::new(name, pattern, flags),
            matcher: OnceLock::new(),
        }
    }

    /// The uncompiled source.
    #[inline]
    pub fn source(&self) -> &PatternSource {
        &self.source
    }

    /// The name under which the pattern is registered.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.source.name()
    }

    /// The compiled matcher.
    pub fn matcher(&self) -> Result<&Matcher> {
        self.matcher
            .get_or_init(|| {
                trace!("Compiling built-in pattern {}", self.source.name());
                self.source.compile()
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl Deref for Builtin {
    type Target = Matcher;

    /// # Panics
    /// If the built-in pattern does not compile. `test_builtins_compile` guards against this;
    /// use [`Builtin::matcher`] or [`lookup`] to handle the error instead.
    fn deref(&self) -> &Self::Target {
        match self.matcher() {
            Ok(matcher) => matcher,
            Err(e) => panic!("{}", e),
        }
    }
}

// ---------------------------------------------------------------------------------------------
// Email address. Source: [2]

/// An email address, anchored to the whole text.
pub static EMAIL: Builtin = Builtin::new(
    "EMAIL",
    r#"^"*[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&@'*+/=?^_`{|}~-]+)*"*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$"#,
    Flags::CASE_INSENSITIVE,
);

// ---------------------------------------------------------------------------------------------
// Whitespace

/// Two or more consecutive whitespace characters of any kind.
pub static MULT_WHITESPACE: Builtin = Builtin::new("MULT_WHITESPACE", r"\s\s+", Flags::NONE);

/// Two or more consecutive literal spaces (U+0020), excluding other whitespace.
pub static MULT_SPACES: Builtin = Builtin::new("MULT_SPACES", r"  +", Flags::NONE);

// ---------------------------------------------------------------------------------------------
// Grammar

/// A generic word: one or more word characters bordered by word boundaries.
pub static WORD: Builtin = Builtin::new("WORD", r"\b\w+\b", Flags::NONE);

/// Words ending in `ly`. Source: [3]
pub static ADVERB: Builtin = Builtin::new("ADVERB", r"\w+ly", Flags::NONE);

// ---------------------------------------------------------------------------------------------
// Phone numbers

/// A phone number of the North American Numbering Plan.
///
/// The plan encompasses 25 regions in twenty countries, primarily in North America, including
/// the Caribbean and the U.S. territories.
/// <https://en.wikipedia.org/wiki/North_American_Numbering_Plan#Modern_plan>
pub static US_PHONENUM: Builtin = Builtin::new(
    "US_PHONENUM",
    r"(?<!-)(?:\b|\+)?(?:1(?: |-|\.|\()?)?(?:\(?[2-9]\d{2}(?: |-|\.|\) |\))?)?[2-9]\d{2}(?: |-|\.)?\d{4}\b",
    Flags::NONE,
);

/// A loose international phone number.
pub static LOOSE_GLOBAL_PHONENUM: Builtin = Builtin::new(
    "LOOSE_GLOBAL_PHONENUM",
    concat!(
        r"(?:\+ ?)?",                 // optional leading plus, followed by optional space
        r"(?:1(?: \d{3})?|\d{2,3})",  // country code
        r"[ .-]?",                    // optional separator
        r"\d{2,3}",                   // area code
        r"[ .-]?",                    // optional separator
        r"\d{3,4}(?:[ .-]?\d{4})?",   // phone number
    ),
    Flags::NONE,
);

// ---------------------------------------------------------------------------------------------
// IP addresses. Only string representations are considered.

/// An IPv4 address in decimal-dot notation. Source: [4]
///
/// Four decimal integers in the inclusive range 0–255, separated by dots. Leading zeroes are
/// tolerated only for values less than 8, as there is no ambiguity between the decimal and octal
/// interpretations of such strings.
pub static IPV4: Builtin = Builtin::new(
    "IPV4",
    concat!(
        r"\b(?:(?:0{1,2}[0-7]|[0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\.){3}",
        r"(?:0{1,2}[0-7]|[0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\b"
    ),
    Flags::NONE,
);

// TODO: IPv6 in exploded and compressed notation (RFC 4291).

// ---------------------------------------------------------------------------------------------
// URLs

/// A URL as prescribed by RFC 1738, `<scheme>:<scheme-specific-part>`. `google.com` alone is not
/// a URL.
pub static STRICT_URL: Builtin = Builtin::new(
    "STRICT_URL",
    r"\b(?:https?|ftp|file)://[-A-Z0-9+&@#/%?=~_|$!:,.;]*[A-Z0-9+&@#/%=~_|$]",
    Flags::CASE_INSENSITIVE,
);

/// A URL with scheme, or a host starting with `www.` or `ftp.`.
pub static LOOSE_URL: Builtin = Builtin::new(
    "LOOSE_URL",
    r"\b(?:(?:https?|ftp|file)://|(?:www|ftp)\.)[-A-Z0-9+&@#/%?=~_|$!:,.;]*[A-Z0-9+&@#/%=~_|$]",
    Flags::CASE_INSENSITIVE,
);

// ---------------------------------------------------------------------------------------------
// Currency

/// A single currency symbol out of [`MONEYSIGN`].
pub static CURRENCY_SIGN: Builtin =
    Builtin::new("CURRENCY_SIGN", concat!("[", moneysign!(), "]"), Flags::NONE);

// ---------------------------------------------------------------------------------------------
// Geographic info

/// Five digits with optional four digit extension.
/// <https://en.wikipedia.org/wiki/ZIP_Code#ZIP+4>
pub static US_ZIPCODE: Builtin = Builtin::new(
    "US_ZIPCODE",
    r"\b[0-9]{5}(?:-[0-9]{4})?\b(?!-)",
    Flags::NONE,
);

/// A two-letter US state or territory abbreviation. Source: [5]
pub static US_STATE: Builtin = Builtin::new(
    "US_STATE",
    r"\b(?:A[KLRZ]|C[AOT]|D[CE]|FL|GA|HI|I[ADLN]|K[SY]|LA|M[ADEINOST]|N[CDEHJMVY]|O[HKR]|PA|RI|S[CD]|T[NX]|UT|V[AT]|W[AIVY])\b",
    Flags::NONE,
);

// ---------------------------------------------------------------------------------------------
// PII

/// A password keyword with its value in the group `token`.
pub static PASSWORD: Builtin = Builtin::new("PASSWORD", PASSWORD_PATTERN, Flags::CASE_INSENSITIVE);

/// A user name keyword with its value in the group `token`.
pub static USERNAME: Builtin = Builtin::new("USERNAME", USERNAME_PATTERN, Flags::CASE_INSENSITIVE);

/// A social security number, `AAA-GG-SSSS`.
/// <https://www.ssa.gov/history/ssn/geocard.html>
pub static STRICT_SSN: Builtin = Builtin::new("STRICT_SSN", r"\d{3}-\d{2}-\d{4}", Flags::NONE);

/// A social security number with space, dash or no separators.
pub static LOOSE_SSN: Builtin =
    Builtin::new("LOOSE_SSN", r"\d{3}[ -]?\d{2}[ -]?\d{4}", Flags::NONE);

/// A Visa, Mastercard, American Express or Discover card number.
pub static STRICT_CREDIT_CARD: Builtin = Builtin::new(
    "STRICT_CREDIT_CARD",
    join_pattern!(
        // Visa, 4XXX-XXXX-XXXX-XXXX
        r"\b4\d{3}[ -]?\d{4}[ -]?\d{4}[ -]?\d{4}",
        // Visa, 4XXX-XXX-XXX-XXX
        r"\b4\d{3}[ -]?\d{3}[ -]?\d{3}[ -]?\d{3}",
        // Mastercard, 5[1-5]XX-XXXX-XXXX-XXXX or 2221-2720
        r"\b(?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[ -]?\d{4}[ -]?\d{4}[ -]?\d{4}",
        // American Express, 3[47]XX XXXXXX XXXXX
        r"3[47]\d{2}[ -]?\d{6}[ -]?\d{5}",
        // Discover, 6011-XXXX-XXXX-XXXX or 65XX-XXXX-XXXX-XXXX
        r"6(?:011|5\d{2})[ -]?\d{4}[ -]?\d{4}[ -]?\d{4}",
    ),
    Flags::NONE,
);

/// Anything made of 13 to 20 digits and dashes.
pub static LOOSE_CREDIT_CARD: Builtin =
    Builtin::new("LOOSE_CREDIT_CARD", r"[0-9-]{13,20}", Flags::NONE);

/// All built-in patterns, in declaration order.
pub static BUILTINS: &[&Builtin] = &[
    &EMAIL,
    &MULT_WHITESPACE,
    &MULT_SPACES,
    &WORD,
    &ADVERB,
    &US_PHONENUM,
    &LOOSE_GLOBAL_PHONENUM,
    &IPV4,
    &STRICT_URL,
    &LOOSE_URL,
    &CURRENCY_SIGN,
    &US_ZIPCODE,
    &US_STATE,
    &PASSWORD,
    &USERNAME,
    &STRICT_SSN,
    &LOOSE_SSN,
    &STRICT_CREDIT_CARD,
    &LOOSE_CREDIT_CARD,
];

static BY_NAME: LazyLock<FxHashMap<&'static str, &'static Builtin>> = LazyLock::new(|| {
    BUILTINS
        .iter()
        .map(|builtin| (builtin.name(), *builtin))
        .collect()
});

/// The names of all built-in patterns, in declaration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|builtin| builtin.name())
}

/// Look up a built-in pattern by name.
///
/// Deprecated lowercase names are resolved through [`crate::legacy`], which logs a deprecation
/// notice on their first use.
pub fn lookup(name: &str) -> Result<&'static Matcher> {
    let builtin = match BY_NAME.get(name) {
        Some(builtin) => *builtin,
        None => resolve_legacy(name)
            .and_then(|current| BY_NAME.get(current).copied())
            .ok_or_else(|| ReError::new(ReErrorKind::UnknownPattern(name.to_string())))?,
    };
    builtin.matcher()
}
