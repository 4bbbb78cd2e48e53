//! Module with the deprecated pattern names.
//!
//! Earlier releases exposed the patterns under lowercase names. These names still resolve to the
//! current patterns, but the first use of each one logs a deprecation notice.
use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use crate::{registry, Matcher, ReError, ReErrorKind, Result};

/// A deprecated name and the name that replaces it.
#[derive(Debug)]
pub struct LegacyAlias {
    old: &'static str,
    current: &'static str,
    noticed: AtomicBool,
}

impl LegacyAlias {
    const fn new(old: &'static str, current: &'static str) -> Self {
        Self {
            old,
            current,
            noticed: AtomicBool::new(false),
        }
    }

    /// The deprecated name.
    #[inline]
    pub fn old(&self) -> &'static str {
        self.old
    }

    /// The current name.
    #[inline]
    pub fn current(&self) -> &'static str {
        self.current
    }

    /// Log the deprecation notice if it has not been logged yet.
    /// Returns `true` if the notice was logged by this call.
    fn notice(&self) -> bool {
        let first = !self.noticed.swap(true, Ordering::Relaxed);
        if first {
            warn!(
                "The `{}` pattern has been renamed `{}` and is deprecated. Use `re101::{}`.",
                self.old, self.current, self.current
            );
        }
        first
    }
}

static ALIASES: [LegacyAlias; 11] = [
    LegacyAlias::new("email", "EMAIL"),
    LegacyAlias::new("mult_whitespace", "MULT_WHITESPACE"),
    LegacyAlias::new("mult_spaces", "MULT_SPACES"),
    LegacyAlias::new("word", "WORD"),
    LegacyAlias::new("adverb", "ADVERB"),
    LegacyAlias::new("ipv4", "IPV4"),
    LegacyAlias::new("IPv4", "IPV4"),
    LegacyAlias::new("moneysign", "CURRENCY_SIGN"),
    LegacyAlias::new("zipcode", "US_ZIPCODE"),
    LegacyAlias::new("state", "US_STATE"),
    LegacyAlias::new("nanp_phonenum", "US_PHONENUM"),
];

/// All deprecated names.
pub fn aliases() -> &'static [LegacyAlias] {
    &ALIASES
}

/// Resolve a deprecated name to the current name.
///
/// Returns `None` if `name` is not a deprecated name. The deprecation notice is logged once per
/// name and process.
pub fn resolve_legacy(name: &str) -> Option<&'static str> {
    ALIASES.iter().find(|alias| alias.old == name).map(|alias| {
        alias.notice();
        alias.current
    })
}

/// Look up a built-in pattern by its deprecated name.
pub fn lookup_legacy(name: &str) -> Result<&'static Matcher> {
    let current = resolve_legacy(name)
        .ok_or_else(|| ReError::new(ReErrorKind::UnknownPattern(name.to_string())))?;
    registry::lookup(current)
}
