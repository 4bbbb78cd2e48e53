//! Module with the matcher flags.
//! The flags are forwarded to the regex engine as an inline flag group in front of the pattern.
use std::{fmt, ops::BitOr, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ReError, Result};

/// Flags that modify how a pattern is compiled.
///
/// The default is the empty flag set. Flags can be combined with `|`:
/// ```rust
/// use re101::Flags;
///
/// let flags = Flags::CASE_INSENSITIVE | Flags::MULTI_LINE;
/// assert_eq!(flags.to_string(), "(?im)");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Flags {
    /// `i`: letters match both upper and lower case.
    pub case_insensitive: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `s`: `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// `x`: whitespace in the pattern is ignored and `#` starts a comment.
    pub ignore_whitespace: bool,
}

impl Flags {
    /// No flags at all.
    pub const NONE: Flags = Flags {
        case_insensitive: false,
        multi_line: false,
        dot_matches_new_line: false,
        ignore_whitespace: false,
    };

    /// Only case insensitivity.
    pub const CASE_INSENSITIVE: Flags = Flags {
        case_insensitive: true,
        ..Flags::NONE
    };

    /// Only multi line mode.
    pub const MULTI_LINE: Flags = Flags {
        multi_line: true,
        ..Flags::NONE
    };

    /// Only dot-matches-new-line mode.
    pub const DOT_MATCHES_NEW_LINE: Flags = Flags {
        dot_matches_new_line: true,
        ..Flags::NONE
    };

    /// Only verbose mode.
    pub const IGNORE_WHITESPACE: Flags = Flags {
        ignore_whitespace: true,
        ..Flags::NONE
    };

    /// Check if no flag is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Flags::NONE
    }

    /// The flag letters in the order `imsx`.
    pub fn letters(&self) -> String {
        [
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.ignore_whitespace, 'x'),
        ]
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, c)| *c)
        .collect()
    }

    /// Prefix the given pattern with the inline flag group.
    pub(crate) fn apply(&self, pattern: &str) -> String {
        format!("{}{}", self, pattern)
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Self) -> Self::Output {
        Flags {
            case_insensitive: self.case_insensitive || rhs.case_insensitive,
            multi_line: self.multi_line || rhs.multi_line,
            dot_matches_new_line: self.dot_matches_new_line || rhs.dot_matches_new_line,
            ignore_whitespace: self.ignore_whitespace || rhs.ignore_whitespace,
        }
    }
}

impl FromStr for Flags {
    type Err = ReError;

    /// Parse flags from their letters, e.g. `"im"`.
    fn from_str(s: &str) -> Result<Self> {
        s.chars().try_fold(Flags::NONE, |flags, c| {
            let flag = match c {
                'i' | 'I' => Flags::CASE_INSENSITIVE,
                'm' | 'M' => Flags::MULTI_LINE,
                's' | 'S' => Flags::DOT_MATCHES_NEW_LINE,
                'x' | 'X' => Flags::IGNORE_WHITESPACE,
                _ => {
                    return Err(ReError::invalid_configuration(format!(
                        "unknown flag '{}'",
                        c
                    )))
                }
            };
            Ok(flags | flag)
        })
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            Ok(())
        } else {
            write!(f, "(?{})", self.letters())
        }
    }
}
