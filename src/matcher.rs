//! Module with the compiled matcher.
//!
//! A [`Matcher`] hides which regex engine runs a pattern. Patterns the [`regex`] crate accepts are
//! compiled with it; patterns that need lookaround or backreferences are compiled with
//! [`fancy_regex`]. The choice is made by [`EngineKind::detect`].
use log::{trace, warn};

use crate::{EngineKind, FindMatches, Flags, Match, ReError, Result};

/// The compiled regex of a matcher.
#[derive(Debug, Clone)]
pub(crate) enum Engine {
    Basic(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl Engine {
    fn compile(source: &str) -> Result<Self> {
        let kind = EngineKind::detect(source)?;
        trace!("Compiling {} with {}", source.escape_default(), kind);
        match kind {
            EngineKind::Basic => regex::Regex::new(source)
                .map(Engine::Basic)
                .map_err(|e| ReError::pattern_compilation(source, e)),
            EngineKind::Fancy => fancy_regex::Regex::new(source)
                .map(Engine::Fancy)
                .map_err(|e| ReError::pattern_compilation(source, e)),
        }
    }

    fn is_match(&self, haystack: &str, pattern: &str) -> bool {
        match self {
            Engine::Basic(re) => re.is_match(haystack),
            Engine::Fancy(re) => re.is_match(haystack).unwrap_or_else(|e| {
                warn!("Matching {} failed: {}", pattern.escape_default(), e);
                false
            }),
        }
    }
}

/// A compiled pattern together with the flags it was compiled with.
///
/// Matching is a total operation: no match is not an error. Only the backtracking engine can fail
/// at match time, when its backtrack limit is exceeded; such failures are logged and reported as
/// no match.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: String,
    flags: Flags,
    engine: Engine,
    /// The pattern anchored at both ends of the haystack.
    anchored: Engine,
}

impl Matcher {
    /// Compile a pattern without flags.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_flags(pattern, Flags::NONE)
    }

    /// Compile a pattern with the given flags.
    pub fn with_flags(pattern: &str, flags: Flags) -> Result<Self> {
        let engine = Engine::compile(&flags.apply(pattern))?;
        // A trailing `#` comment in verbose mode must not swallow the closing group.
        let end_of_pattern = if flags.ignore_whitespace { "\n" } else { "" };
        let anchored = Engine::compile(
            &flags.apply(&format!(r"\A(?:{}{})\z", pattern, end_of_pattern)),
        )?;
        Ok(Self {
            pattern: pattern.to_string(),
            flags,
            engine,
            anchored,
        })
    }

    /// Get the pattern text, without the inline flag group.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Get the flags the pattern was compiled with.
    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Get the engine kind the pattern was compiled with.
    pub fn engine_kind(&self) -> EngineKind {
        match self.engine {
            Engine::Basic(_) => EngineKind::Basic,
            Engine::Fancy(_) => EngineKind::Fancy,
        }
    }

    /// Check if the pattern needed the backtracking engine.
    #[inline]
    pub fn is_fancy(&self) -> bool {
        self.engine_kind() == EngineKind::Fancy
    }

    /// Check if the pattern matches anywhere in the haystack.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.engine.is_match(haystack, &self.pattern)
    }

    /// Check if the pattern can match the whole haystack.
    ///
    /// Every alternative is considered, not only the one that [`Matcher::find`] reports.
    pub fn is_full_match(&self, haystack: &str) -> bool {
        self.anchored.is_match(haystack, &self.pattern)
    }

    /// Returns the leftmost-first match in the haystack, if any.
    pub fn find<'h>(&self, haystack: &'h str) -> Option<Match<'h>> {
        match &self.engine {
            Engine::Basic(re) => re.find(haystack).map(Match::from),
            Engine::Fancy(re) => match re.find(haystack) {
                Ok(m) => m.map(Match::from),
                Err(e) => {
                    warn!("Matching {} failed: {}", self.pattern.escape_default(), e);
                    None
                }
            },
        }
    }

    /// Returns an iterator over all non-overlapping matches.
    pub fn find_iter<'r, 'h>(&'r self, haystack: &'h str) -> FindMatches<'r, 'h> {
        FindMatches::new(self, haystack)
    }

    /// Collects all non-overlapping matches.
    pub fn find_all<'h>(&self, haystack: &'h str) -> Vec<Match<'h>> {
        self.find_iter(haystack).collect()
    }

    /// Returns the text captured by the named group for each match, in order of occurrence.
    /// Matches in which the group did not participate are skipped.
    pub fn extract(&self, haystack: &str, group: &str) -> Vec<String> {
        match &self.engine {
            Engine::Basic(re) => re
                .captures_iter(haystack)
                .filter_map(|caps| caps.name(group).map(|m| m.as_str().to_string()))
                .collect(),
            Engine::Fancy(re) => {
                let mut values = Vec::new();
                for caps in re.captures_iter(haystack) {
                    match caps {
                        Ok(caps) => {
                            if let Some(m) = caps.name(group) {
                                values.push(m.as_str().to_string());
                            }
                        }
                        Err(e) => {
                            warn!("Matching {} failed: {}", self.pattern.escape_default(), e);
                            break;
                        }
                    }
                }
                values
            }
        }
    }

    pub(crate) fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl std::fmt::Display for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.flags, self.pattern.escape_default())
    }
}
