use log::warn;

use crate::{matcher::Engine, Match, Matcher};

enum Inner<'r, 'h> {
    Basic(regex::Matches<'r, 'h>),
    Fancy(fancy_regex::Matches<'r, 'h>),
}

/// An iterator over all non-overlapping matches.
///
/// The iterator yields a [`Match`] value until no more matches could be found.
///
/// * `'r` represents the lifetime of the matcher.
/// * `'h` represents the lifetime of the haystack being searched.
///
/// This iterator can be created with the [`crate::Matcher::find_iter`] method.
/// If the backtracking engine fails in the middle of the haystack the failure is logged and the
/// iterator ends.
pub struct FindMatches<'r, 'h> {
    inner: Inner<'r, 'h>,
    pattern: &'r str,
    exhausted: bool,
}

impl<'r, 'h> FindMatches<'r, 'h> {
    /// Creates a new `FindMatches` iterator.
    pub(crate) fn new(matcher: &'r Matcher, haystack: &'h str) -> Self {
        let inner = match matcher.engine() {
            Engine::Basic(re) => Inner::Basic(re.find_iter(haystack)),
            Engine::Fancy(re) => Inner::Fancy(re.find_iter(haystack)),
        };
        Self {
            inner,
            pattern: matcher.as_str(),
            exhausted: false,
        }
    }

    /// Returns the next match in the haystack.
    ///
    /// If no match is found, `None` is returned.
    pub fn next_match(&mut self) -> Option<Match<'h>> {
        if self.exhausted {
            return None;
        }
        let next = match &mut self.inner {
            Inner::Basic(it) => it.next().map(Match::from),
            Inner::Fancy(it) => match it.next() {
                Some(Ok(m)) => Some(Match::from(m)),
                Some(Err(e)) => {
                    warn!("Matching {} failed: {}", self.pattern.escape_default(), e);
                    None
                }
                None => None,
            },
        };
        self.exhausted = next.is_none();
        next
    }
}

impl<'h> Iterator for FindMatches<'_, 'h> {
    type Item = Match<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_match()
    }
}

impl std::iter::FusedIterator for FindMatches<'_, '_> {}

impl std::fmt::Debug for FindMatches<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FindMatches")
            .field("pattern", &self.pattern)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}
