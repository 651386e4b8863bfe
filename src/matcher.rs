//! Full-string pattern testing against a fixed subject.
//!
//! A [`Matcher`] remembers the capture groups of the last pattern that
//! matched. A failed test leaves them in place, so a handler can still
//! read the groups of the branch that selected it.

use regex::Regex;
use tracing::trace;

use crate::coerce::{FromCapture, Target, Value};
use crate::error::MatchError;
use crate::extract::{self, Match1, Match2, Match3, Match4};

/// Captures recorded by a [`Matcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MatchState {
    /// No pattern has matched yet.
    #[default]
    Unset,
    /// Groups of the last matching pattern, in left-to-right order.
    Captured(Vec<String>),
}

impl MatchState {
    pub fn groups(&self) -> &[String] {
        match self {
            MatchState::Unset => &[],
            MatchState::Captured(groups) => groups,
        }
    }
}

/// One matching session over a single subject.
#[derive(Debug)]
pub struct Matcher<'s> {
    subject: &'s str,
    state: MatchState,
}

impl<'s> Matcher<'s> {
    pub fn new(subject: &'s str) -> Self {
        Matcher {
            subject,
            state: MatchState::Unset,
        }
    }

    /// The subject every pattern is tested against.
    pub fn input(&self) -> &'s str {
        self.subject
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Test whether `pattern` matches the whole subject.
    ///
    /// On success the pattern's capture groups replace the recorded ones.
    /// Groups that did not take part in the match are recorded as `""`.
    /// On failure the recorded groups are left untouched.
    pub fn test(&mut self, pattern: &str) -> Result<bool, MatchError> {
        let re = compile_full(pattern)?;
        let Some(caps) = re.captures(self.subject) else {
            trace!(pattern, subject = self.subject, "no match");
            return Ok(false);
        };
        let groups: Vec<String> = caps
            .iter()
            .skip(1)
            .map(|g| g.map_or("", |g| g.as_str()).to_string())
            .collect();
        trace!(pattern, subject = self.subject, groups = groups.len(), "matched");
        self.state = MatchState::Captured(groups);
        Ok(true)
    }

    /// Capture groups of the last successful test, empty if none.
    pub fn groups(&self) -> &[String] {
        self.state.groups()
    }

    pub fn extract1<A: FromCapture>(&self) -> Result<Match1<A>, MatchError> {
        extract::one(self.groups())
    }

    pub fn extract2<A, B>(&self) -> Result<Match2<A, B>, MatchError>
    where
        A: FromCapture,
        B: FromCapture,
    {
        extract::two(self.groups())
    }

    pub fn extract3<A, B, C>(&self) -> Result<Match3<A, B, C>, MatchError>
    where
        A: FromCapture,
        B: FromCapture,
        C: FromCapture,
    {
        extract::three(self.groups())
    }

    pub fn extract4<A, B, C, D>(&self) -> Result<Match4<A, B, C, D>, MatchError>
    where
        A: FromCapture,
        B: FromCapture,
        C: FromCapture,
        D: FromCapture,
    {
        extract::four(self.groups())
    }

    /// Convert leading groups with targets chosen at runtime.
    pub fn extract_all(&self, targets: &[Target]) -> Result<Vec<Value>, MatchError> {
        extract::with_targets(self.groups(), targets)
    }
}

/// Compile `pattern` anchored at both ends of the subject.
///
/// The bare pattern is compiled first so that a pattern which is only
/// valid once wrapped (e.g. `a)|(b`) is still rejected.
fn compile_full(pattern: &str) -> Result<Regex, MatchError> {
    let invalid = |source| MatchError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    };
    Regex::new(pattern).map_err(invalid)?;
    // A trailing `#` comment in verbose mode swallows the closing anchor,
    // which surfaces here as an unclosed group.
    Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(invalid)
}
