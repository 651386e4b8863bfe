//! Reusable first-match-wins tables of pattern handlers.

use tracing::debug;

use crate::error::MatchError;
use crate::match_with;
use crate::matcher::Matcher;

type Handler<'h, T> = Box<dyn Fn(&Matcher) -> Result<T, MatchError> + Send + Sync + 'h>;

/// An ordered list of `(pattern, handler)` arms.
///
/// Arms are tried in insertion order; the first pattern that matches the
/// whole subject selects its handler, which then reads the captures.
///
/// ```
/// use capmatch::Cases;
///
/// let sum = Cases::new()
///     .case(r"(\d+) (\d+)", |m| {
///         let pair = m.extract2::<i32, i32>()?;
///         Ok(pair.first + pair.second)
///     })
///     .otherwise(|_| Ok(i32::MAX));
///
/// assert_eq!(sum.evaluate("1 2").unwrap(), 3);
/// assert_eq!(sum.evaluate("lalala").unwrap(), i32::MAX);
/// ```
pub struct Cases<'h, T> {
    arms: Vec<(String, Handler<'h, T>)>,
    fallback: Option<Handler<'h, T>>,
}

impl<'h, T> Cases<'h, T> {
    pub fn new() -> Self {
        Cases {
            arms: Vec::new(),
            fallback: None,
        }
    }

    pub fn case<F>(mut self, pattern: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Matcher) -> Result<T, MatchError> + Send + Sync + 'h,
    {
        self.arms.push((pattern.into(), Box::new(handler)));
        self
    }

    /// Handler run when no arm matches. Replaces any earlier fallback.
    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Matcher) -> Result<T, MatchError> + Send + Sync + 'h,
    {
        self.fallback = Some(Box::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Run the table against `subject` in a fresh session.
    ///
    /// Without a fallback, a subject no arm matches is [`MatchError::NoMatch`].
    pub fn evaluate(&self, subject: &str) -> Result<T, MatchError> {
        match_with(subject, |m| {
            for (index, (pattern, handler)) in self.arms.iter().enumerate() {
                if m.test(pattern)? {
                    debug!(index, pattern = pattern.as_str(), "case selected");
                    return handler(&*m);
                }
            }
            match &self.fallback {
                Some(handler) => {
                    debug!(subject, "fallback selected");
                    handler(&*m)
                }
                None => Err(MatchError::NoMatch {
                    subject: subject.to_string(),
                }),
            }
        })
    }
}

impl<T> Default for Cases<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting() -> Cases<'static, String> {
        Cases::new()
            .case("hi", |_| Ok("bare".to_string()))
            .case(r"hi ([a-z]+)", |m| Ok(m.extract1::<String>()?.first))
    }

    #[test]
    fn first_matching_arm_wins() {
        let cases = Cases::new()
            .case(r"(\d+)", |_| Ok(1))
            .case(r"(\d)(\d*)", |_| Ok(2))
            .otherwise(|_| Ok(0));
        assert_eq!(cases.evaluate("42").unwrap(), 1);
        assert_eq!(cases.evaluate("x").unwrap(), 0);
    }

    #[test]
    fn handler_reads_selected_captures() {
        let cases = greeting();
        assert_eq!(cases.evaluate("hi").unwrap(), "bare");
        assert_eq!(cases.evaluate("hi bob").unwrap(), "bob");
        assert_eq!(cases.len(), 2);
    }

    #[test]
    fn no_match_without_fallback() {
        let err = greeting().evaluate("bye").unwrap_err();
        assert!(matches!(err, MatchError::NoMatch { ref subject } if subject == "bye"));
    }

    #[test]
    fn fallback_sees_unset_state() {
        let cases = greeting().otherwise(|m| Ok(format!("{} groups", m.groups().len())));
        assert_eq!(cases.evaluate("bye").unwrap(), "0 groups");
    }

    #[test]
    fn handler_sees_only_winning_groups() {
        let cases = Cases::new()
            .case(r"(a)(b)(c)", |_| Ok(0))
            .case(r"(\w+)", |m| Ok(m.groups().len()));
        assert_eq!(cases.evaluate("abcd").unwrap(), 1);
    }

    #[test]
    fn handler_errors_propagate() {
        let cases = Cases::new().case(r"(\w+)", |m| Ok(m.extract1::<i32>()?.first));
        assert!(cases.evaluate("abc").unwrap_err().is_conversion());
    }

    #[test]
    fn invalid_pattern_stops_evaluation() {
        let cases = Cases::new()
            .case("(", |_| Ok(()))
            .otherwise(|_| Ok(()));
        assert!(matches!(
            cases.evaluate("x"),
            Err(MatchError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn handlers_may_borrow() {
        let prefix = String::from("n=");
        let cases = Cases::new().case(r"(\d+)", |m| {
            Ok(format!("{}{}", prefix, m.extract1::<u64>()?.first))
        });
        assert_eq!(cases.evaluate("12").unwrap(), "n=12");
        assert!(!cases.is_empty());
    }
}
