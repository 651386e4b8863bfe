//! Regex-driven dispatch with typed capture extraction.
//!
//! A decision procedure tests patterns against a subject in order; the first
//! pattern that matches the *whole* subject wins, and its handler pulls the
//! capture groups out as integers, characters or strings.
//!
//! # Example
//!
//! ```rust
//! use capmatch::{MatchError, match_with};
//!
//! #[derive(Debug, PartialEq)]
//! enum Command {
//!     Start,
//!     Wave { times: i32, hand: char },
//!     Unknown,
//! }
//!
//! fn parse(input: &str) -> Result<Command, MatchError> {
//!     match_with(input, |m| {
//!         if m.test("S")? {
//!             Ok(Command::Start)
//!         } else if m.test(r"W (\d+) ([LR])")? {
//!             let (times, hand) = m.extract2::<i32, char>()?.into();
//!             Ok(Command::Wave { times, hand })
//!         } else {
//!             Ok(Command::Unknown)
//!         }
//!     })
//! }
//!
//! assert_eq!(parse("S").unwrap(), Command::Start);
//! assert_eq!(parse("W 5 L").unwrap(), Command::Wave { times: 5, hand: 'L' });
//! assert_eq!(parse("W 5").unwrap(), Command::Unknown);
//! ```

mod cases;
pub mod coerce;
mod error;
pub mod extract;
mod matcher;

pub use cases::Cases;
pub use coerce::{FromCapture, Target, Value, coerce};
pub use error::MatchError;
pub use extract::{Match1, Match2, Match3, Match4};
pub use matcher::{MatchState, Matcher};

/// Evaluate `procedure` in a fresh matching session over `subject`.
///
/// Returns whatever the procedure returns. The session ends with the call.
pub fn match_with<R, F>(subject: &str, procedure: F) -> R
where
    F: FnOnce(&mut Matcher<'_>) -> R,
{
    let mut matcher = Matcher::new(subject);
    procedure(&mut matcher)
}
