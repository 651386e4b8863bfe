//! Typed destructuring of recorded capture groups.
//!
//! Positions are read left to right. Asking for more positions than there
//! are groups is an error; nothing is padded with defaults.

use crate::coerce::{FromCapture, Target, Value, coerce};
use crate::error::MatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match1<A> {
    pub first: A,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match2<A, B> {
    pub first: A,
    pub second: B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match3<A, B, C> {
    pub first: A,
    pub second: B,
    pub third: C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match4<A, B, C, D> {
    pub first: A,
    pub second: B,
    pub third: C,
    pub fourth: D,
}

impl<A> From<Match1<A>> for (A,) {
    fn from(m: Match1<A>) -> Self {
        (m.first,)
    }
}

impl<A, B> From<Match2<A, B>> for (A, B) {
    fn from(m: Match2<A, B>) -> Self {
        (m.first, m.second)
    }
}

impl<A, B, C> From<Match3<A, B, C>> for (A, B, C) {
    fn from(m: Match3<A, B, C>) -> Self {
        (m.first, m.second, m.third)
    }
}

impl<A, B, C, D> From<Match4<A, B, C, D>> for (A, B, C, D) {
    fn from(m: Match4<A, B, C, D>) -> Self {
        (m.first, m.second, m.third, m.fourth)
    }
}

fn check_arity(groups: &[String], requested: usize) -> Result<(), MatchError> {
    if groups.len() < requested {
        return Err(MatchError::Arity {
            requested,
            available: groups.len(),
        });
    }
    Ok(())
}

pub fn one<A: FromCapture>(groups: &[String]) -> Result<Match1<A>, MatchError> {
    check_arity(groups, 1)?;
    Ok(Match1 {
        first: A::from_capture(&groups[0])?,
    })
}

pub fn two<A, B>(groups: &[String]) -> Result<Match2<A, B>, MatchError>
where
    A: FromCapture,
    B: FromCapture,
{
    check_arity(groups, 2)?;
    Ok(Match2 {
        first: A::from_capture(&groups[0])?,
        second: B::from_capture(&groups[1])?,
    })
}

pub fn three<A, B, C>(groups: &[String]) -> Result<Match3<A, B, C>, MatchError>
where
    A: FromCapture,
    B: FromCapture,
    C: FromCapture,
{
    check_arity(groups, 3)?;
    Ok(Match3 {
        first: A::from_capture(&groups[0])?,
        second: B::from_capture(&groups[1])?,
        third: C::from_capture(&groups[2])?,
    })
}

pub fn four<A, B, C, D>(groups: &[String]) -> Result<Match4<A, B, C, D>, MatchError>
where
    A: FromCapture,
    B: FromCapture,
    C: FromCapture,
    D: FromCapture,
{
    check_arity(groups, 4)?;
    Ok(Match4 {
        first: A::from_capture(&groups[0])?,
        second: B::from_capture(&groups[1])?,
        third: C::from_capture(&groups[2])?,
        fourth: D::from_capture(&groups[3])?,
    })
}

/// Convert the first `targets.len()` groups with runtime-chosen targets.
pub fn with_targets(groups: &[String], targets: &[Target]) -> Result<Vec<Value>, MatchError> {
    check_arity(groups, targets.len())?;
    groups
        .iter()
        .zip(targets)
        .map(|(text, &target)| coerce(text, target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_char() {
        let m: Match1<char> = one(&groups(&["C"])).unwrap();
        assert_eq!(m.first, 'C');
    }

    #[test]
    fn two_text() {
        let m = two::<String, String>(&groups(&["abc", "123"])).unwrap();
        assert_eq!((m.first.as_str(), m.second.as_str()), ("abc", "123"));
    }

    #[test]
    fn three_mixed() {
        let (times, vigour, hand) = three::<i32, i32, char>(&groups(&["5", "100", "L"]))
            .unwrap()
            .into();
        assert_eq!((times, vigour, hand), (5, 100, 'L'));
    }

    #[test]
    fn four_ints() {
        let m = four::<i32, i32, i32, i32>(&groups(&["100000000", "1", "0", "0"])).unwrap();
        assert_eq!(
            m,
            Match4 {
                first: 100000000,
                second: 1,
                third: 0,
                fourth: 0
            }
        );
    }

    #[test]
    fn extra_groups_are_ignored() {
        let m = one::<String>(&groups(&["a", "b", "c"])).unwrap();
        assert_eq!(m.first, "a");
    }

    #[test]
    fn too_few_groups_is_arity_error() {
        let err = two::<String, String>(&groups(&["only"])).unwrap_err();
        assert!(matches!(
            err,
            MatchError::Arity {
                requested: 2,
                available: 1
            }
        ));
    }

    #[test]
    fn no_groups_is_arity_error() {
        assert!(one::<String>(&[]).unwrap_err().is_arity());
        assert!(four::<i32, i32, i32, i32>(&[]).unwrap_err().is_arity());
    }

    #[test]
    fn arity_checked_before_conversion() {
        // "x" would fail as an int, but the missing second group is reported.
        let err = two::<i32, i32>(&groups(&["x"])).unwrap_err();
        assert!(err.is_arity());
    }

    #[test]
    fn conversion_failure_in_later_position() {
        let err = three::<i32, i32, char>(&groups(&["1", "2", "LR"])).unwrap_err();
        assert_eq!(err.to_string(), r#"cannot convert "LR" to char"#);
    }

    #[test]
    fn with_targets_converts_prefix() {
        let values =
            with_targets(&groups(&["7", "x", "rest"]), &[Target::Int, Target::Char]).unwrap();
        assert_eq!(values, vec![Value::Int(7), Value::Char('x')]);
    }

    #[test]
    fn with_targets_checks_arity() {
        let err = with_targets(&groups(&["7"]), &[Target::Int, Target::Int]).unwrap_err();
        assert!(err.is_arity());
    }
}
