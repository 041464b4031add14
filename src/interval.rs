use crate::error::IntervalError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed range `[start, end]` over a totally ordered boundary type.
///
/// Implementors guarantee `start() <= end()`. This is everything the tree
/// needs to know about the intervals it stores.
pub trait Interval {
    type Bound: Ord;

    fn start(&self) -> &Self::Bound;
    fn end(&self) -> &Self::Bound;

    /// The smallest interval covering both `self` and `other`.
    fn compound(&self, other: &Self) -> Self
    where
        Self: Sized;
}

/// A closed interval over any ordered boundary, validated at construction.
///
/// ```
/// use nested_interval_tree::{Interval, Period};
///
/// let a = Period::new(1, 4).unwrap();
/// let b = Period::new(7, 9).unwrap();
/// assert_eq!(a.compound(&b), Period::new(1, 9).unwrap());
/// assert!(Period::new(9, 1).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawPeriod<B>",
        bound(deserialize = "B: Ord + fmt::Debug + Deserialize<'de>")
    )
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Period<B> {
    start: B,
    end: B,
}

impl<B> Period<B> {
    pub fn new(start: B, end: B) -> Result<Period<B>, IntervalError>
    where
        B: Ord + fmt::Debug,
    {
        if start > end {
            return Err(IntervalError::InvertedBounds {
                start: format!("{:?}", start),
                end: format!("{:?}", end),
            });
        }

        Ok(Period { start, end })
    }
}

impl<B: Ord + Clone> Interval for Period<B> {
    type Bound = B;

    fn start(&self) -> &B {
        &self.start
    }

    fn end(&self) -> &B {
        &self.end
    }

    fn compound(&self, other: &Self) -> Self {
        Period {
            start: self.start.clone().min(other.start.clone()),
            end: self.end.clone().max(other.end.clone()),
        }
    }
}

impl<B: fmt::Display> fmt::Display for Period<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPeriod<B> {
    start: B,
    end: B,
}

#[cfg(feature = "serde")]
impl<B: Ord + fmt::Debug> TryFrom<RawPeriod<B>> for Period<B> {
    type Error = IntervalError;

    fn try_from(raw: RawPeriod<B>) -> Result<Self, Self::Error> {
        Period::new(raw.start, raw.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        let err = Period::new(5, 2).unwrap_err();
        assert_eq!(
            err,
            IntervalError::InvertedBounds {
                start: "5".to_string(),
                end: "2".to_string()
            }
        );
        assert_eq!(err.to_string(), "start (5) must not be later than end (2)");
    }

    #[test]
    fn accepts_single_point() {
        let p = Period::new(3, 3).unwrap();
        assert_eq!((p.start(), p.end()), (&3, &3));
    }

    #[test]
    fn compound_covers_both() {
        let a = Period::new(2, 6).unwrap();
        let b = Period::new(4, 9).unwrap();
        assert_eq!(a.compound(&b), Period::new(2, 9).unwrap());
        assert_eq!(b.compound(&a), Period::new(2, 9).unwrap());
        assert_eq!(a.compound(&a), a);
    }

    #[test]
    fn display() {
        assert_eq!(Period::new(1, 2).unwrap().to_string(), "[1, 2]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_validates_bounds() {
        let p: Period<i32> = serde_json::from_str(r#"{"start":1,"end":3}"#).unwrap();
        assert_eq!(p, Period::new(1, 3).unwrap());
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"start":1,"end":3}"#);
        assert!(serde_json::from_str::<Period<i32>>(r#"{"start":3,"end":1}"#).is_err());
    }
}
