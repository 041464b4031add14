use crate::interval::Interval;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an interval `a` relates to another interval `b`.
///
/// Containment is strict: an interval sharing a boundary with another one is
/// never [`Relation::Within`] or [`Relation::Contains`], it falls through to
/// [`Relation::Intersecting`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Both bounds are equal.
    Same,
    /// `a` lies strictly inside `b`.
    Within,
    /// `b` lies strictly inside `a`.
    Contains,
    /// Partial overlap, or containment sharing a boundary.
    Intersecting,
    /// Disjoint.
    Unconnected,
}

impl Relation {
    /// Classifies `a` against `b`. The first matching relation wins, in the
    /// order the variants are declared.
    ///
    /// ```
    /// use nested_interval_tree::{Period, Relation};
    ///
    /// let outer = Period::new(1, 10).unwrap();
    /// let inner = Period::new(3, 5).unwrap();
    /// let edge = Period::new(1, 5).unwrap();
    ///
    /// assert_eq!(Relation::classify(&inner, &outer), Relation::Within);
    /// assert_eq!(Relation::classify(&outer, &inner), Relation::Contains);
    /// assert_eq!(Relation::classify(&edge, &outer), Relation::Intersecting);
    /// ```
    pub fn classify<I: Interval>(a: &I, b: &I) -> Relation {
        if a.start() == b.start() && a.end() == b.end() {
            Relation::Same
        } else if strictly_within(a, b) {
            Relation::Within
        } else if strictly_within(b, a) {
            Relation::Contains
        } else if has_endpoint_in(a, b) {
            Relation::Intersecting
        } else {
            Relation::Unconnected
        }
    }
}

fn strictly_within<I: Interval>(a: &I, b: &I) -> bool {
    a.start() > b.start() && a.end() < b.end()
}

// One of `a`'s endpoints falls inside the closed range of `b`.
fn has_endpoint_in<I: Interval>(a: &I, b: &I) -> bool {
    let covers = |point: &I::Bound| b.start() <= point && point <= b.end();
    covers(a.start()) || covers(a.end())
}

/// Inclusive containment: `inner` lies within `outer`, boundaries allowed to touch.
pub(crate) fn encloses<I: Interval>(outer: &I, inner: &I) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Period;
    use rstest::rstest;

    fn p(start: i32, end: i32) -> Period<i32> {
        Period::new(start, end).unwrap()
    }

    #[rstest]
    #[case(p(1, 10), p(1, 10), Relation::Same)]
    #[case(p(3, 5), p(1, 10), Relation::Within)]
    #[case(p(1, 10), p(3, 5), Relation::Contains)]
    #[case(p(1, 5), p(3, 10), Relation::Intersecting)]
    #[case(p(3, 10), p(1, 5), Relation::Intersecting)]
    #[case(p(1, 5), p(5, 10), Relation::Intersecting)]
    #[case(p(1, 4), p(5, 10), Relation::Unconnected)]
    #[case(p(7, 8), p(1, 5), Relation::Unconnected)]
    fn classifies(#[case] a: Period<i32>, #[case] b: Period<i32>, #[case] expected: Relation) {
        assert_eq!(Relation::classify(&a, &b), expected);
    }

    #[rstest]
    #[case(p(1, 5), p(1, 10))]
    #[case(p(5, 10), p(1, 10))]
    #[case(p(1, 10), p(1, 5))]
    #[case(p(1, 10), p(5, 10))]
    fn shared_boundary_is_not_containment(#[case] a: Period<i32>, #[case] b: Period<i32>) {
        assert_eq!(Relation::classify(&a, &b), Relation::Intersecting);
    }

    #[test]
    fn degenerate_interval_inside() {
        assert_eq!(Relation::classify(&p(4, 4), &p(1, 10)), Relation::Within);
        assert_eq!(Relation::classify(&p(1, 1), &p(1, 10)), Relation::Intersecting);
        assert_eq!(Relation::classify(&p(0, 0), &p(1, 10)), Relation::Unconnected);
    }

    #[test]
    fn unconnected_is_symmetric_disjointness() {
        for (a, b) in [(p(1, 2), p(3, 4)), (p(1, 3), p(3, 4)), (p(1, 9), p(3, 4))] {
            let disjoint = a.end() < b.start() || b.end() < a.start();
            assert_eq!(Relation::classify(&a, &b) == Relation::Unconnected, disjoint);
            assert_eq!(Relation::classify(&b, &a) == Relation::Unconnected, disjoint);
        }
    }

    #[test]
    fn encloses_is_inclusive() {
        assert!(encloses(&p(1, 10), &p(1, 10)));
        assert!(encloses(&p(1, 10), &p(1, 5)));
        assert!(encloses(&p(1, 10), &p(2, 9)));
        assert!(!encloses(&p(1, 10), &p(0, 5)));
    }
}
