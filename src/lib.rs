//! Implementation of an interval tree ([`interval_tree::IntervalTree`]) that keeps
//! its intervals as a forest of nested containment nodes: every node's interval
//! covers the intervals of all of its descendants, and values stored under equal
//! intervals share a single node. Nodes are immutable; adding or removing values
//! rebuilds the path to the root and shares every untouched subtree, so cloning a
//! tree is a cheap snapshot.
//!
//! Two lazy queries are provided: the values whose interval overlaps a queried
//! interval, and the values whose interval is bounded by it. Both prune any
//! subtree disjoint from the query.
//!
//! Any type implementing [`Interval`] can key the tree. [`Period`] is a closed
//! interval over any [`Ord`] boundary, and [`Date`] is a calendar-day boundary.
//!
//! ```
//! use nested_interval_tree::{Date, IntervalTree, Period};
//!
//! let period = |from: (i32, u32, u32), to: (i32, u32, u32)| {
//!     Period::new(
//!         Date::new(from.0, from.1, from.2).unwrap(),
//!         Date::new(to.0, to.1, to.2).unwrap(),
//!     )
//!     .unwrap()
//! };
//!
//! let mut tree = IntervalTree::new();
//! tree.add(period((2017, 1, 3), (2017, 1, 5)), ['a']);
//! tree.add(period((2017, 1, 7), (2017, 1, 12)), ['b']);
//! tree.add(period((2017, 1, 10), (2017, 1, 11)), ['c']);
//! assert_eq!(tree.count_nodes(), 4);
//!
//! let week = period((2017, 1, 9), (2017, 1, 15));
//! let mut overlapping: Vec<_> = tree.intersected_values(&week).collect();
//! overlapping.sort();
//! assert_eq!(overlapping, [&'b', &'c']);
//! ```
//!
//! The tree is not balanced: its depth follows the nesting of the inserted
//! intervals.

mod date;
mod error;
mod interval;
/// The tree itself and its query iterator.
pub mod interval_tree;
mod node;
mod relation;

pub use crate::date::Date;
pub use crate::error::IntervalError;
pub use crate::interval::{Interval, Period};
pub use crate::interval_tree::{IntervalTree, QueryIter};
pub use crate::relation::Relation;
