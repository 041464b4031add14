use crate::interval::Interval;
use crate::node::Node;
use crate::relation::Relation;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;
use std::slice;
use tracing::{debug, instrument};

/// A persistent tree of values keyed by intervals, organised as nested
/// containment nodes.
///
/// Mutations replace the root with a rebuilt path and share every untouched
/// subtree, so cloning a tree is cheap and yields a snapshot that later
/// changes to the original never affect.
///
/// ```
/// use nested_interval_tree::{IntervalTree, Period};
///
/// let mut tree = IntervalTree::new();
/// tree.add(Period::new(1, 10).unwrap(), ["outer"]);
/// tree.add(Period::new(3, 4).unwrap(), ["inner"]);
/// tree.add(Period::new(12, 15).unwrap(), ["apart"]);
///
/// let query = Period::new(2, 5).unwrap();
/// let mut overlapping: Vec<_> = tree.intersected_values(&query).collect();
/// overlapping.sort();
/// assert_eq!(overlapping, [&"inner", &"outer"]);
///
/// let bounded: Vec<_> = tree.bounded_values(&query).collect();
/// assert_eq!(bounded, [&"inner"]);
/// ```
#[derive(Clone, Debug)]
pub struct IntervalTree<I, V> {
    root: Option<Rc<Node<I, V>>>,
}

impl<I, V> Default for IntervalTree<I, V> {
    fn default() -> Self {
        IntervalTree { root: None }
    }
}

impl<I, V> IntervalTree<I, V> {
    pub fn new() -> IntervalTree<I, V> {
        IntervalTree::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total number of nodes, including compound nodes holding no values.
    pub fn count_nodes(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.count())
    }
}

impl<I, V> IntervalTree<I, V>
where
    I: Interval + Clone,
    V: Clone,
{
    /// Stores `values` under `interval`. Values added under an interval
    /// already present join the values stored there.
    #[instrument(level = "trace", skip_all)]
    pub fn add<T>(&mut self, interval: I, values: T)
    where
        T: IntoIterator<Item = V>,
    {
        let node = Rc::new(Node::new(interval, values.into_iter().collect()));
        self.root = Some(match self.root.take() {
            None => node,
            Some(root) => root.with_node(node),
        });
    }

    /// Removes `value` from the node stored under exactly `interval`.
    ///
    /// Returns `false`, leaving the tree untouched, when no such value is
    /// stored there.
    pub fn remove_value_at(&mut self, interval: &I, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.remove_values_at(interval, slice::from_ref(value))
    }

    /// Removes every occurrence of each of `values` from the node stored
    /// under exactly `interval`. The node itself stays, even when emptied.
    #[instrument(level = "debug", skip_all)]
    pub fn remove_values_at(&mut self, interval: &I, values: &[V]) -> bool
    where
        V: PartialEq,
    {
        let changed = self
            .root
            .as_ref()
            .and_then(|root| root.without_values(interval, values));

        match changed {
            Some(root) => {
                self.root = Some(root);
                debug!("removed values");
                true
            }
            None => {
                debug!("nothing to remove");
                false
            }
        }
    }
}

impl<I, V> IntervalTree<I, V>
where
    I: Interval + Clone,
{
    /// Lazily yields every value whose interval overlaps `query`, boundaries
    /// included.
    pub fn intersected_values(&self, query: &I) -> QueryIter<'_, I, V> {
        QueryIter::new(self.root.as_deref(), query.clone(), Mode::Intersected)
    }

    /// Lazily yields every value whose interval equals `query` or lies
    /// strictly inside it.
    pub fn bounded_values(&self, query: &I) -> QueryIter<'_, I, V> {
        QueryIter::new(self.root.as_deref(), query.clone(), Mode::Bounded)
    }
}

impl<I, V> IntervalTree<I, V>
where
    I: fmt::Display,
    V: fmt::Display,
{
    /// Renders the tree in Graphviz DOT format, with node-to-child edges and
    /// blue node-to-value edges. An empty tree renders as an empty string.
    pub fn to_dot(&self) -> String {
        match &self.root {
            None => String::new(),
            Some(root) => format!("digraph g{{\n{}}}\n", Dot(root)),
        }
    }
}

struct Dot<'a, I, V>(&'a Node<I, V>);

impl<I, V> fmt::Display for Dot<'_, I, V>
where
    I: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Each child's subtree is written before the node's own values.
        let mut stack = vec![(self.0, 0)];
        while let Some((node, next)) = stack.pop() {
            match node.children.get(next) {
                Some(child) => {
                    writeln!(f, "\"{}\" -> \"{}\"", node.interval, child.interval)?;
                    stack.push((node, next + 1));
                    stack.push((&**child, 0));
                }
                None => {
                    for value in &node.values {
                        writeln!(f, "\"{}\" -> \"{}\" [color=blue]", node.interval, value)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl<I, V> fmt::Display for IntervalTree<I, V>
where
    I: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.root {
            None => write!(f, "{{}}"),
            Some(root) => write!(f, "{}", root),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Intersected,
    Bounded,
}

impl Mode {
    fn yields_own_values(self, relation: Relation) -> bool {
        match (self, relation) {
            (_, Relation::Unconnected) => false,
            (Mode::Intersected, Relation::Same)
            | (Mode::Intersected, Relation::Within)
            | (Mode::Intersected, Relation::Contains)
            | (Mode::Intersected, Relation::Intersecting) => true,
            (Mode::Bounded, Relation::Same) | (Mode::Bounded, Relation::Within) => true,
            (Mode::Bounded, Relation::Contains) | (Mode::Bounded, Relation::Intersecting) => false,
        }
    }
}

/// Depth-first iterator over the values matching a query, a node's own
/// values before those of its children.
///
/// Subtrees whose root is disjoint from the query are never entered.
pub struct QueryIter<'a, I, V> {
    stack: Vec<&'a Node<I, V>>,
    pending: slice::Iter<'a, V>,
    query: I,
    mode: Mode,
}

impl<'a, I, V> QueryIter<'a, I, V> {
    fn new(root: Option<&'a Node<I, V>>, query: I, mode: Mode) -> Self {
        QueryIter {
            stack: root.into_iter().collect(),
            pending: Default::default(),
            query,
            mode,
        }
    }
}

impl<'a, I, V> Iterator for QueryIter<'a, I, V>
where
    I: Interval,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        loop {
            if let Some(value) = self.pending.next() {
                return Some(value);
            }

            let node = self.stack.pop()?;
            let relation = Relation::classify(&node.interval, &self.query);
            if relation == Relation::Unconnected {
                continue;
            }

            self.stack.extend(node.children.iter().rev().map(|child| &**child));
            if self.mode.yields_own_values(relation) {
                self.pending = node.values.iter();
            }
        }
    }
}

impl<I: Interval, V> FusedIterator for QueryIter<'_, I, V> {}
