use crate::interval::Interval;
use crate::relation::{encloses, Relation};
use std::fmt;
use std::mem;
use std::rc::Rc;
use tracing::trace;

/// An immutable node of the containment forest.
///
/// Every child's interval lies within `interval` (boundaries may touch), and
/// no two children share the same interval. Restructuring never mutates a
/// node: it builds new nodes along the changed path and shares the rest.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node<I, V> {
    pub interval: I,
    pub values: Vec<V>,
    pub children: Vec<Rc<Node<I, V>>>,
}

impl<I, V> fmt::Display for Node<I, V>
where
    I: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // (node, index of the next child to render)
        let mut stack = vec![(self, 0)];
        while let Some((node, next)) = stack.pop() {
            if next == 0 {
                write!(f, " {{ {}", node.interval)?;
                if !node.values.is_empty() {
                    let values: Vec<String> = node.values.iter().map(|v| v.to_string()).collect();
                    write!(f, " values:[{}]", values.join(","))?;
                }
                if !node.is_leaf() {
                    write!(f, " children:[")?;
                }
            }

            match node.children.get(next) {
                Some(child) => {
                    stack.push((node, next + 1));
                    stack.push((&**child, 0));
                }
                None => {
                    if !node.is_leaf() {
                        write!(f, "]")?;
                    }
                    write!(f, " }} ")?;
                }
            }
        }
        Ok(())
    }
}

// Chains of nested nodes can be arbitrarily deep, so children are released
// from a work list instead of through recursive drops.
impl<I, V> Drop for Node<I, V> {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(child) {
                pending.append(&mut node.children);
            }
        }
    }
}

impl<I, V> Node<I, V> {
    pub fn new(interval: I, values: Vec<V>) -> Node<I, V> {
        Node {
            interval,
            values,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, this one included.
    pub fn count(&self) -> usize {
        let mut stack = vec![self];
        let mut count = 0;
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter().map(|child| &**child));
        }
        count
    }
}

impl<I, V> Node<I, V>
where
    I: Interval + Clone,
    V: Clone,
{
    /// Returns the node resulting from placing `incoming` under or around `self`.
    ///
    /// Whichever of the two intervals is larger ends up as the ancestor,
    /// regardless of which side the call started from.
    pub fn with_node(self: &Rc<Self>, incoming: Rc<Self>) -> Rc<Self> {
        let relation = Relation::classify(&self.interval, &incoming.interval);
        trace!(?relation, "placing node");

        match relation {
            Relation::Same => Rc::new(Node {
                interval: self.interval.clone(),
                values: self.merged_values(&incoming),
                children: self.children.clone(),
            }),
            Relation::Within => incoming.with_node(Rc::clone(self)),
            Relation::Contains => self.placed_inside(incoming),
            Relation::Intersecting => self.merged_or_compound(incoming),
            Relation::Unconnected => self.under_compound(incoming),
        }
    }

    // `incoming` lies strictly inside `self`. Only direct children are
    // considered for a deeper placement.
    fn placed_inside(self: &Rc<Self>, incoming: Rc<Self>) -> Rc<Self> {
        let position = |wanted: Relation| {
            self.children
                .iter()
                .position(|c| Relation::classify(&incoming.interval, &c.interval) == wanted)
        };

        let found = position(Relation::Within).or_else(|| position(Relation::Same));
        if let Some(i) = found {
            let changed = self.children[i].with_node(incoming);
            return Rc::new(self.replacing_child(i, changed));
        }

        let mut children = self.children.clone();
        children.push(incoming);
        Rc::new(Node {
            interval: self.interval.clone(),
            values: self.values.clone(),
            children,
        })
    }

    // `self` and `incoming` partially overlap.
    fn merged_or_compound(self: &Rc<Self>, incoming: Rc<Self>) -> Rc<Self> {
        for (i, child) in self.children.iter().enumerate() {
            match Relation::classify(&child.interval, &incoming.interval) {
                Relation::Contains => {
                    let changed = child.with_node(incoming);
                    return Rc::new(self.replacing_child(i, changed));
                }
                Relation::Within => return incoming.with_node(Rc::clone(self)),
                Relation::Same | Relation::Intersecting | Relation::Unconnected => {}
            }
        }

        self.under_compound(incoming)
    }

    fn under_compound(self: &Rc<Self>, incoming: Rc<Self>) -> Rc<Self> {
        trace!("synthesizing compound node");
        Rc::new(Node {
            interval: self.interval.compound(&incoming.interval),
            values: Vec::new(),
            children: vec![Rc::clone(self), incoming],
        })
    }

    fn merged_values(&self, other: &Self) -> Vec<V> {
        self.values.iter().chain(&other.values).cloned().collect()
    }

    fn replacing_child(&self, index: usize, child: Rc<Self>) -> Self {
        let mut children = self.children.clone();
        children[index] = child;
        Node {
            interval: self.interval.clone(),
            values: self.values.clone(),
            children,
        }
    }

    /// Removes every occurrence of `doomed` from each node in this subtree
    /// whose interval equals `target`.
    ///
    /// Returns `None` when nothing changed, so callers keep sharing the
    /// existing node. Subtrees that cannot hold `target` are skipped.
    pub fn without_values(&self, target: &I, doomed: &[V]) -> Option<Rc<Self>>
    where
        V: PartialEq,
    {
        let holds_target = match Relation::classify(&self.interval, target) {
            Relation::Same => true,
            Relation::Contains => false,
            Relation::Intersecting if encloses(&self.interval, target) => false,
            Relation::Within | Relation::Intersecting | Relation::Unconnected => return None,
        };

        let values = if holds_target && self.values.iter().any(|v| doomed.contains(v)) {
            trace!("removing values from node");
            Some(
                self.values
                    .iter()
                    .filter(|v| !doomed.contains(v))
                    .cloned()
                    .collect(),
            )
        } else {
            None
        };

        let mut children: Option<Vec<Rc<Self>>> = None;
        for (i, child) in self.children.iter().enumerate() {
            if let Some(changed) = child.without_values(target, doomed) {
                children.get_or_insert_with(|| self.children.clone())[i] = changed;
            }
        }

        if values.is_none() && children.is_none() {
            return None;
        }

        Some(Rc::new(Node {
            interval: self.interval.clone(),
            values: values.unwrap_or_else(|| self.values.clone()),
            children: children.unwrap_or_else(|| self.children.clone()),
        }))
    }
}
