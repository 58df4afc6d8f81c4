//! Lazy enumeration of the nodes along each axis of a `TreeNode`.

use crate::datasource::{NodeKind, TreeNode};
use crate::error::ParseAxisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A traversal direction from a context node.
///
/// Forward axes yield nodes in document order. Reverse axes (`Ancestor`,
/// `AncestorOrSelf`, `PrecedingSibling`, `Preceding`) yield the nearest node
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    #[serde(rename = "self")]
    Self_,
    Child,
    Attribute,
    Parent,
    Ancestor,
    AncestorOrSelf,
    Descendant,
    DescendantOrSelf,
    FollowingSibling,
    PrecedingSibling,
    Following,
    Preceding,
}

impl Axis {
    pub const ALL: [Axis; 12] = [
        Axis::Self_,
        Axis::Child,
        Axis::Attribute,
        Axis::Parent,
        Axis::Ancestor,
        Axis::AncestorOrSelf,
        Axis::Descendant,
        Axis::DescendantOrSelf,
        Axis::FollowingSibling,
        Axis::PrecedingSibling,
        Axis::Following,
        Axis::Preceding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Self_ => "self",
            Axis::Child => "child",
            Axis::Attribute => "attribute",
            Axis::Parent => "parent",
            Axis::Ancestor => "ancestor",
            Axis::AncestorOrSelf => "ancestor-or-self",
            Axis::Descendant => "descendant",
            Axis::DescendantOrSelf => "descendant-or-self",
            Axis::FollowingSibling => "following-sibling",
            Axis::PrecedingSibling => "preceding-sibling",
            Axis::Following => "following",
            Axis::Preceding => "preceding",
        }
    }

    /// True for the axes whose nodes lie in the subtree below the context node,
    /// where skipping a node can also skip everything beneath it.
    pub fn is_descending(&self) -> bool {
        matches!(self, Axis::Descendant | Axis::DescendantOrSelf)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Axis::ALL
            .into_iter()
            .find(|axis| axis.as_str() == s)
            .ok_or_else(|| ParseAxisError(s.to_string()))
    }
}

enum Cursor<'a, N> {
    /// A single flat run of nodes (child, attribute, ancestors, ...).
    Flat(Box<dyn Iterator<Item = N> + 'a>),
    /// A preorder walk. `last` is the most recently yielded node, whose
    /// children are entered on the next pull unless the subtree was skipped.
    Walk {
        stack: Vec<Box<dyn Iterator<Item = N> + 'a>>,
        last: Option<N>,
    },
    /// Nodes gathered up front for axes that must look around the context node.
    Buffered(std::vec::IntoIter<N>),
}

/// An iterator over the nodes of one axis from one context node.
pub struct AxisIter<'a, N> {
    axis: Axis,
    cursor: Cursor<'a, N>,
}

impl<'a, N: TreeNode<'a>> AxisIter<'a, N> {
    pub fn new(node: N, axis: Axis) -> Self {
        let cursor = match axis {
            Axis::Self_ => Cursor::Flat(Box::new(std::iter::once(node))),
            Axis::Child => Cursor::Flat(node.children()),
            Axis::Attribute => Cursor::Flat(node.attributes()),
            Axis::Parent => Cursor::Flat(Box::new(node.parent().into_iter())),
            Axis::Ancestor => Cursor::Flat(Box::new(std::iter::successors(
                node.parent(),
                |n: &N| n.parent(),
            ))),
            Axis::AncestorOrSelf => Cursor::Flat(Box::new(std::iter::successors(
                Some(node),
                |n: &N| n.parent(),
            ))),
            Axis::Descendant => Cursor::Walk {
                stack: vec![node.children()],
                last: None,
            },
            Axis::DescendantOrSelf => Cursor::Walk {
                stack: vec![Box::new(std::iter::once(node))],
                last: None,
            },
            Axis::FollowingSibling => Cursor::Buffered(following_siblings(node).into_iter()),
            Axis::PrecedingSibling => Cursor::Buffered(preceding_siblings(node).into_iter()),
            Axis::Following => Cursor::Buffered(following(node).into_iter()),
            Axis::Preceding => Cursor::Buffered(preceding(node).into_iter()),
        };
        Self { axis, cursor }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Skips the descendants of the node most recently returned by `next`.
    /// Has no effect on axes that do not descend into the tree.
    pub fn skip_subtree(&mut self) {
        if let Cursor::Walk { last, .. } = &mut self.cursor {
            *last = None;
        }
    }
}

impl<'a, N: TreeNode<'a>> Iterator for AxisIter<'a, N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        match &mut self.cursor {
            Cursor::Flat(iter) => iter.next(),
            Cursor::Buffered(iter) => iter.next(),
            Cursor::Walk { stack, last } => {
                if let Some(prev) = last.take() {
                    stack.push(prev.children());
                }
                loop {
                    let top = stack.last_mut()?;
                    match top.next() {
                        Some(node) => {
                            *last = Some(node);
                            return Some(node);
                        }
                        None => {
                            stack.pop();
                        }
                    }
                }
            }
        }
    }
}

fn has_siblings<'a, N: TreeNode<'a>>(node: N) -> bool {
    !matches!(node.node_kind(), NodeKind::Attribute | NodeKind::Document)
}

fn following_siblings<'a, N: TreeNode<'a>>(node: N) -> Vec<N> {
    let Some(parent) = node.parent().filter(|_| has_siblings(node)) else {
        return Vec::new();
    };
    parent.children().skip_while(|s| *s != node).skip(1).collect()
}

fn preceding_siblings<'a, N: TreeNode<'a>>(node: N) -> Vec<N> {
    let Some(parent) = node.parent().filter(|_| has_siblings(node)) else {
        return Vec::new();
    };
    let mut siblings: Vec<N> = parent.children().take_while(|s| *s != node).collect();
    siblings.reverse();
    siblings
}

fn following<'a, N: TreeNode<'a>>(node: N) -> Vec<N> {
    let mut results = Vec::new();
    let mut current = node;
    if node.node_kind() == NodeKind::Attribute {
        let Some(owner) = node.parent() else {
            return results;
        };
        results.extend(AxisIter::new(owner, Axis::Descendant));
        current = owner;
    }
    while let Some(parent) = current.parent() {
        for sibling in parent.children().skip_while(|s| *s != current).skip(1) {
            results.extend(AxisIter::new(sibling, Axis::DescendantOrSelf));
        }
        current = parent;
    }
    results
}

fn preceding<'a, N: TreeNode<'a>>(node: N) -> Vec<N> {
    let mut results = Vec::new();
    let mut current = node;
    if node.node_kind() == NodeKind::Attribute {
        let Some(owner) = node.parent() else {
            return results;
        };
        current = owner;
    }
    while let Some(parent) = current.parent() {
        let mut level = Vec::new();
        for sibling in parent.children().take_while(|s| *s != current) {
            level.extend(AxisIter::new(sibling, Axis::DescendantOrSelf));
        }
        results.extend(level.into_iter().rev());
        current = parent;
    }
    results
}
