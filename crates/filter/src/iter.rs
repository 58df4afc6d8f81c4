//! The filtered, restartable view over one axis of one context node.

use crate::classify::{Classifier, Verdict};
use crate::error::AxisNodesError;
use crate::evaluator::UseWhenEvaluator;
use crate::mode::FilterMode;
use crate::vocabulary::PipelineVocabulary;
use axisnodes_tree::{Axis, AxisIter, NodeKind, TreeNode};
use log::{debug, trace, warn};
use std::borrow::Cow;
use std::marker::PhantomData;

/// The nodes along `axis` from a context node that `mode` considers relevant.
///
/// Constructing an `AxisNodes` does no work. Every call to [`AxisNodes::iter`]
/// starts an independent pass over the axis, so the same value can be walked
/// any number of times and always yields the same sequence.
///
/// `'c` is the lifetime of the borrowed evaluation context and vocabulary,
/// `'a` the lifetime of the underlying document.
pub struct AxisNodes<'c, 'a, N: TreeNode<'a>> {
    node: N,
    axis: Axis,
    mode: FilterMode,
    context: Option<&'c dyn UseWhenEvaluator<N>>,
    vocabulary: Cow<'c, PipelineVocabulary>,
    _marker: PhantomData<&'a ()>,
}

impl<'c, 'a, N: TreeNode<'a>> AxisNodes<'c, 'a, N> {
    /// Filters without an evaluation context. In `Pipeline` mode every
    /// use-when condition is then taken to be true.
    pub fn new(node: N, axis: Axis, mode: FilterMode) -> Self {
        Self::with_context(None, node, axis, mode)
    }

    /// Filters with an optional evaluation context used to resolve use-when
    /// conditions in `Pipeline` mode. Passing `None` behaves like [`AxisNodes::new`].
    pub fn with_context(
        context: Option<&'c dyn UseWhenEvaluator<N>>,
        node: N,
        axis: Axis,
        mode: FilterMode,
    ) -> Self {
        Self {
            node,
            axis,
            mode,
            context,
            vocabulary: Cow::Owned(PipelineVocabulary::default()),
            _marker: PhantomData,
        }
    }

    /// Replaces the default XProc vocabulary used by `Pipeline` mode.
    pub fn with_vocabulary(mut self, vocabulary: &'c PipelineVocabulary) -> Self {
        self.vocabulary = Cow::Borrowed(vocabulary);
        self
    }

    pub fn node(&self) -> N {
        self.node
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// Starts a fresh pass over the axis.
    pub fn iter(&self) -> AxisNodesIter<'_, 'a, N> {
        debug!(
            "Walking {} axis of {} node in {} mode (evaluation context: {})",
            self.axis,
            self.node.node_kind(),
            self.mode,
            if self.context.is_some() { "bound" } else { "none" }
        );
        AxisNodesIter {
            classifier: Classifier {
                mode: self.mode,
                vocabulary: &self.vocabulary,
                evaluator: self.context,
            },
            nodes: AxisIter::new(self.node, self.axis),
            pending: self.check_context().err(),
            finished: false,
        }
    }

    /// Collects a full pass, stopping at the first error.
    pub fn collect_nodes(&self) -> Result<Vec<N>, AxisNodesError> {
        self.iter().collect()
    }

    /// Best-effort consistency check: a node with a parent must be reachable
    /// from that parent.
    fn check_context(&self) -> Result<(), AxisNodesError> {
        let node = self.node;
        let Some(parent) = node.parent() else {
            return Ok(());
        };
        let (attached, relation) = match node.node_kind() {
            NodeKind::Document => (false, None),
            NodeKind::Attribute => (parent.attributes().any(|a| a == node), Some("attributes")),
            _ => (parent.children().any(|c| c == node), Some("children")),
        };
        if attached {
            return Ok(());
        }
        let reason = match (relation, node.name()) {
            (None, _) => format!("{} node has a parent", node.node_kind()),
            (Some(relation), Some(name)) => {
                format!("{} node {} is not among the {} of its parent", node.node_kind(), name, relation)
            }
            (Some(relation), None) => {
                format!("{} node is not among the {} of its parent", node.node_kind(), relation)
            }
        };
        warn!("{}", reason);
        Err(AxisNodesError::InvalidContext { reason })
    }
}

impl<'s, 'c, 'a, N: TreeNode<'a>> IntoIterator for &'s AxisNodes<'c, 'a, N> {
    type Item = Result<N, AxisNodesError>;
    type IntoIter = AxisNodesIter<'s, 'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One pass over an [`AxisNodes`].
///
/// Yields `Err` for an inconsistent context node (and then ends) or for a
/// failed use-when evaluation. A node whose evaluation failed is not yielded,
/// nor is anything beneath it on a descending axis; pulling again continues
/// with the next node.
pub struct AxisNodesIter<'s, 'a, N: TreeNode<'a>> {
    classifier: Classifier<'s, N>,
    nodes: AxisIter<'a, N>,
    pending: Option<AxisNodesError>,
    finished: bool,
}

impl<'s, 'a, N: TreeNode<'a>> Iterator for AxisNodesIter<'s, 'a, N> {
    type Item = Result<N, AxisNodesError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            self.finished = true;
            return Some(Err(err));
        }
        if self.finished {
            return None;
        }
        loop {
            let node = self.nodes.next()?;
            match self.classifier.classify(&node) {
                Ok(Verdict::Keep) => return Some(Ok(node)),
                Ok(Verdict::Drop(reason)) => {
                    trace!("Skipping {} node on {} axis: {}", node.node_kind(), self.nodes.axis(), reason);
                    if node.node_kind() == NodeKind::Element && self.nodes.axis().is_descending() {
                        debug!("Pruning subtree of excluded element {:?}", node.name());
                    }
                    self.nodes.skip_subtree();
                }
                Err(err) => {
                    self.nodes.skip_subtree();
                    return Some(Err(err));
                }
            }
        }
    }
}
