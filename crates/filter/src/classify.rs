//! Per-node classification for each filter mode.
//!
//! The modes are layered: the pipeline rule starts by applying the
//! significance rule, so a node the pipeline mode keeps is always one the
//! significant mode keeps.

use crate::error::AxisNodesError;
use crate::evaluator::UseWhenEvaluator;
use crate::mode::FilterMode;
use crate::vocabulary::PipelineVocabulary;
use axisnodes_tree::{NodeKind, TreeNode};

/// The outcome of classifying a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Drop(&'static str),
}

/// True for text that is empty or consists only of whitespace characters.
pub fn is_whitespace_only(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// The significance rule: comments, processing instructions and
/// whitespace-only text are insignificant, everything else is significant.
pub fn is_significant<'a, N: TreeNode<'a>>(node: &N) -> bool {
    significance(node) == Verdict::Keep
}

fn significance<'a, N: TreeNode<'a>>(node: &N) -> Verdict {
    match node.node_kind() {
        NodeKind::ProcessingInstruction => Verdict::Drop("processing instruction"),
        NodeKind::Comment => Verdict::Drop("comment"),
        NodeKind::Text if is_whitespace_only(&node.string_value()) => {
            Verdict::Drop("whitespace-only text")
        }
        _ => Verdict::Keep,
    }
}

/// Everything needed to classify nodes under one filter mode.
pub struct Classifier<'c, N> {
    pub mode: FilterMode,
    pub vocabulary: &'c PipelineVocabulary,
    pub evaluator: Option<&'c dyn UseWhenEvaluator<N>>,
}

impl<'c, 'a, N: TreeNode<'a>> Classifier<'c, N> {
    pub fn classify(&self, node: &N) -> Result<Verdict, AxisNodesError> {
        match self.mode {
            FilterMode::All => Ok(Verdict::Keep),
            FilterMode::Significant => Ok(significance(node)),
            FilterMode::Pipeline => self.pipeline(node),
        }
    }

    fn pipeline(&self, node: &N) -> Result<Verdict, AxisNodesError> {
        let verdict = significance(node);
        if verdict != Verdict::Keep || node.node_kind() != NodeKind::Element {
            return Ok(verdict);
        }
        if self.vocabulary.is_documentation(node) {
            return Ok(Verdict::Drop("pipeline documentation"));
        }
        self.use_when(node)
    }

    fn use_when(&self, node: &N) -> Result<Verdict, AxisNodesError> {
        // Without an evaluation context every use-when condition holds.
        let Some(evaluator) = self.evaluator else {
            return Ok(Verdict::Keep);
        };
        let Some(expression) = self.vocabulary.use_when_expression(node) else {
            return Ok(Verdict::Keep);
        };
        match evaluator.use_when(node, &expression) {
            Ok(true) => Ok(Verdict::Keep),
            Ok(false) => Ok(Verdict::Drop("use-when is false")),
            Err(source) => Err(AxisNodesError::UseWhen { expression, source }),
        }
    }
}
