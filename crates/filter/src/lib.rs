//! Lazy, restartable filtering of the nodes along an axis of an XML tree.
//!
//! Three modes refine each other: `All` passes every node, `Significant`
//! drops comments, processing instructions and whitespace-only text, and
//! `Pipeline` additionally drops pipeline documentation and elements whose
//! use-when condition evaluates to false.

pub mod classify;
pub mod error;
pub mod evaluator;
pub mod iter;
pub mod mode;
pub mod vocabulary;

pub use classify::{is_significant, is_whitespace_only};
pub use error::{AxisNodesError, ParseModeError};
pub use evaluator::{UseWhenError, UseWhenEvaluator};
pub use iter::{AxisNodes, AxisNodesIter};
pub use mode::FilterMode;
pub use vocabulary::{PipelineVocabulary, XPROC_NAMESPACE};
