use crate::evaluator::UseWhenError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AxisNodesError {
    #[error("Invalid context node: {reason}")]
    InvalidContext { reason: String },

    #[error("use-when expression '{expression}' failed: {source}")]
    UseWhen {
        expression: String,
        #[source]
        source: UseWhenError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown filter mode '{0}'")]
pub struct ParseModeError(pub String);
