use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown axis '{0}'")]
pub struct ParseAxisError(pub String);
