pub mod axes;
pub mod datasource;
pub mod error;

pub use axes::{Axis, AxisIter};
pub use datasource::{NodeKind, QName, TreeNode};
pub use error::ParseAxisError;

// Re-export test utilities for integration testing in downstream crates
pub use datasource::tests;
