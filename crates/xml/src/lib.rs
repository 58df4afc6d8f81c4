//! An implementation of the `TreeNode` trait for the `roxmltree` crate.

mod node;

pub use node::{XmlDocument, XmlNode};
