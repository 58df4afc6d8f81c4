//! Filtered axis traversal over XML trees.
//!
//! ```text
//! let doc = XmlDocument::parse(text)?;
//! let steps = AxisNodes::new(doc.document_element(), Axis::Child, FilterMode::Pipeline);
//! for step in &steps {
//!     let step = step?;
//!     // ...
//! }
//! ```

pub mod describe;

pub use axisnodes_filter::{
    AxisNodes, AxisNodesError, AxisNodesIter, FilterMode, ParseModeError, PipelineVocabulary,
    UseWhenError, UseWhenEvaluator, XPROC_NAMESPACE, is_significant, is_whitespace_only,
};
pub use axisnodes_tree::{Axis, AxisIter, NodeKind, ParseAxisError, QName, TreeNode};
pub use axisnodes_xml::{XmlDocument, XmlNode};
pub use describe::describe;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parsing error (roxmltree): {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Axis filtering error: {0}")]
    Filter(#[from] AxisNodesError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses `text` and collects the nodes of `axis` from its document element
/// that `mode` keeps, rendered with [`describe`].
pub fn describe_axis(text: &str, axis: Axis, mode: FilterMode) -> Result<Vec<String>, Error> {
    let doc = XmlDocument::parse(text)?;
    let nodes = AxisNodes::new(doc.document_element(), axis, mode);
    let mut lines = Vec::new();
    for node in &nodes {
        lines.push(describe(&node?));
    }
    log::debug!("{} {} nodes kept in {} mode", lines.len(), axis, mode);
    Ok(lines)
}
