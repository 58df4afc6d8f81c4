//! One-line renderings of tree nodes, for listings and test assertions.

use axisnodes_tree::{NodeKind, TreeNode};

/// Renders a node as its kind followed by what identifies it:
///
/// - `element {uri}local`
/// - `attribute name="value"`
/// - `text " some text "`
/// - `comment "..."`
/// - `processing-instruction target`
/// - `document`
pub fn describe<'a, N: TreeNode<'a>>(node: &N) -> String {
    let kind = node.node_kind();
    match kind {
        NodeKind::Document => kind.to_string(),
        NodeKind::Element | NodeKind::ProcessingInstruction => match node.name() {
            Some(name) => format!("{} {}", kind, name),
            None => kind.to_string(),
        },
        NodeKind::Attribute => match node.name() {
            Some(name) => format!("{} {}={:?}", kind, name, node.string_value()),
            None => kind.to_string(),
        },
        NodeKind::Text | NodeKind::Comment => format!("{} {:?}", kind, node.string_value()),
    }
}
