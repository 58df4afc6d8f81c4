//! Names the pipeline-language constructs the `Pipeline` mode reacts to.

use axisnodes_tree::{NodeKind, TreeNode};
use serde::{Deserialize, Serialize};

pub const XPROC_NAMESPACE: &str = "http://www.w3.org/ns/xproc";

/// The documentation element and use-when attribute of a pipeline language.
///
/// On elements in the pipeline namespace the use-when attribute is
/// unqualified; on any other element it must carry the pipeline namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineVocabulary {
    pub namespace: String,
    pub documentation: String,
    pub use_when: String,
}

impl Default for PipelineVocabulary {
    fn default() -> Self {
        Self {
            namespace: XPROC_NAMESPACE.to_string(),
            documentation: "documentation".to_string(),
            use_when: "use-when".to_string(),
        }
    }
}

impl PipelineVocabulary {
    pub fn is_documentation<'a, N: TreeNode<'a>>(&self, node: &N) -> bool {
        node.node_kind() == NodeKind::Element
            && node
                .name()
                .is_some_and(|name| name.matches(Some(self.namespace.as_str()), &self.documentation))
    }

    /// The use-when expression on an element, if it carries one.
    pub fn use_when_expression<'a, N: TreeNode<'a>>(&self, node: &N) -> Option<String> {
        let name = node.name().filter(|_| node.node_kind() == NodeKind::Element)?;
        if name.namespace == Some(self.namespace.as_str()) {
            node.attribute(None, &self.use_when)
        } else {
            node.attribute(Some(self.namespace.as_str()), &self.use_when)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axisnodes_tree::QName;
    use axisnodes_tree::tests::MockTree;

    #[test]
    fn test_use_when_placement_depends_on_element_namespace() {
        let mut tree = MockTree::new();
        let step = tree.element(MockTree::DOCUMENT, QName::new(XPROC_NAMESPACE, "identity"));
        tree.attribute(step, QName::local("use-when"), "true()");
        let foreign = tree.element(step, QName::local("para"));
        tree.attribute(foreign, QName::local("use-when"), "ignored");
        tree.attribute(foreign, QName::new(XPROC_NAMESPACE, "use-when"), "false()");
        let bare = tree.element(step, QName::local("other"));
        tree.attribute(bare, QName::local("use-when"), "ignored");

        let vocabulary = PipelineVocabulary::default();
        assert_eq!(
            vocabulary.use_when_expression(&tree.node(step)).as_deref(),
            Some("true()")
        );
        assert_eq!(
            vocabulary.use_when_expression(&tree.node(foreign)).as_deref(),
            Some("false()")
        );
        assert_eq!(vocabulary.use_when_expression(&tree.node(bare)), None);
    }

    #[test]
    fn test_documentation_requires_namespace() {
        let mut tree = MockTree::new();
        let doc = tree.element(MockTree::DOCUMENT, QName::new(XPROC_NAMESPACE, "documentation"));
        let plain = tree.element(doc, QName::local("documentation"));

        let vocabulary = PipelineVocabulary::default();
        assert!(vocabulary.is_documentation(&tree.node(doc)));
        assert!(!vocabulary.is_documentation(&tree.node(plain)));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let vocabulary: PipelineVocabulary =
            serde_json::from_str(r#"{ "namespace": "urn:example:pipeline" }"#).unwrap();
        assert_eq!(vocabulary.namespace, "urn:example:pipeline");
        assert_eq!(vocabulary.documentation, "documentation");
        assert_eq!(vocabulary.use_when, "use-when");

        let json = serde_json::to_value(PipelineVocabulary::default()).unwrap();
        assert_eq!(json["useWhen"], "use-when");
    }
}
