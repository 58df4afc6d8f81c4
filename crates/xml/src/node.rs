// XML tree model implementation using roxmltree
use axisnodes_tree::{NodeKind, QName, TreeNode};
use roxmltree::Node;
use std::hash::{Hash, Hasher};

/// Wrapper around a parsed `roxmltree::Document`, the entry point for walking it.
pub struct XmlDocument<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> XmlDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self, roxmltree::Error> {
        let doc = roxmltree::Document::parse(text)?;
        Ok(Self { doc })
    }

    /// The document node.
    pub fn root_node(&self) -> XmlNode<'_, 'input> {
        XmlNode::new(self.doc.root())
    }

    /// The outermost element of the document.
    pub fn document_element(&self) -> XmlNode<'_, 'input> {
        XmlNode::new(self.doc.root_element())
    }
}

/// Either a regular tree node or an attribute.
/// Attributes need special handling because roxmltree stores them as data on
/// their element rather than as navigable nodes.
#[derive(Debug, Clone, Copy)]
pub enum XmlNode<'a, 'input> {
    /// A document, element, text, comment or processing-instruction node
    Node(Node<'a, 'input>),
    /// An attribute, identified by its owning element and its index there
    Attribute {
        parent: Node<'a, 'input>,
        index: usize,
    },
}

impl<'a, 'input> XmlNode<'a, 'input> {
    pub fn new(node: Node<'a, 'input>) -> Self {
        XmlNode::Node(node)
    }

    pub fn inner(&self) -> Option<Node<'a, 'input>> {
        match self {
            XmlNode::Node(node) => Some(*node),
            XmlNode::Attribute { .. } => None,
        }
    }

    fn attr(&self) -> Option<roxmltree::Attribute<'a, 'input>> {
        match self {
            XmlNode::Node(_) => None,
            XmlNode::Attribute { parent, index } => parent.attributes().nth(*index),
        }
    }
}

impl PartialEq for XmlNode<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (XmlNode::Node(a), XmlNode::Node(b)) => a.id() == b.id(),
            (
                XmlNode::Attribute {
                    parent: p1,
                    index: i1,
                },
                XmlNode::Attribute {
                    parent: p2,
                    index: i2,
                },
            ) => p1.id() == p2.id() && i1 == i2,
            _ => false,
        }
    }
}

impl Eq for XmlNode<'_, '_> {}

impl Hash for XmlNode<'_, '_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            XmlNode::Node(node) => {
                0u8.hash(state);
                node.id().hash(state);
            }
            XmlNode::Attribute { parent, index } => {
                1u8.hash(state);
                parent.id().hash(state);
                index.hash(state);
            }
        }
    }
}

impl<'a> TreeNode<'a> for XmlNode<'a, 'a> {
    fn node_kind(&self) -> NodeKind {
        match self {
            XmlNode::Node(node) => match node.node_type() {
                roxmltree::NodeType::Root => NodeKind::Document,
                roxmltree::NodeType::Element => NodeKind::Element,
                roxmltree::NodeType::Text => NodeKind::Text,
                roxmltree::NodeType::Comment => NodeKind::Comment,
                roxmltree::NodeType::PI => NodeKind::ProcessingInstruction,
            },
            XmlNode::Attribute { .. } => NodeKind::Attribute,
        }
    }

    fn name(&self) -> Option<QName<'a>> {
        match self {
            XmlNode::Node(node) if node.is_element() => {
                let tag = node.tag_name();
                Some(QName {
                    namespace: tag.namespace(),
                    local_name: tag.name(),
                })
            }
            XmlNode::Node(node) => node.pi().map(|pi| QName::local(pi.target)),
            XmlNode::Attribute { .. } => self.attr().map(|attr| QName {
                namespace: attr.namespace(),
                local_name: attr.name(),
            }),
        }
    }

    fn string_value(&self) -> String {
        match self {
            XmlNode::Node(node) => match node.node_type() {
                roxmltree::NodeType::Text | roxmltree::NodeType::Comment => {
                    node.text().unwrap_or("").to_string()
                }
                roxmltree::NodeType::Element | roxmltree::NodeType::Root => node
                    .descendants()
                    .filter(|n| n.is_text())
                    .filter_map(|n| n.text())
                    .collect(),
                roxmltree::NodeType::PI => node
                    .pi()
                    .and_then(|pi| pi.value)
                    .unwrap_or("")
                    .to_string(),
            },
            XmlNode::Attribute { .. } => self
                .attr()
                .map(|attr| attr.value().to_string())
                .unwrap_or_default(),
        }
    }

    fn attributes(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        match self {
            XmlNode::Node(node) => {
                let parent = *node;
                let attr_count = node.attributes().len();
                Box::new((0..attr_count).map(move |index| XmlNode::Attribute { parent, index }))
            }
            XmlNode::Attribute { .. } => Box::new(std::iter::empty()),
        }
    }

    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        match self {
            XmlNode::Node(node) => Box::new(node.children().map(XmlNode::new)),
            XmlNode::Attribute { .. } => Box::new(std::iter::empty()),
        }
    }

    fn parent(&self) -> Option<Self> {
        match self {
            XmlNode::Node(node) => node.parent().map(XmlNode::Node),
            XmlNode::Attribute { parent, .. } => Some(XmlNode::Node(*parent)),
        }
    }

    fn attribute(&self, namespace: Option<&str>, local_name: &str) -> Option<String> {
        // roxmltree's `attribute(&str)` ignores the namespace, so match both parts.
        self.inner()?
            .attributes()
            .find(|attr| attr.namespace() == namespace && attr.name() == local_name)
            .map(|attr| attr.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XPROC_NS: &str = "http://www.w3.org/ns/xproc";

    #[test]
    fn test_node_kinds() {
        let xml = "<doc><?target data?><!--c-->text<e/></doc>";
        let doc = XmlDocument::parse(xml).unwrap();
        let kinds: Vec<_> = doc
            .document_element()
            .children()
            .map(|n| n.node_kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::ProcessingInstruction,
                NodeKind::Comment,
                NodeKind::Text,
                NodeKind::Element
            ]
        );
        assert_eq!(doc.root_node().node_kind(), NodeKind::Document);
    }

    #[test]
    fn test_names_carry_namespaces() {
        let xml = format!(
            "<p:pipeline xmlns:p='{XPROC_NS}'><p:documentation/><plain/><?pi x?></p:pipeline>"
        );
        let doc = XmlDocument::parse(&xml).unwrap();
        let names: Vec<_> = doc
            .document_element()
            .children()
            .filter_map(|n| n.name())
            .map(|q| q.to_string())
            .collect();
        assert_eq!(
            names,
            vec![format!("{{{XPROC_NS}}}documentation"), "plain".to_string(), "pi".to_string()]
        );
    }

    #[test]
    fn test_attributes() {
        let xml = format!(
            r#"<root xmlns:p="{XPROC_NS}"><item id="123" p:use-when="false()">Text</item></root>"#
        );
        let doc = XmlDocument::parse(&xml).unwrap();
        let item = doc.document_element().children().next().unwrap();

        let attrs: Vec<_> = item.attributes().collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].node_kind(), NodeKind::Attribute);
        assert_eq!(attrs[0].name(), Some(QName::local("id")));
        assert_eq!(attrs[0].string_value(), "123");
        assert_eq!(attrs[1].name(), Some(QName::new(XPROC_NS, "use-when")));
        assert_eq!(attrs[0].parent(), Some(item));

        assert_eq!(item.attribute(None, "id").as_deref(), Some("123"));
        assert_eq!(
            item.attribute(Some(XPROC_NS), "use-when").as_deref(),
            Some("false()")
        );
        assert_eq!(item.attribute(None, "use-when"), None);
        assert_eq!(item.attribute(Some(XPROC_NS), "id"), None);
        assert_eq!(item.string_value(), "Text");
    }

    #[test]
    fn test_unqualified_lookup_skips_namespaced_attributes() {
        let xml = format!(
            r#"<p:identity xmlns:p="{XPROC_NS}" xmlns:x="urn:x" x:use-when="false()" p:use-when="$a" use-when="true()"/>"#
        );
        let doc = XmlDocument::parse(&xml).unwrap();
        let step = doc.document_element();
        assert_eq!(step.attribute(None, "use-when").as_deref(), Some("true()"));
        assert_eq!(step.attribute(Some("urn:x"), "use-when").as_deref(), Some("false()"));
        assert_eq!(step.attribute(Some(XPROC_NS), "use-when").as_deref(), Some("$a"));

        let doc = XmlDocument::parse(r#"<e xmlns:x="urn:x" x:use-when="false()"/>"#).unwrap();
        assert_eq!(doc.document_element().attribute(None, "use-when"), None);
    }

    #[test]
    fn test_whitespace_text_is_preserved() {
        let doc = XmlDocument::parse("<a> <b/>\n</a>").unwrap();
        let texts: Vec<_> = doc
            .document_element()
            .children()
            .filter(|n| n.node_kind() == NodeKind::Text)
            .map(|n| n.string_value())
            .collect();
        assert_eq!(texts, vec![" ".to_string(), "\n".to_string()]);
    }
}
