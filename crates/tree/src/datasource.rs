//! Defines the core abstraction for a navigable, read-only XML tree.
use std::fmt;
use std::hash::Hash;

/// An expanded name: an optional namespace URI and a local part.
///
/// Prefixes are deliberately absent. Two names are equal when both their
/// namespace URI and local part match, whatever prefix the source used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName<'a> {
    pub namespace: Option<&'a str>,
    pub local_name: &'a str,
}

impl<'a> QName<'a> {
    pub fn new(namespace: &'a str, local_name: &'a str) -> Self {
        Self {
            namespace: (!namespace.is_empty()).then_some(namespace),
            local_name,
        }
    }

    /// A name in no namespace.
    pub fn local(local_name: &'a str) -> Self {
        Self {
            namespace: None,
            local_name,
        }
    }

    pub fn matches(&self, namespace: Option<&str>, local_name: &str) -> bool {
        self.namespace == namespace && self.local_name == local_name
    }
}

impl fmt::Display for QName<'_> {
    /// Clark notation: `{uri}local`, or just `local` when there is no namespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local_name),
            None => f.write_str(self.local_name),
        }
    }
}

/// The kind of a node in the tree, aligned with the XDM node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Element,
    Attribute,
    Text,
    Comment,
    ProcessingInstruction,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Document => "document",
            NodeKind::Element => "element",
            NodeKind::Attribute => "attribute",
            NodeKind::Text => "text",
            NodeKind::Comment => "comment",
            NodeKind::ProcessingInstruction => "processing-instruction",
        };
        f.write_str(s)
    }
}

/// The contract for a node in an immutable, already materialized document.
///
/// Axis enumeration and filtering are written exclusively against this trait,
/// so any document model that can hand out cheap `Copy` handles can be walked.
///
/// `'a` is the lifetime of the underlying document.
pub trait TreeNode<'a>: fmt::Debug + Clone + Copy + PartialEq + Eq + Hash + 'a {
    /// The kind of the node (element, text, attribute, ...).
    fn node_kind(&self) -> NodeKind;

    /// The expanded name of the node. `None` for documents, text and comments.
    /// For a processing instruction this is its target.
    fn name(&self) -> Option<QName<'a>>;

    /// The string value of the node.
    /// - For a text node, this is its content.
    /// - For an element or document, this is the concatenation of all
    ///   descendant text nodes.
    /// - For an attribute, comment or processing instruction, this is its content.
    fn string_value(&self) -> String;

    /// The attribute nodes of this node. Empty for non-element nodes.
    fn attributes(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// The child nodes of this node, in document order.
    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// The parent node. `None` for the document node. An attribute's parent is
    /// the element that carries it.
    fn parent(&self) -> Option<Self>;

    /// The value of the attribute with the given expanded name, if present.
    fn attribute(&self, namespace: Option<&str>, local_name: &str) -> Option<String> {
        self.attributes()
            .find(|attr| {
                attr.name()
                    .is_some_and(|name| name.matches(namespace, local_name))
            })
            .map(|attr| attr.string_value())
    }
}

// Test utilities - publicly available for integration testing in downstream crates
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::hash::Hasher;

    #[derive(Debug, Clone)]
    struct MockNodeData<'a> {
        kind: NodeKind,
        name: Option<QName<'a>>,
        value: String,
        children: Vec<usize>,
        attributes: Vec<usize>,
    }

    /// An in-memory tree built node by node. Ids are handed out in creation
    /// order, so building top-down in source order yields document order.
    #[derive(Debug)]
    pub struct MockTree<'a> {
        nodes: Vec<MockNodeData<'a>>,
        parent_map: HashMap<usize, usize>,
    }

    /// A handle into a [`MockTree`].
    #[derive(Debug, Clone, Copy)]
    pub struct MockNode<'a> {
        pub id: usize,
        pub tree: &'a MockTree<'a>,
    }

    impl PartialEq for MockNode<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id && std::ptr::eq(self.tree, other.tree)
        }
    }
    impl Eq for MockNode<'_> {}

    impl Hash for MockNode<'_> {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.id.hash(state);
        }
    }

    impl Default for MockTree<'_> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<'a> MockTree<'a> {
        pub const DOCUMENT: usize = 0;

        /// Creates a tree holding only the document node (id 0).
        pub fn new() -> Self {
            Self {
                nodes: vec![MockNodeData {
                    kind: NodeKind::Document,
                    name: None,
                    value: String::new(),
                    children: vec![],
                    attributes: vec![],
                }],
                parent_map: HashMap::new(),
            }
        }

        fn push(
            &mut self,
            parent: usize,
            kind: NodeKind,
            name: Option<QName<'a>>,
            value: &str,
        ) -> usize {
            let id = self.nodes.len();
            self.nodes.push(MockNodeData {
                kind,
                name,
                value: value.to_string(),
                children: vec![],
                attributes: vec![],
            });
            if kind == NodeKind::Attribute {
                self.nodes[parent].attributes.push(id);
            } else {
                self.nodes[parent].children.push(id);
            }
            self.parent_map.insert(id, parent);
            id
        }

        pub fn element(&mut self, parent: usize, name: QName<'a>) -> usize {
            self.push(parent, NodeKind::Element, Some(name), "")
        }

        pub fn attribute(&mut self, parent: usize, name: QName<'a>, value: &str) -> usize {
            self.push(parent, NodeKind::Attribute, Some(name), value)
        }

        pub fn text(&mut self, parent: usize, value: &str) -> usize {
            self.push(parent, NodeKind::Text, None, value)
        }

        pub fn comment(&mut self, parent: usize, value: &str) -> usize {
            self.push(parent, NodeKind::Comment, None, value)
        }

        pub fn processing_instruction(&mut self, parent: usize, target: &'a str, value: &str) -> usize {
            self.push(
                parent,
                NodeKind::ProcessingInstruction,
                Some(QName::local(target)),
                value,
            )
        }

        /// Adds a document node below `parent`. Only malformed trees have one.
        pub fn nested_document(&mut self, parent: usize) -> usize {
            self.push(parent, NodeKind::Document, None, "")
        }

        /// Removes a node from its parent's child list while leaving its parent
        /// pointer in place, producing an inconsistent tree.
        pub fn detach(&mut self, id: usize) {
            if let Some(&parent) = self.parent_map.get(&id) {
                let data = &mut self.nodes[parent];
                data.children.retain(|&c| c != id);
                data.attributes.retain(|&a| a != id);
            }
        }

        pub fn node<'t>(&'t self, id: usize) -> MockNode<'t>
        where
            'a: 't,
        {
            MockNode { id, tree: self }
        }

        fn collect_text(&self, id: usize, out: &mut String) {
            let data = &self.nodes[id];
            if data.kind == NodeKind::Text {
                out.push_str(&data.value);
            }
            for &child in &data.children {
                self.collect_text(child, out);
            }
        }
    }

    impl<'a> TreeNode<'a> for MockNode<'a> {
        fn node_kind(&self) -> NodeKind {
            self.tree.nodes[self.id].kind
        }

        fn name(&self) -> Option<QName<'a>> {
            self.tree.nodes[self.id].name
        }

        fn string_value(&self) -> String {
            match self.node_kind() {
                NodeKind::Element | NodeKind::Document => {
                    let mut out = String::new();
                    self.tree.collect_text(self.id, &mut out);
                    out
                }
                _ => self.tree.nodes[self.id].value.clone(),
            }
        }

        fn attributes(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
            let tree = self.tree;
            let attribute_ids = tree.nodes[self.id].attributes.clone();
            Box::new(attribute_ids.into_iter().map(move |id| MockNode { id, tree }))
        }

        fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
            let tree = self.tree;
            let children_ids = tree.nodes[self.id].children.clone();
            Box::new(children_ids.into_iter().map(move |id| MockNode { id, tree }))
        }

        fn parent(&self) -> Option<Self> {
            self.tree.parent_map.get(&self.id).map(|&pid| MockNode {
                id: pid,
                tree: self.tree,
            })
        }
    }

    /// Creates a small tree for axis tests:
    /// ```text
    /// #document                               0
    ///   <root>                                1
    ///     <para id="p1">Hello</para>          2, attr 3, text 4
    ///     <!-- comment node -->               5
    ///     <div/>                              6
    ///     <?pi-target pi-value?>              7
    ///     <para>World</para>                  8, text 9
    ///   </root>
    /// ```
    pub fn create_test_tree<'a>() -> MockTree<'a> {
        let mut tree = MockTree::new();
        let root = tree.element(MockTree::DOCUMENT, QName::local("root"));
        let para1 = tree.element(root, QName::local("para"));
        tree.attribute(para1, QName::local("id"), "p1");
        tree.text(para1, "Hello");
        tree.comment(root, " comment node ");
        tree.element(root, QName::local("div"));
        tree.processing_instruction(root, "pi-target", "pi-value");
        let para2 = tree.element(root, QName::local("para"));
        tree.text(para2, "World");
        tree
    }

}
