//! Arena-based DOM for tolerant HTML parsing.
//!
//! html5ever parses the (possibly malformed) input into this tree; the
//! chapter extractor then walks it through a small, explicit contract:
//! tag/attribute access, ordered children, next-sibling navigation, subtree
//! text collection, and node detachment. Nodes live in a contiguous vector
//! and link to each other by index.

mod sink;

use html5ever::tendril::TendrilSink;
use html5ever::{LocalName, ParseOpts, QualName, parse_document};

use sink::DomSink;

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel value for no node.
    pub(crate) const NONE: NodeId = NodeId(u32::MAX);

    pub(crate) fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    pub(crate) fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Node payload.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root.
    Document,
    /// Element with name and attributes.
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
        /// Pre-extracted id for fast lookup.
        id: Option<String>,
        /// Pre-extracted classes for fast lookup.
        classes: Vec<String>,
    },
    /// Text content.
    Text(String),
    /// Comment (ignored but needed for TreeSink).
    Comment(String),
}

/// HTML attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

/// A node in the arena.
#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub(crate) parent: NodeId,
    pub(crate) first_child: NodeId,
    pub(crate) last_child: NodeId,
    pub(crate) prev_sibling: NodeId,
    pub(crate) next_sibling: NodeId,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// Parsed tree view of one HTML input.
///
/// Built once per parse call and discarded afterwards. Detaching a node
/// unlinks it (and thereby its subtree) from traversal; the arena slot
/// itself is never reclaimed, which is fine for a per-document lifetime.
pub struct Document {
    nodes: Vec<Node>,
    document: NodeId,
}

impl Document {
    /// Create an empty tree with a document root.
    pub(crate) fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            document: NodeId::NONE,
        };
        doc.document = doc.alloc(Node::new(NodeData::Document));
        doc
    }

    /// Parse an HTML string into a tree.
    ///
    /// Malformed markup is tolerated; whatever structure html5ever recovers
    /// is returned. Never fails.
    pub fn parse(html: &str) -> Self {
        let sink = DomSink::new();
        parse_document(sink, ParseOpts::default())
            .from_utf8()
            .one(html.as_bytes())
            .into_document()
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the document root ID.
    pub fn document(&self) -> NodeId {
        self.document
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Create a new element node.
    pub(crate) fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        let mut id = None;
        let mut classes = Vec::new();

        for attr in &attrs {
            if attr.name.local.as_ref() == "id" {
                id = Some(attr.value.clone());
            } else if attr.name.local.as_ref() == "class" {
                classes = attr
                    .value
                    .split_whitespace()
                    .map(|s| s.to_string())
                    .collect();
            }
        }

        self.alloc(Node::new(NodeData::Element {
            name,
            attrs,
            id,
            classes,
        }))
    }

    /// Create a new text node.
    pub(crate) fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Text(text)))
    }

    /// Create a new comment node.
    pub(crate) fn create_comment(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Comment(text)))
    }

    /// Append a child to a parent node.
    pub(crate) fn append(&mut self, parent: NodeId, child: NodeId) {
        let last_child = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
        }

        if last_child.is_some()
            && let Some(last_node) = self.get_mut(last_child)
        {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert a node before a sibling.
    pub(crate) fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        let parent = self.get(sibling).map(|n| n.parent).unwrap_or(NodeId::NONE);
        let prev = self
            .get(sibling)
            .map(|n| n.prev_sibling)
            .unwrap_or(NodeId::NONE);

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Append text to an existing text node, or create new if last child isn't text.
    pub(crate) fn append_text(&mut self, parent: NodeId, text: &str) {
        let last_child = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(last) = self.get_mut(last_child)
            && let NodeData::Text(existing) = &mut last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Unlink a node (and its subtree) from the tree.
    pub(crate) fn detach(&mut self, target: NodeId) {
        let (parent, prev, next) = {
            let node = match self.get(target) {
                Some(n) => n,
                None => return,
            };
            (node.parent, node.prev_sibling, node.next_sibling)
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if parent.is_some()
            && let Some(p) = self.get_mut(parent)
        {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if parent.is_some()
            && let Some(p) = self.get_mut(parent)
        {
            p.last_child = prev;
        }

        if let Some(target_node) = self.get_mut(target) {
            target_node.parent = NodeId::NONE;
            target_node.prev_sibling = NodeId::NONE;
            target_node.next_sibling = NodeId::NONE;
        }
    }

    /// Detach every element with the given tag, wherever it occurs.
    pub fn remove_by_tag(&mut self, tag: &str) {
        for id in self.elements_by_tag(tag) {
            self.detach(id);
        }
    }

    /// Iterate over children of a node in document order.
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        Children {
            doc: self,
            current: first,
        }
    }

    /// All elements with the given tag, in document order (preorder DFS).
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![self.document];
        while let Some(id) = stack.pop() {
            if self.tag(id).is_some_and(|t| t.as_ref() == tag) {
                found.push(id);
            }
            // Push children in reverse order for left-to-right traversal
            let mut children: Vec<_> = self.children(id).collect();
            children.reverse();
            stack.extend(children);
        }
        found
    }

    /// Next sibling that is an element, skipping text and comment nodes.
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut next = self.get(id)?.next_sibling;
        while next.is_some() {
            if self.is_element(next) {
                return Some(next);
            }
            next = self.get(next)?.next_sibling;
        }
        None
    }

    /// Element's local name (tag).
    pub fn tag(&self, id: NodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        })
    }

    /// An attribute value.
    pub fn attr(&self, id: NodeId, attr_name: &str) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == attr_name)
                .map(|a| a.value.as_str()),
            _ => None,
        })
    }

    /// Element's id attribute.
    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { id, .. } => id.as_deref(),
            _ => None,
        })
    }

    /// Element's classes.
    pub fn classes(&self, id: NodeId) -> &[String] {
        static EMPTY: &[String] = &[];
        self.get(id)
            .and_then(|n| match &n.data {
                NodeData::Element { classes, .. } => Some(classes.as_slice()),
                _ => None,
            })
            .unwrap_or(EMPTY)
    }

    /// Check whether an element carries the given class.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    /// Check if node is an element.
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Element { .. }))
    }

    /// Text of a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Concatenated text of all text nodes in the subtree, comments excluded.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(text) = self.text(id) {
            out.push_str(text);
        }
        for child in self.children(id) {
            self.collect_text(child, out);
        }
    }

    /// Number of allocated nodes (detached ones included).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds only the document root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}

/// Iterator over children of a node.
pub struct Children<'a> {
    doc: &'a Document,
    current: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .doc
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parse() {
        let doc = Document::parse("<html><body><p>Hello</p></body></html>");

        // Document + html + head + body + p + text
        assert!(doc.len() > 3);

        let p = doc.elements_by_tag("p")[0];
        assert_eq!(doc.tag(p).unwrap().as_ref(), "p");

        let text_id = doc.children(p).next().expect("p should have child");
        assert_eq!(doc.text(text_id), Some("Hello"));
    }

    #[test]
    fn test_attributes_and_classes() {
        let doc = Document::parse(r#"<div id="main" class="container header">Content</div>"#);

        let div = doc.elements_by_tag("div")[0];
        assert_eq!(doc.element_id(div), Some("main"));
        assert_eq!(doc.attr(div, "id"), Some("main"));
        assert!(doc.has_class(div, "container"));
        assert!(doc.has_class(div, "header"));
        assert!(!doc.has_class(div, "footer"));
    }

    #[test]
    fn test_document_order_enumeration() {
        let doc = Document::parse(
            r#"<h3 id="I">I</h3><div><h3 id="II">II</h3></div><h3 id="III">III</h3>"#,
        );

        let ids: Vec<_> = doc
            .elements_by_tag("h3")
            .into_iter()
            .filter_map(|h| doc.element_id(h))
            .collect();
        assert_eq!(ids, ["I", "II", "III"]);
    }

    #[test]
    fn test_next_element_sibling_skips_text() {
        let doc = Document::parse("<body><h3>a</h3> text between <p>b</p></body>");

        let h3 = doc.elements_by_tag("h3")[0];
        let next = doc.next_element_sibling(h3).expect("should find sibling");
        assert_eq!(doc.tag(next).unwrap().as_ref(), "p");
    }

    #[test]
    fn test_remove_by_tag() {
        let mut doc = Document::parse("<body><script>var x;</script><p>Keep</p></body>");

        doc.remove_by_tag("script");

        let body = doc.elements_by_tag("body")[0];
        assert_eq!(doc.text_content(body).trim(), "Keep");
        assert!(doc.elements_by_tag("script").is_empty());
    }

    #[test]
    fn test_detach_middle_sibling() {
        let mut doc = Document::parse("<body><p>a</p><p>b</p><p>c</p></body>");

        let ps = doc.elements_by_tag("p");
        doc.detach(ps[1]);

        let body = doc.elements_by_tag("body")[0];
        let remaining: Vec<_> = doc
            .children(body)
            .filter(|&c| doc.is_element(c))
            .map(|c| doc.text_content(c))
            .collect();
        assert_eq!(remaining, ["a", "c"]);
    }

    #[test]
    fn test_text_content_excludes_comments() {
        let doc = Document::parse("<p>before<!-- hidden -->after</p>");

        let p = doc.elements_by_tag("p")[0];
        assert_eq!(doc.text_content(p), "beforeafter");
    }

    #[test]
    fn test_malformed_markup_recovers() {
        let doc = Document::parse(r#"<h1>Unclosed <h3 id="I">I</h3><p>Text</p>"#);

        let headings = doc.elements_by_tag("h3");
        assert_eq!(headings.len(), 1);
        assert_eq!(doc.element_id(headings[0]), Some("I"));
    }
}
