//! Content, that can be written into a [`DisplayRegion`](crate::DisplayRegion). \
//! Text and attribute values are always escaped when serialized, so remote data can never turn into markup.

/// A piece of content in a display region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Markup taken verbatim from the page document itself
    Raw(String),
}

/// An html element with escaped attributes and child nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

// Elements that are serialized as `<tag .../>` and never have children
const VOID_ELEMENTS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

impl Element {

    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: vec![],
            children: vec![],
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }

}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Serializes the node into html
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    /// The text content, as a browser would report it (Raw markup is included as is)
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) | Node::Raw(text) => text.clone(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape(text, false)),
            Node::Raw(markup) => out.push_str(markup),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attributes {
                    out.push_str(&format!(" {}=\"{}\"", name, escape(value, true)));
                }
                if element.is_void() {
                    out.push_str("/>");
                    return;
                }
                out.push('>');
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str(&format!("</{}>", element.tag));
            }
        }
    }

}

fn escape(text: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            '\'' if attribute => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
