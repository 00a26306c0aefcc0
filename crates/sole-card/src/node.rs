//! Display tree produced by components and rendered to HTML by the host.

use std::fmt::Write;

/// A node in the display tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a text node.
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    /// Find the first element tagged with `part`, depth first.
    pub fn find_part(&self, part: &str) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Element(el) => el.find_part(part),
        }
    }

    /// Concatenated text content of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Render as HTML markup.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&html_escape(t)),
            Node::Element(el) => el.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// Ordered CSS declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style(Vec<(&'static str, String)>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, replacing an earlier one for the same property.
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.0.push((property, value)),
        }
        self
    }

    /// Value of a property, if declared.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// An element with attributes, inline style and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub part: Option<&'static str>,
    pub attrs: Vec<(&'static str, String)>,
    pub style: Style,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            part: None,
            attrs: Vec::new(),
            style: Style::new(),
            children: Vec::new(),
        }
    }

    /// Name this element so hosts and tests can locate it.
    pub fn part(mut self, part: &'static str) -> Self {
        self.part = Some(part);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child only when present.
    pub fn child_opt(mut self, child: Option<impl Into<Node>>) -> Self {
        if let Some(c) = child {
            self.children.push(c.into());
        }
        self
    }

    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(Node::text(s))
    }

    /// Attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn find_part(&self, part: &str) -> Option<&Element> {
        if self.part == Some(part) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_part(part))
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    fn is_void(&self) -> bool {
        matches!(self.tag, "img" | "br" | "hr" | "input" | "meta" | "link")
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(part) = self.part {
            let _ = write!(out, r#" data-part="{}""#, part);
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, r#" {}="{}""#, name, html_escape(value));
        }
        if !self.style.is_empty() {
            let _ = write!(out, r#" style="{}""#, html_escape(&self.style.to_css()));
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Fixed-size gap between stacked regions.
pub fn spacer(size_px: u32) -> Element {
    Element::new("span").part("spacer").style(
        Style::new()
            .set("display", "block")
            .set("min-width", format!("{}px", size_px))
            .set("min-height", format!("{}px", size_px)),
    )
}

/// Escape text for HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
