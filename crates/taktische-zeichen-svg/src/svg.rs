//! Plain SVG element tree.
//!
//! Elements keep their attributes in insertion order so serialized output is
//! stable, which keeps snapshot-style assertions simple.

use std::fmt::{self, Write};

use taktische_zeichen_core::Point;

use crate::element::{Element, ElementFactory};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A single SVG node with ordered attributes and child nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgElement {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[SvgElement] {
        &self.children
    }

    /// Serializes the element and its subtree as SVG markup.
    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }

    fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(out, " {}=\"{}\"", name, escape_attr(value))?;
        }
        if self.children.is_empty() {
            return out.write_str("/>");
        }
        out.write_char('>')?;
        for child in &self.children {
            child.write_to(out)?;
        }
        write!(out, "</{}>", self.tag)
    }
}

impl Element for SvgElement {
    fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn push(&mut self, child: Self) {
        self.children.push(child);
    }
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Escapes the characters that cannot appear inside a double-quoted attribute.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Factory producing [`SvgElement`] nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgFactory;

impl SvgFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates a `<path>` with the given path data.
    pub fn path(&self, d: impl Into<String>) -> SvgElement {
        self.element("path").with_attr("d", d)
    }

    /// Creates the root `<svg>` element sized to `size` with a matching viewBox.
    pub fn document(&self, size: Point) -> SvgElement {
        self.element("svg")
            .with_attr("xmlns", SVG_NAMESPACE)
            .with_attr("width", size.x.to_string())
            .with_attr("height", size.y.to_string())
            .with_attr("viewBox", format!("0 0 {} {}", size.x, size.y))
    }
}

impl ElementFactory for SvgFactory {
    type Element = SvgElement;

    fn element(&self, tag: &str) -> SvgElement {
        SvgElement::new(tag)
    }
}
