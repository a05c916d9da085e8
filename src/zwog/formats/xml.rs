//! Minimal XML element tree
//!
//! Just enough XML to write workout files: elements with ordered attributes,
//! optional text and children. The serializer follows the conventions of the
//! files the workout platform produces itself:
//!
//! - no XML declaration
//! - attributes in insertion order
//! - empty elements written as `<Tag a="1" />`
//! - text escapes `&`, `<` and `>`; attribute values also escape `"`, `\n`,
//!   `\r` and `\t`

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Rename the element, keeping attributes, text and children
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First direct child with the given name
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    fn write_to(&self, output: &mut String) {
        output.push('<');
        output.push_str(&self.name);
        for (key, value) in &self.attributes {
            output.push_str(&format!(" {}=\"{}\"", key, escape_attribute(value)));
        }

        let text = self.text.as_deref().unwrap_or("");
        if text.is_empty() && self.children.is_empty() {
            output.push_str(" />");
            return;
        }

        output.push('>');
        output.push_str(&escape_text(text));
        for child in &self.children {
            child.write_to(output);
        }
        output.push_str(&format!("</{}>", self.name));
    }
}

impl fmt::Display for XmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        self.write_to(&mut output);
        f.write_str(&output)
    }
}

/// A complete document: a single root element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// File contents: the serialized root followed by a newline
    pub fn serialize(&self) -> String {
        format!("{}\n", self.root)
    }
}

impl fmt::Display for XmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value)
        .replace('"', "&quot;")
        .replace('\r', "&#13;")
        .replace('\n', "&#10;")
        .replace('\t', "&#09;")
}
