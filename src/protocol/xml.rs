//! Minimal element tree over quick-xml.
//!
//! SES responses are small, so the whole document is read into a tree and
//! queried by local name. Namespace prefixes are dropped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{SesError, SesResult};

/// Deepest element nesting `parse` accepts. SES replies stay within a
/// handful of levels.
pub const MAX_DEPTH: usize = 64;

/// An XML element with its text content and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Local name (no namespace prefix).
    pub name: String,
    /// Concatenated text and CDATA directly inside this element.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> SesResult<Self> {
        let name = std::str::from_utf8(start.local_name().as_ref())
            .map_err(|e| decode_error(format!("Element name is not UTF-8: {}", e)))?
            .to_string();

        Ok(Self {
            name,
            ..Self::default()
        })
    }

    /// First direct child with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first direct child with the given local name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_str())
    }

    /// Follow a path of direct children.
    pub fn path(&self, names: &[&str]) -> Option<&Element> {
        names
            .iter()
            .try_fold(self, |element, name| element.child(name))
    }

    /// First element with the given local name, this element included,
    /// in document order.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Every element with the given local name, this element included,
    /// in document order.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect(name, &mut found);
        found
    }

    fn collect<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        if self.name == name {
            found.push(self);
        }
        for child in &self.children {
            child.collect(name, found);
        }
    }
}

fn decode_error(message: impl Into<String>) -> SesError {
    SesError::Decode {
        message: message.into(),
    }
}

/// Parse a document into its root element.
///
/// # Errors
///
/// Returns `SesError::Decode` for empty input, malformed or unbalanced
/// markup, documents with zero or several root elements, and elements
/// nested deeper than [`MAX_DEPTH`].
pub fn parse(xml: &str) -> SesResult<Element> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if root.is_some() {
                    return Err(decode_error("Multiple root elements"));
                }
                check_depth(&stack)?;
                stack.push(Element::from_start(&e)?);
            }
            Event::Empty(e) => {
                check_depth(&stack)?;
                let element = Element::from_start(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| decode_error("Unexpected closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&text),
                    None => return Err(decode_error("Text outside of the root element")),
                }
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                let text = std::str::from_utf8(&bytes)
                    .map_err(|e| decode_error(format!("CDATA is not UTF-8: {}", e)))?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(text),
                    None => return Err(decode_error("CDATA outside of the root element")),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(decode_error(format!(
            "Unclosed element <{}>",
            stack.last().map(|e| e.name.as_str()).unwrap_or_default()
        )));
    }

    root.ok_or_else(|| decode_error("Document has no root element"))
}

fn check_depth(stack: &[Element]) -> SesResult<()> {
    if stack.len() >= MAX_DEPTH {
        return Err(decode_error(format!(
            "Elements nested deeper than {} levels",
            MAX_DEPTH
        )));
    }
    Ok(())
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> SesResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(decode_error("Multiple root elements")),
    }
    Ok(())
}
