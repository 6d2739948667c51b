//! Forward-only XML node cursor
//!
//! A thin layer over [`quick_xml::Reader`] that remembers the node it is
//! positioned on. Element names are reported without namespace prefix, and
//! a self-closing element is both "at start" and "at end" of its tag.

use std::borrow::Cow;
use std::io::{BufRead, BufReader, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};

/// Kind of node the cursor is positioned on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `<tag ...>`
    Start,
    /// `<tag .../>`
    Empty,
    /// `</tag>`
    End,
}

/// An owned element with its attributes and child elements
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlNode {
    /// Local element name
    pub name: String,
    /// Attributes in document order (local names, unescaped values)
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Create an element with no attributes or children
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Look up an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given name
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Check if a child element with the given name exists
    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    fn from_start(e: &BytesStart<'_>) -> XlsxResult<Self> {
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
            let key = lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name: lossy(e.local_name().as_ref()).into_owned(),
            attributes,
            children: Vec::new(),
        })
    }
}

/// Streaming cursor over an XML document
pub struct NodeCursor<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    current: Option<(NodeKind, XmlNode)>,
}

impl<R: Read> NodeCursor<BufReader<R>> {
    /// Create a cursor over an unbuffered reader
    pub fn from_read(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }
}

impl<R: BufRead> NodeCursor<R> {
    /// Create a cursor positioned before the first node
    pub fn new(inner: R) -> Self {
        let mut reader = Reader::from_reader(inner);
        reader.trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
            current: None,
        }
    }

    /// Move to the next element node, skipping text, comments and
    /// declarations. Returns `false` at end of document.
    pub fn advance(&mut self) -> XlsxResult<bool> {
        Ok(self.next_node()?.is_some())
    }

    /// Advance until the start of `tag` is entered. Returns `false` if the
    /// document ends first.
    pub fn enter_section(&mut self, tag: &str) -> XlsxResult<bool> {
        while self.advance()? {
            if self.is_at_start(tag) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Check if the cursor is on `<tag>` or `<tag/>`
    pub fn is_at_start(&self, tag: &str) -> bool {
        matches!(
            &self.current,
            Some((NodeKind::Start | NodeKind::Empty, node)) if node.name == tag
        )
    }

    /// Check if the cursor is on `</tag>` or `<tag/>`
    pub fn is_at_end(&self, tag: &str) -> bool {
        matches!(
            &self.current,
            Some((NodeKind::End | NodeKind::Empty, node)) if node.name == tag
        )
    }

    /// Kind of the current node, `None` before the first node and at the end
    pub fn kind(&self) -> Option<NodeKind> {
        self.current.as_ref().map(|(kind, _)| *kind)
    }

    /// Local name of the current node
    pub fn name(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, node)| node.name.as_str())
    }

    /// Attribute of the current node (always `None` on end tags)
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.current
            .as_ref()
            .and_then(|(_, node)| node.attribute(name))
    }

    /// Read the whole element the cursor is on into an owned tree
    ///
    /// Afterwards the cursor is positioned on the element's end.
    pub fn materialize_subtree(&mut self) -> XlsxResult<XmlNode> {
        let (root_name, mut stack) = match &self.current {
            Some((NodeKind::Empty, node)) => return Ok(node.clone()),
            Some((NodeKind::Start, node)) => (node.name.clone(), vec![node.clone()]),
            Some((NodeKind::End, node)) => {
                return Err(XlsxError::StructuralViolation(format!(
                    "cannot materialize a subtree from end tag </{}>",
                    node.name
                )))
            }
            None => {
                return Err(XlsxError::StructuralViolation(
                    "cannot materialize a subtree outside of any element".into(),
                ))
            }
        };

        loop {
            let Some((kind, node)) = self.next_node()? else {
                return Err(XlsxError::StructuralViolation(format!(
                    "document ended inside <{}>",
                    root_name
                )));
            };

            match kind {
                NodeKind::Start => stack.push(node.clone()),
                NodeKind::Empty => {
                    let leaf = node.clone();
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(leaf);
                    }
                }
                NodeKind::End => {
                    let Some(done) = stack.pop() else {
                        return Err(XlsxError::StructuralViolation(format!(
                            "unbalanced end tag </{}>",
                            node.name
                        )));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(done),
                        None => return Ok(done),
                    }
                }
            }
        }
    }

    fn next_node(&mut self) -> XlsxResult<Option<(NodeKind, &XmlNode)>> {
        loop {
            self.buf.clear();
            let next = match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) => (NodeKind::Start, XmlNode::from_start(&e)?),
                Event::Empty(e) => (NodeKind::Empty, XmlNode::from_start(&e)?),
                Event::End(e) => (NodeKind::End, XmlNode::new(lossy(e.local_name().as_ref()))),
                Event::Eof => {
                    self.current = None;
                    return Ok(None);
                }
                _ => continue,
            };
            self.current = Some(next);
            return Ok(self.current.as_ref().map(|(kind, node)| (*kind, node)));
        }
    }
}

fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
