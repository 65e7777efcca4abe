use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::xml::Element;

/// Maximum allowed element nesting depth.
/// Bounds tree growth on maliciously nested documents.
pub const MAX_XML_DEPTH: usize = 64;

/// Errors that can occur while materializing the document tree.
#[derive(Debug, Error)]
pub enum XmlError {
    /// Nesting depth exceeds the safety limit.
    #[error("XML nesting depth exceeds maximum of {0} levels")]
    MaxDepthExceeded(usize),

    /// XML syntax error reported by the underlying reader.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// The input contained no element at all.
    #[error("document contains no root element")]
    NoRootElement,

    /// Input ended while the named element was still open.
    #[error("unclosed element <{0}> at end of input")]
    UnclosedElement(String),
}

/// An element under construction: its children accumulate until the matching
/// end event pops the frame.
struct Frame {
    label: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Frame {
    fn into_element(self) -> Element {
        Element::Tag {
            label: self.label,
            attributes: self.attributes,
            children: self.children,
        }
    }
}

/// Parses an XML document into an [`Element`] tree.
///
/// The tree is fully materialized before any consumer runs: tag nodes carry
/// their attributes and ordered children, character data becomes text-node
/// children (whitespace-only runs between tags are dropped). Comments,
/// processing instructions and DOCTYPE are skipped. CDATA sections and
/// custom entity declarations are not interpreted; only the five XML builtin
/// entities are decoded, by quick-xml's escape layer.
///
/// The document root is the first top-level element; any trailing top-level
/// elements are ignored with a warning.
///
/// # Errors
///
/// Returns [`XmlError`] if the input is not well-formed XML, contains no
/// root element, ends with an element still open, or nests deeper than
/// [`MAX_XML_DEPTH`].
pub fn parse_document(xml: &str) -> Result<Element, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if stack.len() >= MAX_XML_DEPTH {
                    return Err(XmlError::MaxDepthExceeded(MAX_XML_DEPTH));
                }
                stack.push(open_frame(&e, &reader)?);
            }
            Ok(Event::Empty(e)) => {
                let element = open_frame(&e, &reader)?.into_element();
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::End(_)) => {
                // The reader has already verified the end name matches.
                match stack.pop() {
                    Some(frame) => attach(&mut stack, &mut root, frame.into_element()),
                    None => {
                        return Err(XmlError::XmlParse(
                            "close tag without matching open tag".to_string(),
                        ))
                    }
                }
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| XmlError::XmlParse(e.to_string()))?
                    .into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Element::text(text));
                }
                // Character data outside the root element carries no meaning.
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(XmlError::XmlParse(e.to_string())),
            _ => {} // Decl, Comment, PI, DocType, CData
        }
        buf.clear();
    }

    if let Some(frame) = stack.pop() {
        return Err(XmlError::UnclosedElement(frame.label));
    }
    root.ok_or(XmlError::NoRootElement)
}

/// Builds a frame from a start (or empty-element) event, decoding attributes.
fn open_frame(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Frame, XmlError> {
    let label = String::from_utf8_lossy(e.name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    let decoder = reader.decoder();
    for attr_result in e.attributes() {
        let attr = match attr_result {
            Ok(attr) => attr,
            Err(e) => {
                tracing::warn!(element = %label, error = %e, "Skipping malformed attribute");
                continue;
            }
        };
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .decode_and_unescape_value(decoder)
            .map_err(|e| XmlError::XmlParse(e.to_string()))?
            .into_owned();
        attributes.push((name, value));
    }

    Ok(Frame {
        label,
        attributes,
        children: Vec::new(),
    })
}

/// Hangs a completed element off its parent, or installs it as the root.
fn attach(stack: &mut [Frame], root: &mut Option<Element>, element: Element) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        tracing::warn!(label = %element.label(), "Ignoring element after document root");
    }
}
