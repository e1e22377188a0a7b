// crates/junos-rs-reply/src/xml.rs

//! Bounded-subtree access over a reply, built on the `quick-xml` pull reader.
//!
//! A [`Subtree`] is a borrowed slice of the reply spanning one element from its
//! start tag to its end tag. Subtrees can be walked child by child without
//! building a DOM, and each one can be handed to the `serde` deserializer on
//! its own.

use crate::error::{Malformed, ReplyError};
use alloc::string::{String, ToString};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// One element of a reply, including its start and end tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtree<'a> {
    name: &'a str,
    position: usize,
    xml: &'a str,
}

impl<'a> Subtree<'a> {
    /// The qualified element name, e.g. `macsec-interface-common-information`.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The element name without any namespace prefix.
    pub fn local_name(&self) -> &'a str {
        local_name(self.name)
    }

    /// Zero-based ordinal of this element among its parent's child elements.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The raw markup of the element.
    pub fn as_str(&self) -> &'a str {
        self.xml
    }
}

/// Strips a `prefix:` from a qualified name.
pub(crate) fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

/// Reads the element name out of a raw start tag (`<name attr="..">`).
fn element_name(markup: &str) -> &str {
    let tag = markup.strip_prefix('<').unwrap_or(markup);
    let end = tag
        .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .unwrap_or(tag.len());
    &tag[..end]
}

fn offset(reader: &Reader<&[u8]>) -> usize {
    reader.buffer_position() as usize
}

/// Locates the document element of `xml`, skipping a byte order mark, the XML
/// declaration, comments and processing instructions in front of it.
pub(crate) fn root(xml: &str) -> Result<Subtree<'_>, ReplyError> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    loop {
        let start = offset(&reader);
        match reader.read_event()? {
            Event::Start(e) => {
                reader.read_to_end(e.name())?;
                let end = offset(&reader);
                return Ok(subtree(xml, start, end, 0));
            }
            Event::Empty(_) => {
                let end = offset(&reader);
                return Ok(subtree(xml, start, end, 0));
            }
            Event::Eof => return Err(Malformed::NoRootElement.into()),
            _ => {}
        }
    }
}

fn subtree(xml: &str, start: usize, end: usize, position: usize) -> Subtree<'_> {
    let markup = &xml[start..end];
    Subtree {
        name: element_name(markup),
        position,
        xml: markup,
    }
}

/// Iterates the direct child elements of `parent` in document order.
pub(crate) fn children(parent: Subtree<'_>) -> Children<'_> {
    Children {
        reader: Reader::from_str(parent.xml),
        xml: parent.xml,
        parent: parent.name,
        entered: false,
        finished: false,
        next_position: 0,
    }
}

/// Iterator over the direct children of one element.
///
/// Text, comments and processing instructions between children are skipped.
/// Any reader error ends the iteration after being yielded once.
pub(crate) struct Children<'a> {
    reader: Reader<&'a [u8]>,
    xml: &'a str,
    parent: &'a str,
    entered: bool,
    finished: bool,
    next_position: usize,
}

impl<'a> Children<'a> {
    fn fail(&mut self, err: ReplyError) -> Option<Result<Subtree<'a>, ReplyError>> {
        self.finished = true;
        Some(Err(err))
    }

    fn child(&mut self, start: usize) -> Subtree<'a> {
        let end = offset(&self.reader);
        let child = subtree(self.xml, start, end, self.next_position);
        self.next_position += 1;
        child
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = Result<Subtree<'a>, ReplyError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            let start = offset(&self.reader);
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(e) => return self.fail(e.into()),
            };
            match event {
                // The parent's own start tag.
                Event::Start(_) if !self.entered => self.entered = true,
                Event::Empty(_) if !self.entered => {
                    self.finished = true;
                    return None;
                }
                Event::Start(e) => {
                    if let Err(err) = self.reader.read_to_end(e.name()) {
                        return self.fail(err.into());
                    }
                    return Some(Ok(self.child(start)));
                }
                Event::Empty(_) => return Some(Ok(self.child(start))),
                // Only the parent's end tag can show up at this depth.
                Event::End(_) => {
                    self.finished = true;
                    return None;
                }
                Event::Eof => {
                    let element = self.parent.to_string();
                    return self.fail(Malformed::UnexpectedEof { element }.into());
                }
                _ => {}
            }
        }
    }
}

/// Maps one bounded subtree onto `T` with the declarative `serde` model.
///
/// This is the decoder behind every built-in `ReplyPayload`; a failure is
/// reported as `ReplyError::Decode` carrying `element` and `position`.
pub fn decode_subtree<T: DeserializeOwned>(
    subtree: &str,
    element: &'static str,
    position: usize,
) -> Result<T, ReplyError> {
    quick_xml::de::from_str(subtree).map_err(|source| ReplyError::Decode {
        element,
        position,
        source,
    })
}

#[derive(Deserialize, Default)]
struct Text {
    #[serde(rename = "$text", default)]
    value: String,
}

/// Reads the text content of a leaf element such as `<re-name>node0</re-name>`.
pub(crate) fn text_of(leaf: Subtree<'_>, element: &'static str) -> Result<String, ReplyError> {
    let text: Text = decode_subtree(leaf.xml, element, leaf.position)?;
    Ok(text.value)
}
