// crates/junos-rs-reply/src/error.rs

use alloc::string::String;
use core::fmt;
use core::str::Utf8Error;
use quick_xml::Error as XmlError;
use quick_xml::errors::serialize::DeError;

/// Errors that can occur while normalizing a device reply.
///
/// Every variant is terminal for the current poll of the current feature.
#[derive(Debug)]
pub enum ReplyError {
    /// The reply could not be read as an XML document at all.
    MalformedDocument(Malformed),

    /// A bounded subtree (an instance payload, a primary record or an
    /// attachment record) could not be mapped onto its model.
    Decode {
        element: &'static str,
        position: usize,
        source: DeError,
    },

    /// An attachment record appeared before any primary record.
    OutOfOrderAttachment {
        element: &'static str,
        position: usize,
    },
}

/// The syntax-level reason behind a `ReplyError::MalformedDocument`.
#[derive(Debug)]
pub enum Malformed {
    /// An error from the underlying `quick-xml` reader.
    Syntax(XmlError),

    /// The reply bytes are not valid UTF-8.
    Encoding(Utf8Error),

    /// The document ended while `element` was still open.
    UnexpectedEof { element: String },

    /// The reply contains no element at all.
    NoRootElement,
}

/// Coarse error category, for callers that only branch on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyErrorKind {
    MalformedDocument,
    Decode,
    OutOfOrderAttachment,
}

impl ReplyError {
    pub fn kind(&self) -> ReplyErrorKind {
        match self {
            ReplyError::MalformedDocument(_) => ReplyErrorKind::MalformedDocument,
            ReplyError::Decode { .. } => ReplyErrorKind::Decode,
            ReplyError::OutOfOrderAttachment { .. } => ReplyErrorKind::OutOfOrderAttachment,
        }
    }

    /// Whether the current poll of the feature must be abandoned.
    pub fn is_terminal(&self) -> bool {
        true
    }
}

impl From<XmlError> for ReplyError {
    fn from(e: XmlError) -> Self {
        ReplyError::MalformedDocument(Malformed::Syntax(e))
    }
}

impl From<Utf8Error> for ReplyError {
    fn from(e: Utf8Error) -> Self {
        ReplyError::MalformedDocument(Malformed::Encoding(e))
    }
}

impl From<Malformed> for ReplyError {
    fn from(e: Malformed) -> Self {
        ReplyError::MalformedDocument(e)
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::Syntax(e) => write!(f, "XML syntax error: {}", e),
            Malformed::Encoding(e) => write!(f, "reply is not valid UTF-8: {}", e),
            Malformed::UnexpectedEof { element } => {
                write!(f, "unexpected end of document inside <{}>", element)
            }
            Malformed::NoRootElement => write!(f, "reply contains no XML element"),
        }
    }
}

impl fmt::Display for ReplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyError::MalformedDocument(e) => write!(f, "Malformed document: {}", e),
            ReplyError::Decode {
                element,
                position,
                source,
            } => write!(
                f,
                "Failed to decode <{}> at position {}: {}",
                element, position, source
            ),
            ReplyError::OutOfOrderAttachment { element, position } => write!(
                f,
                "Attachment <{}> at position {} appears before any primary record",
                element, position
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplyError::MalformedDocument(Malformed::Syntax(e)) => Some(e),
            ReplyError::MalformedDocument(Malformed::Encoding(e)) => Some(e),
            ReplyError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Malformed, ReplyError, ReplyErrorKind};
    use alloc::string::ToString;

    #[test]
    fn test_from_xml_error() {
        let xml_err = quick_xml::Error::Syntax(quick_xml::errors::SyntaxError::UnclosedTag);
        let err: ReplyError = xml_err.into();
        assert!(matches!(
            err,
            ReplyError::MalformedDocument(Malformed::Syntax(_))
        ));
        assert_eq!(err.kind(), ReplyErrorKind::MalformedDocument);
    }

    #[test]
    fn test_from_utf8_error() {
        let bytes = [0x3c, 0xff, 0x3e];
        let utf8_err = core::str::from_utf8(&bytes).unwrap_err();
        let err: ReplyError = utf8_err.into();
        assert!(matches!(
            err,
            ReplyError::MalformedDocument(Malformed::Encoding(_))
        ));
    }

    #[test]
    fn test_decode_error_keeps_context() {
        let de_err = quick_xml::de::from_str::<u64>("<n>abc</n>").unwrap_err();
        let err = ReplyError::Decode {
            element: "outbound-secure-channel",
            position: 3,
            source: de_err,
        };
        assert_eq!(err.kind(), ReplyErrorKind::Decode);
        let msg = err.to_string();
        assert!(msg.contains("outbound-secure-channel"));
        assert!(msg.contains("position 3"));
    }

    #[test]
    fn test_out_of_order_display() {
        let err = ReplyError::OutOfOrderAttachment {
            element: "inbound-secure-channel",
            position: 0,
        };
        assert!(err.is_terminal());
        assert_eq!(
            err.to_string(),
            "Attachment <inbound-secure-channel> at position 0 appears before any primary record"
        );
    }
}
