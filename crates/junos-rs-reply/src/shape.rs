// crates/junos-rs-reply/src/shape.rs

//! Classifies a raw reply as single- or dual-instance shaped.
//!
//! A chassis with redundant routing engines (or an SRX cluster) answers a
//! chassis-level command once per routing engine, wrapping every copy in
//! `<multi-routing-engine-item>` below a `<multi-routing-engine-results>`
//! element. A standalone chassis returns the payload directly below
//! `<rpc-reply>`.

use crate::config::Detection;
use crate::xml::local_name;
use quick_xml::Reader;
use quick_xml::events::Event;

/// Wrapper element that marks a dual-instance reply.
pub const DUAL_INSTANCE_MARKER: &str = "multi-routing-engine-results";

/// Envelope element around every RPC reply.
pub const RPC_REPLY: &str = "rpc-reply";

/// The two reply shapes a chassis-level command can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    SingleInstance,
    DualInstance,
}

/// Classifies `raw`. Never fails: anything that does not look dual-instance
/// is treated as single-instance, and syntax errors are left for the
/// normalizer to report.
pub fn detect_shape(raw: &[u8], detection: Detection) -> Shape {
    let dual = match detection {
        Detection::Marker => contains_marker(raw),
        Detection::Structural => top_level_is_marker(raw),
    };
    if dual {
        Shape::DualInstance
    } else {
        Shape::SingleInstance
    }
}

fn contains_marker(raw: &[u8]) -> bool {
    let marker = DUAL_INSTANCE_MARKER.as_bytes();
    raw.windows(marker.len()).any(|window| window == marker)
}

/// Peeks at the first element below the envelope, or at the document element
/// when the reply has no `rpc-reply` envelope.
fn top_level_is_marker(raw: &[u8]) -> bool {
    let Ok(xml) = core::str::from_utf8(raw) else {
        return false;
    };
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    let mut in_envelope = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let qname = e.name();
                let Ok(name) = core::str::from_utf8(qname.as_ref()) else {
                    return false;
                };
                let name = local_name(name);
                if !in_envelope && name == RPC_REPLY {
                    in_envelope = true;
                    continue;
                }
                return name == DUAL_INSTANCE_MARKER;
            }
            Ok(Event::End(_)) | Ok(Event::Eof) | Err(_) => return false,
            Ok(_) => {}
        }
    }
}
