// crates/junos-rs-reply/src/redundancy.rs

//! Unifies single- and dual-instance replies into a list of
//! `(instance name, payload)` pairs.

use crate::document::{Instance, InstanceName};
use crate::error::ReplyError;
use crate::logging::{ReplyContext, my_debug, my_trace, my_warn};
use crate::shape::{DUAL_INSTANCE_MARKER, RPC_REPLY, Shape};
use crate::xml::{self, Subtree};
use alloc::vec;
use alloc::vec::Vec;

/// Element wrapping one routing engine's copy of the payload.
pub const ROUTING_ENGINE_ITEM: &str = "multi-routing-engine-item";

/// Element carrying the routing engine's label inside an item.
pub const ROUTING_ENGINE_NAME: &str = "re-name";

/// A feature payload that can be lifted out of a reply.
///
/// `ELEMENT` names the payload's top-level element (e.g. `alarm-information`).
/// A reply that lacks the element decodes to `Self::default()`.
pub trait ReplyPayload: Sized + Default {
    const ELEMENT: &'static str;

    /// Decodes the markup of one `ELEMENT` subtree.
    ///
    /// `position` is the ordinal used in error context.
    fn decode(subtree: &str, position: usize) -> Result<Self, ReplyError>;
}

/// Produces the outer list of a canonical document from a classified reply.
///
/// Output order always matches document order.
pub fn normalize<P: ReplyPayload>(raw: &[u8], shape: Shape) -> Result<Vec<Instance<P>>, ReplyError> {
    let ctx = ReplyContext::new(P::ELEMENT);
    let xml = core::str::from_utf8(raw)?;
    let root = xml::root(xml)?;

    let instances = match shape {
        Shape::SingleInstance => {
            let payload = payload_of::<P>(root, true)?;
            vec![Instance::new(InstanceName::Unnamed, payload)]
        }
        Shape::DualInstance => match results_element(root)? {
            Some(results) => routing_engine_items::<P>(results)?,
            None => {
                my_warn!(
                    ctx,
                    "reply classified as dual-instance but has no <{}> element",
                    DUAL_INSTANCE_MARKER
                );
                Vec::new()
            }
        },
    };

    my_debug!(
        ctx,
        "normalized {:?} reply into {} instance(s)",
        shape,
        instances.len()
    );
    Ok(instances)
}

/// Finds the `multi-routing-engine-results` element, either as the document
/// element or directly below the `rpc-reply` envelope.
fn results_element(root: Subtree<'_>) -> Result<Option<Subtree<'_>>, ReplyError> {
    if root.local_name() == DUAL_INSTANCE_MARKER {
        return Ok(Some(root));
    }
    if root.local_name() != RPC_REPLY {
        return Ok(None);
    }
    find_child(root, DUAL_INSTANCE_MARKER)
}

fn find_child<'a>(parent: Subtree<'a>, name: &str) -> Result<Option<Subtree<'a>>, ReplyError> {
    for child in xml::children(parent) {
        let child = child?;
        if child.local_name() == name {
            return Ok(Some(child));
        }
    }
    Ok(None)
}

/// Decodes the payload held by `container`. When `self_match` is set the
/// container itself may be the payload element (a reply without envelope).
fn payload_of<P: ReplyPayload>(container: Subtree<'_>, self_match: bool) -> Result<P, ReplyError> {
    if self_match && container.local_name() == P::ELEMENT {
        return P::decode(container.as_str(), container.position());
    }
    match find_child(container, P::ELEMENT)? {
        Some(payload) => P::decode(payload.as_str(), payload.position()),
        None => Ok(P::default()),
    }
}

fn routing_engine_items<P: ReplyPayload>(results: Subtree<'_>) -> Result<Vec<Instance<P>>, ReplyError> {
    let mut instances = Vec::new();
    for item in xml::children(results) {
        let item = item?;
        if item.local_name() != ROUTING_ENGINE_ITEM {
            continue;
        }
        let name = match find_child(item, ROUTING_ENGINE_NAME)? {
            Some(leaf) => xml::text_of(leaf, ROUTING_ENGINE_NAME)?,
            None => Default::default(),
        };
        let payload = payload_of::<P>(item, false)?;
        my_trace!(
            ReplyContext::new(P::ELEMENT).with_instance(&name),
            "decoded routing-engine item at position {}",
            item.position()
        );
        instances.push(Instance::new(InstanceName::Named(name), payload));
    }
    Ok(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReplyErrorKind;
    use crate::xml::decode_subtree;
    use alloc::string::String;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Uptime {
        #[serde(rename = "seconds")]
        seconds: u64,
        #[serde(rename = "host")]
        host: String,
    }

    impl ReplyPayload for Uptime {
        const ELEMENT: &'static str = "system-uptime-information";

        fn decode(subtree: &str, position: usize) -> Result<Self, ReplyError> {
            decode_subtree(subtree, Self::ELEMENT, position)
        }
    }

    #[test]
    fn test_single_instance_gets_sentinel() {
        let raw = b"<rpc-reply><system-uptime-information><seconds>42</seconds></system-uptime-information></rpc-reply>";
        let instances = normalize::<Uptime>(raw, Shape::SingleInstance).unwrap();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].name(), &InstanceName::Unnamed);
        assert_eq!(instances[0].payload().seconds, 42);
    }

    #[test]
    fn test_single_instance_without_envelope() {
        let raw = b"<system-uptime-information><host>r1</host></system-uptime-information>";
        let instances = normalize::<Uptime>(raw, Shape::SingleInstance).unwrap();
        assert_eq!(instances[0].payload().host, "r1");
        assert_eq!(instances[0].payload().seconds, 0);
    }

    #[test]
    fn test_single_instance_missing_payload_is_zero_value() {
        let raw = b"<rpc-reply><output>nothing to report</output></rpc-reply>";
        let instances = normalize::<Uptime>(raw, Shape::SingleInstance).unwrap();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].payload(), &Uptime::default());
    }

    #[test]
    fn test_dual_instance_keeps_document_order() {
        let raw = br#"<rpc-reply><multi-routing-engine-results>
            <multi-routing-engine-item><re-name>re1</re-name>
                <system-uptime-information><seconds>7</seconds></system-uptime-information>
            </multi-routing-engine-item>
            <multi-routing-engine-item><re-name>re0</re-name>
                <system-uptime-information><seconds>9</seconds></system-uptime-information>
            </multi-routing-engine-item>
        </multi-routing-engine-results></rpc-reply>"#;
        let instances = normalize::<Uptime>(raw, Shape::DualInstance).unwrap();
        let seen: Vec<(&str, u64)> = instances
            .iter()
            .map(|i| (i.name().as_str(), i.payload().seconds))
            .collect();
        assert_eq!(seen, [("re1", 7), ("re0", 9)]);
    }

    #[test]
    fn test_dual_instance_without_items_is_empty() {
        let raw = b"<rpc-reply><multi-routing-engine-results/></rpc-reply>";
        let instances = normalize::<Uptime>(raw, Shape::DualInstance).unwrap();
        assert!(instances.is_empty());
    }

    #[test]
    fn test_decode_failure_is_terminal() {
        let raw = b"<rpc-reply><system-uptime-information><seconds>soon</seconds></system-uptime-information></rpc-reply>";
        let err = normalize::<Uptime>(raw, Shape::SingleInstance).unwrap_err();
        assert_eq!(err.kind(), ReplyErrorKind::Decode);
    }

    #[test]
    fn test_bad_payload_reports_its_own_position() {
        let raw = br#"<rpc-reply><multi-routing-engine-results>
            <multi-routing-engine-item><re-name>re0</re-name>
                <system-uptime-information><seconds>1</seconds></system-uptime-information>
            </multi-routing-engine-item>
            <multi-routing-engine-item><re-name>re1</re-name>
                <system-uptime-information><seconds>later</seconds></system-uptime-information>
            </multi-routing-engine-item>
        </multi-routing-engine-results></rpc-reply>"#;
        let err = normalize::<Uptime>(raw, Shape::DualInstance).unwrap_err();
        assert!(
            matches!(
                err,
                ReplyError::Decode {
                    element: "system-uptime-information",
                    position: 1,
                    ..
                }
            ),
            "unexpected error: {:?}",
            err
        );
    }

    #[test]
    fn test_dual_instance_after_byte_order_mark() {
        let raw = b"\xEF\xBB\xBF<rpc-reply><multi-routing-engine-results><multi-routing-engine-item><re-name>node0</re-name><system-uptime-information><seconds>3</seconds></system-uptime-information></multi-routing-engine-item></multi-routing-engine-results></rpc-reply>";
        let instances = normalize::<Uptime>(raw, Shape::DualInstance).unwrap();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].name().as_str(), "node0");
        assert_eq!(instances[0].payload().seconds, 3);
    }

    #[test]
    fn test_truncated_reply_is_malformed() {
        let raw = b"<rpc-reply><system-uptime-information><seconds>4";
        let err = normalize::<Uptime>(raw, Shape::SingleInstance).unwrap_err();
        assert_eq!(err.kind(), ReplyErrorKind::MalformedDocument);
    }
}
