// crates/junos-rs-reply/src/lib.rs

#![cfg_attr(not(feature = "std"), no_std)]
#![doc = "Normalizes Junos RPC replies into one canonical document."]
#![doc = ""]
#![doc = "A chassis-level reply arrives in one of two shapes: directly below"]
#![doc = "`<rpc-reply>`, or once per routing engine inside"]
#![doc = "`<multi-routing-engine-results>`. Some replies also list dependent records"]
#![doc = "as siblings of their owner instead of as children. This `no_std + alloc`"]
#![doc = "library hides both quirks:"]
#![doc = "- `parse_reply`: classify, split per routing engine and decode any payload."]
#![doc = "- `parse_alarms`, `parse_environment`, `parse_power_usage`,"]
#![doc = "  `parse_route_engines`, `parse_macsec_connections`: ready-made features."]
#![doc = "- `sibling::decode_groups`: reassemble sibling-ordered records."]

extern crate alloc;

// --- Crate Modules ---

mod config;
mod document;
mod error;
mod logging;
mod parser;
mod redundancy;
mod xml;

pub mod model;
pub mod poll;
pub mod shape;
pub mod sibling;

// --- Public API Re-exports ---

pub use config::{Detection, NormalizerConfig};
pub use document::{CanonicalDocument, Instance, InstanceName, NO_INSTANCE};
pub use error::{Malformed, ReplyError, ReplyErrorKind};
pub use logging::{LogMetadata, ReplyContext};
pub use parser::{
    parse_alarms, parse_environment, parse_macsec_connections, parse_power_usage, parse_reply,
    parse_route_engines,
};
pub use redundancy::{ROUTING_ENGINE_ITEM, ROUTING_ENGINE_NAME, ReplyPayload, normalize};
pub use shape::{Shape, detect_shape};
pub use xml::{Subtree, decode_subtree};
