//! Declarative field tables for the replies this crate understands.
//!
//! Each struct binds device elements (and `@attributes`) to fields by explicit
//! `serde` renames. Every struct is `#[serde(default)]`: elements missing from
//! a reply decode to the field's zero value, and elements the model does not
//! name are ignored.

#![allow(clippy::pedantic)] // Junos element naming differs from Rust

pub mod alarm;
pub mod common;
pub mod environment;
pub mod macsec;
pub mod power;
pub mod route_engine;

pub use alarm::{AlarmDetail, AlarmInformation, AlarmSummary};
pub use common::{JunosTime, Temperature};
pub use environment::{EnvironmentInformation, EnvironmentItem};
pub use macsec::{
    InboundSecureChannel, MacsecConnection, MacsecConnections, MacsecGrammar, MacsecInterface,
    OutboundSecureChannel, SecureAssociation,
};
pub use power::{
    DcOutputDetail, PemCapacityDetail, PowerUsageInformation, PowerUsageItem, PowerUsageSystem,
    PowerZone,
};
pub use route_engine::{RouteEngine, RouteEngineInformation};
