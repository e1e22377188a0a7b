// crates/junos-rs-reply/src/parser.rs

use crate::config::NormalizerConfig;
use crate::document::CanonicalDocument;
use crate::error::ReplyError;
use crate::logging::{ReplyContext, my_debug};
use crate::model::{
    AlarmInformation, EnvironmentInformation, MacsecConnections, PowerUsageInformation,
    RouteEngineInformation,
};
use crate::redundancy::{self, ReplyPayload};
use crate::shape;

/// Normalizes one raw device reply into a canonical document.
///
/// The reply is classified as single- or dual-instance shaped, split into one
/// payload per routing engine, and each payload is decoded with `P::decode`.
///
/// # Arguments
/// * `raw` - The complete reply to one command, as returned by the transport.
/// * `config` - Selects how the reply shape is detected.
///
/// # Errors
/// Returns a `ReplyError` if the reply is not well-formed XML, a payload does
/// not fit its model, or a sibling-ordered payload is out of order.
pub fn parse_reply<P: ReplyPayload>(
    raw: &[u8],
    config: &NormalizerConfig,
) -> Result<CanonicalDocument<P>, ReplyError> {
    let shape = shape::detect_shape(raw, config.detection);
    my_debug!(
        ReplyContext::new(P::ELEMENT),
        "{} byte reply classified as {:?}",
        raw.len(),
        shape
    );
    let instances = redundancy::normalize::<P>(raw, shape)?;
    Ok(CanonicalDocument::compose(instances))
}

/// Parses a `show system alarms` or `show chassis alarms` reply.
pub fn parse_alarms(raw: &[u8]) -> Result<CanonicalDocument<AlarmInformation>, ReplyError> {
    parse_reply(raw, &NormalizerConfig::default())
}

/// Parses a `show chassis environment` reply.
pub fn parse_environment(
    raw: &[u8],
) -> Result<CanonicalDocument<EnvironmentInformation>, ReplyError> {
    parse_reply(raw, &NormalizerConfig::default())
}

/// Parses a `show chassis power` reply.
pub fn parse_power_usage(
    raw: &[u8],
) -> Result<CanonicalDocument<PowerUsageInformation>, ReplyError> {
    parse_reply(raw, &NormalizerConfig::default())
}

/// Parses a `show chassis routing-engine` reply.
pub fn parse_route_engines(
    raw: &[u8],
) -> Result<CanonicalDocument<RouteEngineInformation>, ReplyError> {
    parse_reply(raw, &NormalizerConfig::default())
}

/// Parses a `show security macsec connections` reply, reassembling each
/// interface with its secure channels.
pub fn parse_macsec_connections(
    raw: &[u8],
) -> Result<CanonicalDocument<MacsecConnections>, ReplyError> {
    parse_reply(raw, &NormalizerConfig::default())
}
