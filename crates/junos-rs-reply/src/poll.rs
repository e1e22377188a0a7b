// crates/junos-rs-reply/src/poll.rs

//! Glue between a command transport and the normalizer.
//!
//! Transports (SSH, NETCONF) live outside this crate and plug in through
//! [`CommandExecutor`]. A failed poll only affects the feature being polled.

use crate::config::NormalizerConfig;
use crate::document::CanonicalDocument;
use crate::error::ReplyError;
use crate::logging::{ReplyContext, my_debug, my_error};
use crate::parser::parse_reply;
use crate::redundancy::ReplyPayload;
use alloc::vec::Vec;
use core::fmt;

/// Executes one operational command on a device and returns the raw reply.
pub trait CommandExecutor {
    type Error: fmt::Debug + fmt::Display;

    fn execute(&mut self, command: &str) -> Result<Vec<u8>, Self::Error>;
}

/// The chassis-level commands whose replies this crate normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    SystemAlarms,
    ChassisAlarms,
    Environment,
    Power,
    RoutingEngine,
    MacsecConnections,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::SystemAlarms,
        Feature::ChassisAlarms,
        Feature::Environment,
        Feature::Power,
        Feature::RoutingEngine,
        Feature::MacsecConnections,
    ];

    /// The CLI command issued for this feature.
    pub fn command(&self) -> &'static str {
        match self {
            Feature::SystemAlarms => "show system alarms",
            Feature::ChassisAlarms => "show chassis alarms",
            Feature::Environment => "show chassis environment",
            Feature::Power => "show chassis power",
            Feature::RoutingEngine => "show chassis routing-engine",
            Feature::MacsecConnections => "show security macsec connections",
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::SystemAlarms => "system-alarms",
            Feature::ChassisAlarms => "chassis-alarms",
            Feature::Environment => "environment",
            Feature::Power => "power",
            Feature::RoutingEngine => "routing-engine",
            Feature::MacsecConnections => "macsec",
        }
    }

    /// The payload element the reply to `command()` carries.
    pub fn element(&self) -> &'static str {
        match self {
            Feature::SystemAlarms | Feature::ChassisAlarms => "alarm-information",
            Feature::Environment => "environment-information",
            Feature::Power => "power-usage-information",
            Feature::RoutingEngine => "route-engine-information",
            Feature::MacsecConnections => "macsec-connection-information",
        }
    }
}

/// Why one feature's poll produced no document.
#[derive(Debug)]
pub enum PollError<E> {
    /// The transport could not execute the command.
    Transport(E),
    /// The reply could not be normalized.
    Reply(ReplyError),
}

impl<E> From<ReplyError> for PollError<E> {
    fn from(e: ReplyError) -> Self {
        PollError::Reply(e)
    }
}

impl<E: fmt::Display> fmt::Display for PollError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollError::Transport(e) => write!(f, "Transport error: {}", e),
            PollError::Reply(e) => write!(f, "Reply error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug + fmt::Display> std::error::Error for PollError<E> {}

/// Issues `feature`'s command and normalizes the reply.
pub fn poll_feature<P, E>(
    executor: &mut E,
    feature: Feature,
    config: &NormalizerConfig,
) -> Result<CanonicalDocument<P>, PollError<E::Error>>
where
    P: ReplyPayload,
    E: CommandExecutor,
{
    debug_assert_eq!(feature.element(), P::ELEMENT);

    let raw = executor
        .execute(feature.command())
        .map_err(PollError::Transport)?;
    let doc = parse_reply::<P>(&raw, config)?;
    my_debug!(
        ReplyContext::new(P::ELEMENT),
        "{} poll produced {} instance(s)",
        feature.name(),
        doc.len()
    );
    Ok(doc)
}

/// Like [`poll_feature`], but logs a failure and returns `None` so the caller
/// can move on to the next feature.
pub fn poll_or_skip<P, E>(
    executor: &mut E,
    feature: Feature,
    config: &NormalizerConfig,
) -> Option<CanonicalDocument<P>>
where
    P: ReplyPayload,
    E: CommandExecutor,
{
    match poll_feature::<P, E>(executor, feature, config) {
        Ok(doc) => Some(doc),
        Err(e) => {
            my_error!(
                ReplyContext::new(P::ELEMENT),
                "skipping {} for this cycle: {}",
                feature.name(),
                e
            );
            None
        }
    }
}
