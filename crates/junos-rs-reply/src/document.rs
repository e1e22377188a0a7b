// crates/junos-rs-reply/src/document.rs

//! The canonical, redundancy-normalized document handed to metric extraction.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::slice;

/// Instance name used when a reply carries no routing-engine wrapper.
pub const NO_INSTANCE: &str = "N/A";

/// Identifies the routing engine (or cluster node) that produced a payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InstanceName {
    /// Label taken from `<re-name>`, e.g. `re0` or `node1`.
    Named(String),
    /// The reply had no redundancy wrapper. Renders as `N/A`.
    Unnamed,
}

impl InstanceName {
    pub fn as_str(&self) -> &str {
        match self {
            InstanceName::Named(name) => name,
            InstanceName::Unnamed => NO_INSTANCE,
        }
    }

    pub fn is_unnamed(&self) -> bool {
        matches!(self, InstanceName::Unnamed)
    }
}

impl fmt::Display for InstanceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for InstanceName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for InstanceName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// One routing engine's copy of a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance<P> {
    name: InstanceName,
    payload: P,
}

impl<P> Instance<P> {
    pub(crate) fn new(name: InstanceName, payload: P) -> Self {
        Self { name, payload }
    }

    pub fn name(&self) -> &InstanceName {
        &self.name
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_parts(self) -> (InstanceName, P) {
        (self.name, self.payload)
    }
}

/// A fully normalized reply: one entry per routing engine, in document order.
///
/// Single-instance replies always produce exactly one entry named `N/A`.
/// Dual-instance replies produce one entry per `<multi-routing-engine-item>`,
/// which may be none at all.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalDocument<P> {
    instances: Vec<Instance<P>>,
}

impl<P> CanonicalDocument<P> {
    pub(crate) fn compose(instances: Vec<Instance<P>>) -> Self {
        Self { instances }
    }

    pub fn instances(&self) -> &[Instance<P>] {
        &self.instances
    }

    pub fn iter(&self) -> slice::Iter<'_, Instance<P>> {
        self.instances.iter()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Finds the payload reported by the named routing engine.
    pub fn get(&self, name: &str) -> Option<&P> {
        self.instances
            .iter()
            .find(|i| i.name == *name)
            .map(|i| &i.payload)
    }

    pub fn into_instances(self) -> Vec<Instance<P>> {
        self.instances
    }
}

impl<'a, P> IntoIterator for &'a CanonicalDocument<P> {
    type Item = &'a Instance<P>;
    type IntoIter = slice::Iter<'a, Instance<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}
