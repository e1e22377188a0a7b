// crates/junos-rs-reply/src/model/power.rs

//! Contains model structs for `<power-usage-information>` (`show chassis power`).

use super::common::zero_if_empty;
use crate::error::ReplyError;
use crate::redundancy::ReplyPayload;
use crate::xml::decode_subtree;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct PowerUsageInformation {
    /// One entry per power supply module.
    #[serde(rename = "power-usage-item")]
    pub items: Vec<PowerUsageItem>,

    #[serde(rename = "power-usage-system")]
    pub system: PowerUsageSystem,
}

/// A `<power-usage-item>` (one PSM/PEM).
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct PowerUsageItem {
    /// e.g. `PSM 0`.
    #[serde(rename = "name")]
    pub name: String,

    /// `Online`, `Present`, `Empty`.
    #[serde(rename = "state")]
    pub state: String,

    #[serde(rename = "pem-capacity-detail")]
    pub capacity: PemCapacityDetail,

    #[serde(rename = "dc-output-detail2")]
    pub dc_output: DcOutputDetail,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PemCapacityDetail {
    /// Watts.
    #[serde(rename = "capacity-actual", deserialize_with = "zero_if_empty")]
    pub actual: u64,
    /// Watts.
    #[serde(rename = "capacity-max", deserialize_with = "zero_if_empty")]
    pub max: u64,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct DcOutputDetail {
    /// Watts.
    #[serde(rename = "dc-power", deserialize_with = "zero_if_empty")]
    pub power: f64,
    #[serde(rename = "zone", deserialize_with = "zero_if_empty")]
    pub zone: u64,
    /// Amperes.
    #[serde(rename = "dc-current", deserialize_with = "zero_if_empty")]
    pub current: f64,
    /// Volts.
    #[serde(rename = "dc-voltage", deserialize_with = "zero_if_empty")]
    pub voltage: f64,
    /// Percent.
    #[serde(rename = "dc-load", deserialize_with = "zero_if_empty")]
    pub load: f64,
}

/// The `<power-usage-system>` totals.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PowerUsageSystem {
    #[serde(rename = "power-usage-zone-information")]
    pub zones: Vec<PowerZone>,

    #[serde(rename = "capacity-sys-actual", deserialize_with = "zero_if_empty")]
    pub capacity_actual: u64,

    #[serde(rename = "capacity-sys-max", deserialize_with = "zero_if_empty")]
    pub capacity_max: u64,

    #[serde(rename = "capacity-sys-remaining", deserialize_with = "zero_if_empty")]
    pub capacity_remaining: u64,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PowerZone {
    #[serde(rename = "zone", deserialize_with = "zero_if_empty")]
    pub zone: u64,
    #[serde(rename = "capacity-actual", deserialize_with = "zero_if_empty")]
    pub capacity_actual: u64,
    #[serde(rename = "capacity-max", deserialize_with = "zero_if_empty")]
    pub capacity_max: u64,
    #[serde(rename = "capacity-allocated", deserialize_with = "zero_if_empty")]
    pub capacity_allocated: u64,
    #[serde(rename = "capacity-remaining", deserialize_with = "zero_if_empty")]
    pub capacity_remaining: u64,
    #[serde(rename = "capacity-actual-usage", deserialize_with = "zero_if_empty")]
    pub capacity_actual_usage: u64,
}

impl ReplyPayload for PowerUsageInformation {
    const ELEMENT: &'static str = "power-usage-information";

    fn decode(subtree: &str, position: usize) -> Result<Self, ReplyError> {
        decode_subtree(subtree, Self::ELEMENT, position)
    }
}
