// crates/junos-rs-reply/src/model/route_engine.rs

//! Contains model structs for `<route-engine-information>` (`show chassis routing-engine`).

use super::common::{JunosTime, Temperature, zero_if_empty};
use crate::error::ReplyError;
use crate::redundancy::ReplyPayload;
use crate::xml::decode_subtree;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct RouteEngineInformation {
    #[serde(rename = "route-engine")]
    pub route_engines: Vec<RouteEngine>,
}

/// One `<route-engine>`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct RouteEngine {
    #[serde(rename = "slot", deserialize_with = "zero_if_empty")]
    pub slot: u64,
    /// `master`, `backup`, `disabled`.
    #[serde(rename = "mastership-state")]
    pub mastership_state: String,
    #[serde(rename = "status")]
    pub status: String,
    #[serde(rename = "temperature")]
    pub temperature: Temperature,
    #[serde(rename = "cpu-temperature")]
    pub cpu_temperature: Temperature,
    /// Percent.
    #[serde(rename = "memory-buffer-utilization", deserialize_with = "zero_if_empty")]
    pub memory_buffer_utilization: u64,
    #[serde(rename = "cpu-user", deserialize_with = "zero_if_empty")]
    pub cpu_user: u64,
    #[serde(rename = "cpu-background", deserialize_with = "zero_if_empty")]
    pub cpu_background: u64,
    #[serde(rename = "cpu-system", deserialize_with = "zero_if_empty")]
    pub cpu_system: u64,
    #[serde(rename = "cpu-interrupt", deserialize_with = "zero_if_empty")]
    pub cpu_interrupt: u64,
    #[serde(rename = "cpu-idle", deserialize_with = "zero_if_empty")]
    pub cpu_idle: u64,
    #[serde(rename = "load-average-one", deserialize_with = "zero_if_empty")]
    pub load_average_one: f64,
    #[serde(rename = "load-average-five", deserialize_with = "zero_if_empty")]
    pub load_average_five: f64,
    #[serde(rename = "load-average-fifteen", deserialize_with = "zero_if_empty")]
    pub load_average_fifteen: f64,
    #[serde(rename = "up-time")]
    pub up_time: JunosTime,
}

impl ReplyPayload for RouteEngineInformation {
    const ELEMENT: &'static str = "route-engine-information";

    fn decode(subtree: &str, position: usize) -> Result<Self, ReplyError> {
        decode_subtree(subtree, Self::ELEMENT, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_engine_fields() {
        let xml = r#"<route-engine-information>
            <route-engine>
                <slot>0</slot>
                <mastership-state>master</mastership-state>
                <status>OK</status>
                <temperature junos:celsius="36">36 degrees C / 96 degrees F</temperature>
                <cpu-temperature junos:celsius="41">41 degrees C / 105 degrees F</cpu-temperature>
                <memory-dram-size>16384 MB</memory-dram-size>
                <memory-buffer-utilization>23</memory-buffer-utilization>
                <cpu-user>3</cpu-user>
                <cpu-background>0</cpu-background>
                <cpu-system>2</cpu-system>
                <cpu-interrupt>1</cpu-interrupt>
                <cpu-idle>94</cpu-idle>
                <up-time junos:seconds="8143521">94 days, 6 hours, 5 minutes, 21 seconds</up-time>
                <load-average-one>0.42</load-average-one>
                <load-average-five>0.38</load-average-five>
                <load-average-fifteen>0.35</load-average-fifteen>
            </route-engine>
        </route-engine-information>"#;
        let info = RouteEngineInformation::decode(xml, 0).unwrap();
        let re = &info.route_engines[0];
        assert_eq!(re.mastership_state, "master");
        assert_eq!(re.cpu_temperature.celsius, 41);
        assert_eq!(re.cpu_idle, 94);
        assert_eq!(re.load_average_five, 0.38);
        assert_eq!(re.up_time.seconds, 8_143_521);
    }
}
