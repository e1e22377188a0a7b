// crates/junos-rs-reply/src/model/alarm.rs

//! Contains model structs for `<alarm-information>`
//! (`show system alarms`, `show chassis alarms`).

use super::common::{JunosTime, zero_if_empty};
use crate::error::ReplyError;
use crate::redundancy::ReplyPayload;
use crate::xml::decode_subtree;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// The `<alarm-information>` block.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AlarmInformation {
    #[serde(rename = "alarm-summary")]
    pub summary: AlarmSummary,

    /// Every `<alarm-detail>`, in document order. Repeated descriptions are
    /// kept; deduplicating them is up to the consumer.
    #[serde(rename = "alarm-detail")]
    pub details: Vec<AlarmDetail>,
}

/// The `<alarm-summary>` block.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AlarmSummary {
    #[serde(rename = "active-alarm-count", deserialize_with = "zero_if_empty")]
    pub active_alarm_count: u64,
}

/// One `<alarm-detail>` entry.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AlarmDetail {
    #[serde(rename = "alarm-time")]
    pub time: JunosTime,

    /// `Major` or `Minor`.
    #[serde(rename = "alarm-class")]
    pub class: String,

    #[serde(rename = "alarm-description")]
    pub description: String,

    #[serde(rename = "alarm-short-description")]
    pub short_description: String,

    #[serde(rename = "alarm-type")]
    pub alarm_type: String,
}

impl ReplyPayload for AlarmInformation {
    const ELEMENT: &'static str = "alarm-information";

    fn decode(subtree: &str, position: usize) -> Result<Self, ReplyError> {
        decode_subtree(subtree, Self::ELEMENT, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_information_fields() {
        let xml = r#"<alarm-information xmlns="http://xml.juniper.net/junos/20.4R3/junos-alarm">
            <alarm-summary>
                <active-alarm-count>1</active-alarm-count>
            </alarm-summary>
            <alarm-detail>
                <alarm-time junos:seconds="1597837335">2020-08-19 13:42:15 UTC</alarm-time>
                <alarm-class>Minor</alarm-class>
                <alarm-description>Rescue configuration is not set</alarm-description>
                <alarm-short-description>no-rescue</alarm-short-description>
                <alarm-type>Configuration</alarm-type>
            </alarm-detail>
        </alarm-information>"#;
        let info = AlarmInformation::decode(xml, 0).unwrap();
        assert_eq!(info.summary.active_alarm_count, 1);
        assert_eq!(info.details.len(), 1);
        let detail = &info.details[0];
        assert_eq!(detail.time.seconds, 1_597_837_335);
        assert_eq!(detail.class, "Minor");
        assert_eq!(detail.short_description, "no-rescue");
        assert_eq!(detail.alarm_type, "Configuration");
    }

    #[test]
    fn test_no_active_alarms() {
        let xml = r#"<alarm-information>
            <alarm-summary>
                <no-active-alarms/>
            </alarm-summary>
        </alarm-information>"#;
        let info = AlarmInformation::decode(xml, 0).unwrap();
        assert_eq!(info, AlarmInformation::default());
    }

    #[test]
    fn test_details_around_summary_are_collected() {
        let xml = r#"<alarm-information>
            <alarm-detail><alarm-class>Major</alarm-class></alarm-detail>
            <alarm-summary><active-alarm-count>2</active-alarm-count></alarm-summary>
            <alarm-detail><alarm-class>Minor</alarm-class></alarm-detail>
        </alarm-information>"#;
        let info = AlarmInformation::decode(xml, 0).unwrap();
        assert_eq!(info.summary.active_alarm_count, 2);
        let classes: Vec<&str> = info.details.iter().map(|d| d.class.as_str()).collect();
        assert_eq!(classes, ["Major", "Minor"]);
    }
}
