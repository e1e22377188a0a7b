// crates/junos-rs-reply/src/model/environment.rs

//! Contains model structs for `<environment-information>` (`show chassis environment`).

use super::common::Temperature;
use crate::error::ReplyError;
use crate::redundancy::ReplyPayload;
use crate::xml::decode_subtree;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EnvironmentInformation {
    #[serde(rename = "environment-item")]
    pub items: Vec<EnvironmentItem>,
}

/// One sensor or component, e.g. `Routing Engine 0` of class `Temp`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EnvironmentItem {
    #[serde(rename = "name")]
    pub name: String,

    /// `Temp`, `Fans`, `Power`, ...
    #[serde(rename = "class")]
    pub class: String,

    /// `OK`, `Absent`, `Check`, `Failed`.
    #[serde(rename = "status")]
    pub status: String,

    #[serde(rename = "temperature")]
    pub temperature: Option<Temperature>,

    #[serde(rename = "comment")]
    pub comment: String,
}

impl ReplyPayload for EnvironmentInformation {
    const ELEMENT: &'static str = "environment-information";

    fn decode(subtree: &str, position: usize) -> Result<Self, ReplyError> {
        decode_subtree(subtree, Self::ELEMENT, position)
    }
}
