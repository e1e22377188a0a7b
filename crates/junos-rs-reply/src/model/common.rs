// crates/junos-rs-reply/src/model/common.rs

//! Contains helper structs shared by several replies.

use alloc::string::String;
use core::fmt::Display;
use core::str::FromStr;
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Parses a numeric leaf or attribute, mapping empty or blank text
/// (`<offset/>`, `<dc-load> </dc-load>`) to the zero value.
pub(crate) fn zero_if_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let text = String::deserialize(deserializer)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(T::default());
    }
    text.parse().map_err(de::Error::custom)
}

/// Represents a timestamp such as
/// `<alarm-time junos:seconds="1597837335">2020-08-19 13:42:15 UTC</alarm-time>`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct JunosTime {
    /// Seconds since the Unix epoch (`@junos:seconds`).
    #[serde(rename = "@junos:seconds", deserialize_with = "zero_if_empty")]
    pub seconds: u64,
    /// The human-readable rendering.
    #[serde(rename = "$text")]
    pub text: String,
}

/// Represents `<temperature junos:celsius="38">38 degrees C / 100 degrees F</temperature>`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Temperature {
    #[serde(rename = "@junos:celsius", deserialize_with = "zero_if_empty")]
    pub celsius: i64,
    #[serde(rename = "$text")]
    pub text: String,
}
