// crates/junos-rs-reply/src/model/macsec.rs

//! Contains model structs for `<macsec-connection-information>`
//! (`show security macsec connections`).
//!
//! The reply lists every interface as a `<macsec-interface-common-information>`
//! element, followed (as siblings, not children) by its optional
//! `<outbound-secure-channel>` and `<inbound-secure-channel>`:
//!
//! ```xml
//! <macsec-connection-information>
//!     <macsec-interface-common-information>...et-0/0/0...</macsec-interface-common-information>
//!     <outbound-secure-channel>...</outbound-secure-channel>
//!     <inbound-secure-channel>...</inbound-secure-channel>
//!     <macsec-interface-common-information>...et-0/0/1...</macsec-interface-common-information>
//! </macsec-connection-information>
//! ```

use super::common::{JunosTime, zero_if_empty};
use crate::error::ReplyError;
use crate::redundancy::ReplyPayload;
use crate::sibling::{self, Group, SiblingGrammar};
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// `<macsec-interface-common-information>`: the primary record.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MacsecInterface {
    #[serde(rename = "interface-name")]
    pub interface_name: String,

    #[serde(rename = "connectivity-association-name")]
    pub connectivity_association_name: String,

    /// e.g. `GCM-AES-XPN-256`.
    #[serde(rename = "cipher-suite")]
    pub cipher_suite: String,

    /// `on` / `off`.
    #[serde(rename = "encryption")]
    pub encryption: String,

    #[serde(rename = "offset", deserialize_with = "zero_if_empty")]
    pub offset: u64,

    /// `yes` / `no`.
    #[serde(rename = "include-sci")]
    pub include_sci: String,

    /// `on` / `off`.
    #[serde(rename = "replay-protect")]
    pub replay_protect: String,

    #[serde(rename = "replay-window", deserialize_with = "zero_if_empty")]
    pub replay_window: u64,
}

/// `<outbound-secure-channel>`: the transmit side of an interface.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutboundSecureChannel {
    #[serde(rename = "sci")]
    pub sci: String,

    #[serde(rename = "outgoing-packet-number", deserialize_with = "zero_if_empty")]
    pub outgoing_packet_number: u64,

    #[serde(rename = "outbound-secure-association")]
    pub association: Option<SecureAssociation>,
}

/// `<inbound-secure-channel>`: the receive side of an interface.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct InboundSecureChannel {
    #[serde(rename = "sci")]
    pub sci: String,

    #[serde(rename = "inbound-secure-association")]
    pub association: Option<SecureAssociation>,
}

/// `<outbound-secure-association>` / `<inbound-secure-association>`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SecureAssociation {
    #[serde(rename = "association-number", deserialize_with = "zero_if_empty")]
    pub association_number: u64,

    /// `inuse`, `not-inuse`.
    #[serde(rename = "association-number-status")]
    pub status: String,

    #[serde(rename = "create-time")]
    pub create_time: JunosTime,
}

/// Sibling grammar of `<macsec-connection-information>`.
pub struct MacsecGrammar;

impl SiblingGrammar for MacsecGrammar {
    type Primary = MacsecInterface;
    type First = OutboundSecureChannel;
    type Second = InboundSecureChannel;

    const PRIMARY: &'static str = "macsec-interface-common-information";
    const FIRST: &'static str = "outbound-secure-channel";
    const SECOND: &'static str = "inbound-secure-channel";
}

/// One interface with its secure channels, as reassembled from the reply.
pub type MacsecConnection = Group<MacsecInterface, OutboundSecureChannel, InboundSecureChannel>;

impl MacsecConnection {
    pub fn interface(&self) -> &MacsecInterface {
        &self.primary
    }

    pub fn outbound(&self) -> Option<&OutboundSecureChannel> {
        self.first.as_ref()
    }

    pub fn inbound(&self) -> Option<&InboundSecureChannel> {
        self.second.as_ref()
    }
}

/// Every interface listed in one `<macsec-connection-information>` element,
/// in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MacsecConnections {
    pub connections: Vec<MacsecConnection>,
}

impl MacsecConnections {
    /// Finds the connection of the named interface.
    pub fn interface(&self, name: &str) -> Option<&MacsecConnection> {
        self.connections
            .iter()
            .find(|c| c.primary.interface_name == name)
    }
}

impl ReplyPayload for MacsecConnections {
    const ELEMENT: &'static str = "macsec-connection-information";

    fn decode(subtree: &str, _position: usize) -> Result<Self, ReplyError> {
        let connections = sibling::decode_groups::<MacsecGrammar>(subtree)?;
        Ok(Self { connections })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_attaches_to_preceding_interface() {
        let xml = r#"<macsec-connection-information>
            <macsec-interface-common-information>
                <interface-name>et-0/0/0</interface-name>
                <connectivity-association-name>CA-CORE</connectivity-association-name>
                <cipher-suite>GCM-AES-XPN-256</cipher-suite>
                <encryption>on</encryption>
                <offset>0</offset>
                <include-sci>yes</include-sci>
                <replay-protect>off</replay-protect>
                <replay-window>0</replay-window>
            </macsec-interface-common-information>
            <outbound-secure-channel>
                <sci>28:8a:1c:e0:5b:c1/1</sci>
                <outgoing-packet-number>29462517698</outgoing-packet-number>
                <outbound-secure-association>
                    <association-number>2</association-number>
                    <association-number-status>inuse</association-number-status>
                    <create-time junos:seconds="1624434462">2021-06-23 07:47:42 UTC</create-time>
                </outbound-secure-association>
            </outbound-secure-channel>
            <macsec-interface-common-information>
                <interface-name>et-0/0/1</interface-name>
            </macsec-interface-common-information>
        </macsec-connection-information>"#;
        let macsec = MacsecConnections::decode(xml, 0).unwrap();
        assert_eq!(macsec.connections.len(), 2);

        let first = macsec.interface("et-0/0/0").unwrap();
        assert_eq!(first.interface().cipher_suite, "GCM-AES-XPN-256");
        let outbound = first.outbound().unwrap();
        assert_eq!(outbound.outgoing_packet_number, 29_462_517_698);
        assert_eq!(outbound.association.as_ref().unwrap().status, "inuse");
        assert!(first.inbound().is_none());

        let second = macsec.interface("et-0/0/1").unwrap();
        assert!(second.outbound().is_none());
        assert!(second.inbound().is_none());
    }

    #[test]
    fn test_empty_counters_decode_as_zero() {
        let xml = r#"<macsec-connection-information>
            <macsec-interface-common-information>
                <interface-name>et-0/0/0</interface-name>
                <offset/>
                <replay-window></replay-window>
            </macsec-interface-common-information>
            <outbound-secure-channel>
                <outgoing-packet-number> </outgoing-packet-number>
            </outbound-secure-channel>
        </macsec-connection-information>"#;
        let macsec = MacsecConnections::decode(xml, 0).unwrap();
        let conn = macsec.interface("et-0/0/0").unwrap();
        assert_eq!(conn.interface().offset, 0);
        assert_eq!(conn.interface().replay_window, 0);
        assert_eq!(conn.outbound().unwrap().outgoing_packet_number, 0);
    }
}
