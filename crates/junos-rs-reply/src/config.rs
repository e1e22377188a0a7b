// crates/junos-rs-reply/src/config.rs

//! Knobs that change how a reply is classified before it is normalized.

/// How the Shape Detector decides between a single- and a dual-instance reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detection {
    /// Probe the raw bytes for the `multi-routing-engine-results` marker
    /// anywhere in the reply.
    #[default]
    Marker,
    /// Classify by the name of the first element below the `rpc-reply`
    /// envelope. The marker text inside unrelated content does not count.
    Structural,
}

/// Configuration shared by every normalization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizerConfig {
    pub detection: Detection,
}

impl NormalizerConfig {
    /// A configuration that peeks at the document structure instead of
    /// searching for the marker text.
    pub fn structural() -> Self {
        Self {
            detection: Detection::Structural,
        }
    }
}
