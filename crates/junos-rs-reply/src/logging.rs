use alloc::format;
use alloc::string::String;

/// Trait for structs that provide metadata for logging
pub trait LogMetadata {
    fn meta(&self) -> String;
}

/// Identifies which payload (and which routing-engine instance) a log line
/// belongs to.
#[derive(Debug, Clone, Copy)]
pub struct ReplyContext<'a> {
    pub feature: &'static str,
    pub instance: Option<&'a str>,
}

impl<'a> ReplyContext<'a> {
    pub fn new(feature: &'static str) -> Self {
        Self {
            feature,
            instance: None,
        }
    }

    pub fn with_instance(self, instance: &'a str) -> Self {
        Self {
            instance: Some(instance),
            ..self
        }
    }
}

impl LogMetadata for ReplyContext<'_> {
    fn meta(&self) -> String {
        format!(
            "feature={}, instance={}",
            self.feature,
            self.instance.unwrap_or("-")
        )
    }
}

// =============================================
// Logging Macros (namespaced under crate::logging)
// =============================================

// ===== my_warn! =====
macro_rules! my_warn {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::logging::LogMetadata::meta(&$ctx);
        ::log::warn!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        ::log::warn!($fmt $(, $($arg)+)?);
    }};
}

// ===== my_error! =====
macro_rules! my_error {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::logging::LogMetadata::meta(&$ctx);
        ::log::error!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        ::log::error!($fmt $(, $($arg)+)?);
    }};
}

// ===== my_debug! =====
macro_rules! my_debug {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::logging::LogMetadata::meta(&$ctx);
        ::log::debug!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        ::log::debug!($fmt $(, $($arg)+)?);
    }};
}

// ===== my_trace! =====
macro_rules! my_trace {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::logging::LogMetadata::meta(&$ctx);
        ::log::trace!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        ::log::trace!($fmt $(, $($arg)+)?);
    }};
}

// Re-export macros for use in other files
pub(crate) use my_debug;
pub(crate) use my_error;
pub(crate) use my_trace;
pub(crate) use my_warn;
