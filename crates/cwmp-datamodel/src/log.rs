// crates/cwmp-datamodel/src/log.rs

use crate::schema::EntitySpec;

/// Trait for values that provide metadata for logging.
pub trait LogMetadata {
    fn meta(&self) -> String;
}

/// Context for messages about one concrete node of a parameter tree.
pub struct LogContext<'a> {
    pub entity: &'static str,
    pub path: &'a str,
}

impl LogMetadata for LogContext<'_> {
    fn meta(&self) -> String {
        format!("entity={}, path={}", self.entity, self.path)
    }
}

impl LogMetadata for EntitySpec {
    fn meta(&self) -> String {
        format!("entity={}, template={}", self.name, self.path)
    }
}

// =============================================
// Logging Macros (namespaced under crate::log)
// =============================================

// ===== my_warn! =====
macro_rules! my_warn {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        log::warn!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
}

// ===== my_debug! =====
macro_rules! my_debug {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        log::debug!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
}

// ===== my_trace! =====
macro_rules! my_trace {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        log::trace!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
}

// Re-export macros for use in other files
pub(crate) use my_debug;
pub(crate) use my_trace;
pub(crate) use my_warn;
