//! Structured logging with component context.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Component that produced the entry (e.g. "cart", "catalog").
    pub component: String,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}: {}", self.level, self.component, self.message);

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Structured logger scoped to one storefront component.
///
/// Native builds hand every entry to `tracing`; wasm builds write to the
/// browser console.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    component: String,
}

impl StructuredLogger {
    /// Create a new logger for a component.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    /// Component name this logger is scoped to.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Build the entry for `message` at `level`.
    pub fn entry(
        &self,
        level: LogLevel,
        message: &str,
        fields: BTreeMap<String, serde_json::Value>,
    ) -> LogEntry {
        LogEntry {
            level,
            message: message.to_string(),
            component: self.component.clone(),
            fields,
        }
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        let entry = self.entry(level, message, fields);
        sink::write(level, &self.component, &entry.to_human());
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::LogLevel;

    pub(super) fn write(level: LogLevel, component: &str, output: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(component, "{}", output),
            LogLevel::Info => tracing::info!(component, "{}", output),
            LogLevel::Warn => tracing::warn!(component, "{}", output),
            LogLevel::Error => tracing::error!(component, "{}", output),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::LogLevel;
    use wasm_bindgen::JsValue;

    pub(super) fn write(level: LogLevel, _component: &str, output: &str) {
        let value = JsValue::from_str(output);
        match level {
            LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&value),
            LogLevel::Warn => web_sys::console::warn_1(&value),
            LogLevel::Error => web_sys::console::error_1(&value),
        }
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Build the entry without emitting it.
    pub fn build(self) -> LogEntry {
        self.logger.entry(self.level, &self.message, self.fields)
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building an error log entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_format_includes_component_and_fields() {
        let logger = StructuredLogger::new("catalog");
        let entry = logger
            .warn_builder("Product not found")
            .field("product", "Unknown Product")
            .build();

        assert_eq!(
            entry.to_human(),
            r#"[WARN] catalog: Product not found | product="Unknown Product""#
        );
    }

    #[test]
    fn test_entry_serializes_with_flattened_fields() {
        let logger = StructuredLogger::new("cart");
        let entry = logger
            .info_builder("Cart prices synced")
            .field_i64("updated", 2)
            .field_bool("dirty", false)
            .build();

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["component"], "cart");
        assert_eq!(value["updated"], 2);
        assert_eq!(value["dirty"], false);
    }

    #[test]
    fn test_emit_does_not_panic_without_subscriber() {
        let logger = StructuredLogger::new("cart");
        logger
            .warn_builder("Failed to save cart")
            .field_bool("dirty", true)
            .emit();
        logger.debug_builder("noise").emit();
    }
}
