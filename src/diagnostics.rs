//! Diagnostics
//!
//! Per-operation debug messages go to an injected `DebugSink` rather than to
//! ambient process state. The store decides whether to emit (see
//! `Config::diagnostics_enabled`); the sink only decides where messages land.

/// Receives one single-line diagnostic per significant operation
pub trait DebugSink: Send + Sync {
    /// `name` is the store's configured identifying prefix
    fn emit(&self, name: &str, message: &str);
}

/// Forwards diagnostics as `tracing` debug events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn emit(&self, name: &str, message: &str) {
        tracing::debug!(store = name, "{}: {}", name, message);
    }
}

/// Drops every message
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DebugSink for NullSink {
    fn emit(&self, _name: &str, _message: &str) {}
}
