//! Common types and utilities for the phz resolution core.
//!
//! This crate provides foundational types used across all phz crates:
//! - Structured diagnostics and the sinks they are written to
//! - Centralized limits for bounded walks and cache sizing

// Diagnostics - structured observations reported during resolution
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticKind, DiagnosticMessage, DiagnosticSink,
    diagnostic_codes, format_message, get_diagnostic_message,
};

// Centralized limits and thresholds
pub mod limits;
