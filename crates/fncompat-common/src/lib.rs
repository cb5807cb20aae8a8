//! Common types and utilities for the fncompat signature checker.
//!
//! This crate provides foundational types used across the workspace:
//! - String interning (`Atom`, `Interner`)
//! - Checker limits and thresholds
//! - Diagnostic messages, codes, and rendered `Diagnostic` records

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Centralized limits and thresholds
pub mod limits;

// Diagnostic message table and records
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, DiagnosticRelatedInformation,
    format_message, get_message_template,
};
