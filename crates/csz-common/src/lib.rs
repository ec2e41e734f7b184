//! Common types and utilities for the csz compiler front end.
//!
//! This crate provides foundational types used across all csz crates:
//! - Source spans and tree identity (`Span`, `TreeId`, `Location`)
//! - Language configuration (`LanguageVersion`, `SourceCodeKind`, `LanguageFeature`)
//! - Diagnostic codes and the message table

// Span - Source location tracking (byte offsets) plus tree identity
pub mod span;
pub use span::{Location, Span, TreeId};

// Language configuration shared by the syntax and declaration crates
pub mod common;
pub use common::{LanguageFeature, LanguageVersion, SourceCodeKind};

// Diagnostic codes, categories and message templates
pub mod diagnostics;
