//! # uilint-core — Foundational Types for the UI-Schema Linter
//!
//! Every other crate in the workspace depends on `uilint-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Schema nodes stay untyped.** A document is a `serde_json::Value`.
//!    Validators read only the fields they care about through the accessors
//!    in [`node`], which share one definition of "present".
//!
//! 2. **One report per call.** [`ValidationReport`] is created fresh by each
//!    validation and owned exclusively by it. `valid` can only move from
//!    `true` to `false`, and only through an error finding.
//!
//! 3. **`CanonicalText` newtype.** Pattern detection runs against text that
//!    can only be produced by [`CanonicalText::new()`], so equal documents
//!    always yield equal encodings under the same options.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `uilint-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod config;
pub mod error;
pub mod finding;
pub mod node;

// Re-export primary types for ergonomic imports.
pub use canonical::{CanonicalText, EncodeOptions, KeyOrder};
pub use config::LintConfig;
pub use error::{CanonicalizationError, ConfigError, UilintError};
pub use finding::{Finding, Severity, ValidationReport};
