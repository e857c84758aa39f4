//! # uilint-validate — UI-Schema Validation
//!
//! Entry point of the linter. [`validate`] takes an already-parsed schema
//! document and returns a [`ValidationReport`](uilint_core::ValidationReport)
//! with errors, warnings and suggestions plus a single `valid` verdict.
//!
//! ## Architecture
//!
//! - **Component kinds** (`component.rs`): the declared `type` resolved to a
//!   tagged enum.
//!
//! - **Structural validators** (`structural.rs`): page, form, crud,
//!   dialog/drawer, button and wizard checks.
//!
//! - **Cross-cutting validators** (`crosscut.rs`): `api` config shape and
//!   `onEvent` action shape, for any component kind.
//!
//! - **Engine** (`engine.rs`): the [`Linter`] orchestrator, which runs the
//!   above and then the optional [`Advisor`](uilint_rules::Advisor) from
//!   `uilint-rules`.
//!
//! ## Crate Policy
//!
//! - Depends on `uilint-core` and `uilint-rules` internally.
//! - Validation never fails: every outcome, including malformed input, is
//!   expressed as findings in the report.
//! - The input document is never modified.

pub mod component;
pub mod crosscut;
pub mod engine;
pub mod structural;

pub use component::ComponentKind;
pub use engine::{validate, Linter, MISSING_TYPE, NOT_AN_OBJECT};
pub use uilint_core::{Finding, LintConfig, Severity, ValidationReport};
