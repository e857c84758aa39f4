//! # uilint-rules — Pattern Rules and Heuristic Suggestions
//!
//! The document-wide half of the linter. Where the structural validators in
//! `uilint-validate` look at specific fields of specific component types,
//! this crate looks at the whole document at once.
//!
//! ## Architecture
//!
//! - **Rule tables** (`pattern.rs`): three immutable lists of pattern rules,
//!   one per tier (error, warning, info).
//!
//! - **Detector** (`detector.rs`): compiles the rule tables once and matches
//!   them against a document's [`CanonicalText`](uilint_core::CanonicalText).
//!
//! - **Heuristics** (`suggest.rs`): shape-based advisory hints that do not
//!   involve pattern matching.
//!
//! - **Advisor** (`advisor.rs`): the collaborator trait the orchestrator
//!   depends on, plus the built-in implementation wiring the above together.
//!
//! ## Crate Policy
//!
//! - Depends only on `uilint-core` internally.
//! - Rule tables are `const` data; compiled patterns live in `LazyLock`
//!   statics and are never mutated after first use.

pub mod advisor;
pub mod detector;
pub mod pattern;
pub mod suggest;

pub use advisor::{Advisor, BuiltinAdvisor};
pub use detector::PatternDetector;
pub use pattern::{PatternRule, RuleTier};
pub use suggest::suggest;
