//! palindrome-labels core: admission decision logic, error types, and wire shapes.
//!
//! This crate decides whether a resource may be admitted based on how many of
//! its label names are palindromes that the policy settings do not whitelist.
//! It carries no transport, runtime, or logging dependencies so any policy
//! host can embed it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every outcome, including malformed input, resolves to a `Verdict` or a
//! `PolicyError` value.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod error;
pub mod evaluator;
pub mod labels;
pub mod palindrome;
pub mod protocol;
pub mod settings;
pub mod verdict;

/// Shared result type.
pub use error::{PolicyError, Result};
pub use evaluator::{evaluate, offending_labels};
pub use labels::LabelSet;
pub use palindrome::is_palindrome;
pub use settings::{Settings, SettingsShape};
pub use verdict::{SettingsVerdict, Verdict};
