//! Top-level facade crate for palindrome-labels.
//!
//! Re-exports the core decision logic and the host library so users can depend on a single crate.

pub mod core {
    pub use palindrome_labels_core::*;
}

pub mod host {
    pub use palindrome_labels_host::*;
}
