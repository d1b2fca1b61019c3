//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a tree as a stable indented outline for `insta`
//!   snapshots
//! - **`invariants`**: runtime checks for parser correctness (spans in bounds,
//!   spans slicing back to `raw_value`, list numbering, single-line inline
//!   constructs)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
