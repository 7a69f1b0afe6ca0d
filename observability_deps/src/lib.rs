//! This crate exists to add a layer of indirection between the observability
//! dependencies and the rest of the workspace, so that the ecosystem crates
//! can be updated (or swapped) in a single place.

// Workaround for "unused crate" lint false positives.
use workspace_hack as _;

pub use tracing;
