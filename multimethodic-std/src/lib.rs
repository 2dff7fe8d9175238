//! # multimethodic-std
//!
//! Standard implementations for the multimethodic runtime dispatch library.
//!
//! This crate provides:
//! - **Registry**: [`Registry`], the discriminant → method map with a default slot
//! - **Concurrent registry**: [`SnapshotRegistry`], copy-on-write snapshots for
//!   registration that overlaps with calls
//! - **Logging**: [`log`] helpers backed by `tracing` when the feature is enabled
//! - **Testing**: recording and counting helpers in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use multimethodic_core;

// Modules
pub mod log;
pub mod registry;
pub mod snapshot;
pub mod testing;

pub use registry::Registry;
pub use snapshot::SnapshotRegistry;
