//! # multimethodic-core
//!
//! Core types for the multimethodic runtime dispatch library.
//!
//! This crate has minimal dependencies and holds the vocabulary shared by
//! every multimethod flavour: the registration key, the lookup abstraction
//! and the error types.
//!
//! # Dispatch Model
//!
//! A multimethod is resolved in three steps:
//!
//! ## Step 1: Dispatch
//!
//! A user-supplied dispatch function maps the call arguments to a
//! [`Discriminant`]. Any `Eq + Hash + Debug` value qualifies.
//!
//! ## Step 2: Lookup ([`MethodTable`])
//!
//! The discriminant is looked up by exact equality. If nothing is registered
//! under it, the table falls back to the method registered under
//! [`Key::Default`]. The outcome is reported as a [`Lookup`].
//!
//! ## Step 3: Invoke
//!
//! The selected method receives the original arguments. When nothing
//! matched and no default exists, the caller gets a [`DispatchNotFound`]
//! carrying the multimethod name and the discriminant.
//!
//! # Error Types
//!
//! - [`DispatchNotFound`] - No method and no default for a discriminant
//! - [`RegistryError`] - Strict registration failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod key;
mod table;

// Re-exports
pub use error::{BoxError, DispatchNotFound, RegistryError};
pub use key::{Discriminant, Key};
pub use table::{Lookup, MethodTable};
