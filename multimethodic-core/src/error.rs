//! Error types for multimethodic.
//!
//! This module provides the error types using `thiserror`:
//!
//! - [`DispatchNotFound`] - Raised by the call path when nothing matches
//! - [`RegistryError`] - Raised by strict registration

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// No method matched a dispatch value and no default method was registered.
///
/// Carries the multimethod's name and the discriminant computed by its
/// dispatch function so that callers can log or assert on both.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "no method on multimethod '{name}' for dispatch value {discriminant:?} and no default method defined"
)]
pub struct DispatchNotFound<D> {
    name: String,
    discriminant: D,
}

impl<D> DispatchNotFound<D> {
    /// Create a new error for the named multimethod.
    pub fn new(name: impl Into<String>, discriminant: D) -> Self {
        Self {
            name: name.into(),
            discriminant,
        }
    }

    /// The name of the multimethod that failed to dispatch.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dispatch value that had no matching method.
    pub fn discriminant(&self) -> &D {
        &self.discriminant
    }

    /// Consume the error, returning the dispatch value.
    pub fn into_discriminant(self) -> D {
        self.discriminant
    }
}

/// Errors that can occur during strict method registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A method is already registered under this key.
    #[error("method already registered for dispatch value {0}")]
    DuplicateKey(String),
}
