//! Logging helpers for dispatch observation.
//!
//! These use the `tracing` crate when the `tracing` feature is enabled and
//! compile to nothing otherwise.

use std::fmt::Debug;

use multimethodic_core::{Key, Lookup};

/// Record the outcome of resolving a dispatch value.
pub fn dispatched<D: Debug, M>(name: &str, discriminant: &D, lookup: &Lookup<'_, M>) {
    #[cfg(feature = "tracing")]
    {
        match lookup {
            Lookup::Exact(_) => {
                tracing::trace!(
                    multimethod = %name,
                    discriminant = ?discriminant,
                    "dispatching to method"
                );
            }
            Lookup::Default(_) => {
                tracing::trace!(
                    multimethod = %name,
                    discriminant = ?discriminant,
                    "dispatching to default method"
                );
            }
            Lookup::NotFound => {
                tracing::debug!(
                    multimethod = %name,
                    discriminant = ?discriminant,
                    "no method and no default method"
                );
            }
        }
    }

    #[cfg(not(feature = "tracing"))]
    {
        let _ = (name, discriminant, lookup); // Suppress unused warnings
    }
}

/// Record a method registration.
pub fn registered<D: Debug>(name: &str, key: &Key<D>, replaced: bool) {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(multimethod = %name, key = %key, replaced, "registered method");
    }

    #[cfg(not(feature = "tracing"))]
    {
        let _ = (name, key, replaced);
    }
}

/// Record a method removal.
pub fn removed<D: Debug>(name: &str, key: &Key<D>, existed: bool) {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(multimethod = %name, key = %key, existed, "removed method");
    }

    #[cfg(not(feature = "tracing"))]
    {
        let _ = (name, key, existed);
    }
}
