//! Builder for constructing multimethods with methods registered up front.

use std::sync::Arc;

use multimethodic_core::{Discriminant, Key, RegistryError};
use multimethodic_std::Registry;

use crate::multimethod::{DispatchFn, Method, MultiMethod};

/// What to do when the same key is registered twice in a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Later registrations replace earlier ones (default).
    #[default]
    Replace,
    /// Fail the build with [`RegistryError::DuplicateKey`].
    Reject,
}

/// Builder for [`MultiMethod`].
///
/// # Example
///
/// ```rust,ignore
/// let area = MultiMethod::builder("area", |s: &Shape| s.kind())
///     .method(Kind::Circle, |s| PI * s.r * s.r)
///     .method(Kind::Square, |s| s.side * s.side)
///     .default_method(|_| 0.0)
///     .strict()
///     .build()?;
/// ```
#[must_use = "builders do nothing unless `build` is called"]
pub struct MultiMethodBuilder<A, D, R> {
    name: String,
    dispatch: DispatchFn<A, D>,
    pending: Vec<(Key<D>, Method<A, R>)>,
    duplicates: DuplicatePolicy,
}

impl<A, D, R> MultiMethodBuilder<A, D, R>
where
    D: Discriminant,
{
    pub(crate) fn new(name: String, dispatch: DispatchFn<A, D>) -> Self {
        Self {
            name,
            dispatch,
            pending: Vec::new(),
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Register a method under `key`.
    pub fn method<F>(mut self, key: impl Into<Key<D>>, method: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.pending.push((key.into(), Arc::new(method)));
        self
    }

    /// Register the default method.
    pub fn default_method<F>(self, method: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.method(Key::Default, method)
    }

    /// Set how duplicate keys are handled.
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Reject duplicate keys. Shorthand for `duplicates(DuplicatePolicy::Reject)`.
    pub fn strict(self) -> Self {
        self.duplicates(DuplicatePolicy::Reject)
    }

    /// Build the multimethod, consuming the builder.
    pub fn build(self) -> Result<MultiMethod<A, D, R>, RegistryError> {
        let mut registry = Registry::new();
        for (key, method) in self.pending {
            match self.duplicates {
                DuplicatePolicy::Replace => {
                    registry.insert(key, method);
                }
                DuplicatePolicy::Reject => registry.try_insert(key, method)?,
            }
        }
        Ok(MultiMethod::from_parts(self.name, self.dispatch, registry))
    }
}
