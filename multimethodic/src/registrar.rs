//! Method registration.

use std::sync::Arc;

use multimethodic_core::{Discriminant, Key};

use crate::multimethod::MultiMethod;

/// Binds one method to one key on a specific [`MultiMethod`].
///
/// Obtained from [`MultiMethod::method`]. [`attach`](Registrar::attach)
/// hands the multimethod back so registrations can be chained.
#[must_use = "a registrar does nothing until a method is attached"]
pub struct Registrar<'m, A, D, R> {
    multimethod: &'m mut MultiMethod<A, D, R>,
    key: Key<D>,
}

impl<'m, A, D, R> Registrar<'m, A, D, R>
where
    D: Discriminant,
{
    pub(crate) fn new(multimethod: &'m mut MultiMethod<A, D, R>, key: Key<D>) -> Self {
        Self { multimethod, key }
    }

    /// The key the method will be registered under.
    pub fn key(&self) -> &Key<D> {
        &self.key
    }

    /// Register `method` and return the owning multimethod.
    pub fn attach<F>(self, method: F) -> &'m mut MultiMethod<A, D, R>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let Registrar { multimethod, key } = self;
        multimethod.insert(key, Arc::new(method));
        multimethod
    }
}
