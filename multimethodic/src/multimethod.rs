//! The multimethod: a callable resolved at call time by a dispatch function.

use std::{fmt, sync::Arc};

use multimethodic_core::{Discriminant, DispatchNotFound, Key, MethodTable};
use multimethodic_std::{Registry, log};

use crate::{builder::MultiMethodBuilder, registrar::Registrar};

/// A type-erased dispatch function.
pub type DispatchFn<A, D> = Arc<dyn Fn(&A) -> D + Send + Sync>;

/// A type-erased method.
pub type Method<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;

/// A multimethod that, when called, dispatches to one of its registered
/// methods depending on the value returned by its dispatch function.
///
/// `A` is the argument value (use a tuple for several arguments), `D` the
/// discriminant produced by the dispatch function and `R` the result every
/// method returns.
///
/// # Example
///
/// ```rust
/// use multimethodic::{Key, MultiMethod};
///
/// let mut sign = MultiMethod::new("sign", |(_, y): &(i32, i32)| y.signum());
/// sign.method(1).attach(|_| "positive")
///     .method(0).attach(|_| "zero")
///     .method(Key::Default).attach(|_| "something else");
///
/// assert_eq!(sign.call((1, 99)), Ok("positive"));
/// assert_eq!(sign.call((1, 0)), Ok("zero"));
/// assert_eq!(sign.call((1, -12)), Ok("something else"));
/// ```
pub struct MultiMethod<A, D, R> {
    name: String,
    dispatch: DispatchFn<A, D>,
    registry: Registry<D, Method<A, R>>,
}

impl<A, D, R> MultiMethod<A, D, R>
where
    D: Discriminant,
{
    /// Create a new multimethod with no methods.
    pub fn new<F>(name: impl Into<String>, dispatch: F) -> Self
    where
        F: Fn(&A) -> D + Send + Sync + 'static,
    {
        Self::from_parts(name.into(), Arc::new(dispatch), Registry::new())
    }

    /// Start building a multimethod with methods registered up front.
    pub fn builder<F>(name: impl Into<String>, dispatch: F) -> MultiMethodBuilder<A, D, R>
    where
        F: Fn(&A) -> D + Send + Sync + 'static,
    {
        MultiMethodBuilder::new(name.into(), Arc::new(dispatch))
    }

    pub(crate) fn from_parts(
        name: String,
        dispatch: DispatchFn<A, D>,
        registry: Registry<D, Method<A, R>>,
    ) -> Self {
        Self {
            name,
            dispatch,
            registry,
        }
    }

    /// The diagnostic name of this multimethod.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate only the dispatch function for `args`.
    pub fn dispatch_value(&self, args: &A) -> D {
        (self.dispatch)(args)
    }

    /// Call the multimethod.
    ///
    /// The dispatch function is evaluated on `args`; the method registered
    /// under the resulting value, or else the default method, is invoked with
    /// `args` and its result returned. Panics from either propagate as-is.
    pub fn call(&self, args: A) -> Result<R, DispatchNotFound<D>> {
        let discriminant = (self.dispatch)(&args);
        let lookup = self.registry.resolve(&discriminant);
        log::dispatched(&self.name, &discriminant, &lookup);

        match lookup.method() {
            Some(method) => Ok(method(args)),
            None => Err(DispatchNotFound::new(self.name.clone(), discriminant)),
        }
    }

    /// Get a registrar that binds a method to `key` on this multimethod.
    ///
    /// Pass [`Key::Default`] to register the default method.
    pub fn method(&mut self, key: impl Into<Key<D>>) -> Registrar<'_, A, D, R> {
        Registrar::new(self, key.into())
    }

    /// Register `method` under `key`, replacing any method already there.
    pub fn add_method<F>(&mut self, key: impl Into<Key<D>>, method: F) -> &mut Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.insert(key.into(), Arc::new(method));
        self
    }

    /// Remove the method registered under `key`.
    pub fn remove_method(&mut self, key: impl Into<Key<D>>) -> Option<Method<A, R>> {
        let key = key.into();
        let removed = self.registry.remove(&key);
        log::removed(&self.name, &key, removed.is_some());
        removed
    }

    /// Get the method registered under `key`.
    pub fn get_method(&self, key: impl Into<Key<D>>) -> Option<&Method<A, R>> {
        self.registry.get_key(&key.into())
    }

    /// Iterate over the discriminants that have a method of their own.
    pub fn discriminants(&self) -> impl Iterator<Item = &D> {
        self.registry.discriminants()
    }

    /// Returns true if a default method is registered.
    pub fn has_default(&self) -> bool {
        self.registry.has_default()
    }

    /// Get the number of methods, not counting the default.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if neither methods nor a default are registered.
    ///
    /// A multimethod with only a default method is not empty, even though
    /// its [`len`](Self::len) is 0.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Get a reference to the underlying registry.
    pub fn registry(&self) -> &Registry<D, Method<A, R>> {
        &self.registry
    }

    pub(crate) fn insert(&mut self, key: Key<D>, method: Method<A, R>) {
        log::registered(&self.name, &key, self.registry.contains_key(&key));
        self.registry.insert(key, method);
    }
}

impl<A, D, T, E> MultiMethod<A, D, Result<T, E>>
where
    D: Discriminant,
    E: From<DispatchNotFound<D>>,
{
    /// Call a multimethod whose methods are fallible.
    ///
    /// A missing method is converted into the methods' own error type, so
    /// both failure kinds come back through one `Result`. Errors returned by
    /// the selected method are passed through untouched.
    pub fn try_call(&self, args: A) -> Result<T, E> {
        self.call(args)
            .unwrap_or_else(|not_found| Err(E::from(not_found)))
    }
}

impl<A, D, R> fmt::Display for MultiMethod<A, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<MultiMethod '{}'>", self.name)
    }
}

impl<A, D: fmt::Debug, R> fmt::Debug for MultiMethod<A, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiMethod")
            .field("name", &self.name)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
