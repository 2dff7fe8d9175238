//! Multimethods with asynchronous methods.
//!
//! Dispatch stays synchronous: the discriminant is computed and resolved
//! before anything is awaited. Only the selected method is async.

use std::{fmt, future::Future, sync::Arc};

use futures::future::{BoxFuture, FutureExt};
use multimethodic_core::{Discriminant, DispatchNotFound, Key, MethodTable};
use multimethodic_std::{Registry, log};

use crate::multimethod::DispatchFn;

/// A type-erased asynchronous method.
pub type AsyncMethod<A, R> = Arc<dyn Fn(A) -> BoxFuture<'static, R> + Send + Sync>;

/// A multimethod whose methods return futures.
///
/// # Example
///
/// ```rust,ignore
/// let mut fetch = AsyncMultiMethod::new("fetch", |url: &Url| url.scheme());
/// fetch.method("https").attach(|url| async move { get_tls(url).await });
///
/// let body = fetch.call(url).await?;
/// ```
pub struct AsyncMultiMethod<A, D, R> {
    name: String,
    dispatch: DispatchFn<A, D>,
    registry: Registry<D, AsyncMethod<A, R>>,
}

impl<A, D, R> AsyncMultiMethod<A, D, R>
where
    D: Discriminant,
{
    /// Create a new async multimethod with no methods.
    pub fn new<F>(name: impl Into<String>, dispatch: F) -> Self
    where
        F: Fn(&A) -> D + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            dispatch: Arc::new(dispatch),
            registry: Registry::new(),
        }
    }

    /// The diagnostic name of this multimethod.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call the multimethod and await the selected method.
    pub async fn call(&self, args: A) -> Result<R, DispatchNotFound<D>> {
        let future = {
            let discriminant = (self.dispatch)(&args);
            let lookup = self.registry.resolve(&discriminant);
            log::dispatched(&self.name, &discriminant, &lookup);

            match lookup.method() {
                Some(method) => method(args),
                None => return Err(DispatchNotFound::new(self.name.clone(), discriminant)),
            }
        };
        Ok(future.await)
    }

    /// Get a registrar that binds a method to `key` on this multimethod.
    pub fn method(&mut self, key: impl Into<Key<D>>) -> AsyncRegistrar<'_, A, D, R> {
        AsyncRegistrar {
            multimethod: self,
            key: key.into(),
        }
    }

    /// Register `method` under `key`, replacing any method already there.
    pub fn add_method<F, Fut>(&mut self, key: impl Into<Key<D>>, method: F) -> &mut Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        let method: AsyncMethod<A, R> = Arc::new(move |args: A| method(args).boxed());
        let key = key.into();
        log::registered(&self.name, &key, self.registry.contains_key(&key));
        self.registry.insert(key, method);
        self
    }

    /// Remove the method registered under `key`.
    pub fn remove_method(&mut self, key: impl Into<Key<D>>) -> Option<AsyncMethod<A, R>> {
        let key = key.into();
        let removed = self.registry.remove(&key);
        log::removed(&self.name, &key, removed.is_some());
        removed
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
}

impl<A, D, R> fmt::Display for AsyncMultiMethod<A, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<MultiMethod '{}'>", self.name)
    }
}

impl<A, D: fmt::Debug, R> fmt::Debug for AsyncMultiMethod<A, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncMultiMethod")
            .field("name", &self.name)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Binds one async method to one key on a specific [`AsyncMultiMethod`].
#[must_use = "a registrar does nothing until a method is attached"]
pub struct AsyncRegistrar<'m, A, D, R> {
    multimethod: &'m mut AsyncMultiMethod<A, D, R>,
    key: Key<D>,
}

impl<'m, A, D, R> AsyncRegistrar<'m, A, D, R>
where
    D: Discriminant,
{
    /// Register `method` and return the owning multimethod.
    pub fn attach<F, Fut>(self, method: F) -> &'m mut AsyncMultiMethod<A, D, R>
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        let AsyncRegistrar { multimethod, key } = self;
        multimethod.add_method(key, method)
    }
}
