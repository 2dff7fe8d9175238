//! Testing utilities for multimethodic.
//!
//! This module provides utilities to make testing dispatch functions and
//! methods easier.
//!
//! # Features
//!
//! - [`RecordingDispatch`]: Wraps a dispatch function and records every argument it sees
//! - [`RecordingMethod`]: A method that records its arguments and returns a fixed output
//! - [`CountingMethod`]: Wraps a method and counts invocations

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Dispatch
// ============================================================================

/// Records every argument value a dispatch function is invoked with.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingDispatch::new();
/// let mm = MultiMethod::new("sign", recorder.wrap(|x: &i32| x.signum()));
///
/// mm.call(5)?;
/// assert_eq!(recorder.calls(), vec![5]);
/// ```
pub struct RecordingDispatch<A: Clone> {
    calls: Arc<Mutex<Vec<A>>>,
}

impl<A: Clone + Send + 'static> RecordingDispatch<A> {
    /// Create a new empty recorder.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Wrap a dispatch function so that each invocation is recorded.
    pub fn wrap<D, F>(
        &self,
        dispatch: F,
    ) -> impl Fn(&A) -> D + Send + Sync + 'static + use<A, D, F>
    where
        F: Fn(&A) -> D + Send + Sync + 'static,
    {
        let calls = Arc::clone(&self.calls);
        move |args: &A| {
            calls.lock().unwrap().push(args.clone());
            dispatch(args)
        }
    }

    /// Get a clone of the recorded arguments, in call order.
    pub fn calls(&self) -> Vec<A> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded invocations.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded arguments.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl<A: Clone + Send + 'static> Default for RecordingDispatch<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Clone for RecordingDispatch<A> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

// ============================================================================
// Recording Method
// ============================================================================

/// A method that records its arguments and returns a fixed output.
///
/// # Example
///
/// ```rust,ignore
/// let circle = RecordingMethod::new("circle");
/// mm.method(Shape::Circle).attach(circle.method());
///
/// mm.call(Shape::Circle)?;
/// assert_eq!(circle.inputs(), vec![Shape::Circle]);
/// ```
pub struct RecordingMethod<A: Clone, R: Clone> {
    inputs: Arc<Mutex<Vec<A>>>,
    output: R,
}

impl<A, R> RecordingMethod<A, R>
where
    A: Clone + Send + 'static,
    R: Clone + Send + Sync + 'static,
{
    /// Create a recording method that returns `output` on every call.
    pub fn new(output: R) -> Self {
        Self {
            inputs: Arc::new(Mutex::new(Vec::new())),
            output,
        }
    }

    /// A callable suitable for registration on a multimethod.
    pub fn method(&self) -> impl Fn(A) -> R + Send + Sync + 'static + use<A, R> {
        let inputs = Arc::clone(&self.inputs);
        let output = self.output.clone();
        move |args: A| {
            inputs.lock().unwrap().push(args);
            output.clone()
        }
    }

    /// Get recorded inputs.
    pub fn inputs(&self) -> Vec<A> {
        self.inputs.lock().unwrap().clone()
    }

    /// Get the number of times the method was invoked.
    pub fn call_count(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }
}

impl<A: Clone, R: Clone> Clone for RecordingMethod<A, R> {
    fn clone(&self) -> Self {
        Self {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
        }
    }
}

// ============================================================================
// Counting Method
// ============================================================================

/// Wraps methods and counts how often they are invoked.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingMethod::new();
/// mm.add_method(1, counter.wrap(|x: i32| x * 2));
///
/// mm.call(1)?;
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingMethod {
    count: Arc<AtomicUsize>,
}

impl CountingMethod {
    /// Create a new counter.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Wrap a method so that each invocation increments the counter.
    pub fn wrap<A, R, F>(
        &self,
        method: F,
    ) -> impl Fn(A) -> R + Send + Sync + 'static + use<A, R, F>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let count = Arc::clone(&self.count);
        move |args: A| {
            count.fetch_add(1, Ordering::SeqCst);
            method(args)
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingMethod {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingMethod {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}
