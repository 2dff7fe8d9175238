//! # multimethodic - Clojure-style Multimethods
//!
//! `multimethodic` provides multimethods: callables that pick an
//! implementation at call time from the value a user-supplied **dispatch
//! function** computes from the call arguments. Unlike type-based dispatch,
//! the dispatch value can be anything comparable: an enum tag, a string, a
//! tuple of [`TypeId`](std::any::TypeId)s, the sign of a number.
//!
//! ## Quick Start
//!
//! ```rust
//! use multimethodic::{Key, MultiMethod};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Kind { Int, Str }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Value { Int(i64), Str(String) }
//!
//! fn kind(v: &Value) -> Kind {
//!     match v { Value::Int(_) => Kind::Int, Value::Str(_) => Kind::Str }
//! }
//!
//! let mut combine = MultiMethod::new("combine", |(a, b): &(Value, Value)| (kind(a), kind(b)));
//! combine
//!     .method((Kind::Int, Kind::Int))
//!     .attach(|args| match args {
//!         (Value::Int(a), Value::Int(b)) => Value::Int(a * b),
//!         _ => unreachable!(),
//!     })
//!     .method(Key::Default)
//!     .attach(|_| Value::Str("???".into()));
//!
//! assert_eq!(combine.call((Value::Int(21), Value::Int(2))), Ok(Value::Int(42)));
//! assert_eq!(
//!     combine.call((Value::Int(21), Value::Str("bar".into()))),
//!     Ok(Value::Str("???".into()))
//! );
//! ```
//!
//! ## Flavours
//!
//! | Type | Registration | Use Case |
//! |------|--------------|----------|
//! | [`MultiMethod`] | `&mut self` | Set up once, call from anywhere |
//! | [`SharedMultiMethod`] | `&self`, copy-on-write | Registration overlapping with calls, `static` multimethods |
//! | [`AsyncMultiMethod`] | `&mut self` | Methods that return futures |
//!
//! ## Features
//!
//! - `tracing`: emit dispatch and registration diagnostics through `tracing`.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use multimethodic_core::{
    // Errors
    BoxError,
    // Keys
    Discriminant,
    DispatchNotFound,
    Key,
    // Lookup
    Lookup,
    MethodTable,
    RegistryError,
};

pub use multimethodic_std::{Registry, SnapshotRegistry};

mod asynchronous;
mod builder;
mod macros;
mod multimethod;
mod registrar;
mod shared;

pub use asynchronous::{AsyncMethod, AsyncMultiMethod, AsyncRegistrar};
pub use builder::{DuplicatePolicy, MultiMethodBuilder};
pub use multimethod::{DispatchFn, Method, MultiMethod};
pub use registrar::Registrar;
pub use shared::{SharedMultiMethod, SharedRegistrar};

/// Testing utilities.
pub mod testing {
    pub use multimethodic_std::testing::{CountingMethod, RecordingDispatch, RecordingMethod};
}

/// Prelude module - common imports for multimethodic.
///
/// # Usage
///
/// ```rust,ignore
/// use multimethodic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AsyncMultiMethod, DispatchNotFound, Key, MultiMethod, SharedMultiMethod, defmethod,
        defmulti,
    };
}
