#![allow(dead_code)]

use multimethodic::{Key, MultiMethod};

// ============================================================================
// Test Value Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl Value {
    pub fn str(s: &str) -> Self {
        Value::Str(s.to_string())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Str(_) => Kind::Str,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Str,
}

pub type Combine = MultiMethod<(Value, Value), (Kind, Kind), Value>;

// ============================================================================
// Test Multimethods
// ============================================================================

/// `combine` without a default method: ints multiply, strings join with `&`.
pub fn combine() -> Combine {
    let mut combine = MultiMethod::new("combine", |(a, b): &(Value, Value)| (a.kind(), b.kind()));
    combine
        .method((Kind::Int, Kind::Int))
        .attach(|args| match args {
            (Value::Int(a), Value::Int(b)) => Value::Int(a * b),
            _ => unreachable!("dispatched on (Int, Int)"),
        })
        .method((Kind::Str, Kind::Str))
        .attach(|args| match args {
            (Value::Str(a), Value::Str(b)) => Value::Str(format!("{a}&{b}")),
            _ => unreachable!("dispatched on (Str, Str)"),
        });
    combine
}

/// `combine` with a default method answering `"???"`.
pub fn combine_with_default() -> Combine {
    let mut combine = combine();
    combine.method(Key::Default).attach(|_| Value::str("???"));
    combine
}
