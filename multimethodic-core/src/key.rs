//! Registration keys.

use std::{fmt, hash::Hash};

/// A value produced by a dispatch function.
///
/// Discriminants are compared by exact equality only. There is no notion of
/// one discriminant being a subtype or a category of another.
pub trait Discriminant: Eq + Hash + fmt::Debug {}

impl<T: Eq + Hash + fmt::Debug + ?Sized> Discriminant for T {}

/// The key a method is registered under.
///
/// `Default` is a separate variant rather than a reserved discriminant, so it
/// can never collide with a value a dispatch function returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<D> {
    /// Match calls whose dispatch value equals this one.
    Value(D),
    /// Match any call no other key matched.
    Default,
}

impl<D> Key<D> {
    /// Returns true for the fallback key.
    pub fn is_default(&self) -> bool {
        matches!(self, Key::Default)
    }

    /// Returns the discriminant, if this is not the fallback key.
    pub fn value(&self) -> Option<&D> {
        match self {
            Key::Value(d) => Some(d),
            Key::Default => None,
        }
    }
}

impl<D> From<D> for Key<D> {
    fn from(value: D) -> Self {
        Key::Value(value)
    }
}

impl<D: fmt::Debug> fmt::Display for Key<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Value(d) => write!(f, "{d:?}"),
            Key::Default => f.write_str("<Default>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn test_default_never_equals_a_value() {
        let key: Key<Option<()>> = Key::Value(None);
        assert_ne!(key, Key::Default);
        assert!(Key::<i32>::Default.is_default());
        assert_eq!(Key::from(3).value(), Some(&3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::from("circle").to_string(), "\"circle\"");
        assert_eq!(Key::<&str>::Default.to_string(), "<Default>");
    }
}
