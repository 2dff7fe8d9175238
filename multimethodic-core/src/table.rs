//! Method lookup abstraction.
//!
//! This module provides a trait-based lookup abstraction so that every
//! multimethod flavour (plain, shared, async) resolves a discriminant with
//! the same exact-then-default algorithm.

/// Result of resolving a discriminant against a [`MethodTable`].
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a, M> {
    /// A method was registered under exactly this discriminant.
    Exact(&'a M),
    /// No exact match; the default method was selected.
    Default(&'a M),
    /// Neither an exact match nor a default method exists.
    NotFound,
}

impl<M> Clone for Lookup<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Lookup<'_, M> {}

impl<'a, M> Lookup<'a, M> {
    /// Returns true if a method was selected.
    pub fn is_found(&self) -> bool {
        !matches!(self, Lookup::NotFound)
    }

    /// Returns true if the default method was selected.
    pub fn is_default(&self) -> bool {
        matches!(self, Lookup::Default(_))
    }

    /// Returns the selected method, if any.
    pub fn method(self) -> Option<&'a M> {
        match self {
            Lookup::Exact(m) | Lookup::Default(m) => Some(m),
            Lookup::NotFound => None,
        }
    }
}

/// A table of methods keyed by discriminant, with one optional default.
pub trait MethodTable<D, M> {
    /// Look up the method registered under exactly `discriminant`.
    fn get(&self, discriminant: &D) -> Option<&M>;

    /// The default method, if one is registered.
    fn default_method(&self) -> Option<&M>;

    /// Resolve a discriminant: exact match first, then the default.
    fn resolve(&self, discriminant: &D) -> Lookup<'_, M> {
        if let Some(method) = self.get(discriminant) {
            return Lookup::Exact(method);
        }
        match self.default_method() {
            Some(method) => Lookup::Default(method),
            None => Lookup::NotFound,
        }
    }

    /// Check if a method is registered under exactly `discriminant`.
    fn contains(&self, discriminant: &D) -> bool {
        self.get(discriminant).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{Lookup, MethodTable};

    struct Pair {
        exact: Option<(u8, &'static str)>,
        default: Option<&'static str>,
    }

    impl MethodTable<u8, &'static str> for Pair {
        fn get(&self, discriminant: &u8) -> Option<&&'static str> {
            self.exact
                .as_ref()
                .filter(|(d, _)| d == discriminant)
                .map(|(_, m)| m)
        }

        fn default_method(&self) -> Option<&&'static str> {
            self.default.as_ref()
        }
    }

    #[test]
    fn test_exact_wins_over_default() {
        let table = Pair {
            exact: Some((1, "one")),
            default: Some("other"),
        };
        assert_eq!(table.resolve(&1), Lookup::Exact(&"one"));
        assert_eq!(table.resolve(&2), Lookup::Default(&"other"));
        assert!(table.resolve(&2).is_default());
        assert!(table.resolve(&1).is_found());
    }

    #[test]
    fn test_not_found_without_default() {
        let table = Pair {
            exact: Some((1, "one")),
            default: None,
        };
        assert_eq!(table.resolve(&9), Lookup::NotFound);
        assert_eq!(table.resolve(&9).method(), None);
        assert!(!table.resolve(&9).is_found());
        assert!(table.contains(&1));
    }
}
