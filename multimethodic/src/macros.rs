//! Declaration macros.

/// Declares a process-wide [`SharedMultiMethod`](crate::SharedMultiMethod).
///
/// The multimethod is created on first use and named after the static.
///
/// # Example
///
/// ```rust
/// use multimethodic::{defmethod, defmulti};
///
/// defmulti! {
///     /// Describes a number.
///     pub static DESCRIBE: (i64) -> &'static str, dispatch i64 = |n: &i64| n.signum();
/// }
///
/// defmethod!(DESCRIBE, 1 => |_| "positive");
/// defmethod!(DESCRIBE, default => |_| "not positive");
///
/// assert_eq!(DESCRIBE.call(7), Ok("positive"));
/// assert_eq!(DESCRIBE.call(0), Ok("not positive"));
/// assert_eq!(DESCRIBE.name(), "DESCRIBE");
/// ```
#[macro_export]
macro_rules! defmulti {
    (
        $(#[$meta:meta])*
        $vis:vis static $name:ident: ($args:ty) -> $ret:ty, dispatch $disc:ty = $dispatch:expr $(;)?
    ) => {
        $(#[$meta])*
        $vis static $name: ::std::sync::LazyLock<$crate::SharedMultiMethod<$args, $disc, $ret>> =
            ::std::sync::LazyLock::new(|| {
                $crate::SharedMultiMethod::new(::std::stringify!($name), $dispatch)
            });
    };
}

/// Registers a method on a multimethod.
///
/// `defmethod!(MM, key => method)` registers under `key`;
/// `defmethod!(MM, default => method)` registers the default method.
/// Works with every multimethod flavour that has an `add_method` method.
#[macro_export]
macro_rules! defmethod {
    ($multi:expr, default => $method:expr $(,)?) => {
        $multi.add_method($crate::Key::Default, $method)
    };
    ($multi:expr, $key:expr => $method:expr $(,)?) => {
        $multi.add_method($key, $method)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Key, MultiMethod};

    defmulti! {
        static PARITY: (u32) -> &'static str, dispatch u32 = |n: &u32| n % 2;
    }

    #[test]
    fn test_defmulti_declares_shared_static() {
        defmethod!(PARITY, 0 => |_| "even");
        defmethod!(PARITY, default => |_| "odd");

        assert_eq!(PARITY.call(10), Ok("even"));
        assert_eq!(PARITY.call(3), Ok("odd"));
        assert_eq!(PARITY.to_string(), "<MultiMethod 'PARITY'>");
    }

    #[test]
    fn test_defmethod_on_local_multimethod() {
        let mut mm = MultiMethod::new("local", |x: &u8| *x);
        defmethod!(mm, 1 => |_| "one");
        defmethod!(mm, default => |_| "many");

        assert_eq!(mm.call(1), Ok("one"));
        assert_eq!(mm.call(9), Ok("many"));
        assert!(mm.get_method(Key::Default).is_some());
    }
}
