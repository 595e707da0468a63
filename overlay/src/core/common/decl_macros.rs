// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Format into a stack allocated [`crate::InlineString`] instead of a heap allocated
/// [`String`]. Takes whatever you would pass to [`format!`].
///
/// ```
/// use r3bl_ruler_overlay::inline_string;
/// let label = inline_string!("{:.2}in", 1.0);
/// assert_eq!(label, "1.00in");
/// ```
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        // We don't care about the result of this operation.
        write!(&mut acc, $($format)*).ok();
        acc
    }};
}

/// Approximate equality for `f64` values in tests and invariants. The default tolerance
/// is `1e-9`.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {{
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() <= $tolerance,
            "\nleft : `{}` = {left}\nright: `{}` = {right}\ntolerance: {}",
            stringify!($left),
            stringify!($right),
            $tolerance
        );
    }};
}
