//! Utility macros used internally by the header crate.

/// A macro for early returns with an error if a condition is not met.
///
/// This is similar to the `assert!` macro, but returns an error instead of panicking.
///
/// # Example
///
/// ```ignore
/// ensure!(written <= max_size, EncodeError::too_large_block(written, max_size));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
