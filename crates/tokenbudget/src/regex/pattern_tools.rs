//! # Pattern Tools

/// Concatenate string literals with a separator, at compile time.
///
/// ```rust
/// use tokenbudget::join_strs;
///
/// assert_eq!(join_strs!(",", ("Hello", "World")), "Hello,World");
/// assert_eq!(join_strs!(";", ("OnlyOne")), "OnlyOne");
/// ```
#[macro_export]
macro_rules! join_strs {
    ($sep:literal, ($first:literal $(, $rest:literal)* $(,)?)) => {
        concat!($first $(, $sep, $rest)*)
    };
}

/// Join pattern alternatives with `|`; see [`join_strs!()`].
#[macro_export]
macro_rules! join_patterns {
    ($($e:literal),* $(,)?) => { $crate::join_strs!("|", ($($e),*)) };
}
