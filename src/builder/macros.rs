//! Macros for ergonomic reducer mapping construction.

/// Declare a [`Reducers`](crate::core::Reducers) mapping from identifiers.
///
/// Each entry becomes a named reducer; entry order becomes mapping order.
/// Names are identifiers, so they are never empty; a duplicated identifier
/// panics at construction.
///
/// # Example
///
/// ```rust
/// use actionmap::reducers;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter {
///     count: i64,
/// }
///
/// let mapping = reducers! {
///     add => |s: &Counter, args: &[i64]| Counter {
///         count: s.count + args.first().copied().unwrap_or(1),
///     },
///     reset => |_: &Counter, _: &[i64]| Counter { count: 0 },
/// };
///
/// assert_eq!(mapping.names().collect::<Vec<_>>(), vec!["add", "reset"]);
/// ```
#[macro_export]
macro_rules! reducers {
    (
        $(
            $name:ident => $reducer:expr
        ),* $(,)?
    ) => {
        $crate::builder::ReducersBuilder::new()
            $(
                .reducer(stringify!($name), $reducer)
            )*
            .build()
            .expect("duplicate reducer name in reducers! block")
    };
}
