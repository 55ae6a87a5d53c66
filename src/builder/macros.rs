//! Macros for ergonomic guard construction.

/// Build a [`Guard`](crate::core::Guard) from a pattern.
///
/// The guard holds when the input matches the pattern, with an optional
/// `if` clause, exactly as in `matches!`.
///
/// # Example
///
/// ```
/// use responsibility::core::Guard;
/// use responsibility::guard;
///
/// #[derive(Debug)]
/// enum Level {
///     Debug,
///     Warning,
///     Error,
/// }
///
/// struct Event {
///     level: Level,
///     code: u16,
/// }
///
/// let severe: Guard<Level> = guard!(Level::Warning | Level::Error);
/// assert!(severe.test(&Level::Error));
/// assert!(!severe.test(&Level::Debug));
///
/// let server_error: Guard<Event> = guard!(Event { level: Level::Error, code } if *code >= 500);
/// assert!(server_error.test(&Event { level: Level::Error, code: 503 }));
/// assert!(!server_error.test(&Event { level: Level::Error, code: 404 }));
/// ```
#[macro_export]
macro_rules! guard {
    ($pattern:pat $(if $condition:expr)? $(,)?) => {
        $crate::core::Guard::new(move |value| matches!(value, $pattern $(if $condition)?))
    };
}
