//! Fallback-priority resolution.
//!
//! Every comparison resolves its reference statistics through an ordered
//! list of lookups, taking the first that yields data. These combinators
//! make that cascade explicit instead of repeating nested `if let` chains
//! at each call site.

/// One lazily-evaluated lookup in a fallback chain.
pub type Resolver<'a, T> = Box<dyn FnOnce() -> Option<T> + 'a>;

/// Runs the resolvers in order and returns the first available value.
pub fn first_available<T>(resolvers: Vec<Resolver<'_, T>>) -> Option<T> {
    resolvers.into_iter().find_map(|resolve| resolve())
}

/// Runs the resolvers in order, falling back to a guaranteed default when
/// none yields a value.
pub fn resolve_with_fallback<T>(
    resolvers: Vec<Resolver<'_, T>>,
    fallback: impl FnOnce() -> T,
) -> T {
    first_available(resolvers).unwrap_or_else(fallback)
}
