//! Values given either directly or through a provider.

use std::{fmt, sync::Arc};

/// A value of type `T`, either supplied as is or produced on demand by
/// a zero-argument provider.
///
/// The control resolves its sources once per render, so a provider
/// sees every render and may return fresh data each time.
pub enum Source<T> {
    Value(T),
    Provider(Arc<dyn Fn() -> T + Send + Sync>),
}

impl<T: Clone> Source<T> {
    /// Create a source calling `f` on each resolution.
    pub fn provider<F>(f: F) -> Self
    where F: Fn() -> T + Send + Sync + 'static {
        Source::Provider(Arc::new(f))
    }

    /// Return the current value.
    pub fn resolve(&self) -> T {
        match self {
            Source::Value(v) => v.clone(),
            Source::Provider(f) => f(),
        }
    }
}

impl<T: Default> Default for Source<T> {
    fn default() -> Self { Source::Value(T::default()) }
}

impl<T> From<T> for Source<T> {
    fn from(v: T) -> Self { Source::Value(v) }
}

impl<T: Clone> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Source::Value(v) => Source::Value(v.clone()),
            Source::Provider(f) => Source::Provider(Arc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Source::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn provider_is_called_on_each_resolution() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let s = Source::provider(move || c.fetch_add(1, Ordering::SeqCst));
        assert_eq!(s.resolve(), 0);
        assert_eq!(s.resolve(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn value_and_default() {
        assert_eq!(Source::from(vec![1, 2]).resolve(), vec![1, 2]);
        assert!(Source::<Vec<u8>>::default().resolve().is_empty());
    }
}
