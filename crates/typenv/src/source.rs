//! Key/value sources that environment values are read from.
//!
//! [`ProcessEnv`] reads the real process environment. Maps, pair slices and
//! [`lookup_fn`] closures stand in for it wherever touching process-wide
//! state is undesirable, most notably in tests.

use {
    std::{
        borrow::Borrow,
        collections::{BTreeMap, HashMap},
        fmt,
        hash::{BuildHasher, Hash},
    },
    tracing::warn,
};

/// Read-only access to raw configuration strings.
pub trait EnvSource {
    /// Returns the raw value stored under `key`, or `None` if absent.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        let raw = std::env::var_os(key)?;
        match raw.into_string() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(key, "env var is not valid unicode, treating as unset");
                None
            },
        }
    }
}

impl<K, V, S> EnvSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.as_ref().to_owned())
    }
}

impl<K, V> EnvSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.as_ref().to_owned())
    }
}

/// Pairs are searched front to back; the first matching key wins.
impl<K, V> EnvSource for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref().to_owned())
    }
}

impl<K, V, const N: usize> EnvSource for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self.as_slice().lookup(key)
    }
}

impl<K, V> EnvSource for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self.as_slice().lookup(key)
    }
}

/// A source backed by a closure. See [`lookup_fn`].
#[derive(Clone, Copy)]
pub struct LookupFn<F> {
    f: F,
}

/// Use `f(key)` as the source of raw values.
pub fn lookup_fn<F>(f: F) -> LookupFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    LookupFn { f }
}

impl<F> EnvSource for LookupFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        (self.f)(key)
    }
}

impl<F> fmt::Debug for LookupFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupFn").finish_non_exhaustive()
    }
}
