//! Building the typed environment.

use {
    crate::{EnvSource, ProcessEnv, Result, Schema},
    std::{fmt, ops::Deref},
    tracing::debug,
};

/// An immutable, validated environment record.
///
/// Fields are readable through `Deref`, but there is no way to obtain a
/// mutable reference, so a loaded environment cannot be changed:
///
/// ```compile_fail
/// use typenv::{as_string, create_env_from, field};
///
/// let mut env = create_env_from(&field("NAME", as_string()), &[("NAME", "a")]).unwrap();
/// env.push('b');
/// ```
///
/// Cloning the inner value yields an independent copy; changing it leaves the
/// original untouched.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypedEnv<T> {
    inner: T,
}

impl<T> TypedEnv<T> {
    pub(crate) fn freeze(inner: T) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn get(&self) -> &T {
        &self.inner
    }
}

impl<T> Deref for TypedEnv<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> AsRef<T> for TypedEnv<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for TypedEnv<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for TypedEnv<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for TypedEnv<T> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

/// Validate `schema` against the process environment.
///
/// Intended to run once at startup; any error should usually abort the
/// process with the error message.
///
/// ```no_run
/// use typenv::{as_boolean, as_enum, as_number, create_env, field};
///
/// let env = create_env(&(
///     field("DATABASE_URL", typenv::as_string()),
///     field("PORT", as_number()),
///     field("DEBUG", as_boolean()),
///     field("MODE", as_enum(["dev", "staging", "prod"])),
/// ))?;
/// let (url, port, debug, mode) = &*env;
/// println!("{url} {port} {debug} {mode}");
/// # Ok::<(), typenv::ValidationError>(())
/// ```
pub fn create_env<S: Schema>(schema: &S) -> Result<TypedEnv<S::Env>> {
    create_env_from(schema, &ProcessEnv)
}

/// Validate `schema` against an arbitrary key/value source.
pub fn create_env_from<S, E>(schema: &S, source: &E) -> Result<TypedEnv<S::Env>>
where
    S: Schema + ?Sized,
    E: EnvSource + ?Sized,
{
    let env = schema.build(source)?;
    debug!("typed environment loaded");
    Ok(TypedEnv::freeze(env))
}
