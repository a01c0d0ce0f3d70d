//! Schemas: which keys to read and how to validate each one.
//!
//! The output shape of a schema is computed by the type system through
//! [`Schema::Env`]. A single [`Field`] yields its validator's output, a tuple
//! of schemas yields a tuple of outputs, and a homogeneous list of fields
//! yields a map keyed by variable name.

use {
    crate::{EnvSource, Result, ValidationError, Validator, validator::trim_value},
    std::collections::BTreeMap,
    tracing::debug,
};

/// A set of keys paired with validators.
pub trait Schema {
    /// The record produced when every key validates.
    type Env;

    /// Resolve every key against `source`, in declaration order, stopping at
    /// the first failure.
    fn build<S: EnvSource + ?Sized>(&self, source: &S) -> Result<Self::Env>;
}

impl<T: Schema + ?Sized> Schema for &T {
    type Env = T::Env;

    fn build<S: EnvSource + ?Sized>(&self, source: &S) -> Result<Self::Env> {
        (**self).build(source)
    }
}

/// One environment variable and its validator.
#[derive(Debug, Clone)]
pub struct Field<V> {
    key: String,
    validator: V,
}

impl<V: Validator> Field<V> {
    #[must_use]
    pub fn new(key: impl Into<String>, validator: V) -> Self {
        Self {
            key: key.into(),
            validator,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Shorthand for [`Field::new`].
#[must_use]
pub fn field<V: Validator>(key: impl Into<String>, validator: V) -> Field<V> {
    Field::new(key, validator)
}

impl<V: Validator> Schema for Field<V> {
    type Env = V::Output;

    fn build<S: EnvSource + ?Sized>(&self, source: &S) -> Result<V::Output> {
        let key = self.key.as_str();
        let Some(value) = source.lookup(key).filter(|v| !trim_value(v).is_empty()) else {
            debug!(key, "env var is not defined");
            return Err(ValidationError::not_defined(key));
        };
        match self.validator.validate(key, &value) {
            Ok(out) => {
                debug!(key, "env var validated");
                Ok(out)
            },
            Err(e) => {
                debug!(key, reason = %e.reason, "env var rejected");
                Err(e)
            },
        }
    }
}

/// Later duplicates overwrite earlier ones in the resulting map; every entry
/// is still validated.
impl<V: Validator> Schema for [Field<V>] {
    type Env = BTreeMap<String, V::Output>;

    fn build<S: EnvSource + ?Sized>(&self, source: &S) -> Result<Self::Env> {
        let mut env = BTreeMap::new();
        for field in self {
            let value = field.build(source)?;
            env.insert(field.key().to_owned(), value);
        }
        Ok(env)
    }
}

impl<V: Validator, const N: usize> Schema for [Field<V>; N] {
    type Env = BTreeMap<String, V::Output>;

    fn build<S: EnvSource + ?Sized>(&self, source: &S) -> Result<Self::Env> {
        self.as_slice().build(source)
    }
}

impl<V: Validator> Schema for Vec<Field<V>> {
    type Env = BTreeMap<String, V::Output>;

    fn build<S: EnvSource + ?Sized>(&self, source: &S) -> Result<Self::Env> {
        self.as_slice().build(source)
    }
}

/// The empty schema reads nothing and always succeeds.
impl Schema for () {
    type Env = ();

    fn build<S: EnvSource + ?Sized>(&self, _source: &S) -> Result<()> {
        Ok(())
    }
}

macro_rules! impl_tuple_schema {
    ($($name:ident),+) => {
        impl<$($name: Schema),+> Schema for ($($name,)+) {
            type Env = ($($name::Env,)+);

            #[allow(non_snake_case)]
            fn build<S: EnvSource + ?Sized>(&self, source: &S) -> Result<Self::Env> {
                let ($($name,)+) = self;
                Ok(($($name.build(source)?,)+))
            }
        }
    };
}

impl_tuple_schema!(A);
impl_tuple_schema!(A, B);
impl_tuple_schema!(A, B, C);
impl_tuple_schema!(A, B, C, D);
impl_tuple_schema!(A, B, C, D, E);
impl_tuple_schema!(A, B, C, D, E, F);
impl_tuple_schema!(A, B, C, D, E, F, G);
impl_tuple_schema!(A, B, C, D, E, F, G, H);
impl_tuple_schema!(A, B, C, D, E, F, G, H, I);
impl_tuple_schema!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_schema!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_schema!(A, B, C, D, E, F, G, H, I, J, K, L);
