//! Typed, validated configuration read from environment variables.
//!
//! Declare which variables an application needs and how each one is parsed,
//! then load them all at once. Loading is all-or-nothing: the first missing or
//! invalid variable aborts with a [`ValidationError`] whose message reads
//! `Env var <KEY> <reason>`.
//!
//! Built-in validators: [`as_string`], [`as_number`], [`as_boolean`] and
//! [`as_enum`]. Closures become validators through [`from_fn`].
//!
//! Schemas are tuples of [`Field`]s (or a struct declared with
//! [`typed_env!`]); the result type follows from the validators at compile
//! time. Values come from the process environment by default, or from any
//! [`EnvSource`].

pub mod env;
pub mod error;
mod macros;
pub mod schema;
pub mod source;
pub mod validator;

pub use {
    env::{TypedEnv, create_env, create_env_from},
    error::{Error, Reason, Result, ValidationError},
    schema::{Field, Schema, field},
    source::{EnvSource, LookupFn, ProcessEnv, lookup_fn},
    validator::{
        AsBoolean, AsEnum, AsNumber, AsString, FromFn, Validator, as_boolean, as_enum, as_number,
        as_string, from_fn,
    },
};

#[doc(hidden)]
pub mod __private {
    use crate::TypedEnv;

    /// Freeze a record built by [`typed_env!`](crate::typed_env).
    pub fn loaded<T>(record_name: &str, record: T) -> TypedEnv<T> {
        tracing::debug!(record = record_name, "typed environment loaded");
        TypedEnv::freeze(record)
    }
}
