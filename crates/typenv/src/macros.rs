//! Declarative record types.

/// Declare a struct whose fields are loaded from environment variables.
///
/// Each field names its variable and validator. The declared field type must
/// match the validator's output, so a mismatch is a compile error. The
/// generated `load` reads the process environment and `load_from` reads any
/// [`EnvSource`](crate::EnvSource); both resolve fields in declaration order
/// and fail on the first invalid or missing variable.
///
/// ```
/// use typenv::{as_boolean, as_enum, as_number, as_string, typed_env};
///
/// typed_env! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct ServerEnv {
///         pub host: String = "HOST" => as_string(),
///         pub port: f64 = "PORT" => as_number(),
///         pub verbose: bool = "VERBOSE" => as_boolean(),
///         pub mode: &'static str = "MODE" => as_enum(["dev", "prod"]),
///     }
/// }
///
/// let env = ServerEnv::load_from(&[
///     ("HOST", "0.0.0.0"),
///     ("PORT", "8080"),
///     ("VERBOSE", "False"),
///     ("MODE", "prod"),
/// ])?;
/// assert_eq!(env.host, "0.0.0.0");
/// assert_eq!(env.mode, "prod");
/// # Ok::<(), typenv::ValidationError>(())
/// ```
#[macro_export]
macro_rules! typed_env {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty = $key:expr => $validator:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )+
        }

        impl $name {
            /// Load from the process environment.
            $vis fn load() -> $crate::Result<$crate::TypedEnv<Self>> {
                Self::load_from(&$crate::ProcessEnv)
            }

            /// Load from `source`.
            $vis fn load_from<E>(source: &E) -> $crate::Result<$crate::TypedEnv<Self>>
            where
                E: $crate::EnvSource + ?Sized,
            {
                let record = Self {
                    $(
                        $field: $crate::Schema::build(
                            &$crate::field($key, $validator),
                            source,
                        )?,
                    )+
                };
                Ok($crate::__private::loaded(::core::stringify!($name), record))
            }
        }
    };
}
