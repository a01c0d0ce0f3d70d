//! Built-in validators.
//!
//! A validator turns the raw string value of one environment variable into a
//! typed value, or rejects it. Validators never see the source or the rest of
//! the schema, so each one can be exercised on its own.

use {
    crate::{Reason, Result, ValidationError},
    std::fmt,
};

/// Coerces a raw environment value into `Self::Output`.
pub trait Validator {
    type Output;

    /// Validate `value`, read from the variable named `key`.
    fn validate(&self, key: &str, value: &str) -> Result<Self::Output>;
}

impl<V: Validator + ?Sized> Validator for &V {
    type Output = V::Output;

    fn validate(&self, key: &str, value: &str) -> Result<Self::Output> {
        (**self).validate(key, value)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    type Output = V::Output;

    fn validate(&self, key: &str, value: &str) -> Result<Self::Output> {
        (**self).validate(key, value)
    }
}

// ── String ──────────────────────────────────────────────────────────────────

/// Returns the raw value unchanged. See [`as_string`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AsString;

#[must_use]
pub fn as_string() -> AsString {
    AsString
}

impl Validator for AsString {
    type Output = String;

    fn validate(&self, _key: &str, value: &str) -> Result<String> {
        Ok(value.to_owned())
    }
}

// ── Number ──────────────────────────────────────────────────────────────────

/// Parses a finite number. See [`as_number`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AsNumber;

/// Accepts decimal and exponent notation (`42`, `-1.5`, `.5`, `2e10`) and
/// unsigned `0x`, `0o` and `0b` integers. Surrounding whitespace is ignored.
/// Infinities and `NaN` are rejected.
#[must_use]
pub fn as_number() -> AsNumber {
    AsNumber
}

impl Validator for AsNumber {
    type Output = f64;

    fn validate(&self, key: &str, value: &str) -> Result<f64> {
        parse_number(value).ok_or_else(|| ValidationError::new(key, Reason::NotANumber))
    }
}

fn parse_number(value: &str) -> Option<f64> {
    let trimmed = trim_value(value);
    let radix = match trimmed.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };

    let number = match radix {
        Some(radix) => parse_radix(&trimmed[2..], radix)?,
        None => trimmed.parse::<f64>().ok()?,
    };
    number.is_finite().then_some(number)
}

/// Digits only: no sign, no separators, at least one digit. `radix` must be a
/// power of two.
///
/// Digits that no longer fit in a `u128` are dropped and folded into the
/// lowest bit, which keeps the single final conversion correctly rounded.
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    let bits_per_digit = radix.trailing_zeros() as i32;
    let mut acc: u128 = 0;
    let mut dropped = 0_i32;
    let mut sticky = false;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        let next = acc
            .checked_mul(u128::from(radix))
            .and_then(|a| a.checked_add(u128::from(digit)));
        match next {
            Some(next) if dropped == 0 => acc = next,
            _ => {
                dropped = dropped.saturating_add(1);
                sticky |= digit != 0;
            },
        }
    }
    if sticky {
        acc |= 1;
    }
    Some(acc as f64 * 2_f64.powi(dropped.saturating_mul(bits_per_digit)))
}

/// Strips whitespace and U+FEFF from both ends.
pub(crate) fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

// ── Boolean ─────────────────────────────────────────────────────────────────

/// Case-insensitive `true` / `false`. See [`as_boolean`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AsBoolean;

#[must_use]
pub fn as_boolean() -> AsBoolean {
    AsBoolean
}

impl Validator for AsBoolean {
    type Output = bool;

    fn validate(&self, key: &str, value: &str) -> Result<bool> {
        match value.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ValidationError::new(key, Reason::NotABoolean)),
        }
    }
}

// ── Enum ────────────────────────────────────────────────────────────────────

/// Accepts only values from a fixed, non-empty set. See [`as_enum`].
///
/// The output is the matching allowed value itself, so a caller-defined type
/// implementing `AsRef<str>` comes back as that type rather than a `String`.
#[derive(Debug, Clone)]
pub struct AsEnum<T> {
    values: Vec<T>,
}

/// Restrict a variable to one of `values`.
///
/// An empty array is rejected at compile time:
///
/// ```compile_fail
/// let _ = typenv::as_enum::<&str, 0>([]);
/// ```
#[must_use]
pub fn as_enum<T, const N: usize>(values: [T; N]) -> AsEnum<T>
where
    T: AsRef<str> + Clone,
{
    const { assert!(N > 0, "as_enum needs at least one allowed value") };
    AsEnum {
        values: values.into(),
    }
}

impl<T: AsRef<str> + Clone> AsEnum<T> {
    /// Build from a list known only at runtime. Returns `None` when the list
    /// is empty.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Option<Self> {
        let values: Vec<T> = values.into_iter().collect();
        (!values.is_empty()).then_some(Self { values })
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: AsRef<str> + Clone> Validator for AsEnum<T> {
    type Output = T;

    fn validate(&self, key: &str, value: &str) -> Result<T> {
        self.values
            .iter()
            .find(|allowed| allowed.as_ref() == value)
            .cloned()
            .ok_or_else(|| {
                let allowed = self
                    .values
                    .iter()
                    .map(|v| v.as_ref().to_owned())
                    .collect();
                ValidationError::new(key, Reason::NotOneOf(allowed))
            })
    }
}

// ── Custom ──────────────────────────────────────────────────────────────────

/// Adapts a closure into a [`Validator`]. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

/// Use `f(key, value)` as a validator.
///
/// ```
/// use typenv::{Validator, ValidationError, from_fn};
///
/// let port = from_fn(|key, value: &str| {
///     value
///         .parse::<u16>()
///         .map_err(|_| ValidationError::custom(key, "must be a port number"))
/// });
/// assert_eq!(port.validate("PORT", "8080"), Ok(8080));
/// ```
pub fn from_fn<F, T>(f: F) -> FromFn<F>
where
    F: Fn(&str, &str) -> Result<T>,
{
    FromFn { f }
}

impl<F, T> Validator for FromFn<F>
where
    F: Fn(&str, &str) -> Result<T>,
{
    type Output = T;

    fn validate(&self, key: &str, value: &str) -> Result<T> {
        (self.f)(key, value)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
