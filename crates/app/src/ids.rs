//! Typed numeric identifiers.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use thiserror::Error;

/// Error returned when an identifier string cannot be parsed.
///
/// Non-numeric input and non-positive values are both rejected; an invalid
/// id is never coerced to a sentinel value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("identifier must be a positive integer")]
pub struct ParseIdError;

/// A row identifier tagged with the entity it belongs to.
pub struct TypedId<T>(i64, PhantomData<T>);

impl<T> TypedId<T> {
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id, PhantomData)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl<T> FromStr for TypedId<T> {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: i64 = s.parse().map_err(|_| ParseIdError)?;

        if id < 1 {
            return Err(ParseIdError);
        }

        Ok(Self::from_i64(id))
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<i64> for TypedId<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<TypedId<T>> for i64 {
    fn from(value: TypedId<T>) -> Self {
        value.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn parses_positive_integers() {
        let id: TypedId<Marker> = "42".parse().unwrap();

        assert_eq!(id.get(), 42);
    }

    #[test]
    fn rejects_non_numeric_input() {
        let result: Result<TypedId<Marker>, _> = "abc".parse();

        assert_eq!(result, Err(ParseIdError));
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert_eq!("0".parse::<TypedId<Marker>>(), Err(ParseIdError));
        assert_eq!("-3".parse::<TypedId<Marker>>(), Err(ParseIdError));
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert_eq!("12abc".parse::<TypedId<Marker>>(), Err(ParseIdError));
    }
}
