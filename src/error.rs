//! This module implements `TimezoneError`.

use alloc::borrow::Cow;
use alloc::format;
use core::fmt;

use timezone_catalog::CatalogError;

/// `TimezoneError`'s error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A constraint was declared with an invalid combination of options.
    Definition,
    /// Reference data could not be loaded.
    Data,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definition => "ConstraintDefinitionError",
            Self::Data => "DataError",
        }
        .fmt(f)
    }
}

/// The error type for `timezone_validator`.
///
/// Validation failures are not errors; see [`Verdict`](crate::Verdict).
#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl TimezoneError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates a constraint definition error.
    #[inline]
    #[must_use]
    pub const fn definition() -> Self {
        Self::new(ErrorKind::Definition)
    }

    /// Creates a reference data error.
    #[inline]
    #[must_use]
    pub const fn data() -> Self {
        Self::new(ErrorKind::Data)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for TimezoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for TimezoneError {}

impl From<CatalogError> for TimezoneError {
    fn from(value: CatalogError) -> Self {
        Self::data().with_message(format!("{value}"))
    }
}
