//! The `TimeZoneCatalog` trait.

use alloc::borrow::Cow;
use core::fmt;

use crate::CountryIndex;

/// A time zone identifier as stored by a catalog.
pub type Identifier = Cow<'static, str>;

/// The canonical identifier ICU reports for a string it could not resolve.
pub const UNKNOWN_IDENTIFIER: &str = "Etc/Unknown";

/// The data source a catalog was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogSource {
    /// The host platform's time zone database (IANA tzdb).
    Platform,
    /// The ICU time zone database.
    Icu,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Platform => "platform",
            Self::Icu => "icu",
        }
        .fmt(f)
    }
}

/// The `TimeZoneCatalog` trait provides read-only access to the identifiers
/// known by one data source.
///
/// Catalogs are built once and never mutated afterwards, so a catalog can be
/// shared freely between threads.
pub trait TimeZoneCatalog {
    /// The data source backing this catalog.
    fn source(&self) -> CatalogSource;

    /// Every identifier of this catalog, unfiltered.
    fn available_identifiers(&self) -> &[Identifier];

    /// The country bindings of this catalog.
    fn country_index(&self) -> &CountryIndex;

    /// Returns the identifiers bound to `country_code`.
    ///
    /// A malformed or unknown country code is not an error: it yields an
    /// empty slice.
    fn identifiers_for_country(&self, country_code: &str) -> &[Identifier] {
        match self.country_index().get(country_code) {
            Some(identifiers) => identifiers,
            None => {
                #[cfg(feature = "log")]
                log::debug!(
                    "no {} time zones known for country code {country_code:?}",
                    self.source()
                );
                &[]
            }
        }
    }

    /// Returns whether `identifier` is exactly (case-sensitively) present.
    fn contains(&self, identifier: &str) -> bool {
        self.available_identifiers()
            .iter()
            .any(|id| **id == *identifier)
    }
}

/// Resolves an identifier to its canonical form.
pub trait IdentifierCanonicalizer {
    /// Returns the canonical identifier for `ident`, or
    /// [`UNKNOWN_IDENTIFIER`] when `ident` cannot be resolved.
    fn canonicalize_identifier(&self, ident: &str) -> Cow<'_, str>;
}

impl<T: TimeZoneCatalog + ?Sized> TimeZoneCatalog for &T {
    fn source(&self) -> CatalogSource {
        (**self).source()
    }

    fn available_identifiers(&self) -> &[Identifier] {
        (**self).available_identifiers()
    }

    fn country_index(&self) -> &CountryIndex {
        (**self).country_index()
    }

    fn identifiers_for_country(&self, country_code: &str) -> &[Identifier] {
        (**self).identifiers_for_country(country_code)
    }

    fn contains(&self, identifier: &str) -> bool {
        (**self).contains(identifier)
    }
}

impl<T: IdentifierCanonicalizer + ?Sized> IdentifierCanonicalizer for &T {
    fn canonicalize_identifier(&self, ident: &str) -> Cow<'_, str> {
        (**self).canonicalize_identifier(ident)
    }
}
