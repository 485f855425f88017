//! An in-memory catalog.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use icu_locale_core::subtags::Region;

use crate::{
    CatalogSource, CountryIndex, IdentifierCanonicalizer, Identifier, TimeZoneCatalog,
    UNKNOWN_IDENTIFIER,
};

/// A catalog built from identifiers supplied by the caller.
///
/// ```rust
/// use timezone_catalog::{CatalogSource, StaticCatalog, TimeZoneCatalog};
///
/// let catalog = StaticCatalog::new(CatalogSource::Icu, ["Europe/Paris", "Europe/Berlin"])
///     .with_country("FR", ["Europe/Paris"]);
///
/// assert!(catalog.contains("Europe/Berlin"));
/// assert_eq!(catalog.identifiers_for_country("fr").len(), 1);
/// assert!(catalog.identifiers_for_country("DE").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    source: CatalogSource,
    identifiers: Vec<Identifier>,
    countries: CountryIndex,
}

impl StaticCatalog {
    pub fn new<I, S>(source: CatalogSource, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Identifier>,
    {
        Self {
            source,
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            countries: CountryIndex::new(),
        }
    }

    /// Binds `identifiers` to `country_code`.
    ///
    /// A malformed country code binds nothing.
    pub fn with_country<I, S>(mut self, country_code: &str, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Identifier>,
    {
        let Ok(region) = Region::try_from_str(country_code) else {
            #[cfg(feature = "log")]
            log::warn!("ignoring bindings for malformed country code {country_code:?}");
            return self;
        };
        for identifier in identifiers {
            self.countries.insert(region, identifier.into());
        }
        self
    }
}

impl TimeZoneCatalog for StaticCatalog {
    fn source(&self) -> CatalogSource {
        self.source
    }

    fn available_identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    fn country_index(&self) -> &CountryIndex {
        &self.countries
    }
}

// There is no alias data here, so every known identifier is its own
// canonical form.
impl IdentifierCanonicalizer for StaticCatalog {
    fn canonicalize_identifier(&self, ident: &str) -> Cow<'_, str> {
        self.identifiers
            .iter()
            .find(|id| ***id == *ident)
            .map_or(Cow::Borrowed(UNKNOWN_IDENTIFIER), |id| Cow::Borrowed(&**id))
    }
}

#[cfg(test)]
mod tests {
    use super::StaticCatalog;
    use crate::{CatalogSource, IdentifierCanonicalizer, TimeZoneCatalog, UNKNOWN_IDENTIFIER};
    use alloc::string::String;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(
            CatalogSource::Platform,
            ["Europe/Paris", "America/New_York", "UTC"],
        )
        .with_country("FR", ["Europe/Paris"])
        .with_country("US", [String::from("America/New_York")])
        .with_country("not-a-code", ["UTC"])
    }

    #[test]
    fn membership_is_case_sensitive() {
        let catalog = catalog();
        assert!(catalog.contains("Europe/Paris"));
        assert!(!catalog.contains("europe/paris"));
        assert!(!catalog.contains("Europe/Berlin"));
    }

    #[test]
    fn country_lookup_misses_are_empty() {
        let catalog = catalog();
        assert_eq!(catalog.identifiers_for_country("FR"), &["Europe/Paris"]);
        assert!(catalog.identifiers_for_country("ZZ").is_empty());
        assert!(catalog.identifiers_for_country("not-a-code").is_empty());
        assert_eq!(catalog.country_index().countries().count(), 2);
    }

    #[test]
    fn canonicalization() {
        let catalog = catalog();
        assert_eq!(
            catalog.canonicalize_identifier("America/New_York"),
            "America/New_York"
        );
        assert_eq!(
            catalog.canonicalize_identifier("america/new_york"),
            UNKNOWN_IDENTIFIER
        );
        assert_eq!(
            catalog.canonicalize_identifier("Mars/Olympus_Mons"),
            UNKNOWN_IDENTIFIER
        );
    }
}
