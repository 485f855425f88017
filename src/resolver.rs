//! This module implements `MembershipResolver`, `Verdict` and `ErrorCode`.

use core::fmt;

use timezone_catalog::{
    IdentifierCanonicalizer, Identifier, TimeZoneCatalog, UNKNOWN_IDENTIFIER,
};

use crate::filter::{matches_zone, survives_narrowing};
use crate::region::ZoneMask;


/// The reason an identifier was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// ICU could not resolve the identifier.
    IntlIncompatible,
    /// The identifier is not used in the requested country.
    NotInCountry,
    /// The identifier is outside of the requested regions.
    NotInZone,
    /// The identifier is not known to either catalog.
    NotRecognized,
}

impl ErrorCode {
    /// A stable, machine readable code for this error.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IntlIncompatible => "45863c26-88dc-41ba-bf53-c73bd1f7e90d",
            Self::NotInCountry => "c4a22222-dc92-4fc0-abb0-d95b268c7d0b",
            Self::NotInZone => "b57767b1-36c0-40ac-a3d7-629420c775b8",
            Self::NotRecognized => "5ce113e6-5e64-4ea2-90fe-d2233956db13",
        }
    }

    /// The symbolic name of this error.
    pub const fn name(self) -> &'static str {
        match self {
            Self::IntlIncompatible => "TIMEZONE_IDENTIFIER_INTL_ERROR",
            Self::NotInCountry => "TIMEZONE_IDENTIFIER_IN_COUNTRY_ERROR",
            Self::NotInZone => "TIMEZONE_IDENTIFIER_IN_ZONE_ERROR",
            Self::NotRecognized => "TIMEZONE_IDENTIFIER_ERROR",
        }
    }

    /// Looks an error up by its stable code.
    pub fn from_code(code: &str) -> Option<Self> {
        [
            Self::IntlIncompatible,
            Self::NotInCountry,
            Self::NotInZone,
            Self::NotRecognized,
        ]
        .into_iter()
        .find(|error| error.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// The outcome of resolving an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Valid,
    Invalid(ErrorCode),
}

impl Verdict {
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the error code of an invalid verdict.
    pub const fn error_code(self) -> Option<ErrorCode> {
        match self {
            Self::Valid => None,
            Self::Invalid(code) => Some(code),
        }
    }
}

/// Decides whether a string names a known time zone identifier, optionally
/// scoped to regions or to a country.
///
/// Identifiers are checked against two independent catalogs, the platform
/// catalog `P` and the ICU catalog `I`; being present in either one is
/// enough. The resolver holds no mutable state, so `resolve` can be called
/// concurrently through a shared reference.
#[derive(Debug, Clone)]
pub struct MembershipResolver<P, I> {
    platform: P,
    icu: I,
}

impl<P, I> MembershipResolver<P, I> {
    pub const fn new(platform: P, icu: I) -> Self {
        Self { platform, icu }
    }

    /// The platform catalog.
    pub const fn platform(&self) -> &P {
        &self.platform
    }

    /// The ICU catalog.
    pub const fn icu(&self) -> &I {
        &self.icu
    }
}

impl<P, I> MembershipResolver<P, I>
where
    P: TimeZoneCatalog,
    I: TimeZoneCatalog + IdentifierCanonicalizer,
{
    /// Resolves `value` against the catalogs.
    ///
    /// - With `intl_compatible`, a value ICU canonicalizes to `Etc/Unknown`
    ///   is rejected first, whatever the zone or country.
    /// - With a `country_code`, the candidates are the country's
    ///   identifiers; the platform's are further narrowed to `zone`.
    /// - Otherwise the candidates are both catalogs filtered by `zone`.
    ///
    /// Unknown or malformed country codes are not errors; they have no
    /// identifiers.
    ///
    /// `value` is expected to be non-empty: absent values are filtered out by
    /// the caller before resolution.
    pub fn resolve(
        &self,
        value: &str,
        zone: ZoneMask,
        country_code: Option<&str>,
        intl_compatible: bool,
    ) -> Verdict {
        let verdict = self.classify(value, zone, country_code, intl_compatible);
        #[cfg(feature = "log")]
        log::trace!(
            "resolved {value:?} (zone: {zone}, country: {country_code:?}, intl: {intl_compatible}) to {verdict:?}"
        );
        verdict
    }

    fn classify(
        &self,
        value: &str,
        zone: ZoneMask,
        country_code: Option<&str>,
        intl_compatible: bool,
    ) -> Verdict {
        if intl_compatible && self.icu.canonicalize_identifier(value) == UNKNOWN_IDENTIFIER {
            return Verdict::Invalid(ErrorCode::IntlIncompatible);
        }

        if self.is_candidate(value, zone, country_code) {
            return Verdict::Valid;
        }

        let code = if country_code.is_some() {
            ErrorCode::NotInCountry
        } else if !zone.contains_all_regions() {
            ErrorCode::NotInZone
        } else {
            ErrorCode::NotRecognized
        };
        Verdict::Invalid(code)
    }

    /// Tests `value` against the platform and ICU candidates.
    ///
    /// With a country code the candidates are the country's identifiers, the
    /// platform's narrowed to `zone` (see [`survives_narrowing`]). A country
    /// already implies a geography, so ICU's country set is taken as is.
    /// Without one, the candidates are each catalog filtered by `zone` (see
    /// [`filter_by_zone`](crate::filter_by_zone)).
    fn is_candidate(&self, value: &str, zone: ZoneMask, country_code: Option<&str>) -> bool {
        match country_code {
            Some(code) => {
                (survives_narrowing(value, zone)
                    && has_identifier(self.platform.identifiers_for_country(code), value))
                    || has_identifier(self.icu.identifiers_for_country(code), value)
            }
            None => {
                matches_zone(value, zone)
                    && (self.platform.contains(value) || self.icu.contains(value))
            }
        }
    }
}

fn has_identifier(identifiers: &[Identifier], value: &str) -> bool {
    identifiers.iter().any(|id| **id == *value)
}
