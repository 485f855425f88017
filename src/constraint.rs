//! The timezone constraint and its validator.
//!
//! [`TimezoneConstraint`] declares what is accepted; [`TimezoneValidator`]
//! applies it to a value and reports a [`Violation`] for rejected values.

use alloc::borrow::Cow;
use alloc::string::String;

use timezone_catalog::{IdentifierCanonicalizer, TimeZoneCatalog};

use crate::region::{constant_name, ZoneMask};
use crate::resolver::{ErrorCode, MembershipResolver, Verdict};
use crate::{TimezoneError, TimezoneResult};

/// The options of a timezone constraint.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneConstraint {
    /// The regions identifiers are accepted from.
    pub zone: ZoneMask,
    /// Restricts identifiers to one country. Requires
    /// [`ZoneMask::PER_COUNTRY`] in `zone`.
    pub country_code: Option<String>,
    /// Requires ICU to resolve the identifier.
    pub intl_compatible: bool,
    /// The violation message. `{{ value }}` and `{{ zone }}` are replaced
    /// with the rejected value and the zone.
    pub message: Cow<'static, str>,
}

impl Default for TimezoneConstraint {
    fn default() -> Self {
        Self {
            zone: ZoneMask::ALL,
            country_code: None,
            intl_compatible: false,
            message: Cow::Borrowed(Self::DEFAULT_MESSAGE),
        }
    }
}

impl TimezoneConstraint {
    pub const DEFAULT_MESSAGE: &'static str = "This value is not a valid timezone.";

    /// Accepts identifiers from the regions of `zone`.
    pub fn in_zone(zone: ZoneMask) -> TimezoneResult<Self> {
        let constraint = Self {
            zone,
            ..Self::default()
        };
        constraint.check_definition()?;
        Ok(constraint)
    }

    /// Accepts identifiers used in `country_code`.
    pub fn in_country<S: Into<String>>(country_code: S) -> TimezoneResult<Self> {
        let constraint = Self {
            zone: ZoneMask::PER_COUNTRY,
            country_code: Some(country_code.into()),
            ..Self::default()
        };
        constraint.check_definition()?;
        Ok(constraint)
    }

    #[must_use]
    pub fn with_intl_compatible(mut self, intl_compatible: bool) -> Self {
        self.intl_compatible = intl_compatible;
        self
    }

    #[must_use]
    pub fn with_message<S: Into<Cow<'static, str>>>(mut self, message: S) -> Self {
        self.message = message.into();
        self
    }

    /// Checks that the options form a usable constraint.
    pub fn check_definition(&self) -> TimezoneResult<()> {
        match (&self.country_code, self.zone.is_per_country()) {
            (Some(_), false) => Err(TimezoneError::definition().with_message(
                "the country code option requires the zone option to include PER_COUNTRY",
            )),
            (None, true) => Err(TimezoneError::definition()
                .with_message("the zone option PER_COUNTRY requires a country code")),
            _ if !self.zone.has_regions() && !self.zone.is_per_country() => {
                Err(TimezoneError::definition().with_message("the zone option selects no region"))
            }
            _ => Ok(()),
        }
    }
}

/// A rejected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Why the value was rejected.
    pub code: ErrorCode,
    /// The interpolated constraint message.
    pub message: String,
    /// The rejected value.
    pub invalid_value: String,
}

impl Violation {
    fn new(code: ErrorCode, constraint: &TimezoneConstraint, value: &str) -> Self {
        let quoted = alloc::format!("\"{value}\"");
        let zone = constant_name(constraint.zone.bits().into());
        let message = constraint
            .message
            .replace("{{ value }}", &quoted)
            .replace("{{ zone }}", &zone);
        Self {
            code,
            message,
            invalid_value: String::from(value),
        }
    }
}

/// Applies [`TimezoneConstraint`]s through a [`MembershipResolver`].
#[derive(Debug, Clone, Copy)]
pub struct TimezoneValidator<'r, P, I> {
    resolver: &'r MembershipResolver<P, I>,
}

impl<'r, P, I> TimezoneValidator<'r, P, I>
where
    P: TimeZoneCatalog,
    I: TimeZoneCatalog + IdentifierCanonicalizer,
{
    pub const fn new(resolver: &'r MembershipResolver<P, I>) -> Self {
        Self { resolver }
    }

    /// Validates `value` against `constraint`.
    ///
    /// Absent and empty values have nothing to check and never violate the
    /// constraint. A constraint with an invalid definition is an error.
    pub fn validate(
        &self,
        value: Option<&str>,
        constraint: &TimezoneConstraint,
    ) -> TimezoneResult<Option<Violation>> {
        constraint.check_definition()?;

        let Some(value) = value.filter(|value| !value.is_empty()) else {
            return Ok(None);
        };

        let verdict = self.resolver.resolve(
            value,
            constraint.zone,
            constraint.country_code.as_deref(),
            constraint.intl_compatible,
        );
        Ok(match verdict {
            Verdict::Valid => None,
            Verdict::Invalid(code) => Some(Violation::new(code, constraint, value)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{TimezoneConstraint, TimezoneValidator, Violation};
    use crate::{ErrorCode, ErrorKind, MembershipResolver, Region, ZoneMask};
    use alloc::string::String;
    use timezone_catalog::{CatalogSource, StaticCatalog};

    fn resolver() -> MembershipResolver<StaticCatalog, StaticCatalog> {
        let platform =
            StaticCatalog::new(CatalogSource::Platform, ["Europe/Paris", "America/New_York"])
                .with_country("FR", ["Europe/Paris"]);
        let icu = StaticCatalog::new(CatalogSource::Icu, ["Europe/Paris", "America/New_York"])
            .with_country("FR", ["Europe/Paris"]);
        MembershipResolver::new(platform, icu)
    }

    #[test]
    fn definition_checks() {
        assert!(TimezoneConstraint::default().check_definition().is_ok());
        assert!(TimezoneConstraint::in_zone(Region::Europe.into()).is_ok());
        assert!(TimezoneConstraint::in_country("FR").is_ok());

        let err = TimezoneConstraint::in_zone(ZoneMask::PER_COUNTRY).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Definition);
        let err = TimezoneConstraint::in_zone(ZoneMask::EMPTY).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Definition);

        let mut constraint = TimezoneConstraint::default();
        constraint.country_code = Some(String::from("FR"));
        assert_eq!(
            constraint.check_definition().unwrap_err().kind(),
            ErrorKind::Definition
        );
    }

    #[test]
    fn empty_values_are_not_checked() {
        let resolver = resolver();
        let validator = TimezoneValidator::new(&resolver);
        let constraint = TimezoneConstraint::default();
        assert_eq!(validator.validate(None, &constraint), Ok(None));
        assert_eq!(validator.validate(Some(""), &constraint), Ok(None));
    }

    #[test]
    fn violations_carry_code_and_value() {
        let resolver = resolver();
        let validator = TimezoneValidator::new(&resolver);

        let constraint = TimezoneConstraint::default();
        assert_eq!(validator.validate(Some("Europe/Paris"), &constraint), Ok(None));
        assert_eq!(
            validator.validate(Some("Mars/Olympus_Mons"), &constraint),
            Ok(Some(Violation {
                code: ErrorCode::NotRecognized,
                message: String::from(TimezoneConstraint::DEFAULT_MESSAGE),
                invalid_value: String::from("Mars/Olympus_Mons"),
            }))
        );

        let constraint = TimezoneConstraint::in_zone(Region::Europe.into())
            .unwrap()
            .with_message("{{ value }} is not in {{ zone }}.");
        let violation = validator
            .validate(Some("America/New_York"), &constraint)
            .unwrap()
            .unwrap();
        assert_eq!(violation.code, ErrorCode::NotInZone);
        assert_eq!(violation.message, "\"America/New_York\" is not in EUROPE.");

        let constraint = TimezoneConstraint::in_country("FR").unwrap();
        let violation = validator
            .validate(Some("America/New_York"), &constraint)
            .unwrap()
            .unwrap();
        assert_eq!(violation.code, ErrorCode::NotInCountry);

        let constraint = TimezoneConstraint::default().with_intl_compatible(true);
        let violation = validator
            .validate(Some("Not/A/Zone"), &constraint)
            .unwrap()
            .unwrap();
        assert_eq!(violation.code, ErrorCode::IntlIncompatible);
    }

    #[test]
    fn invalid_definitions_are_errors() {
        let resolver = resolver();
        let validator = TimezoneValidator::new(&resolver);
        let mut constraint = TimezoneConstraint::default();
        constraint.zone = ZoneMask::PER_COUNTRY;
        assert_eq!(
            validator
                .validate(Some("Europe/Paris"), &constraint)
                .unwrap_err()
                .kind(),
            ErrorKind::Definition
        );
    }

    #[cfg(feature = "compiled_data")]
    #[test]
    fn compiled_validator() {
        let validator = TimezoneValidator::compiled();
        let constraint = TimezoneConstraint::in_country("fr").unwrap();
        assert_eq!(validator.validate(Some("Europe/Paris"), &constraint), Ok(None));
        assert_eq!(
            validator
                .validate(Some("Europe/Paris"), &TimezoneConstraint::in_country("US").unwrap())
                .unwrap()
                .map(|violation| violation.code),
            Some(ErrorCode::NotInCountry)
        );
    }
}
