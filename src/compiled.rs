//! A resolver over the compiled catalogs.
//!
//! [`MembershipResolver::compiled`] cannot fail. If the bundled
//! `zoneinfo64.res` region table does not decode (e.g. on a big endian
//! target), a warning is logged and every ICU country lookup is empty from
//! then on, so country checks rely on the platform catalog alone. Use
//! [`MembershipResolver::try_new_compiled`] to surface that failure instead.

use std::path::Path;
use std::sync::LazyLock;

use timezone_catalog::{IcuCatalog, TzdbCatalog};

use crate::constraint::TimezoneValidator;
use crate::{MembershipResolver, TimezoneResult, Verdict, ZoneMask};

/// A [`MembershipResolver`] over the bundled tzdb and the ICU compiled data.
pub type CompiledResolver = MembershipResolver<TzdbCatalog, IcuCatalog>;

static COMPILED_RESOLVER: LazyLock<CompiledResolver> =
    LazyLock::new(|| MembershipResolver::new(TzdbCatalog::new(), IcuCatalog::new()));

impl MembershipResolver<TzdbCatalog, IcuCatalog> {
    /// Returns the process-wide resolver over the compiled catalogs.
    ///
    /// The catalogs are built on first use. A region table that fails to
    /// decode leaves the ICU catalog without country bindings; see
    /// [`IcuCatalog::new`].
    pub fn compiled() -> &'static Self {
        &COMPILED_RESOLVER
    }

    /// Creates a resolver over the compiled catalogs, failing if the bundled
    /// ICU region table cannot be decoded.
    pub fn try_new_compiled() -> TimezoneResult<Self> {
        let icu = IcuCatalog::try_new()?;
        Ok(Self::new(TzdbCatalog::new(), icu))
    }

    /// Creates a resolver whose platform catalog is read from a zoneinfo
    /// directory, e.g. `/usr/share/zoneinfo`.
    pub fn try_from_zoneinfo_directory(zoneinfo_dir: &Path) -> TimezoneResult<Self> {
        let platform = TzdbCatalog::try_from_zoneinfo_directory(zoneinfo_dir)?;
        let icu = IcuCatalog::try_new()?;
        Ok(Self::new(platform, icu))
    }
}

impl TimezoneValidator<'static, TzdbCatalog, IcuCatalog> {
    /// Returns a validator over the compiled catalogs.
    pub fn compiled() -> Self {
        Self::new(CompiledResolver::compiled())
    }
}

/// Resolves `value` with the compiled catalogs.
///
/// See [`MembershipResolver::resolve`].
///
/// ```rust
/// use timezone_validator::{ErrorCode, Region, Verdict, ZoneMask};
///
/// assert_eq!(
///     timezone_validator::resolve("Europe/Paris", ZoneMask::ALL, Some("FR"), false),
///     Verdict::Valid,
/// );
/// assert_eq!(
///     timezone_validator::resolve("America/New_York", Region::Europe.into(), None, false),
///     Verdict::Invalid(ErrorCode::NotInZone),
/// );
/// ```
pub fn resolve(
    value: &str,
    zone: ZoneMask,
    country_code: Option<&str>,
    intl_compatible: bool,
) -> Verdict {
    CompiledResolver::compiled().resolve(value, zone, country_code, intl_compatible)
}

#[cfg(test)]
mod tests {
    use super::CompiledResolver;
    use crate::{ErrorKind, Verdict, ZoneMask};
    use std::path::Path;
    use timezone_catalog::TimeZoneCatalog;

    #[test]
    fn compiled_is_a_singleton() {
        assert!(core::ptr::eq(
            CompiledResolver::compiled(),
            CompiledResolver::compiled()
        ));
    }

    #[test]
    fn compiled_icu_country_bindings() {
        let resolver = CompiledResolver::try_new_compiled().unwrap();
        assert!(!resolver.icu().country_index().is_empty());
        assert!(!CompiledResolver::compiled().icu().country_index().is_empty());
        assert_eq!(
            resolver.resolve("Europe/Kyiv", ZoneMask::PER_COUNTRY, Some("UA"), false),
            Verdict::Valid
        );
    }

    #[test]
    fn missing_zoneinfo_directory() {
        let err = CompiledResolver::try_from_zoneinfo_directory(Path::new(
            "/this/zoneinfo/does/not/exist",
        ))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);
    }
}
