//! Filtering catalogs by zone mask.

use alloc::collections::BTreeSet;

use timezone_catalog::TimeZoneCatalog;

use crate::region::{Region, ZoneMask};

/// Returns the identifiers of `catalog` that fall inside `zone`.
///
/// A mask covering every region returns the whole catalog. Otherwise an
/// identifier is kept when it starts, ASCII case-insensitively, with
/// `prefix + "/"` for the prefix of any region in `zone`. A mask with no
/// region yields an empty set.
pub fn filter_by_zone<C>(catalog: &C, zone: ZoneMask) -> BTreeSet<&str>
where
    C: TimeZoneCatalog + ?Sized,
{
    catalog
        .available_identifiers()
        .iter()
        .map(|id| &**id)
        .filter(|id| matches_zone(id, zone))
        .collect()
}

/// Returns whether [`filter_by_zone`] keeps `identifier`.
pub fn matches_zone(identifier: &str, zone: ZoneMask) -> bool {
    zone.contains_all_regions() || is_in_zone(identifier, zone)
}

/// Restricts an already scoped set of identifiers (e.g. a country's) to
/// `zone`.
///
/// Unlike [`filter_by_zone`], a mask without any region leaves the
/// identifiers untouched: such a mask carries no geography to narrow by.
pub fn narrow_to_zone<'a, I>(identifiers: I, zone: ZoneMask) -> BTreeSet<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    identifiers
        .into_iter()
        .filter(|id| survives_narrowing(id, zone))
        .collect()
}

/// Returns whether [`narrow_to_zone`] keeps `identifier`.
pub fn survives_narrowing(identifier: &str, zone: ZoneMask) -> bool {
    !zone.has_regions() || matches_zone(identifier, zone)
}

/// Returns whether `identifier` belongs to one of the regions of `zone`.
pub fn is_in_zone(identifier: &str, zone: ZoneMask) -> bool {
    zone.regions().any(|region| is_in_region(identifier, region))
}

/// Matches `prefix + "/"` of `region`.
///
/// [`Region::Utc`] also matches the bare `UTC` identifier, which is how the
/// platform database groups it. The rule is applied to identifiers of either
/// catalog, so the ICU catalog's `UTC` is in the UTC region too.
fn is_in_region(identifier: &str, region: Region) -> bool {
    let prefix = region.prefix().as_bytes();
    let identifier = identifier.as_bytes();
    if region == Region::Utc && identifier.eq_ignore_ascii_case(prefix) {
        return true;
    }
    identifier
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        && identifier.get(prefix.len()) == Some(&b'/')
}
