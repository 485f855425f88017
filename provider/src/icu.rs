//! The ICU catalog.
//!
//! Identifiers and canonicalization come from ICU4X's compiled CLDR data
//! (`icu_time`). CLDR carries no country data for time zones, so the country
//! bindings are taken from the `Regions` table of ICU4C's `zoneinfo64.res`,
//! the same table ICU4C enumerates zones by country from. A `zoneinfo64.res`
//! of the same tzdb release as the bundled `zone.tab` ships with this crate.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use icu_time::zone::iana::IanaParserExtended;
use icu_time::TimeZone;
use zoneinfo64::ZoneInfo64;

use crate::{
    CatalogError, CatalogSource, CountryIndex, IdentifierCanonicalizer, Identifier,
    TimeZoneCatalog, UNKNOWN_IDENTIFIER,
};

/// The bundled `zoneinfo64.res` (tzdb 2025b).
///
/// Resource bundles are read in native byte order and only the little endian
/// build is bundled. On big endian targets [`IcuCatalog::try_new`] fails and
/// [`IcuCatalog::new`] carries no country bindings; supply a big endian
/// bundle through [`IcuCatalog::try_new_with_zoneinfo64`] instead.
pub const BUNDLED_ZONEINFO64: &[u32] =
    resb::include_bytes_as_u32!("./data/zoneinfo64/2025b/le/zoneinfo64.res");

/// A catalog of the ICU time zone database.
#[derive(Debug, Clone)]
pub struct IcuCatalog {
    identifiers: Vec<Identifier>,
    countries: CountryIndex,
}

impl Default for IcuCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl IcuCatalog {
    /// Creates the catalog from compiled data.
    ///
    /// If the bundled region table cannot be decoded, the catalog carries
    /// no country bindings.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(catalog) => catalog,
            Err(_err) => {
                #[cfg(feature = "log")]
                log::warn!("{_err}; ICU country lookups will be empty");
                Self {
                    identifiers: compiled_identifiers(),
                    countries: CountryIndex::new(),
                }
            }
        }
    }

    /// Creates the catalog from compiled data, failing if the bundled region
    /// table cannot be decoded.
    pub fn try_new() -> Result<Self, CatalogError> {
        Self::try_new_with_zoneinfo64(BUNDLED_ZONEINFO64)
    }

    /// Creates the catalog using a caller supplied `zoneinfo64.res` for the
    /// country bindings.
    ///
    /// `bundle` is the resource bundle as 4-byte aligned words in native byte
    /// order, e.g. from `resb::include_bytes_as_u32!`.
    pub fn try_new_with_zoneinfo64(bundle: &[u32]) -> Result<Self, CatalogError> {
        let zoneinfo = ZoneInfo64::try_from_u32s(bundle)
            .map_err(|err| CatalogError::ZoneInfo64(format!("{err:?}")))?;

        let identifiers = compiled_identifiers();
        let mut countries = CountryIndex::new();
        for identifier in &identifiers {
            // Zones missing from zoneinfo64 (data version skew) simply
            // have no country.
            if let Some(zone) = zoneinfo.get(identifier) {
                countries.insert(zone.region(), identifier.clone());
            }
        }

        Ok(Self {
            identifiers,
            countries,
        })
    }
}

fn compiled_identifiers() -> Vec<Identifier> {
    let mut identifiers: Vec<Identifier> = IanaParserExtended::new()
        .iter_all()
        .map(|zone| zone.normalized)
        .filter(|id| *id != UNKNOWN_IDENTIFIER)
        .map(Cow::Borrowed)
        .collect();
    identifiers.sort_unstable();
    identifiers.dedup();
    identifiers
}

impl TimeZoneCatalog for IcuCatalog {
    fn source(&self) -> CatalogSource {
        CatalogSource::Icu
    }

    fn available_identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    fn country_index(&self) -> &CountryIndex {
        &self.countries
    }

    fn contains(&self, identifier: &str) -> bool {
        self.identifiers
            .binary_search_by(|id| (**id).cmp(identifier))
            .is_ok()
    }
}

/// Resolves identifiers the way ICU4C's `TimeZone::createTimeZone` does:
/// system identifiers match exactly (case-sensitively) and resolve to their
/// canonical form, and custom offset identifiers such as `GMT+5` resolve to
/// their normalized spelling (`GMT+05:00`).
impl IdentifierCanonicalizer for IcuCatalog {
    fn canonicalize_identifier(&self, ident: &str) -> Cow<'_, str> {
        let resolved = IanaParserExtended::new().parse(ident);
        if resolved.time_zone != TimeZone::UNKNOWN && resolved.normalized == ident {
            return Cow::Borrowed(resolved.canonical);
        }
        match CustomOffsetId::parse(ident) {
            Some(custom) => Cow::Owned(custom.to_identifier()),
            None => Cow::Borrowed(UNKNOWN_IDENTIFIER),
        }
    }
}

// ==== Begin custom offset identifiers ====

const MAX_CUSTOM_HOUR: u8 = 23;

/// A `GMT[+-]hh[:mm[:ss]]` identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CustomOffsetId {
    negative: bool,
    hour: u8,
    minute: u8,
    second: u8,
}

impl CustomOffsetId {
    /// Parses a custom offset identifier. The `GMT` prefix is matched ASCII
    /// case-insensitively. The offset is either colon separated
    /// (`h[h][:mm[:ss]]`) or packed (`h`, `hh`, `hmm`, `hhmm`, `hmmss` or
    /// `hhmmss`).
    fn parse(ident: &str) -> Option<Self> {
        let bytes = ident.as_bytes();
        if !bytes.get(..3)?.eq_ignore_ascii_case(b"GMT") {
            return None;
        }
        let negative = match bytes.get(3)? {
            b'+' => false,
            b'-' => true,
            _ => return None,
        };
        let offset = bytes.get(4..)?;

        let (hour, minute, second) = if offset.contains(&b':') {
            let mut fields = offset.split(|byte| *byte == b':');
            let hour = fields.next().filter(|f| matches!(f.len(), 1 | 2))?;
            let minute = fields.next().filter(|f| f.len() == 2)?;
            let second = match fields.next() {
                Some(second) if second.len() == 2 => second,
                Some(_) => return None,
                None => b"00".as_slice(),
            };
            if fields.next().is_some() {
                return None;
            }
            (digits(hour)?, digits(minute)?, digits(second)?)
        } else {
            let hour_len = match offset.len() {
                1 | 3 | 5 => 1,
                2 | 4 | 6 => 2,
                _ => return None,
            };
            let (hour, rest) = offset.split_at(hour_len);
            let (minute, second) = rest.split_at(rest.len().min(2));
            (
                digits(hour)?,
                digits_or_zero(minute)?,
                digits_or_zero(second)?,
            )
        };

        if hour > MAX_CUSTOM_HOUR || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            negative,
            hour,
            minute,
            second,
        })
    }

    /// The normalized spelling. A zero offset is plain `GMT`.
    fn to_identifier(self) -> String {
        let mut identifier = String::from("GMT");
        if (self.hour, self.minute, self.second) == (0, 0, 0) {
            return identifier;
        }
        let sign = if self.negative { '-' } else { '+' };
        let _ = write!(identifier, "{sign}{:02}:{:02}", self.hour, self.minute);
        if self.second != 0 {
            let _ = write!(identifier, ":{:02}", self.second);
        }
        identifier
    }
}

fn digits(field: &[u8]) -> Option<u8> {
    if field.is_empty() || !field.iter().all(u8::is_ascii_digit) {
        return None;
    }
    field
        .iter()
        .try_fold(0u8, |acc, digit| acc.checked_mul(10)?.checked_add(digit - b'0'))
}

fn digits_or_zero(field: &[u8]) -> Option<u8> {
    if field.is_empty() {
        Some(0)
    } else {
        digits(field)
    }
}

// ==== End custom offset identifiers ====
