//! Geographic regions and zone masks.
//!
//! A [`ZoneMask`] is a combinable set of [`Region`]s plus the
//! `PER_COUNTRY` control flag. The bit values match the region
//! constants of the host platform's time zone API, so a raw mask can be
//! passed through [`ZoneMask::from_bits`] unchanged.

use alloc::borrow::Cow;
use alloc::string::ToString;
use core::ops::{BitOr, BitOrAssign};
use core::{fmt, str::FromStr};

/// A continent or ocean grouping of time zone identifiers.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Africa = 1,
    America = 2,
    Antarctica = 4,
    Arctic = 8,
    Asia = 16,
    Atlantic = 32,
    Australia = 64,
    Europe = 128,
    Indian = 256,
    Pacific = 512,
    Utc = 1024,
}

impl Region {
    /// Every region, in bit order.
    pub const VARIANTS: [Region; 11] = [
        Self::Africa,
        Self::America,
        Self::Antarctica,
        Self::Arctic,
        Self::Asia,
        Self::Atlantic,
        Self::Australia,
        Self::Europe,
        Self::Indian,
        Self::Pacific,
        Self::Utc,
    ];

    /// The bit of this region in a [`ZoneMask`].
    pub const fn bit(self) -> u16 {
        self as u16
    }

    /// The identifier prefix of this region, e.g. `"Europe"` for
    /// `Europe/Paris`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::America => "America",
            Self::Antarctica => "Antarctica",
            Self::Arctic => "Arctic",
            Self::Asia => "Asia",
            Self::Atlantic => "Atlantic",
            Self::Australia => "Australia",
            Self::Europe => "Europe",
            Self::Indian => "Indian",
            Self::Pacific => "Pacific",
            Self::Utc => "UTC",
        }
    }

    /// The symbolic constant name of this region, e.g. `"EUROPE"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Africa => "AFRICA",
            Self::America => "AMERICA",
            Self::Antarctica => "ANTARCTICA",
            Self::Arctic => "ARCTIC",
            Self::Asia => "ASIA",
            Self::Atlantic => "ATLANTIC",
            Self::Australia => "AUSTRALIA",
            Self::Europe => "EUROPE",
            Self::Indian => "INDIAN",
            Self::Pacific => "PACIFIC",
            Self::Utc => "UTC",
        }
    }

    /// Looks a region up by its symbolic constant name (ASCII
    /// case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .into_iter()
            .find(|region| region.name().eq_ignore_ascii_case(name))
    }

    /// Looks a region up by its exact bit value.
    pub fn from_bit(bit: u32) -> Option<Self> {
        Self::VARIANTS
            .into_iter()
            .find(|region| u32::from(region.bit()) == bit)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// A set of [`Region`]s, optionally flagged [`ZoneMask::PER_COUNTRY`].
///
/// ```rust
/// use timezone_validator::{Region, ZoneMask};
///
/// let mask = Region::Europe | Region::Asia;
/// assert!(mask.contains(Region::Europe));
/// assert!(!mask.contains_all_regions());
///
/// // `ALL` is matched by a superset test, not by any overlap.
/// assert!((ZoneMask::ALL | ZoneMask::PER_COUNTRY).contains_all_regions());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneMask(u16);

impl ZoneMask {
    /// No region and no control flag.
    pub const EMPTY: Self = Self(0);
    /// Every geographic region.
    pub const ALL: Self = Self(0x07FF);
    /// Country-scoped lookup mode.
    pub const PER_COUNTRY: Self = Self(0x1000);

    const KNOWN_BITS: u16 = Self::ALL.0 | Self::PER_COUNTRY.0;

    /// Creates a mask from raw bits, returning `None` if `bits` has a bit
    /// that is neither a region nor `PER_COUNTRY`.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !(Self::KNOWN_BITS as u32) != 0 {
            return None;
        }
        Some(Self(bits as u16))
    }

    /// Creates a mask from raw bits, dropping unknown bits.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self((bits & Self::KNOWN_BITS as u32) as u16)
    }

    /// The raw bits of this mask.
    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, region: Region) -> bool {
        self.0 & region.bit() != 0
    }

    /// Returns whether every region bit of [`ZoneMask::ALL`] is set.
    ///
    /// This is a superset test: a mask with only some regions set is not
    /// `ALL`.
    pub const fn contains_all_regions(self) -> bool {
        self.0 & Self::ALL.0 == Self::ALL.0
    }

    /// Returns whether at least one region bit is set.
    pub const fn has_regions(self) -> bool {
        self.0 & Self::ALL.0 != 0
    }

    pub const fn is_per_country(self) -> bool {
        self.0 & Self::PER_COUNTRY.0 != 0
    }

    /// Iterates the regions set in this mask, in bit order.
    pub fn regions(self) -> impl Iterator<Item = Region> {
        Region::VARIANTS
            .into_iter()
            .filter(move |region| self.contains(*region))
    }

    /// Iterates the identifier prefixes of the regions set in this mask.
    ///
    /// The `PER_COUNTRY` control flag contributes no prefix.
    pub fn prefixes(self) -> impl Iterator<Item = &'static str> {
        self.regions().map(Region::prefix)
    }
}

impl Default for ZoneMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<Region> for ZoneMask {
    fn from(value: Region) -> Self {
        Self(value.bit())
    }
}

impl BitOr for ZoneMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOr<Region> for ZoneMask {
    type Output = Self;
    fn bitor(self, rhs: Region) -> Self {
        self.union(rhs.into())
    }
}

impl BitOr for Region {
    type Output = ZoneMask;
    fn bitor(self, rhs: Self) -> ZoneMask {
        ZoneMask::from(self).union(rhs.into())
    }
}

impl BitOr<ZoneMask> for Region {
    type Output = ZoneMask;
    fn bitor(self, rhs: ZoneMask) -> ZoneMask {
        ZoneMask::from(self).union(rhs)
    }
}

impl BitOrAssign for ZoneMask {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitOrAssign<Region> for ZoneMask {
    fn bitor_assign(&mut self, rhs: Region) {
        *self = self.union(rhs.into());
    }
}

// ==== Symbolic names ====

/// Returns the symbolic constant name for a raw zone value.
///
/// Exact values of a single region, `ALL` or `PER_COUNTRY` map to their
/// name; anything else is echoed unchanged.
///
/// ```rust
/// use timezone_validator::constant_name;
///
/// assert_eq!(constant_name(128), "EUROPE");
/// assert_eq!(constant_name(4096), "PER_COUNTRY");
/// assert_eq!(constant_name(130), "130");
/// ```
pub fn constant_name(raw: u32) -> Cow<'static, str> {
    if raw == u32::from(ZoneMask::ALL.0) {
        return Cow::Borrowed("ALL");
    }
    if raw == u32::from(ZoneMask::PER_COUNTRY.0) {
        return Cow::Borrowed("PER_COUNTRY");
    }
    Region::from_bit(raw).map_or_else(|| Cow::Owned(raw.to_string()), |r| r.name().into())
}

impl fmt::Display for ZoneMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::EMPTY {
            return f.write_str("0");
        }
        let mut separator = "";
        if self.contains_all_regions() {
            f.write_str("ALL")?;
            separator = " | ";
        } else {
            for region in self.regions() {
                write!(f, "{separator}{region}")?;
                separator = " | ";
            }
        }
        if self.is_per_country() {
            write!(f, "{separator}PER_COUNTRY")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseZoneMaskError;

impl fmt::Display for ParseZoneMaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid zone mask.")
    }
}

impl core::error::Error for ParseZoneMaskError {}

/// Parses `|` separated constant names, e.g. `"EUROPE | ASIA"`.
impl FromStr for ZoneMask {
    type Err = ParseZoneMaskError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mask = Self::EMPTY;
        for name in s.split('|').map(str::trim) {
            mask |= match name {
                _ if name.eq_ignore_ascii_case("ALL") => Self::ALL,
                _ if name.eq_ignore_ascii_case("PER_COUNTRY") => Self::PER_COUNTRY,
                _ => Region::from_name(name).ok_or(ParseZoneMaskError)?.into(),
            };
        }
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::{constant_name, Region, ZoneMask};
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::str::FromStr;

    #[test]
    fn all_is_a_superset_test() {
        assert!(ZoneMask::ALL.contains_all_regions());
        assert!((ZoneMask::ALL | ZoneMask::PER_COUNTRY).contains_all_regions());
        assert!(!(Region::Europe | Region::Asia).contains_all_regions());
        assert!(!ZoneMask::from(Region::Utc).contains_all_regions());
        assert!(!ZoneMask::PER_COUNTRY.contains_all_regions());

        let every_region = Region::VARIANTS
            .into_iter()
            .fold(ZoneMask::EMPTY, |mask, region| mask | region);
        assert_eq!(every_region, ZoneMask::ALL);
    }

    #[test]
    fn prefixes_skip_control_flags() {
        let prefixes: Vec<_> = (Region::Europe | ZoneMask::PER_COUNTRY).prefixes().collect();
        assert_eq!(prefixes, ["Europe"]);
        assert_eq!(ZoneMask::PER_COUNTRY.prefixes().count(), 0);
        assert_eq!(ZoneMask::ALL.prefixes().count(), 11);

        let prefixes: Vec<_> = (Region::Utc | Region::Africa).prefixes().collect();
        assert_eq!(prefixes, ["Africa", "UTC"]);
    }

    #[test]
    fn raw_bits() {
        assert_eq!(ZoneMask::from_bits(2047), Some(ZoneMask::ALL));
        assert_eq!(ZoneMask::from_bits(4096), Some(ZoneMask::PER_COUNTRY));
        assert_eq!(ZoneMask::from_bits(128), Some(Region::Europe.into()));
        assert_eq!(ZoneMask::from_bits(2048), None);
        assert_eq!(ZoneMask::from_bits_truncate(4095), ZoneMask::ALL);
        assert!(!ZoneMask::EMPTY.has_regions());
        assert!(ZoneMask::default().contains_all_regions());
    }

    #[test]
    fn constant_names() {
        assert_eq!(constant_name(1), "AFRICA");
        assert_eq!(constant_name(1024), "UTC");
        assert_eq!(constant_name(2047), "ALL");
        assert_eq!(constant_name(4096), "PER_COUNTRY");
        assert_eq!(constant_name(3), "3");
        assert_eq!(constant_name(0), "0");

        for region in Region::VARIANTS {
            assert_eq!(Region::from_name(region.name()), Some(region));
            assert_eq!(constant_name(region.bit().into()), region.name());
        }
    }

    #[test]
    fn display_and_parse() {
        let mask = Region::Europe | Region::Asia;
        assert_eq!(mask.to_string(), "ASIA | EUROPE");
        assert_eq!(ZoneMask::from_str("ASIA | EUROPE"), Ok(mask));
        assert_eq!(ZoneMask::from_str("europe|asia"), Ok(mask));
        assert_eq!(
            (ZoneMask::ALL | ZoneMask::PER_COUNTRY).to_string(),
            "ALL | PER_COUNTRY"
        );
        assert_eq!(ZoneMask::PER_COUNTRY.to_string(), "PER_COUNTRY");
        assert_eq!(ZoneMask::from_str("ALL"), Ok(ZoneMask::ALL));
        assert!(ZoneMask::from_str("MARS").is_err());
        assert!(ZoneMask::from_str("").is_err());
    }
}
