//! Country to identifier bindings.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use icu_locale_core::subtags::Region;

use crate::Identifier;

/// Maps a country (an ICU region subtag) to the identifiers used in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryIndex {
    bindings: BTreeMap<Region, Vec<Identifier>>,
}

impl CountryIndex {
    /// Creates an empty index.
    pub const fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Builds an index from the rows of a tzdb `zone.tab` file.
    ///
    /// Comment lines and rows with an invalid country code are skipped.
    pub fn from_zone_tab<'a, F>(content: &'a str, mut to_identifier: F) -> Self
    where
        F: FnMut(&'a str) -> Identifier,
    {
        let mut index = Self::new();
        for (code, identifier) in zone_tab_rows(content) {
            let Ok(region) = Region::try_from_str(code) else {
                continue;
            };
            index.insert(region, to_identifier(identifier));
        }
        index
    }

    /// Binds `identifier` to `region`.
    pub fn insert(&mut self, region: Region, identifier: Identifier) {
        let identifiers = self.bindings.entry(region).or_default();
        if !identifiers.contains(&identifier) {
            identifiers.push(identifier);
        }
    }

    /// Returns the identifiers bound to `country_code`.
    ///
    /// Country codes are case-insensitive. Returns `None` when the code is
    /// malformed or not present in this index.
    pub fn get(&self, country_code: &str) -> Option<&[Identifier]> {
        let region = Region::try_from_str(country_code).ok()?;
        self.get_region(region)
    }

    /// Returns the identifiers bound to `region`.
    pub fn get_region(&self, region: Region) -> Option<&[Identifier]> {
        self.bindings.get(&region).map(Vec::as_slice)
    }

    /// Iterates the countries present in this index.
    pub fn countries(&self) -> impl Iterator<Item = Region> + '_ {
        self.bindings.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

// `zone.tab` rows: `code<TAB>coordinates<TAB>TZ[<TAB>comments]`
fn zone_tab_rows(content: &str) -> impl Iterator<Item = (&str, &str)> {
    content
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut columns = line.split('\t');
            let code = columns.next()?;
            let _coordinates = columns.next()?;
            let identifier = columns.next()?.trim();
            (!identifier.is_empty()).then_some((code, identifier))
        })
}
