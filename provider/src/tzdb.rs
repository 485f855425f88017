//! The platform catalog, backed by the IANA time zone database.
//!
//! Two sources of tzdb data are supported:
//!
//!   - The database bundled by `jiff-tzdb` together with a bundled
//!     `zone.tab` (`tzdb` feature).
//!   - A zoneinfo directory on the host, e.g. `/usr/share/zoneinfo`
//!     (`std` feature).

use alloc::vec::Vec;

#[cfg(any(feature = "tzdb", feature = "std"))]
use alloc::borrow::Cow;
#[cfg(feature = "std")]
use alloc::string::String;
#[cfg(feature = "std")]
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use crate::{CatalogSource, CountryIndex, Identifier, TimeZoneCatalog};

#[cfg(feature = "std")]
use crate::CatalogError;

/// The `zone.tab` shipped with the tzdb release bundled by this crate.
#[cfg(feature = "tzdb")]
const BUNDLED_ZONE_TAB: &str = include_str!("./data/zone.tab");

/// Unix's default zoneinfo directory.
#[cfg(feature = "std")]
pub const UNIX_ZONEINFO_DIR: &str = "/usr/share/zoneinfo/";

#[cfg(feature = "std")]
const TZIF_MAGIC: &[u8; 4] = b"TZif";

/// A catalog of the platform's time zone database.
#[derive(Debug, Clone)]
pub struct TzdbCatalog {
    identifiers: Vec<Identifier>,
    countries: CountryIndex,
}

#[cfg(feature = "tzdb")]
impl Default for TzdbCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TzdbCatalog {
    /// Creates a catalog from the bundled tzdb.
    #[cfg(feature = "tzdb")]
    pub fn new() -> Self {
        let identifiers = jiff_tzdb::available().map(Cow::Borrowed).collect();
        let countries = CountryIndex::from_zone_tab(BUNDLED_ZONE_TAB, Cow::Borrowed);
        Self::from_parts(identifiers, countries)
    }

    /// Creates a catalog from a compiled zoneinfo directory.
    ///
    /// Every file starting with the TZif magic is taken as an identifier,
    /// named by its path relative to `zoneinfo_dir`. The `posix` and `right`
    /// mirrors are skipped. Country bindings are read from `zone.tab`.
    #[cfg(feature = "std")]
    pub fn try_from_zoneinfo_directory(zoneinfo_dir: &Path) -> Result<Self, CatalogError> {
        let zone_tab = match fs::read_to_string(zoneinfo_dir.join("zone.tab")) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(CatalogError::MissingZoneTab)
            }
            Err(err) => return Err(err.into()),
        };
        let countries =
            CountryIndex::from_zone_tab(&zone_tab, |id| Cow::Owned(String::from(id)));

        let mut identifiers = Vec::new();
        collect_tzif_identifiers(zoneinfo_dir, zoneinfo_dir, &mut identifiers)?;

        #[cfg(feature = "log")]
        log::debug!(
            "loaded {} identifiers and {} countries from {}",
            identifiers.len(),
            countries.countries().count(),
            zoneinfo_dir.display()
        );

        Ok(Self::from_parts(identifiers, countries))
    }

    /// Creates a catalog from the host's default zoneinfo directory.
    #[cfg(feature = "std")]
    pub fn try_from_system() -> Result<Self, CatalogError> {
        Self::try_from_zoneinfo_directory(Path::new(UNIX_ZONEINFO_DIR))
    }

    /// Creates a catalog from tzdb data gathered by the caller.
    pub fn from_parts(mut identifiers: Vec<Identifier>, countries: CountryIndex) -> Self {
        identifiers.sort_unstable();
        identifiers.dedup();
        Self {
            identifiers,
            countries,
        }
    }
}

impl TimeZoneCatalog for TzdbCatalog {
    fn source(&self) -> CatalogSource {
        CatalogSource::Platform
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

// ==== Begin zoneinfo directory walk ====

#[cfg(feature = "std")]
fn collect_tzif_identifiers(
    root: &Path,
    dir: &Path,
    identifiers: &mut Vec<Identifier>,
) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        // Follows symlinks, which zoneinfo directories use for links.
        if fs::metadata(&path)?.is_dir() {
            let is_mirror = dir == root
                && matches!(
                    path.file_name().and_then(|name| name.to_str()),
                    Some("posix" | "right")
                );
            if !is_mirror {
                collect_tzif_identifiers(root, &path, identifiers)?;
            }
            continue;
        }

        if !starts_with_tzif_magic(&path)? {
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let components: Option<Vec<&str>> = relative
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect();
        if let Some(components) = components {
            identifiers.push(Cow::Owned(components.join("/")));
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn starts_with_tzif_magic(path: &Path) -> io::Result<bool> {
    let mut magic = [0u8; 4];
    match fs::File::open(path)?.read_exact(&mut magic) {
        Ok(()) => Ok(&magic == TZIF_MAGIC),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(err) => Err(err),
    }
}

// ==== End zoneinfo directory walk ====

#[cfg(test)]
mod tests {
    #[cfg(feature = "tzdb")]
    #[test]
    fn bundled_tzdb() {
        use super::TzdbCatalog;
        use crate::TimeZoneCatalog;

        let catalog = TzdbCatalog::new();
        assert!(catalog.contains("Europe/Paris"));
        assert!(catalog.contains("America/New_York"));
        assert!(catalog.contains("UTC"));
        assert!(!catalog.contains("europe/paris"));
        assert!(!catalog.contains("Not/A/Zone"));

        let france = catalog.identifiers_for_country("FR");
        assert_eq!(france, &["Europe/Paris"]);
        let us = catalog.identifiers_for_country("US");
        assert!(us.iter().any(|id| id == "America/New_York"));
        assert!(!us.iter().any(|id| id == "Europe/Paris"));
        assert!(catalog.identifiers_for_country("ZZ").is_empty());
    }

    #[cfg(feature = "std")]
    #[test]
    fn zoneinfo_directory() {
        use super::TzdbCatalog;
        use crate::{CatalogError, TimeZoneCatalog};
        use std::{fs, process};

        let root = std::env::temp_dir().join(std::format!(
            "timezone_catalog_zoneinfo_{}",
            process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("Europe")).unwrap();
        fs::create_dir_all(root.join("right/Europe")).unwrap();

        assert!(matches!(
            TzdbCatalog::try_from_zoneinfo_directory(&root),
            Err(CatalogError::MissingZoneTab)
        ));

        fs::write(root.join("Europe/Paris"), b"TZif2\0\0\0").unwrap();
        fs::write(root.join("UTC"), b"TZif2\0\0\0").unwrap();
        fs::write(root.join("right/Europe/Paris"), b"TZif2\0\0\0").unwrap();
        fs::write(root.join("iso3166.tab"), b"FR\tFrance\n").unwrap();
        fs::write(root.join("zone.tab"), b"# tz\nFR\t+4852+00220\tEurope/Paris\n").unwrap();

        let catalog = TzdbCatalog::try_from_zoneinfo_directory(&root).unwrap();
        assert_eq!(catalog.available_identifiers(), &["Europe/Paris", "UTC"]);
        assert_eq!(catalog.identifiers_for_country("FR"), &["Europe/Paris"]);

        fs::remove_dir_all(&root).unwrap();
    }
}
