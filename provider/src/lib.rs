//! Catalogs of time zone identifiers
//!
//! This crate provides the reference data that `timezone_validator` checks
//! identifiers against. Two independent sources are available:
//!
//!   - [`TzdbCatalog`]: the platform catalog, backed by the IANA tzdb
//!     (bundled through `jiff-tzdb` or read from a zoneinfo directory).
//!   - [`IcuCatalog`]: the ICU catalog, backed by ICU4X's CLDR data and
//!     the region table of a bundled ICU4C `zoneinfo64.res`.
//!
//! Both sit behind the [`TimeZoneCatalog`] trait, so [`StaticCatalog`] can
//! stand in for either one.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod catalog;
mod country;
mod error;
mod memory;
mod tzdb;

#[cfg(feature = "icu")]
mod icu;

pub use catalog::{
    CatalogSource, IdentifierCanonicalizer, Identifier, TimeZoneCatalog, UNKNOWN_IDENTIFIER,
};
pub use country::CountryIndex;
pub use error::CatalogError;
pub use memory::StaticCatalog;
pub use tzdb::TzdbCatalog;

#[cfg(feature = "icu")]
pub use icu::{IcuCatalog, BUNDLED_ZONEINFO64};

/// A prelude of needed types for interacting with `timezone_catalog` data.
pub mod prelude {
    pub use icu_locale_core::subtags::Region;
}
