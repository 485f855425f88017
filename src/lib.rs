//! The `timezone_validator` crate decides whether a string names a known
//! time zone identifier.
//!
//! ```rust
//! use timezone_validator::{ErrorCode, MembershipResolver, Region, Verdict, ZoneMask};
//!
//! let resolver = MembershipResolver::compiled();
//!
//! // Any known identifier
//! assert_eq!(resolver.resolve("Europe/Paris", ZoneMask::ALL, None, false), Verdict::Valid);
//!
//! // Identifiers of a region
//! assert_eq!(
//!     resolver.resolve("America/New_York", Region::Europe.into(), None, false),
//!     Verdict::Invalid(ErrorCode::NotInZone),
//! );
//!
//! // Identifiers used in a country
//! assert_eq!(
//!     resolver.resolve("Europe/Paris", ZoneMask::PER_COUNTRY, Some("US"), false),
//!     Verdict::Invalid(ErrorCode::NotInCountry),
//! );
//! ```
//!
//! Identifiers are looked up in two independent catalogs: the platform's
//! time zone database and the ICU time zone database. An identifier known to
//! either one is accepted. Optionally, an identifier can be required to
//! resolve through ICU (`intl_compatible`).
//!
//! The catalogs live in the [`timezone_catalog`] crate; any type implementing
//! [`TimeZoneCatalog`](timezone_catalog::TimeZoneCatalog) can back a
//! [`MembershipResolver`].
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
)]

extern crate alloc;
extern crate core;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod constraint;
pub mod error;
pub mod filter;
pub mod region;
pub mod resolver;

#[cfg(feature = "compiled_data")]
mod compiled;

#[doc(inline)]
pub use error::{ErrorKind, TimezoneError};

/// The `timezone_validator` result type
pub type TimezoneResult<T> = Result<T, TimezoneError>;

pub use constraint::{TimezoneConstraint, TimezoneValidator, Violation};
pub use filter::{filter_by_zone, is_in_zone};
pub use region::{constant_name, ParseZoneMaskError, Region, ZoneMask};
pub use resolver::{ErrorCode, MembershipResolver, Verdict};

#[cfg(feature = "compiled_data")]
pub use compiled::{resolve, CompiledResolver};

/// Re-export of the catalog crate.
pub use timezone_catalog;
