use alloc::string::String;
use core::fmt;

/// An error raised while loading catalog data.
#[derive(Debug)]
pub enum CatalogError {
    #[cfg(feature = "std")]
    Io(std::io::Error),
    /// The zoneinfo directory has no `zone.tab`.
    MissingZoneTab,
    /// The ICU `zoneinfo64.res` bundle could not be decoded.
    ZoneInfo64(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::Io(err) => write!(f, "unable to read zoneinfo data: {err}"),
            Self::MissingZoneTab => f.write_str("zoneinfo directory does not contain a zone.tab"),
            Self::ZoneInfo64(msg) => write!(f, "unable to decode zoneinfo64 data: {msg}"),
        }
    }
}

impl core::error::Error for CatalogError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
