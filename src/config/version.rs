//! Shopify API version definitions.
//!
//! Shopify ships a stable API version every quarter (January, April, July,
//! October) and keeps each one for roughly twelve months. The version is
//! part of every request path: `/admin/api/{version}/products.json`.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Shopify Admin API version.
///
/// Stable versions are ordered chronologically and `Unstable` sorts after
/// all of them.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiVersion;
///
/// let version: ApiVersion = "2025-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_10);
/// assert_eq!(version.to_string(), "2025-10");
/// assert!(ApiVersion::V2025_07 < version);
/// assert!(version < ApiVersion::Unstable);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// A quarterly stable release.
    Stable {
        /// Release year (e.g. 2025).
        year: u16,
        /// Release month: 1, 4, 7 or 10.
        month: u8,
    },
    /// The unstable version, for trying features before release.
    Unstable,
}

impl ApiVersion {
    pub const V2025_01: Self = Self::stable(2025, 1);
    pub const V2025_04: Self = Self::stable(2025, 4);
    pub const V2025_07: Self = Self::stable(2025, 7);
    pub const V2025_10: Self = Self::stable(2025, 10);
    pub const V2026_01: Self = Self::stable(2026, 1);
    pub const V2026_04: Self = Self::stable(2026, 4);
    pub const V2026_07: Self = Self::stable(2026, 7);

    const fn stable(year: u16, month: u8) -> Self {
        Self::Stable { year, month }
    }

    /// Creates a stable version, validating the release month.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if `month` is not a
    /// quarterly release month or `year` is not four digits.
    pub fn new(year: u16, month: u8) -> Result<Self, ConfigError> {
        if !(1000..=9999).contains(&year) || !matches!(month, 1 | 4 | 7 | 10) {
            return Err(ConfigError::InvalidApiVersion {
                version: format!("{year}-{month:02}"),
            });
        }
        Ok(Self::stable(year, month))
    }

    /// Returns the latest stable API version known to this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2026_07
    }

    /// Returns the oldest version still inside Shopify's support window.
    #[must_use]
    pub const fn minimum_supported() -> Self {
        Self::V2025_10
    }

    /// Returns the supported stable versions, oldest first.
    #[must_use]
    pub fn supported_versions() -> Vec<Self> {
        vec![Self::V2025_10, Self::V2026_01, Self::V2026_04, Self::V2026_07]
    }

    /// Returns `true` for stable releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stable { .. })
    }

    /// Returns `true` if this version is older than [`Self::minimum_supported`].
    ///
    /// `Unstable` is never deprecated.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.is_stable() && *self < Self::minimum_supported()
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable { year, month } => write!(f, "{year}-{month:02}"),
            Self::Unstable => f.write_str("unstable"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "unstable" {
            return Ok(Self::Unstable);
        }

        let invalid = || ConfigError::InvalidApiVersion { version: s.clone() };

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: u16 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}
