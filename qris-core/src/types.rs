/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Enumerated values carried by QRIS payloads.
//!
//! - [`PointOfInitiation`]: Static or dynamic code (tag 01)
//! - [`MerchantCriteria`]: Bank Indonesia merchant size classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Point of initiation method (tag 01).
///
/// A static code is reusable and usually carries no amount; a dynamic code is
/// generated for a single transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointOfInitiation {
    /// Reusable code, wire value `11`.
    Static,
    /// Single-use code, wire value `12`.
    Dynamic,
}

impl PointOfInitiation {
    /// Maps a tag 01 value. `"11"` is static; every other value is dynamic.
    #[inline]
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code == "11" {
            Self::Static
        } else {
            Self::Dynamic
        }
    }

    /// Returns the wire value for this method.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Static => "11",
            Self::Dynamic => "12",
        }
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for PointOfInitiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merchant size classification, carried as a three-letter code in the
/// merchant account template (sub-tag 03).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchantCriteria {
    /// Usaha Mikro, code `UMI`.
    Micro,
    /// Usaha Kecil, code `UKE`.
    Small,
    /// Usaha Menengah, code `UME`.
    Medium,
    /// Usaha Besar, code `UBE`.
    Large,
    /// Regular, code `URE`. Fallback for anything unrecognised.
    #[default]
    Regular,
}

impl MerchantCriteria {
    /// All criteria, smallest first.
    pub const ALL: [Self; 5] = [
        Self::Micro,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Regular,
    ];

    /// Maps a criteria code. Unknown codes map to [`MerchantCriteria::Regular`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "UMI" => Self::Micro,
            "UKE" => Self::Small,
            "UME" => Self::Medium,
            "UBE" => Self::Large,
            _ => Self::Regular,
        }
    }

    /// Returns the three-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Micro => "UMI",
            Self::Small => "UKE",
            Self::Medium => "UME",
            Self::Large => "UBE",
            Self::Regular => "URE",
        }
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Regular => "regular",
        }
    }
}

impl FromStr for MerchantCriteria {
    type Err = std::convert::Infallible;

    /// Parses a criteria name. Unknown names map to [`MerchantCriteria::Regular`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "micro" => Self::Micro,
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            _ => Self::Regular,
        })
    }
}

impl fmt::Display for MerchantCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_of_initiation_from_code() {
        assert_eq!(PointOfInitiation::from_code("11"), PointOfInitiation::Static);
        assert_eq!(PointOfInitiation::from_code("12"), PointOfInitiation::Dynamic);
        assert_eq!(PointOfInitiation::from_code(""), PointOfInitiation::Dynamic);
        assert_eq!(PointOfInitiation::from_code("1"), PointOfInitiation::Dynamic);
    }

    #[test]
    fn test_point_of_initiation_display() {
        assert_eq!(PointOfInitiation::Static.to_string(), "static");
        assert_eq!(PointOfInitiation::Dynamic.to_string(), "dynamic");
    }

    #[test]
    fn test_merchant_criteria_from_code() {
        assert_eq!(MerchantCriteria::from_code("UMI"), MerchantCriteria::Micro);
        assert_eq!(MerchantCriteria::from_code("UKE"), MerchantCriteria::Small);
        assert_eq!(MerchantCriteria::from_code("UME"), MerchantCriteria::Medium);
        assert_eq!(MerchantCriteria::from_code("UBE"), MerchantCriteria::Large);
        assert_eq!(MerchantCriteria::from_code("URE"), MerchantCriteria::Regular);
    }

    #[test]
    fn test_merchant_criteria_roundtrip() {
        for criteria in MerchantCriteria::ALL {
            assert_eq!(MerchantCriteria::from_code(criteria.code()), criteria);
            assert_eq!(criteria.as_str().parse::<MerchantCriteria>(), Ok(criteria));
        }
    }

    #[test]
    fn test_merchant_criteria_unknown_defaults_to_regular() {
        assert_eq!(MerchantCriteria::from_code("XYZ"), MerchantCriteria::Regular);
        assert_eq!(MerchantCriteria::from_code("umi"), MerchantCriteria::Regular);

        let unknown: MerchantCriteria = "enterprise".parse().unwrap_or_default();
        assert_eq!(unknown.code(), "URE");

        // Fixed point under repeated mapping.
        let again = MerchantCriteria::from_code(unknown.code());
        assert_eq!(again, MerchantCriteria::Regular);
        assert_eq!(again.code(), "URE");
    }
}
