// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Release segment of a version: a dotted sequence of non-negative integers
//!
//! Components are compared by numeric value, never as text, so `3.10`
//! sorts after `3.9`. A release that is a strict prefix of another sorts
//! first (`3.11 < 3.11.0`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::{Result, VersionError};

/// Dotted integer release segment, e.g. `3.11.4`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Release(Vec<u32>);

impl Release {
    /// Build a release from its components
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `components` is empty
    pub fn new(components: Vec<u32>) -> Result<Self> {
        if components.is_empty() {
            return Err(VersionError::InvalidArgument("components"));
        }
        Ok(Self(components))
    }

    #[must_use]
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a release has at least one component
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `prefix` equals the leading components of this release
    #[must_use]
    pub fn starts_with(&self, prefix: &Release) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Deterministic 32-bit digest of the components
    #[must_use]
    pub fn hash_code(&self) -> u32 {
        self.0
            .iter()
            .fold(0u32, |acc, &component| acc.rotate_left(5) ^ component)
    }
}

impl FromStr for Release {
    type Err = VersionError;

    /// Parse "N(.N)*"
    ///
    /// Every component must be a non-empty run of ASCII digits that fits
    /// in a `u32`.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(VersionError::format(s, "empty release segment"));
        }

        let components = s
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(VersionError::format(
                        s,
                        format!("release component '{part}' is not a non-negative integer"),
                    ));
                }
                part.parse::<u32>().map_err(|e| {
                    VersionError::format(s, format!("release component '{part}': {e}"))
                })
            })
            .collect::<Result<Vec<u32>>>()?;

        Ok(Self(components))
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.0.iter();
        if let Some(first) = components.next() {
            write!(f, "{first}")?;
        }
        for component in components {
            write!(f, ".{component}")?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Release {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for Release {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
