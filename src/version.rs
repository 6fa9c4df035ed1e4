// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Python interpreter version as listed by pyenv-win
//!
//! A `PythonVersion` is a release segment (e.g. `3.11.4`) plus an
//! architecture tag. The two take part in comparisons differently:
//!
//! - ordering ([`PythonVersion::compare`]) looks at the release only, so
//!   `3.11.4` and `3.11.4-win32` compare `Equal`;
//! - equality and hashing look at both, so the same two values are not equal.
//!
//! Because of this `PythonVersion` implements `Eq` and `Hash` but not `Ord`.
//! Sort with `sort_by(PythonVersion::compare)`.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::arch::Architecture;
use crate::error::{Result, VersionError};
use crate::grammar::match_version;
use crate::release::Release;

/// A Python interpreter version: release segment plus architecture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonVersion {
    release: Release,
    arch: Architecture,
}

impl PythonVersion {
    /// Build a version from an already parsed release and an architecture
    #[must_use]
    pub fn new(release: Release, arch: Architecture) -> Self {
        Self { release, arch }
    }

    /// Parse a version identifier
    ///
    /// Accepts anything the PEP 440 grammar accepts, optionally followed by
    /// `-win32`. Only the release segment and the `-win32` marker are kept;
    /// epoch, pre, post, dev and local segments are matched and dropped.
    /// The first identifier found in the input is used, so surrounding text
    /// such as leading whitespace is tolerated.
    ///
    /// # Errors
    /// - `InvalidArgument` if `input` is `None`
    /// - `Format` if nothing in `input` matches the grammar, or the release
    ///   segment does not fit a dotted `u32` sequence
    ///
    /// # Examples
    /// ```
    /// use pyver::{Architecture, PythonVersion};
    ///
    /// let v = PythonVersion::parse(Some("3.9.0-win32")).unwrap();
    /// assert_eq!(v.release().components(), &[3, 9, 0]);
    /// assert_eq!(v.arch(), Architecture::X86);
    ///
    /// let v = PythonVersion::parse(Some("3.12.0rc1")).unwrap();
    /// assert_eq!(v.to_string(), "3.12.0");
    ///
    /// assert!(PythonVersion::parse(None).unwrap_err().is_invalid_argument());
    /// ```
    pub fn parse(input: Option<&str>) -> Result<Self> {
        let input = input.ok_or(VersionError::InvalidArgument("version"))?;
        let matched = match_version(input)
            .ok_or_else(|| VersionError::format(input, "not a Python version identifier"))?;

        if matched.release.is_empty() {
            return Err(VersionError::format(input, "missing release segment"));
        }
        let release = matched.release.parse::<Release>().map_err(|e| match e {
            VersionError::Format { reason, .. } => VersionError::format(input, reason),
            other => other,
        })?;

        let arch = if matched.win32 {
            Architecture::X86
        } else {
            Architecture::X64
        };
        Ok(Self { release, arch })
    }

    /// Re-parse `input` into this value, replacing release and architecture
    ///
    /// On error `self` is left unchanged.
    ///
    /// # Errors
    /// Same as [`PythonVersion::parse`] for a present input
    pub fn set_version(&mut self, input: &str) -> Result<()> {
        *self = Self::parse(Some(input))?;
        Ok(())
    }

    /// Canonical string form, same as `to_string()`
    #[must_use]
    pub fn version_string(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn release(&self) -> &Release {
        &self.release
    }

    /// Replace the whole release segment, keeping the architecture
    pub fn set_release(&mut self, release: Release) {
        self.release = release;
    }

    #[must_use]
    pub fn arch(&self) -> Architecture {
        self.arch
    }

    /// Set the architecture from a loose token, see [`Architecture::from_token`]
    pub fn set_architecture(&mut self, token: &str) {
        self.arch = Architecture::from_token(token);
    }

    /// Canonical architecture token: "win32" or "x64"
    #[must_use]
    pub fn architecture(&self) -> &'static str {
        self.arch.as_str()
    }

    /// Order by release segment only
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use pyver::PythonVersion;
    ///
    /// let a: PythonVersion = "1.9.0".parse().unwrap();
    /// let b: PythonVersion = "1.10.0".parse().unwrap();
    /// assert_eq!(a.compare(&b), Ordering::Less);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &PythonVersion) -> Ordering {
        self.release.cmp(&other.release)
    }

    /// Order against an arbitrary value
    ///
    /// An absent value sorts before any version.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if `other` is not a `PythonVersion`
    pub fn compare_any(&self, other: Option<&dyn Any>) -> Result<Ordering> {
        let Some(other) = other else {
            return Ok(Ordering::Greater);
        };
        other
            .downcast_ref::<PythonVersion>()
            .map(|other| self.compare(other))
            .ok_or_else(|| VersionError::TypeMismatch(type_name_of(other)))
    }

    /// Equality that refuses an absent comparand
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `other` is `None`
    pub fn equals_strict(&self, other: Option<&PythonVersion>) -> Result<bool> {
        other
            .map(|other| self == other)
            .ok_or(VersionError::InvalidArgument("other"))
    }

    /// Equality that treats an absent comparand as not equal
    #[must_use]
    pub fn equals_nullable(&self, other: Option<&PythonVersion>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Equality against an arbitrary value; foreign types are never equal
    #[must_use]
    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|other| other.downcast_ref::<PythonVersion>())
            .is_some_and(|other| self == other)
    }

    /// 32-bit hash consistent with `==`
    ///
    /// The release digest rotated left by two bits, xor the architecture
    /// discriminant. Values differing only in architecture hash differently.
    #[must_use]
    pub fn hash_code(&self) -> u32 {
        self.release.hash_code().rotate_left(2) ^ self.arch as u32
    }
}

fn type_name_of(value: &dyn Any) -> &'static str {
    if value.is::<String>() || value.is::<&str>() {
        "string"
    } else if value.is::<Release>() {
        "Release"
    } else if value.is::<Architecture>() {
        "Architecture"
    } else {
        "unknown type"
    }
}

impl From<Release> for PythonVersion {
    /// A 64-bit build of `release`
    fn from(release: Release) -> Self {
        Self::new(release, Architecture::X64)
    }
}

impl Hash for PythonVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.release)?;
        if self.arch == Architecture::X86 {
            f.write_str("-win32")?;
        }
        Ok(())
    }
}

impl FromStr for PythonVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(Some(s))
    }
}

impl TryFrom<&str> for PythonVersion {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(Some(value))
    }
}

impl<'de> Deserialize<'de> for PythonVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for PythonVersion {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
