// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Interpreter architecture tag
//!
//! pyenv-win marks 32-bit builds with a `-win32` suffix; everything else is
//! a 64-bit build. There is no other architecture detection.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Build architecture of a Python interpreter
///
/// The discriminants are fixed: they feed into `PythonVersion::hash_code`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
    /// 32-bit build, rendered as "win32"
    #[serde(rename = "win32")]
    X86 = 0,
    /// 64-bit build, rendered as "x64"
    #[default]
    #[serde(rename = "x64")]
    X64 = 1,
}

impl Architecture {
    /// Interpret an architecture token loosely
    ///
    /// Any token containing "32" selects `X86` ("32", "win32", "x32", ...),
    /// anything else selects `X64`.
    ///
    /// # Examples
    /// ```
    /// use pyver::Architecture;
    /// assert_eq!(Architecture::from_token("win32"), Architecture::X86);
    /// assert_eq!(Architecture::from_token("amd64"), Architecture::X64);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token.contains("32") {
            Architecture::X86
        } else {
            Architecture::X64
        }
    }

    /// Canonical token: "win32" or "x64"
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Architecture::X86 => "win32",
            Architecture::X64 => "x64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}
