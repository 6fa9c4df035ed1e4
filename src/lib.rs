// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Python Version Parsing Library
//!
//! This library parses the Python interpreter version identifiers listed by
//! pyenv-win (e.g. "3.11.4", "3.9.0-win32") into a structured value that can
//! be ordered, compared for equality, hashed and rendered back to its
//! canonical string form.

pub mod arch;
pub mod error;
mod grammar;
pub mod listing;
pub mod release;
pub mod version;

// Re-export commonly used items at the crate root for convenience
pub use arch::Architecture;
pub use error::VersionError;
pub use listing::{find_matching_version, parse_listing, sort_versions};
pub use release::Release;
pub use version::PythonVersion;
