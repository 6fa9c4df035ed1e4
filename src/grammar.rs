// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Version identifier grammar
//!
//! Python version identifiers follow the PEP 440 scheme:
//!
//! ```text
//! [N!]N(.N)*[{a|b|rc}N][.postN][.devN][+local]
//! ```
//!
//! pyenv-win appends `-win32` to 32-bit builds. The whole grammar is matched
//! so that inputs carrying epoch, pre, post, dev or local segments are
//! accepted, but only the release segment and the `-win32` marker are
//! extracted.

use std::sync::LazyLock;

use regex::Regex;

/// Adapted from the PEP 440 appendix regex, with the pyenv-win `-win32` suffix
const VERSION_PATTERN: &str = r"
(?:
    v?
    (?:(?P<epoch>[0-9]+)!)?                           # epoch
    (?P<release>[0-9]+(?:\.[0-9]+)*)                  # release segment
    (?P<pre>                                          # pre-release
        [-_\.]?
        (?P<pre_l>a|b|c|rc|alpha|beta|pre|preview)
        [-_\.]?
        (?P<pre_n>[0-9]+)?
    )?
    (?P<post>                                         # post release
        (?:-(?P<post_n1>[0-9]+))
        |
        (?:
            [-_\.]?
            (?P<post_l>post|rev|r)
            [-_\.]?
            (?P<post_n2>[0-9]+)?
        )
    )?
    (?P<dev>                                          # dev release
        [-_\.]?
        (?P<dev_l>dev)
        [-_\.]?
        (?P<dev_n>[0-9]+)?
    )?
)
(?:\+(?P<local>[a-z0-9]+(?:[-_\.][a-z0-9]+)*))?       # local version
(?P<win32>-win32)?                                    # 32-bit build marker
";

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?xi){VERSION_PATTERN}")).expect("version pattern is valid")
});

/// The parts of a grammar match that are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GrammarMatch<'a> {
    /// Raw release capture, e.g. "3.11.4"
    pub release: &'a str,
    /// Whether the `-win32` marker was matched
    pub win32: bool,
}

/// Search `input` for the first version identifier
///
/// Returns `None` when nothing in the input matches the grammar. The
/// epoch, pre, post, dev and local captures are dropped here.
pub(crate) fn match_version(input: &str) -> Option<GrammarMatch<'_>> {
    let captures = VERSION_RE.captures(input)?;
    Some(GrammarMatch {
        release: captures.name("release").map_or("", |m| m.as_str()),
        win32: captures.name("win32").is_some(),
    })
}
