//! Caller-location capture behind a narrow interface.
//!
//! The zero-depth case uses the compiler's caller tracking: every public
//! entry point is `#[track_caller]`, so [`std::panic::Location::caller`]
//! already names the user's call site with no runtime cost. Depth-adjusted
//! calls walk the stack with the `backtrace` crate, using the tracked
//! location as an anchor frame and stepping `depth` frames outward.
//! Resolution failures (missing debug info, program edges) degrade to the
//! `???:1` sentinel; capture never fails the caller.

use std::borrow::Cow;
use std::panic::Location;
use std::path::Path;

use logging_sink::{UNKNOWN_FILE, UNKNOWN_LINE};

/// A resolved call site: source file basename and line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CallSite {
    pub(crate) file: Cow<'static, str>,
    pub(crate) line: u32,
}

impl CallSite {
    fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: Cow::Borrowed(basename(location.file())),
            line: location.line(),
        }
    }

    /// The degraded-metadata fallback.
    pub(crate) const fn unknown() -> Self {
        Self {
            file: Cow::Borrowed(UNKNOWN_FILE),
            line: UNKNOWN_LINE,
        }
    }
}

/// Resolves the call site `depth` frames above `anchor`.
///
/// `anchor` is the tracked location of the immediate caller; depth 0 is the
/// anchor itself.
pub(crate) fn resolve(anchor: &'static Location<'static>, depth: usize) -> CallSite {
    if depth == 0 {
        return CallSite::from_location(anchor);
    }
    resolve_deep(anchor, depth).unwrap_or_else(CallSite::unknown)
}

/// Walks the stack looking for the anchor frame, then steps `depth` frames
/// further out. Returns `None` when the anchor cannot be found or the stack
/// ends early, which the caller maps to the sentinel.
fn resolve_deep(anchor: &Location<'_>, depth: usize) -> Option<CallSite> {
    let mut sites: Vec<(String, u32)> = Vec::new();

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if let (Some(path), Some(line)) = (symbol.filename(), symbol.lineno()) {
                sites.push((path.to_string_lossy().into_owned(), line));
            }
        });
        true
    });

    let anchor_index = sites
        .iter()
        .position(|(file, line)| *line == anchor.line() && file.ends_with(anchor.file()))?;
    let (file, line) = sites.get(anchor_index + depth)?;

    Some(CallSite {
        file: Cow::Owned(basename(file).to_owned()),
        line: *line,
    })
}

/// Strips directory components from a source path.
fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_depth_uses_the_tracked_location() {
        #[track_caller]
        fn capture() -> CallSite {
            resolve(Location::caller(), 0)
        }

        let site = capture();
        assert_eq!(site.file, "caller.rs");
        assert!(site.line > 0);
    }

    #[test]
    fn sentinel_has_the_documented_shape() {
        let site = CallSite::unknown();
        assert_eq!(site.file, "???");
        assert_eq!(site.line, 1);
    }

    #[test]
    fn basename_strips_directories() {
        assert_eq!(basename("crates/logging/src/caller.rs"), "caller.rs");
        assert_eq!(basename("caller.rs"), "caller.rs");
        assert_eq!(basename("???"), "???");
    }

    #[test]
    fn deep_resolution_never_panics() {
        #[track_caller]
        fn capture(depth: usize) -> CallSite {
            resolve(Location::caller(), depth)
        }

        // Either the walk resolves a real frame or it degrades to the
        // sentinel; both are valid outcomes depending on debug info.
        let site = capture(1);
        assert!(!site.file.is_empty());
        assert!(site.line >= 1);

        let far = capture(10_000);
        assert_eq!(far, CallSite::unknown());
    }
}
