use std::fmt;

use unic_normal::StrNormalForm;

/// The separator used in archive entry paths. ZIP entry names are
/// `/`-delimited on every platform.
pub const PATH_SEP: &str = "/";

/// An archive-relative path: the prefix accumulated while walking a source
/// tree, with every segment already passed through [`sanitize`].
///
/// The root of a traversal is the empty path; each level of recursion
/// extends it by one segment.
#[derive(Debug, Clone, Default, PartialOrd, Ord, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ZipPath(pub(crate) String);

/// Reduce a name to its closest ASCII-only representation.
///
/// The input is brought to canonical composed normal form (NFC), then every
/// character outside the 7-bit ASCII range is removed. Accented characters
/// that compose to a single non-ASCII scalar are dropped whole, so
/// `"café.txt"` becomes `"caf.txt"`. Returns an empty string for empty
/// input; never fails.
pub fn sanitize(name: &str) -> String {
    name.nfc().filter(|c| c.is_ascii()).collect()
}

impl ZipPath {
    /// The empty prefix at the root of a traversal.
    pub fn root() -> ZipPath {
        ZipPath(String::new())
    }

    /// Extend this prefix by one sanitized segment.
    pub fn join(&self, segment: &str) -> ZipPath {
        let segment = sanitize(segment);
        if self.0.is_empty() {
            ZipPath(segment)
        } else {
            ZipPath([self.0.as_str(), segment.as_str()].join(PATH_SEP))
        }
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitisation_accents() {
        assert_eq!(sanitize("café.txt"), "caf.txt");
        assert_eq!(sanitize("Señor Müller.pdf"), "Seor Mller.pdf");
    }

    #[test]
    fn sanitisation_decomposed() {
        // e + COMBINING ACUTE ACCENT composes under NFC, then drops whole
        assert_eq!(sanitize("cafe\u{301}.txt"), "caf.txt");
    }

    #[test]
    fn sanitisation_ascii_passthrough() {
        assert_eq!(sanitize("report-2012_final.txt"), "report-2012_final.txt");
    }

    #[test]
    fn sanitisation_empty() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn sanitisation_nothing_left() {
        assert_eq!(sanitize("日本語"), "");
    }

    #[test]
    fn prefix_accumulation() {
        let path = ZipPath::root();
        assert!(path.is_root());

        let path = path.join("docs").join("Ünïcødé");
        assert_eq!(path.as_str(), "docs/ncd");
        assert_eq!(path.join("café.txt").as_str(), "docs/ncd/caf.txt");
    }
}
