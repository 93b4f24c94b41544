use std::fmt;

/// Invisible characters that commonly ride along when a thumbprint is
/// copied out of a certificate viewer.
const INVISIBLE_MARKS: &[char] = &[
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{200E}', // left-to-right mark
    '\u{200F}', // right-to-left mark
    '\u{2060}', // word joiner
    '\u{FEFF}', // byte order mark
];

/// A caller-supplied certificate fingerprint.
///
/// Keeps the raw text for error messages and compares on the normalized
/// form: whitespace, invisible marks and `:` separators removed, upper-cased.
#[derive(Debug, Clone)]
pub struct CertificateIdentifier {
    raw: String,
    normalized: String,
}

impl CertificateIdentifier {
    /// Create an identifier from caller input
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    /// The identifier exactly as supplied
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized form used for comparisons
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Returns true if `fingerprint` (hex, any case) denotes the same value
    #[must_use]
    pub fn matches(&self, fingerprint: &str) -> bool {
        !self.normalized.is_empty() && self.normalized == normalize(fingerprint)
    }
}

impl PartialEq for CertificateIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for CertificateIdentifier {}

impl fmt::Display for CertificateIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Normalize a fingerprint string for comparison.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !INVISIBLE_MARKS.contains(c) && *c != ':')
        .flat_map(char::to_uppercase)
        .collect()
}
