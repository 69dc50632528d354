//! Rendering surface: HTML tables and JSON snapshots of grids

pub mod html;
pub mod snapshot;

use sha2::{Digest, Sha256};

/// Output format produced by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Json,
}

/// A rendered document together with its content digest
#[derive(Debug, Clone)]
pub struct Rendered {
    pub format: Format,
    pub body: String,
    pub digest: String,
}

impl Rendered {
    pub fn new(format: Format, body: String) -> Self {
        let digest = fingerprint(&body);
        Self { format, body, digest }
    }
}

/// Hex-encoded SHA-256 of rendered output.
///
/// Seeded layouts render byte-for-byte identically, so the digest is a
/// compact golden value for tests.
pub fn fingerprint(rendered: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rendered.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_hex() {
        let a = fingerprint("<table id=\"hello\"></table>");
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(a, fingerprint("<table id=\"hello\"></table>"));
        assert_ne!(a, fingerprint("<table id=\"bye\"></table>"));
    }

    #[test]
    fn rendered_carries_digest() {
        let r = Rendered::new(Format::Json, "{}".to_string());
        assert_eq!(r.digest, fingerprint("{}"));
    }
}
