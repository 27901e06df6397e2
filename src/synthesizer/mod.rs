//! Response synthesis: derives the payload and content type for a
//! classified artifact request.

use std::sync::LazyLock;

use axum::body::Bytes;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use md5::Md5;
use sha1::{Digest, Sha1};

use crate::models::{ArtifactKind, ArtifactRequest, ChecksumKind};
use crate::pages;

/// Base64 of the fixed empty jar: a zip archive holding a single minimal
/// `META-INF/MANIFEST.MF` entry, enough for any build tool to accept it.
const EMPTY_JAR_B64: &str = "UEsDBAoAAAAAAME+SDiyfwLuGQAAABkAAAAUAAQATUVUQS1JTkYvTUFOSUZFU1QuTUb+ygAATWFuaWZlc3QtVmVyc2lvbjogMS4wDQoNClBLAQIKAAoAAAAAAME+SDiyfwLuGQAAABkAAAAUAAQAAAAAAAAAAAAAAAAAAABNRVRBLUlORi9NQU5JRkVTVC5NRv7KAABQSwUGAAAAAAEAAQBGAAAATwAAAAAA";

static EMPTY_JAR: LazyLock<Vec<u8>> = LazyLock::new(|| {
    BASE64
        .decode(EMPTY_JAR_B64)
        .expect("embedded jar stub is valid base64")
});

/// The fixed jar payload served for every jar request, decoded once and
/// shared read-only across all handlers
pub fn jar_stub() -> &'static [u8] {
    &EMPTY_JAR
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("Failed to render pom document: {0}")]
    Render(#[from] std::fmt::Error),
}

/// Produce the response payload and its content type.
///
/// A checksum request is answered with the hex digest of the freshly
/// generated payload rather than the payload itself; nothing is cached, so
/// the pom digest always matches the document the same request would have
/// returned.
pub fn synthesize(request: &ArtifactRequest) -> Result<(Bytes, &'static str), SynthesisError> {
    let payload = match request.kind {
        ArtifactKind::Jar => Bytes::from_static(jar_stub()),
        ArtifactKind::Pom => Bytes::from(pages::render_pom(request)?),
    };

    Ok(match request.checksum {
        None => (payload, request.kind.content_type()),
        Some(kind) => (Bytes::from(checksum_hex(&payload, kind)), "text/plain"),
    })
}

/// Lowercase hex digest of `data` under the requested algorithm
pub fn checksum_hex(data: &[u8], kind: ChecksumKind) -> String {
    match kind {
        ChecksumKind::Md5 => hex::encode(Md5::digest(data)),
        ChecksumKind::Sha1 => hex::encode(Sha1::digest(data)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::INFO_URL;

    fn request(kind: ArtifactKind, checksum: Option<ChecksumKind>) -> ArtifactRequest {
        ArtifactRequest {
            group_id: "commons-logging".to_string(),
            artifact_id: "commons-logging".to_string(),
            name: "commons-logging".to_string(),
            kind,
            checksum,
            info_url: INFO_URL,
        }
    }

    #[test]
    fn test_jar_stub_is_a_zip() {
        assert_eq!(&jar_stub()[..4], b"PK\x03\x04");
        assert_eq!(jar_stub().len(), 171);
    }

    #[test]
    fn test_synthesize_jar() {
        let (payload, content_type) = synthesize(&request(ArtifactKind::Jar, None)).unwrap();
        assert_eq!(&payload[..], jar_stub());
        assert_eq!(content_type, "application/jar");
    }

    #[test]
    fn test_synthesize_pom() {
        let (payload, content_type) = synthesize(&request(ArtifactKind::Pom, None)).unwrap();
        let doc = std::str::from_utf8(&payload).unwrap();

        assert_eq!(content_type, "text/xml");
        assert!(doc.contains("<groupId>commons-logging</groupId>"));
        assert!(doc.contains("<artifactId>commons-logging</artifactId>"));
    }

    #[test]
    fn test_synthesize_jar_md5_matches_reference() {
        let (payload, content_type) =
            synthesize(&request(ArtifactKind::Jar, Some(ChecksumKind::Md5))).unwrap();

        assert_eq!(content_type, "text/plain");
        assert_eq!(&payload[..], b"f8efd58036ebeb29ae79f5efa71c0d8f");
    }

    #[test]
    fn test_synthesize_jar_sha1_matches_reference() {
        let (payload, _) =
            synthesize(&request(ArtifactKind::Jar, Some(ChecksumKind::Sha1))).unwrap();
        assert_eq!(&payload[..], b"033033564082b7c443afef83ef8b0be6d24ef419");
    }

    #[test]
    fn test_synthesize_pom_checksum_covers_generated_document() {
        let (doc, _) = synthesize(&request(ArtifactKind::Pom, None)).unwrap();
        let (digest, _) =
            synthesize(&request(ArtifactKind::Pom, Some(ChecksumKind::Sha1))).unwrap();

        assert_eq!(&digest[..], checksum_hex(&doc, ChecksumKind::Sha1).as_bytes());
    }

    #[test]
    fn test_synthesize_is_idempotent() {
        for kind in [ArtifactKind::Jar, ArtifactKind::Pom] {
            for checksum in [None, Some(ChecksumKind::Md5), Some(ChecksumKind::Sha1)] {
                let req = request(kind, checksum);
                let (first, _) = synthesize(&req).unwrap();
                let (second, _) = synthesize(&req).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_checksum_hex_known_vectors() {
        assert_eq!(
            checksum_hex(b"", ChecksumKind::Md5),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            checksum_hex(b"", ChecksumKind::Sha1),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }
}
