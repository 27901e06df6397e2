use crate::models::{ArtifactRequest, ChecksumKind, INFO_URL, PLACEHOLDER_VERSION};

/// Path prefix under which the emulated Maven 2 repository is mounted
const ROUTE_PREFIX: &str = "/mvn2/";

/// Classify a request path as an artifact request.
///
/// Accepts exactly paths of the shape
/// `/mvn2/<groupId>/<artifactId>/<version>/<name>-<version>.<ext>[.<checksum>]`
/// where `<version>` is the fixed placeholder, `<ext>` is `jar` or `pom` and
/// `<checksum>` is `sha1` or `md5`. The group id may span multiple path
/// segments; it absorbs everything up to the fixed trailing structure.
///
/// Returns `None` for anything else. Malformed paths and merely absent
/// artifacts are indistinguishable here: both fall through to the not-found
/// page.
pub fn classify(path: &str) -> Option<ArtifactRequest> {
    let rest = path.strip_prefix(ROUTE_PREFIX)?;

    // Parse the fixed trailing structure from the right so the group id
    // keeps every leading segment: when a path could split more than one
    // way, the longest group id wins.
    let (dirs, filename) = rest.rsplit_once('/')?;
    let (dirs, version) = dirs.rsplit_once('/')?;
    if version != PLACEHOLDER_VERSION {
        return None;
    }
    let (group_id, artifact_id) = dirs.rsplit_once('/')?;
    if group_id.is_empty() || artifact_id.is_empty() {
        return None;
    }

    let (filename, checksum) = split_checksum(filename);
    let (stem, kind) = filename.rsplit_once('.')?;
    let kind = kind.parse().ok()?;
    let name = stem
        .strip_suffix(PLACEHOLDER_VERSION)?
        .strip_suffix('-')?;

    // The filename-derived name must agree with the artifact path segment;
    // a mismatch is treated as no match, not as an error.
    if name.is_empty() || name != artifact_id {
        return None;
    }

    Some(ArtifactRequest {
        group_id: group_id.to_string(),
        artifact_id: artifact_id.to_string(),
        name: name.to_string(),
        kind,
        checksum,
        info_url: INFO_URL,
    })
}

/// Split a trailing checksum suffix off the filename, if one is present
fn split_checksum(filename: &str) -> (&str, Option<ChecksumKind>) {
    match filename.rsplit_once('.') {
        Some((rest, suffix)) => match suffix.parse() {
            Ok(kind) => (rest, Some(kind)),
            Err(_) => (filename, None),
        },
        None => (filename, None),
    }
}
