/// The only version this repository ever serves. Any other version string
/// never matches the artifact grammar.
pub const PLACEHOLDER_VERSION: &str = "99.0-does-not-exist";

/// Announcement post explaining why this repository exists; embedded in
/// generated poms and error pages.
pub const INFO_URL: &str =
    "http://day-to-day-stuff.blogspot.com/2007/10/announcement-version-99-does-not-exist.html";

/// Artifact file kinds recognized by the repository grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Jar,
    Pom,
}

impl ArtifactKind {
    /// Content type served with the raw artifact payload
    pub fn content_type(self) -> &'static str {
        match self {
            ArtifactKind::Jar => "application/jar",
            ArtifactKind::Pom => "text/xml",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Jar => write!(f, "jar"),
            ArtifactKind::Pom => write!(f, "pom"),
        }
    }
}

impl std::str::FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jar" => Ok(ArtifactKind::Jar),
            "pom" => Ok(ArtifactKind::Pom),
            _ => Err(format!("Invalid artifact kind: {}", s)),
        }
    }
}

/// Checksum algorithms recognized as a trailing filename suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumKind {
    Md5,
    Sha1,
}

impl std::fmt::Display for ChecksumKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChecksumKind::Md5 => write!(f, "md5"),
            ChecksumKind::Sha1 => write!(f, "sha1"),
        }
    }
}

impl std::str::FromStr for ChecksumKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(ChecksumKind::Md5),
            "sha1" => Ok(ChecksumKind::Sha1),
            _ => Err(format!("Invalid checksum kind: {}", s)),
        }
    }
}

/// Structured result of classifying a repository resource path.
///
/// Invariant: `name == artifact_id`. The classifier rejects any path where
/// the filename-derived name disagrees with the artifact path segment, so a
/// constructed value always satisfies this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    /// Group identifier; nested group ids keep their `/` separators
    pub group_id: String,
    /// Artifact identifier, a single path segment
    pub artifact_id: String,
    /// Base name from the requested filename
    pub name: String,
    pub kind: ArtifactKind,
    /// Requested checksum suffix; `None` means the raw payload
    pub checksum: Option<ChecksumKind>,
    /// Carried along for substitution into generated poms
    pub info_url: &'static str,
}

/// Data handed to the not-found page template
#[derive(Debug, Clone)]
pub struct NotFoundContext {
    pub requested_url: String,
    pub info_url: &'static str,
}
