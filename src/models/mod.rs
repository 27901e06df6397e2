pub mod artifact;

pub use artifact::{
    ArtifactKind, ArtifactRequest, ChecksumKind, NotFoundContext, INFO_URL, PLACEHOLDER_VERSION,
};
