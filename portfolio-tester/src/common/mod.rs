pub mod artifacts;
pub mod scenario;

pub use artifacts::{FailureArtifacts, artifact_path};
