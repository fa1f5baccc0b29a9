use crate::config::{Architecture, PackageSpec};
use std::path::PathBuf;

/// Resolved inputs for one pipeline run.
#[derive(Debug, Clone)]
pub struct BuildParams {
    pub spec: PackageSpec,
    pub arch: Architecture,
    pub output_dir: PathBuf,
}
