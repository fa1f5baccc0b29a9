use crate::config::{Architecture, PackageSpec};
use crate::error::GetZoteroError;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::info;

/// Invokes the packaging tool (`dpkg-deb --build <scratch> <output>`) and
/// returns the path of the produced package.
///
/// A non-zero exit status from the tool is fatal.
pub async fn build_deb(
    spec: &PackageSpec,
    scratch: &Path,
    version: &str,
    arch: Architecture,
    output_dir: &Path,
) -> Result<PathBuf, GetZoteroError> {
    let output_path = output_dir.join(spec.deb_file_name(version, arch));
    info!(
        program = %spec.packaging_program,
        output = %output_path.display(),
        "Building Debian package"
    );

    let status = Command::new(&spec.packaging_program)
        .arg("--build")
        .arg(scratch)
        .arg(&output_path)
        .status()
        .await?;

    if !status.success() {
        return Err(GetZoteroError::PackagingTool {
            program: spec.packaging_program.clone(),
            status,
        });
    }

    info!(output = %output_path.display(), "Package built");
    Ok(output_path)
}
