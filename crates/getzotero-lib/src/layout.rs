use crate::config::{Architecture, PackageSpec};
use crate::error::GetZoteroError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Rearranges the extracted tree into the layout `dpkg-deb` expects:
///
/// ```text
/// <scratch>/opt/<package>/...            the application itself
/// <scratch>/DEBIAN/control               package metadata
/// <scratch>/usr/share/applications/...   desktop entry
/// ```
pub fn stage_tree(
    scratch: &Path,
    app_dir: &Path,
    spec: &PackageSpec,
    version: &str,
    arch: Architecture,
) -> Result<(), GetZoteroError> {
    info!("Preparing package layout");

    let opt_dir = scratch.join("opt");
    fs::create_dir(&opt_dir)?;
    fs::rename(app_dir, opt_dir.join(&spec.package_name))?;

    let debian_dir = scratch.join("DEBIAN");
    fs::create_dir(&debian_dir)?;
    fs::write(
        debian_dir.join("control"),
        spec.control_file(version, arch),
    )?;

    let desktop_dir = scratch.join("usr").join("share").join("applications");
    fs::create_dir_all(&desktop_dir)?;
    fs::write(
        desktop_dir.join(format!("{}.desktop", spec.package_name)),
        &spec.desktop_entry,
    )?;

    Ok(())
}
