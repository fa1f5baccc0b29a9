use crate::config::PackageSpec;
use crate::error::GetZoteroError;
use ini::Ini;
use std::path::Path;
use tracing::info;

/// Reads the application version out of the INI file inside the extracted
/// application directory (`[App] Version` for Zotero).
///
/// The value is returned verbatim; it is only used for file naming and
/// control metadata, so no format validation is applied.
pub fn read_version(app_dir: &Path, spec: &PackageSpec) -> Result<String, GetZoteroError> {
    let ini_path = app_dir.join(&spec.ini_file);
    let conf = Ini::load_from_file(&ini_path).map_err(|e| GetZoteroError::VersionRead {
        path: ini_path.clone(),
        reason: e.to_string(),
    })?;

    let version = conf
        .section(Some(spec.version_section.as_str()))
        .and_then(|section| section.get(&spec.version_key))
        .ok_or_else(|| GetZoteroError::VersionRead {
            path: ini_path.clone(),
            reason: format!(
                "missing key '{}' in section '[{}]'",
                spec.version_key, spec.version_section
            ),
        })?;

    info!(version, "Read upstream version");
    Ok(version.to_string())
}
