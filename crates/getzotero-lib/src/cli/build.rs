use crate::cli::params::BuildParams;
use crate::error::GetZoteroError;
use crate::{deb, extract, fetch, layout, version};
use std::path::PathBuf;
use tracing::info;

/// Runs the full pipeline: fetch, extract, read version, stage the Debian
/// layout, build the package. Returns the path of the produced `.deb`.
///
/// The scratch directory is a [`tempfile::TempDir`], so it is removed on
/// every exit path. On success it is closed explicitly so a removal failure
/// is reported instead of being swallowed by `Drop`.
pub async fn run_build(params: BuildParams) -> Result<PathBuf, GetZoteroError> {
    let BuildParams {
        spec,
        arch,
        output_dir,
    } = params;

    let scratch = tempfile::Builder::new().prefix("getzotero_").tempdir()?;
    info!(scratch = %scratch.path().display(), %arch, "Starting build");

    let client = reqwest::Client::new();
    let archive = fetch::download_archive(&client, &spec, arch, scratch.path()).await?;
    extract::extract_archive(&archive, scratch.path())?;

    let app_dir = scratch.path().join(spec.app_subdir(arch));
    let version = version::read_version(&app_dir, &spec)?;
    layout::stage_tree(scratch.path(), &app_dir, &spec, &version, arch)?;

    let output = deb::build_deb(&spec, scratch.path(), &version, arch, &output_dir).await?;

    scratch.close()?;
    info!(output = %output.display(), "Build finished");
    Ok(output)
}
