use crate::cli::args::Args;
use crate::cli::params::BuildParams;
use crate::config::PackageSpec;
use crate::error::GetZoteroError;
use std::path::PathBuf;

/// Turns parsed arguments into [`BuildParams`], validating everything that
/// can be checked before any network I/O happens.
pub fn resolve_command(args: Args) -> Result<BuildParams, GetZoteroError> {
    let output_dir = PathBuf::from(args.output_dir);
    if !output_dir.is_dir() {
        return Err(GetZoteroError::CliArgumentValidation {
            details: format!(
                "Output directory '{}' does not exist or is not a directory.",
                output_dir.display()
            ),
        });
    }

    Ok(BuildParams {
        spec: PackageSpec::zotero(),
        arch: args.arch,
        output_dir,
    })
}
