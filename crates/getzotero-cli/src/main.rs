use getzotero_lib::cli::{parse_args, resolve_command, run_build};
use getzotero_lib::error::GetZoteroError;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), GetZoteroError> {
    color_eyre::install()?;

    let args = parse_args();
    let params = resolve_command(args)?;
    run_build(params).await?;

    Ok(())
}
