use crate::config::{Architecture, PackageSpec};
use crate::error::GetZoteroError;
use futures::StreamExt;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Streams the upstream archive for `arch` into the scratch directory and
/// returns the path it was written to.
///
/// Any transport failure, including a non-success HTTP status, maps to
/// [`GetZoteroError::Download`] carrying the attempted URL. There is no
/// retry: the tool is a one-shot pipeline.
pub async fn download_archive(
    client: &Client,
    spec: &PackageSpec,
    arch: Architecture,
    scratch: &Path,
) -> Result<PathBuf, GetZoteroError> {
    let url = spec.download_url(arch);
    info!(%url, "Downloading upstream archive");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| GetZoteroError::Download {
            url: url.clone(),
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(GetZoteroError::Download {
            url,
            reason: format!("server returned {}", response.status()),
        });
    }

    let archive_path = scratch.join(&spec.archive_name);
    let file = tokio::fs::File::create(&archive_path).await?;
    let mut writer = tokio::io::BufWriter::new(file);

    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| GetZoteroError::Download {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        downloaded += chunk.len() as u64;
        writer.write_all(&chunk).await?;
    }
    writer.flush().await?;

    info!(bytes = downloaded, path = %archive_path.display(), "Download complete");
    Ok(archive_path)
}
