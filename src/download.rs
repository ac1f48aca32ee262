//! Catalog file retrieval.
//!
//! The pipeline itself never touches the network; this collaborator either
//! places a complete file at the destination path or fails before the
//! pipeline's `Init` state begins.

use camino::Utf8Path;
use tokio::{fs::File, io::AsyncWriteExt};
use tokio_stream::StreamExt;

use crate::skycat_errors::SkycatError;

/// Download the catalog file from a URL, streaming it in chunks to `path`.
///
/// The destination's parent directory is created if needed. An HTTP error
/// status fails the download; a partially written file may remain at the
/// destination and is overwritten by the next attempt.
///
/// Arguments
/// ---------
/// * `url`: the URL of the catalog file.
/// * `path`: the destination path.
///
/// Return
/// ------
/// * `Ok(())` once the file is fully written and flushed, or a
///   [`SkycatError`] wrapping the HTTP or I/O failure.
pub async fn download_catalog(url: &str, path: &Utf8Path) -> Result<(), SkycatError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    log::info!("downloading {url}");
    let response = reqwest::get(url).await?.error_for_status()?;

    let mut file = File::create(path).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;

    log::info!("downloaded {url} to {path}");
    Ok(())
}
