#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use std::path::Path;

use anyhow::{Context, Result as AnyResult};
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;

pub const REFERENCE_URL: &str = "http://ipv4.download.thinkbroadband.com/10MB.zip";
pub const REFERENCE_FILE: &str = "memoryInstance";

pub async fn download_reference(
    client: &reqwest::Client,
    url: &str,
    path: &Path,
) -> AnyResult<()> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .with_context(|| format!("download {url}"))?;
    let body = response.bytes().await.context("read reference payload")?;
    tokio::fs::write(path, &body)
        .await
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub async fn load_instances(path: &Path, instances: usize) -> AnyResult<Vec<Vec<u8>>> {
    let mut copies = Vec::with_capacity(instances);
    for _ in 0..instances {
        let copy = tokio::fs::read(path)
            .await
            .with_context(|| format!("read {}", path.display()))?;
        copies.push(copy);
    }
    Ok(copies)
}

// Holds N independent copies of the reference payload and touches each one
// every second to keep its pages referenced. Contents are never altered.
pub async fn memory_load(
    url: &str,
    path: &Path,
    instances: usize,
    shutdown: CancellationToken,
) -> AnyResult<()> {
    let client = reqwest::Client::new();
    download_reference(&client, url, path).await?;
    let copies = load_instances(path, instances).await?;
    loop {
        tokio::select! {
            () = shutdown.cancelled() => return Ok(()),
            () = sleep(Duration::from_secs(1)) => {}
        }
        for copy in &copies {
            std::hint::black_box(copy.first());
        }
    }
}
