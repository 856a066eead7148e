#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use std::path::Path;

use anyhow::{Context, Result as AnyResult};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::domain::rate_interval;

pub const SCRATCH_FILE: &str = "test.txt";
pub const SCRATCH_BYTES: u64 = 1_000_000;

// One churn cycle: allocate, read back, rewrite, delete. The scratch file
// never survives a completed cycle.
pub async fn disk_cycle(path: &Path) -> AnyResult<()> {
    let file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("create {}", path.display()))?;
    file.set_len(SCRATCH_BYTES)
        .await
        .with_context(|| format!("extend {}", path.display()))?;
    drop(file);

    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    tokio::fs::write(path, &data)
        .await
        .with_context(|| format!("rewrite {}", path.display()))?;
    tokio::fs::remove_file(path)
        .await
        .with_context(|| format!("remove {}", path.display()))?;
    Ok(())
}

pub async fn disk_load(path: &Path, rate: f64, shutdown: CancellationToken) -> AnyResult<()> {
    let pause = rate_interval(rate);
    loop {
        disk_cycle(path).await?;
        tokio::select! {
            () = shutdown.cancelled() => return Ok(()),
            () = sleep(pause) => {}
        }
    }
}
