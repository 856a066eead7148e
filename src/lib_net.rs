#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::Result as AnyResult;
use tokio::task::JoinSet;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::domain::rate_interval;

pub const TARGET_URL: &str = "http://noiseserver.q/static/10MB.zip";

pub async fn net_load(
    url: &str,
    concurrency: usize,
    rate: f64,
    shutdown: CancellationToken,
) -> AnyResult<()> {
    let pause = rate_interval(rate);
    let client = reqwest::Client::new();
    let mut workers = JoinSet::new();
    for _ in 0..concurrency {
        let client = client.clone();
        let url = url.to_owned();
        let shutdown = shutdown.clone();
        workers.spawn(async move {
            loop {
                // Outcome discarded, success and failure alike.
                let _ = client.get(&url).send().await;
                tokio::select! {
                    () = shutdown.cancelled() => return,
                    () = sleep(pause) => {}
                }
            }
        });
    }
    while workers.join_next().await.is_some() {}
    Ok(())
}
