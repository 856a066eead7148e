#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::Result as AnyResult;
use tokio::task::JoinSet;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::domain::rate_interval;

// The load comes from scheduler wakeup churn, not from spinning: each worker
// does nothing but sleep at the configured rate.
pub async fn cpu_load(rate: f64, shutdown: CancellationToken) -> AnyResult<()> {
    let pause = rate_interval(rate);
    let mut workers = JoinSet::new();
    for _ in 0..num_cpus::get() {
        let shutdown = shutdown.clone();
        workers.spawn(async move {
            loop {
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
