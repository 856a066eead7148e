#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use std::time::Duration;

use tokio_util::sync::CancellationToken;

// The endpoint is unreachable on purpose: request failures must be swallowed
// and the workers must still wind down cleanly.
#[tokio::test]
async fn workers_swallow_errors_and_stop_on_cancel() {
    let shutdown = CancellationToken::new();
    let task = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            noise_machine::lib_net::net_load("http://127.0.0.1:1/static/10MB.zip", 2, 50.0, shutdown)
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.cancel();
    task.await.expect("join").expect("ok");
}
