#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use std::time::Duration;

use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn cycle_leaves_no_residue() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test.txt");
    noise_machine::lib_disk::disk_cycle(&path)
        .await
        .expect("cycle");
    assert!(!path.exists());
}

#[tokio::test]
async fn cycle_fails_in_missing_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent").join("test.txt");
    let result = noise_machine::lib_disk::disk_cycle(&path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn loop_runs_until_cancelled() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test.txt");
    let shutdown = CancellationToken::new();
    let task = {
        let path = path.clone();
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            noise_machine::lib_disk::disk_load(&path, 100.0, shutdown).await
        })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.cancel();
    task.await.expect("join").expect("ok");
    assert!(!path.exists());
}
