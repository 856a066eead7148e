#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use noise_machine::domain::LoadConfig;
use noise_machine::LoadRunner;
use tokio::task::JoinSet;

#[tokio::test]
async fn zero_config_starts_no_loaders() {
    let runner = LoadRunner::new(LoadConfig::default());
    let mut loaders = JoinSet::new();
    assert_eq!(runner.spawn_loaders(&mut loaders), 0);
    assert!(loaders.is_empty());
}

#[tokio::test]
async fn cpu_only_config_starts_one_loader() {
    let config = LoadConfig {
        cpu_rate: 100.0,
        ..LoadConfig::default()
    };
    let runner = LoadRunner::new(config);
    let mut loaders = JoinSet::new();
    assert_eq!(runner.spawn_loaders(&mut loaders), 1);
    runner.shutdown_token().cancel();
    while let Some(finished) = loaders.join_next().await {
        finished.expect("join").expect("ok");
    }
}

#[tokio::test]
async fn net_loader_needs_both_knobs() {
    let config = LoadConfig {
        net_concurrency: 2,
        ..LoadConfig::default()
    };
    let runner = LoadRunner::new(config);
    let mut loaders = JoinSet::new();
    assert_eq!(runner.spawn_loaders(&mut loaders), 0);
}
