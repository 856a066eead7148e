#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use std::path::Path;

use anyhow::{Context, Result as AnyResult};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::domain::LoadConfig;
use crate::{lib_cpu, lib_disk, lib_mem, lib_net};

pub struct LoadRunner {
    config: LoadConfig,
    shutdown: CancellationToken,
}

impl LoadRunner {
    pub fn new(config: LoadConfig) -> Self {
        Self {
            config,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub fn spawn_loaders(&self, loaders: &mut JoinSet<AnyResult<()>>) -> usize {
        let mut started = 0;
        if self.config.cpu_enabled() {
            info!(rate = self.config.cpu_rate, "cpu loader started");
            loaders.spawn(lib_cpu::cpu_load(self.config.cpu_rate, self.shutdown.clone()));
            started += 1;
        }
        if self.config.mem_enabled() {
            info!(instances = self.config.mem_instances, "memory loader started");
            loaders.spawn(lib_mem::memory_load(
                lib_mem::REFERENCE_URL,
                Path::new(lib_mem::REFERENCE_FILE),
                self.config.mem_instances,
                self.shutdown.clone(),
            ));
            started += 1;
        }
        if self.config.disk_enabled() {
            info!(rate = self.config.disk_rate, "disk loader started");
            loaders.spawn(lib_disk::disk_load(
                Path::new(lib_disk::SCRATCH_FILE),
                self.config.disk_rate,
                self.shutdown.clone(),
            ));
            started += 1;
        }
        if self.config.net_enabled() {
            info!(
                concurrency = self.config.net_concurrency,
                rate = self.config.net_rate,
                "network loader started"
            );
            loaders.spawn(lib_net::net_load(
                lib_net::TARGET_URL,
                self.config.net_concurrency,
                self.config.net_rate,
                self.shutdown.clone(),
            ));
            started += 1;
        }
        started
    }

    // Runs until a shutdown signal arrives. A loader error is fatal and
    // propagates out; with no loaders enabled this still blocks on the
    // signal alone.
    pub async fn run(self) -> AnyResult<()> {
        let mut loaders = JoinSet::new();
        let started = self.spawn_loaders(&mut loaders);
        info!(loaders = started, "running until signalled");
        loop {
            tokio::select! {
                () = shutdown_signal() => {
                    info!("shutdown signal received");
                    self.shutdown.cancel();
                    while loaders.join_next().await.is_some() {}
                    return Ok(());
                }
                Some(finished) = loaders.join_next() => {
                    finished.context("loader task panicked")??;
                }
            }
        }
    }
}

pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut terminate) = signal(SignalKind::terminate()) {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
            return;
        }
    }
    let _ = tokio::signal::ctrl_c().await;
}
