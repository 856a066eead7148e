#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use std::env;
use std::time::Duration;

// Raw environment snapshot, taken once at startup and never revisited.
#[derive(Clone, Debug, Default)]
pub struct RawLoadConfig {
    pub cpu: Option<String>,
    pub mem: Option<String>,
    pub disk: Option<String>,
    pub net_conc: Option<String>,
    pub net_rate: Option<String>,
}

impl RawLoadConfig {
    pub fn from_env() -> Self {
        Self {
            cpu: env::var("CPU").ok(),
            mem: env::var("MEM").ok(),
            disk: env::var("DISK").ok(),
            net_conc: env::var("NETCONC").ok(),
            net_rate: env::var("NETRATE").ok(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadConfig {
    pub cpu_rate: f64,
    pub mem_instances: usize,
    pub disk_rate: f64,
    pub net_concurrency: usize,
    pub net_rate: f64,
}

impl LoadConfig {
    pub fn cpu_enabled(&self) -> bool {
        self.cpu_rate > 0.0
    }

    pub fn mem_enabled(&self) -> bool {
        self.mem_instances > 0
    }

    pub fn disk_enabled(&self) -> bool {
        self.disk_rate > 0.0
    }

    // The network loader needs both knobs.
    pub fn net_enabled(&self) -> bool {
        self.net_concurrency > 0 && self.net_rate > 0.0
    }
}

// Pause between actions for a target rate in actions per second. Ties round
// away from zero; rates above 1e9/s collapse to a zero-length pause.
pub fn rate_interval(rate: f64) -> Duration {
    Duration::from_nanos((1e9 / rate).round() as u64)
}
