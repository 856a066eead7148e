#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use noise_machine::{validate_config, LoadRunner, RawLoadConfig};
use tracing::{error, info};

fn init_tracing() {
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env());
    fmt.json().init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let config = match validate_config(&RawLoadConfig::from_env()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %format!("{e:#}"), "configuration rejected");
            std::process::exit(1);
        }
    };
    info!(
        cpu = config.cpu_rate,
        mem = config.mem_instances,
        disk = config.disk_rate,
        netconc = config.net_concurrency,
        netrate = config.net_rate,
        "starting noise machine"
    );
    if let Err(e) = LoadRunner::new(config).run().await {
        error!(error = %format!("{e:#}"), "loader failed");
        std::process::exit(1);
    }
}
