#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use noise_machine::serve;
use tracing::info;

fn init_tracing() {
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env());
    fmt.json().init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let bind = "0.0.0.0:80";
    info!(bind, "starting noise server");
    serve(bind, "static".into()).await?;
    Ok(())
}
