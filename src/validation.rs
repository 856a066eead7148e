#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use std::str::FromStr;

use anyhow::{bail, Result as AnyResult};

use crate::domain::{LoadConfig, RawLoadConfig};

fn parse_var<T: FromStr>(name: &str, value: Option<&str>, errors: &mut Vec<String>) -> Option<T> {
    match value {
        None => {
            errors.push(format!("{name} is not set"));
            None
        }
        Some(raw) => match raw.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.push(format!("unable to parse {name}: {raw:?}"));
                None
            }
        },
    }
}

// Every variable is checked so one failed startup reports all of them.
// Non-positive values are valid; they leave the matching loader disabled.
pub fn validate_config(raw: &RawLoadConfig) -> AnyResult<LoadConfig> {
    let mut errors = Vec::new();
    let cpu_rate = parse_var::<f64>("CPU", raw.cpu.as_deref(), &mut errors);
    let mem_instances = parse_var::<i64>("MEM", raw.mem.as_deref(), &mut errors);
    let disk_rate = parse_var::<f64>("DISK", raw.disk.as_deref(), &mut errors);
    let net_concurrency = parse_var::<i64>("NETCONC", raw.net_conc.as_deref(), &mut errors);
    let net_rate = parse_var::<f64>("NETRATE", raw.net_rate.as_deref(), &mut errors);

    if let (Some(cpu_rate), Some(mem_instances), Some(disk_rate), Some(net_concurrency), Some(net_rate)) =
        (cpu_rate, mem_instances, disk_rate, net_concurrency, net_rate)
    {
        // Negative counts are well-formed input; they leave the loader off.
        return Ok(LoadConfig {
            cpu_rate,
            mem_instances: usize::try_from(mem_instances).unwrap_or(0),
            disk_rate,
            net_concurrency: usize::try_from(net_concurrency).unwrap_or(0),
            net_rate,
        });
    }
    bail!("invalid configuration: {}", errors.join("; "));
}
