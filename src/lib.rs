#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

pub mod domain;
pub mod http;
pub mod lib_cpu;
pub mod lib_disk;
pub mod lib_mem;
pub mod lib_net;
pub mod service;
pub mod validation;

pub use domain::{rate_interval, LoadConfig, RawLoadConfig};
pub use http::{index, serve, WELCOME};
pub use service::{shutdown_signal, LoadRunner};
pub use validation::validate_config;
