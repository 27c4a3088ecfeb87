pub mod auth;
pub mod business_object;
pub mod client;
pub mod config;
pub mod error;
pub mod estimate;
pub mod event;
pub mod handler;
pub mod schema;

pub use client::{ItsmClient, Submit};
pub use config::{Credentials, ParameterNames, SsmParameterStore};
pub use error::BridgeError;

/// Logs at `info` unless `RUST_LOG` says otherwise.
pub fn init_logger() {
    if env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .is_err()
    {
        log::info!("Logger already initialized");
    }
}
