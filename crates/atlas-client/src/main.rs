//! Admin-Atlas Client
//!
//! Yew WASM frontend for browsing divisions, districts, upazilas and unions.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "atlas-client only supports wasm32 target. Use: cargo check -p atlas-client --target wasm32-unknown-unknown"
);

mod app;
mod boot;
mod components;
mod config;
mod pages;
mod router;
mod routes;

use config::ClientConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();

    let (config, persist_error) = ClientConfig::load();
    init_tracing(&config);

    if let Some(err) = persist_error {
        tracing::warn!(%err, "Failed to persist client configuration");
    }

    if let Err(err) = boot::mount() {
        tracing::error!(%err, "Startup failed");
        wasm_bindgen::throw_str(&err.to_string());
    }
}

/// Initialize tracing for wasm with tracing-web.
fn init_tracing(config: &ClientConfig) {
    let (filter, rejected) = match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(config::DEFAULT_LOG_FILTER), Some(err)),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    if let Some(err) = rejected {
        tracing::warn!(%err, filter = %config.log_filter, "Invalid log filter, using default");
    }
}
