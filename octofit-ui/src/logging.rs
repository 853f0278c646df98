//! Browser Console Logging
//!
//! `tracing` events formatted by `tracing-subscriber` and written to the
//! browser console through `tracing-web`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_web::MakeWebConsoleWriter;

/// Install the global subscriber; `level` is an `EnvFilter` directive
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(MakeWebConsoleWriter::new());

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::warn!("Logging already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn init_twice_is_harmless() {
        init("debug");
        init("not a directive ===");
        tracing::info!("logging initialized");
    }
}
