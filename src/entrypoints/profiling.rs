//! Logging setup for every platform.
//!
//! `profiling::scope!` spans are only emitted when the `profiling` feature is enabled
//! (it turns on `profiling/profile-with-tracing`); span timings are then logged on close.

/// Initialize the global tracing subscriber (native: stdout, honoring `RUST_LOG`)
#[cfg(not(target_arch = "wasm32"))]
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::format::FmtSpan;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let span_events = if cfg!(feature = "profiling") {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(span_events)
        .try_init()
    {
        eprintln!("Failed to initialize logging: {err}");
    }
}

/// Initialize the global tracing subscriber (web: browser console)
#[cfg(target_arch = "wasm32")]
pub fn setup_logging() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_wasm::WASMLayerConfigBuilder;

    let mut builder = WASMLayerConfigBuilder::new();
    let max_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    builder.set_max_level(max_level);
    let config = builder.build();
    let _ = tracing_subscriber::registry()
        .with(tracing_wasm::WASMLayer::new(config))
        .try_init();
}
