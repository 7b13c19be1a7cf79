use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logger() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portfolio=info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

// No process environment in the browser; the level is fixed per build profile.
#[cfg(target_arch = "wasm32")]
pub fn init_logger() {
    use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

    let max_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level)
        .build();

    let _ = tracing_subscriber::registry()
        .with(WASMLayer::new(config))
        .try_init();
}
