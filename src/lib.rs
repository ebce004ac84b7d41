//! Runnable examples for the bindenv crates live under `demos/`.
//!
//! Run with: cargo run --example arithmetic

/// Install a `tracing` subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bindenv_runtime=info".into());

    // A second call (e.g. from another example in the same process) is a no-op
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
