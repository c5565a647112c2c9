use std::io::{self, IsTerminal};
use std::sync::OnceLock;

use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

static LEVEL_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes logging. Call once at host startup; later calls are no-ops.
///
/// - Output: stdout, colored when attached to a terminal, plain when piped.
/// - Level: INFO by default, or overridden by the RUST_LOG env var.
pub fn init_default_logging() {
    let (level_filter, level_handle) = reload::Layer::new(make_filter());

    let stdout_layer = tracing_subscriber::fmt::layer().with_ansi(io::stdout().is_terminal());

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .try_init()
        .is_ok()
    {
        let _ = LEVEL_HANDLE.set(level_handle);
    }
}

/// Changes the active log filter at runtime.
/// Accepts a bare level ("error", "warn", "info", "debug", "trace")
/// or any full EnvFilter directive.
pub fn set_log_level(level: &str) -> Result<()> {
    let handle = LEVEL_HANDLE
        .get()
        .ok_or_else(|| anyhow::anyhow!("logging not yet initialized"))?;
    let filter = EnvFilter::try_new(level)
        .map_err(|e| anyhow::anyhow!("invalid log level '{level}': {e}"))?;
    handle
        .reload(filter)
        .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
}
