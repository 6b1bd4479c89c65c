pub mod build_info;

use std::sync::Once;

use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Installs a stderr fmt subscriber filtered by `RUST_LOG`, defaulting the
/// workspace crates to `info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        // target matching is by prefix, so this covers every workspace crate
        let mut filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy();
        if let Ok(directive) = "gofinances=info".parse() {
            filter = filter.add_directive(directive);
        }

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
