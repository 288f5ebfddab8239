//! Tracing subscriber for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical subscriber on stderr, filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=little_eval=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let layer = HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr);
            let _ = tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(layer)
                .try_init();
        }
    });
}
