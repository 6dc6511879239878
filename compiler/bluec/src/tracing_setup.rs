//! Subscriber setup for the binary. Library crates only emit events.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber when `RUST_LOG` is set; otherwise do nothing.
///
/// With `BLUE_LOG_TREE` also set, spans are drawn as an indented tree, which
/// follows nested calls and imports more easily than flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("BLUE_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
