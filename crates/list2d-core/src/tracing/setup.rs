//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "LIST2D_LOG";

/// Filter used when `LIST2D_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "list2d=info";

static INIT: Once = Once::new();

/// Initialize the list2d tracing/logging system.
///
/// Reads `LIST2D_LOG` for per-module log levels.
/// Format: `LIST2D_LOG=list2d_manipulator=debug,list2d_core=warn`
///
/// Falls back to `list2d=info` if `LIST2D_LOG` is not set or is invalid.
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
