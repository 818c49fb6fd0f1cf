//! Log setup for the `jornada` binary. Logs go to stderr so that calendar
//! JSON on stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Targets that receive log output when `RUST_LOG` is unset.
const CRATE_TARGETS: &[&str] = &[
    "jornada",
    "jornada_calendar",
    "jornada_cycle",
    "jornada_hours",
    "jornada_overlay",
    "jornada_pipeline",
    "jornada_stats",
    "jornada_validate",
];

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives for the jornada crates at the level `-v` selects.
fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. `RUST_LOG` replaces the `-v` level.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
