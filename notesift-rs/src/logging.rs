//! Tracing setup for the `notesift` binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "NOTESIFT_LOG";

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "notesift=warn",
        1 => "notesift=info",
        2 => "notesift=debug",
        _ => "notesift=trace",
    }
}

/// Install a stderr subscriber. `NOTESIFT_LOG` wins over `-v`.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return;
    }

    tracing::debug!(verbose, "tracing initialized");
}
