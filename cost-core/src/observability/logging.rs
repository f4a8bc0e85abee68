use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, fmt};
use std::sync::OnceLock;

static LOG_INIT: OnceLock<()> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Install the global subscriber once. `RUST_LOG` overrides `default_level`.
/// Logs go to stderr so command output stays clean.
pub fn setup_logging(default_level: &str, format: LogFormat) {
    LOG_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let registry = tracing_subscriber::registry().with(filter);

        match format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true);
                registry.with(json_layer).init();
            }
            LogFormat::Text => {
                let fmt_layer = fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true);
                registry.with(fmt_layer).init();
            }
        }
    });
}
