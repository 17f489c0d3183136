use tracing_subscriber::EnvFilter;
use super::AppConfig;

/// Installs the global subscriber. `RUST_LOG` takes precedence over `log_level`.
pub fn setup_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime());

    if config.use_json {
        builder.json().with_target(true).init();
    } else {
        builder.compact().init();
    }
}
