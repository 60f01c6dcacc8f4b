use tracing_subscriber::EnvFilter;
use crate::core::domain::Configuration;

// Logs go to stderr so they never interleave with the menu written to stdout.
pub fn setup_tracing(config: &Configuration) {
    let filter = EnvFilter::try_new(config.log_level.as_str())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    if config.json_logs {
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}
