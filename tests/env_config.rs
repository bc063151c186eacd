use std::env;

use log::LevelFilter;
use log_support::config::{FILTER_ENV, STYLE_ENV};
use log_support::LoggingConfig;

// Single test: the environment and the global logger are process-wide.
#[test]
fn environment_overrides_configured_values() {
    env::remove_var(FILTER_ENV);
    env::remove_var(STYLE_ENV);
    assert_eq!(LoggingConfig::from_env(), LoggingConfig::default());

    env::set_var(FILTER_ENV, "debug,net=trace");
    env::set_var(STYLE_ENV, "never");
    let config = LoggingConfig::from_env();
    assert_eq!(config.filter, "debug,net=trace");
    assert_eq!(config.write_style, "never");
    assert_eq!(config.parse_write_style().unwrap(), env_logger::WriteStyle::Never);

    env::set_var("RUST_LOG", "warn");
    let config = LoggingConfig {
        filter: "trace".to_string(),
        ..LoggingConfig::default()
    };
    config.init().unwrap();
    assert_eq!(log::max_level(), LevelFilter::Warn);
}
