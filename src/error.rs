use std::path::PathBuf;

/// Failures of the logging configuration layer.
///
/// The facade itself has no error type; handle faults are returned as the
/// handle's own `Error`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("error reading config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown write style '{0}', expected auto, always or never")]
    InvalidStyle(String),

    #[error("a global logger is already installed")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}
