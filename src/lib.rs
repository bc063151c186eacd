//! Leveled logging facade with optional categories.
//!
//! Calls are forwarded one-to-one to a caller-supplied [`LogHandle`]; the
//! [`LogBridge`] handle routes them into the `log` crate.

pub mod args;
pub mod bridge;
pub mod category;
pub mod config;
pub mod error;
pub mod handle;
pub mod severity;
pub mod support;
pub mod template;

pub use args::{Args, IntoArgs};
pub use bridge::LogBridge;
pub use category::{category, Category, CategoryRegistry};
pub use config::LoggingConfig;
pub use error::ConfigError;
pub use handle::LogHandle;
pub use severity::Severity;

pub mod prelude {
    pub use crate::args::*;
    pub use crate::bridge::*;
    pub use crate::category::*;
    pub use crate::handle::*;
    pub use crate::severity::*;
    pub use crate::support;
}
