//! Leveled logging calls forwarded to a caller-supplied [`LogHandle`].
//!
//! Every function here is a single delegation: one call on the handle, with
//! the same severity, category, template and arguments, and the handle's
//! result returned unchanged. The crate-root macros (`error!`, `warn!`,
//! `info!`, `debug!`, `trace!`) expand to these functions.
//!
//! ```
//! use log_support::{category, LogBridge};
//!
//! let bridge = LogBridge::new();
//! let security = category("SECURITY");
//!
//! let _ = log_support::support::error(&bridge, None, "failed: {}", &"diskFull");
//! let _ = log_support::info!(bridge, category: security, "user {} logged in", "alice");
//! let _ = log_support::debug!(bridge, "x={} y={}", 1, 2);
//! ```

use crate::args::IntoArgs;
use crate::category::Category;
use crate::handle::LogHandle;
use crate::severity::Severity;

/// Forwards one call to `handle` at the given severity.
#[inline]
#[track_caller]
pub fn log<'a, H, A>(
    handle: &H,
    severity: Severity,
    category: Option<&Category>,
    template: &str,
    args: A,
) -> Result<(), H::Error>
where
    H: LogHandle + ?Sized,
    A: IntoArgs<'a>,
{
    handle.log(severity, category, template, args.into_args())
}

/// Asks `handle` whether a call would be recorded.
#[inline]
pub fn enabled<H>(handle: &H, severity: Severity, category: Option<&Category>) -> bool
where
    H: LogHandle + ?Sized,
{
    handle.enabled(severity, category)
}

/// Borrows a category given either owned or by reference. Used by the macros.
#[doc(hidden)]
#[inline]
pub fn as_category<C>(category: &C) -> &Category
where
    C: AsRef<Category> + ?Sized,
{
    category.as_ref()
}

/// Logs an error message.
#[inline]
#[track_caller]
pub fn error<'a, H, A>(
    handle: &H,
    category: Option<&Category>,
    template: &str,
    args: A,
) -> Result<(), H::Error>
where
    H: LogHandle + ?Sized,
    A: IntoArgs<'a>,
{
    log(handle, Severity::Error, category, template, args)
}

/// Logs a warning message.
#[inline]
#[track_caller]
pub fn warn<'a, H, A>(
    handle: &H,
    category: Option<&Category>,
    template: &str,
    args: A,
) -> Result<(), H::Error>
where
    H: LogHandle + ?Sized,
    A: IntoArgs<'a>,
{
    log(handle, Severity::Warn, category, template, args)
}

/// Logs an info message.
#[inline]
#[track_caller]
pub fn info<'a, H, A>(
    handle: &H,
    category: Option<&Category>,
    template: &str,
    args: A,
) -> Result<(), H::Error>
where
    H: LogHandle + ?Sized,
    A: IntoArgs<'a>,
{
    log(handle, Severity::Info, category, template, args)
}

/// Logs a debug message.
#[inline]
#[track_caller]
pub fn debug<'a, H, A>(
    handle: &H,
    category: Option<&Category>,
    template: &str,
    args: A,
) -> Result<(), H::Error>
where
    H: LogHandle + ?Sized,
    A: IntoArgs<'a>,
{
    log(handle, Severity::Debug, category, template, args)
}

/// Logs a trace message.
#[inline]
#[track_caller]
pub fn trace<'a, H, A>(
    handle: &H,
    category: Option<&Category>,
    template: &str,
    args: A,
) -> Result<(), H::Error>
where
    H: LogHandle + ?Sized,
    A: IntoArgs<'a>,
{
    log(handle, Severity::Trace, category, template, args)
}

/// Logs an error message through a handle, optionally with `category: expr`.
///
/// The category may be given owned or by reference.
#[macro_export]
macro_rules! error {
    ($handle:expr, category: $category:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::support::error(
            &$handle,
            ::core::option::Option::Some($crate::support::as_category(&$category)),
            $template,
            ($(&$arg),+),
        )
    };
    ($handle:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::support::error(&$handle, ::core::option::Option::None, $template, ($(&$arg),+))
    };
}

/// Logs a warning message through a handle, optionally with `category: expr`.
///
/// The category may be given owned or by reference.
#[macro_export]
macro_rules! warn {
    ($handle:expr, category: $category:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::support::warn(
            &$handle,
            ::core::option::Option::Some($crate::support::as_category(&$category)),
            $template,
            ($(&$arg),+),
        )
    };
    ($handle:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::support::warn(&$handle, ::core::option::Option::None, $template, ($(&$arg),+))
    };
}

/// Logs an info message through a handle, optionally with `category: expr`.
///
/// The category may be given owned or by reference.
#[macro_export]
macro_rules! info {
    ($handle:expr, category: $category:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::support::info(
            &$handle,
            ::core::option::Option::Some($crate::support::as_category(&$category)),
            $template,
            ($(&$arg),+),
        )
    };
    ($handle:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::support::info(&$handle, ::core::option::Option::None, $template, ($(&$arg),+))
    };
}

/// Logs a debug message through a handle, optionally with `category: expr`.
///
/// The category may be given owned or by reference.
#[macro_export]
macro_rules! debug {
    ($handle:expr, category: $category:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::support::debug(
            &$handle,
            ::core::option::Option::Some($crate::support::as_category(&$category)),
            $template,
            ($(&$arg),+),
        )
    };
    ($handle:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::support::debug(&$handle, ::core::option::Option::None, $template, ($(&$arg),+))
    };
}

/// Logs a trace message through a handle, optionally with `category: expr`.
///
/// The category may be given owned or by reference.
#[macro_export]
macro_rules! trace {
    ($handle:expr, category: $category:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::support::trace(
            &$handle,
            ::core::option::Option::Some($crate::support::as_category(&$category)),
            $template,
            ($(&$arg),+),
        )
    };
    ($handle:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::support::trace(&$handle, ::core::option::Option::None, $template, ($(&$arg),+))
    };
}
