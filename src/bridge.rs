use std::borrow::Cow;
use std::convert::Infallible;
use std::panic::Location;

use crate::args::Args;
use crate::category::Category;
use crate::handle::LogHandle;
use crate::severity::Severity;
use crate::template::Interpolated;

/// Target used for calls that carry no category.
pub const DEFAULT_TARGET: &str = "log_support";

/// [`LogHandle`] backed by a [`log::Log`] implementation.
///
/// A category becomes the record target; without one the bridge's default
/// target is used. Only the category name is consulted, not its references.
/// The record carries the file and line of the facade call. Records are
/// filtered by [`log::max_level`] and the backend's own `enabled` before the
/// template is rendered.
#[derive(Clone)]
pub struct LogBridge<'a> {
    logger: &'a dyn log::Log,
    target: Cow<'a, str>,
}

impl LogBridge<'static> {
    /// Bridge to the globally installed logger.
    pub fn new() -> Self {
        LogBridge::with_logger(log::logger())
    }
}

impl Default for LogBridge<'static> {
    fn default() -> Self {
        LogBridge::new()
    }
}

impl<'a> LogBridge<'a> {
    pub fn with_logger(logger: &'a dyn log::Log) -> Self {
        LogBridge {
            logger,
            target: Cow::Borrowed(DEFAULT_TARGET),
        }
    }

    /// Replaces the target used for uncategorised calls.
    pub fn with_target(mut self, target: impl Into<Cow<'a, str>>) -> Self {
        self.target = target.into();
        self
    }

    pub fn default_target(&self) -> &str {
        &self.target
    }

    fn target_for<'s>(&'s self, category: Option<&'s Category>) -> &'s str {
        match category {
            Some(category) => category.name(),
            None => &self.target,
        }
    }

    pub fn flush(&self) {
        self.logger.flush();
    }
}

impl std::fmt::Debug for LogBridge<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogBridge")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl LogHandle for LogBridge<'_> {
    type Error = Infallible;

    #[track_caller]
    fn log(
        &self,
        severity: Severity,
        category: Option<&Category>,
        template: &str,
        args: Args<'_>,
    ) -> Result<(), Infallible> {
        if !self.enabled(severity, category) {
            return Ok(());
        }
        let message = Interpolated::new(template, args);
        let location = Location::caller();
        self.logger.log(
            &log::Record::builder()
                .args(format_args!("{}", message))
                .level(severity.to_level())
                .target(self.target_for(category))
                .file(Some(location.file()))
                .line(Some(location.line()))
                .build(),
        );
        Ok(())
    }

    fn enabled(&self, severity: Severity, category: Option<&Category>) -> bool {
        let level = severity.to_level();
        level <= log::max_level()
            && self.logger.enabled(
                &log::Metadata::builder()
                    .level(level)
                    .target(self.target_for(category))
                    .build(),
            )
    }
}
