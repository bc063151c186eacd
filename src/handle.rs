use std::rc::Rc;
use std::sync::Arc;

use crate::args::Args;
use crate::category::Category;
use crate::severity::Severity;

/// Destination for leveled log records: the engine the facade delegates to.
///
/// One method covers every leveled operation. The severity picks the level,
/// `category` is `None` for the uncategorised form, and the [`Args`] variant
/// carries the arity.
pub trait LogHandle {
    /// Fault reported by the engine. Returned to facade callers as is.
    type Error;

    fn log(
        &self,
        severity: Severity,
        category: Option<&Category>,
        template: &str,
        args: Args<'_>,
    ) -> Result<(), Self::Error>;

    /// Whether a call with this severity and category would be recorded.
    fn enabled(&self, _severity: Severity, _category: Option<&Category>) -> bool {
        true
    }
}

impl<H: LogHandle + ?Sized> LogHandle for &H {
    type Error = H::Error;

    #[track_caller]
    fn log(
        &self,
        severity: Severity,
        category: Option<&Category>,
        template: &str,
        args: Args<'_>,
    ) -> Result<(), Self::Error> {
        (**self).log(severity, category, template, args)
    }

    fn enabled(&self, severity: Severity, category: Option<&Category>) -> bool {
        (**self).enabled(severity, category)
    }
}

macro_rules! forward_smart_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<H: LogHandle + ?Sized> LogHandle for $ptr<H> {
                type Error = H::Error;

                #[track_caller]
                fn log(
                    &self,
                    severity: Severity,
                    category: Option<&Category>,
                    template: &str,
                    args: Args<'_>,
                ) -> Result<(), Self::Error> {
                    (**self).log(severity, category, template, args)
                }

                fn enabled(&self, severity: Severity, category: Option<&Category>) -> bool {
                    (**self).enabled(severity, category)
                }
            }
        )+
    };
}

forward_smart_pointer!(Box, Rc, Arc);
