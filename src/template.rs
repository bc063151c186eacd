use std::fmt;

use crate::args::Args;

const ANCHOR: &str = "{}";
const ESCAPE: char = '\\';

/// A template paired with its arguments, rendered on demand.
///
/// Each `{}` takes the next argument. `\{}` prints a literal `{}` and
/// `\\{}` prints a backslash followed by the argument. Anchors without an
/// argument print as `{}`; arguments without an anchor are dropped.
#[derive(Clone, Copy)]
pub struct Interpolated<'a> {
    template: &'a str,
    args: Args<'a>,
}

impl<'a> Interpolated<'a> {
    pub fn new(template: &'a str, args: Args<'a>) -> Self {
        Interpolated { template, args }
    }
}

impl fmt::Display for Interpolated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.template;
        let mut next = 0;

        while let Some(pos) = rest.find(ANCHOR) {
            let Some(arg) = self.args.get(next) else {
                break;
            };
            let before = &rest[..pos];
            if before.ends_with(ESCAPE) {
                let unescaped = &before[..before.len() - 1];
                if unescaped.ends_with(ESCAPE) {
                    // `\\{}`: the backslash itself was escaped.
                    f.write_str(unescaped)?;
                    fmt::Display::fmt(arg, f)?;
                    next += 1;
                } else {
                    f.write_str(unescaped)?;
                    f.write_str(ANCHOR)?;
                }
            } else {
                f.write_str(before)?;
                fmt::Display::fmt(arg, f)?;
                next += 1;
            }
            rest = &rest[pos + ANCHOR.len()..];
        }

        f.write_str(rest)
    }
}

impl fmt::Debug for Interpolated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
