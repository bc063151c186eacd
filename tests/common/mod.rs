#![allow(dead_code)]

use std::cell::RefCell;
use std::fmt;

use log_support::{Args, Category, LogHandle, Severity};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub severity: Severity,
    pub category: Option<String>,
    pub template: String,
    pub args: Vec<String>,
    pub arg_ptrs: Vec<*const ()>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault(pub String);

/// Records every call and fails on templates listed in `reject`.
#[derive(Default)]
pub struct Recorder {
    pub calls: RefCell<Vec<Call>>,
    pub reject: Vec<&'static str>,
}

impl Recorder {
    pub fn rejecting(reject: &[&'static str]) -> Self {
        Recorder {
            calls: RefCell::default(),
            reject: reject.to_vec(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl LogHandle for Recorder {
    type Error = Fault;

    fn log(
        &self,
        severity: Severity,
        category: Option<&Category>,
        template: &str,
        args: Args<'_>,
    ) -> Result<(), Fault> {
        if self.reject.iter().any(|r| *r == template) {
            return Err(Fault(format!("rejected {template}")));
        }
        self.calls.borrow_mut().push(Call {
            severity,
            category: category.map(|c| c.name().to_string()),
            template: template.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            arg_ptrs: args.iter().map(|a| address(a)).collect(),
        });
        Ok(())
    }
}

pub fn address(value: &dyn fmt::Display) -> *const () {
    value as *const dyn fmt::Display as *const ()
}
