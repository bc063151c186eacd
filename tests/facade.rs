mod common;

use common::{address, Call, Fault, Recorder};
use log_support::{support, Category, Severity};

fn call(
    severity: Severity,
    category: Option<&str>,
    template: &str,
    args: &[&str],
    arg_ptrs: Vec<*const ()>,
) -> Call {
    Call {
        severity,
        category: category.map(str::to_string),
        template: template.to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
        arg_ptrs,
    }
}

#[test]
fn error_with_one_argument() {
    let recorder = Recorder::default();
    let reason = "diskFull";

    log_support::error!(recorder, "failed: {}", reason).unwrap();

    assert_eq!(
        recorder.calls(),
        [call(
            Severity::Error,
            None,
            "failed: {}",
            &["diskFull"],
            vec![address(&reason)],
        )]
    );
}

#[test]
fn info_with_category() {
    let recorder = Recorder::default();
    let cat = Category::new("SESSION");
    let user = "alice";

    log_support::info!(recorder, category: cat, "user {} logged in", user).unwrap();

    assert_eq!(
        recorder.calls(),
        [call(
            Severity::Info,
            Some("SESSION"),
            "user {} logged in",
            &["alice"],
            vec![address(&user)],
        )]
    );
}

#[test]
fn debug_with_two_arguments() {
    let recorder = Recorder::default();
    let (x, y) = (1, 2);

    log_support::debug!(recorder, "x={} y={}", x, y).unwrap();

    assert_eq!(
        recorder.calls(),
        [call(
            Severity::Debug,
            None,
            "x={} y={}",
            &["1", "2"],
            vec![address(&x), address(&y)],
        )]
    );
}

#[test]
fn trace_with_category_and_two_arguments() {
    let recorder = Recorder::default();
    let cat = Category::new("HEARTBEAT");
    let (a, b) = ("a", "b");

    log_support::trace!(recorder, category: cat, "ping {} pong {}", a, b).unwrap();

    assert_eq!(
        recorder.calls(),
        [call(
            Severity::Trace,
            Some("HEARTBEAT"),
            "ping {} pong {}",
            &["a", "b"],
            vec![address(&a), address(&b)],
        )]
    );
}

#[test]
fn every_severity_and_shape_is_one_call_in_order() {
    let recorder = Recorder::default();
    let cat = Category::new("ALL");
    let (one, two) = ("one", "two");

    macro_rules! four_shapes {
        ($level:ident) => {
            log_support::$level!(recorder, "t {}", one).unwrap();
            log_support::$level!(recorder, category: cat, "t {}", one).unwrap();
            log_support::$level!(recorder, "t {} {}", one, two).unwrap();
            log_support::$level!(recorder, category: cat, "t {} {}", one, two).unwrap();
        };
    }

    four_shapes!(error);
    four_shapes!(warn);
    four_shapes!(info);
    four_shapes!(debug);
    four_shapes!(trace);

    let calls = recorder.calls();
    assert_eq!(calls.len(), 20);

    let mut expected = Vec::new();
    for severity in Severity::ALL {
        expected.push((severity, None, 1));
        expected.push((severity, Some("ALL".to_string()), 1));
        expected.push((severity, None, 2));
        expected.push((severity, Some("ALL".to_string()), 2));
    }
    let observed: Vec<_> = calls
        .iter()
        .map(|c| (c.severity, c.category.clone(), c.args.len()))
        .collect();
    assert_eq!(observed, expected);
}

#[test]
fn functions_and_macros_forward_the_same_call() {
    let via_macro = Recorder::default();
    let via_function = Recorder::default();
    let cat = Category::new("NET");
    let port = 8080;

    log_support::warn!(via_macro, category: cat, "port {} busy", port).unwrap();
    support::warn(&via_function, Some(&cat), "port {} busy", &port).unwrap();
    support::log(&via_function, Severity::Warn, Some(&cat), "port {} busy", &port).unwrap();

    let expected = via_macro.calls();
    assert_eq!(via_function.calls(), [expected[0].clone(), expected[0].clone()]);
}

#[test]
fn handle_fault_reaches_the_caller_unchanged() {
    let recorder = Recorder::rejecting(&["boom {}"]);

    let direct = support::log(&recorder, Severity::Error, None, "boom {}", &1);
    let via_macro = log_support::error!(recorder, "boom {}", 1);

    assert_eq!(direct, Err(Fault("rejected boom {}".to_string())));
    assert_eq!(via_macro, direct);
    assert!(recorder.calls().is_empty());
}

#[test]
fn boxed_and_shared_handles_are_handles() {
    let boxed: Box<Recorder> = Box::default();
    log_support::info!(boxed, "boxed {}", 1).unwrap();
    assert_eq!(boxed.calls().len(), 1);

    let shared = std::rc::Rc::new(Recorder::default());
    let by_ref = &shared;
    log_support::info!(by_ref, "shared {}", 2).unwrap();
    assert_eq!(shared.calls()[0].args, ["2"]);
}
