//! Integration tests for the `[debug]` directive interceptor.

mod common;

use std::time::{Duration, Instant};

use cmdflow::{
    BufferedConsole, CommandRunner, DebugDirectiveConfig, Next, Phase, RunContext, TokenKind,
};
use common::{raw_args, SeenTokens};

/// Runner with a buffered console and a parse-phase probe that snapshots the
/// token stream the rest of the chain would see.
fn probed_runner(console: &BufferedConsole) -> CommandRunner {
    CommandRunner::default()
        .with_console(console.clone())
        .prepare_run(|ctx| ctx.store_mut().insert(SeenTokens::default()))
        .register_stage(
            "token-probe",
            Phase::ParseInput,
            0,
            |ctx: &mut RunContext, next: Next<'_>| {
                let seen: Vec<String> =
                    ctx.tokens().iter().map(|t| t.raw.clone()).collect();
                ctx.store_mut().get_mut::<SeenTokens>()?.0 = seen;
                next.run(ctx)
            },
        )
}

fn seen_tokens(runner: CommandRunner, argv: &[String]) -> Vec<String> {
    let captured = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = captured.clone();
    let runner = runner.register_stage(
        "token-inspector",
        Phase::PostInvoke,
        0,
        move |ctx: &mut RunContext, next: Next<'_>| {
            let result = next.run(ctx)?;
            *sink.lock() = ctx.store().get::<SeenTokens>()?.0.clone();
            Ok(result)
        },
    );
    assert_eq!(runner.run(argv).unwrap(), 0);
    let seen = captured.lock().clone();
    seen
}

#[test]
fn debug_directive_announces_pid_and_strips_the_token() {
    common::init_tracing();

    let console = BufferedConsole::new();
    let runner = probed_runner(&console).use_debug_directive(false);

    let seen = seen_tokens(runner, &raw_args(&["[debug]", "build", "--flag"]));
    assert_eq!(seen, vec!["build", "--flag"]);

    let lines = console.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Attach your debugger to process "));
    assert!(lines[0].contains(&std::process::id().to_string()));
}

#[test]
fn downstream_stages_see_plain_kinds_after_stripping() {
    let console = BufferedConsole::new();
    let captured = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = captured.clone();

    let runner = CommandRunner::default()
        .with_console(console.clone())
        .use_debug_directive(false)
        .register_stage(
            "kind-probe",
            Phase::ParseInput,
            0,
            move |ctx: &mut RunContext, next: Next<'_>| {
                *sink.lock() = ctx.tokens().iter().map(|t| t.kind).collect();
                next.run(ctx)
            },
        );

    runner
        .run(&raw_args(&["[debug]", "build", "--flag"]))
        .unwrap();

    let kinds = captured.lock().clone();
    assert_eq!(kinds, vec![TokenKind::Operand, TokenKind::Option]);
}

#[test]
fn directive_not_in_first_position_is_ignored() {
    let console = BufferedConsole::new();
    let runner = probed_runner(&console).use_debug_directive(false);

    let seen = seen_tokens(runner, &raw_args(&["build", "[debug]", "--flag"]));
    assert_eq!(seen, vec!["build", "[debug]", "--flag"]);
    assert!(console.lines().is_empty());
}

#[test]
fn double_bracketed_token_is_not_the_debug_directive() {
    // Only the exact form `[debug]` is reserved; extra brackets make it an
    // unrecognized directive that must survive untouched.
    let console = BufferedConsole::new();
    let runner = probed_runner(&console).use_debug_directive(false);

    let seen = seen_tokens(runner, &raw_args(&["[[debug]]", "build"]));
    assert_eq!(seen, vec!["[[debug]]", "build"]);
    assert!(console.lines().is_empty());
}

#[test]
fn unrecognized_directive_passes_through_without_side_effects() {
    let console = BufferedConsole::new();
    let runner = probed_runner(&console).use_debug_directive(false);

    let seen = seen_tokens(runner, &raw_args(&["[time]", "build"]));
    assert_eq!(seen, vec!["[time]", "build"]);
    assert!(console.lines().is_empty());
}

#[test]
fn wait_for_attach_continues_once_the_probe_reports_attached() {
    let console = BufferedConsole::new();
    let config = DebugDirectiveConfig::new(true)
        .with_timeout(Duration::from_secs(5))
        .with_attach_probe(|| true);
    let runner = CommandRunner::default()
        .with_console(console.clone())
        .use_debug_directive_with(config);

    let started = Instant::now();
    assert_eq!(runner.run(&raw_args(&["[debug]", "build"])).unwrap(), 0);
    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(console.lines().len(), 1);
}

#[test]
fn wait_for_attach_is_bounded_when_nothing_attaches() {
    let console = BufferedConsole::new();
    let config = DebugDirectiveConfig::new(true)
        .with_poll(Duration::from_millis(1))
        .with_timeout(Duration::from_millis(10));
    let runner = CommandRunner::default()
        .with_console(console.clone())
        .use_debug_directive_with(config);

    let started = Instant::now();
    assert_eq!(runner.run(&raw_args(&["[debug]", "build"])).unwrap(), 0);
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
fn original_input_still_carries_the_directive_after_stripping() {
    let console = BufferedConsole::new();
    let captured = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = captured.clone();

    let runner = CommandRunner::default()
        .with_console(console.clone())
        .use_debug_directive(false)
        .register_stage(
            "original-probe",
            Phase::ParseInput,
            0,
            move |ctx: &mut RunContext, next: Next<'_>| {
                *sink.lock() = ctx.original().args.clone();
                next.run(ctx)
            },
        );

    runner.run(&raw_args(&["[debug]", "build"])).unwrap();
    assert_eq!(captured.lock().clone(), vec!["[debug]", "build"]);
}
