//! Shared test utilities.

#![allow(dead_code)]

/// Ordered record of which stages ran, appended via the context store.
#[derive(Debug, Default)]
pub struct StageLog(pub Vec<&'static str>);

/// Token snapshot taken by a downstream probe stage.
#[derive(Debug, Default)]
pub struct SeenTokens(pub Vec<String>);

pub fn raw_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("cmdflow=trace")
        .with_test_writer()
        .try_init();
}
