//! `[debug]` directive — announce the process id and optionally wait for a
//! debugger to attach before anything else runs.

use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::context::RunContext;
use crate::pipeline::{Next, StageResult};

/// Directive name recognized by [`attach_debugger`].
pub const DEBUG_DIRECTIVE: &str = "debug";

/// Reports whether a debugger is attached. There is no portable way to ask
/// the OS, so hosts inject their own check; the default never reports
/// attached and the bounded wait simply runs out.
pub type AttachProbe = Arc<dyn Fn() -> bool>;

/// Build-time configuration for the debug directive stage.
///
/// Stored in the run's context store so the stage behavior stays a pure
/// function of its inputs; one clone is inserted per run.
#[derive(Clone)]
pub struct DebugDirectiveConfig {
    /// Block (bounded) until the probe reports attached.
    pub wait_for_attach: bool,
    /// Sleep between probe checks.
    pub poll: Duration,
    /// Give up waiting after this long.
    pub timeout: Duration,
    attach_probe: AttachProbe,
}

impl DebugDirectiveConfig {
    pub fn new(wait_for_attach: bool) -> Self {
        Self {
            wait_for_attach,
            poll: Duration::from_millis(500),
            timeout: Duration::from_secs(30),
            attach_probe: Arc::new(|| false),
        }
    }

    pub fn with_poll(mut self, poll: Duration) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_attach_probe<F>(mut self, probe: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.attach_probe = Arc::new(probe);
        self
    }
}

impl fmt::Debug for DebugDirectiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugDirectiveConfig")
            .field("wait_for_attach", &self.wait_for_attach)
            .field("poll", &self.poll)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Stage behavior for the `[debug]` directive.
///
/// On match: announce the process id on the run's console, optionally wait
/// (bounded, sleeping poll — never a busy spin) for the attach probe, then
/// strip the directive token by replacing the stream so downstream parsing
/// never sees directive syntax. Anything else passes through untouched.
pub fn attach_debugger(ctx: &mut RunContext, next: Next<'_>) -> StageResult {
    if ctx.tokens().directive() == Some(DEBUG_DIRECTIVE) {
        let config = ctx.store().get::<DebugDirectiveConfig>()?.clone();
        let pid = std::process::id();
        let program = ctx.settings().program_name.clone();
        ctx.console_mut()
            .write_line(&format!("Attach your debugger to process {pid} ({program})."))?;

        if config.wait_for_attach {
            wait_for_attach(&config);
        }

        let stripped = ctx.tokens().without_first();
        ctx.replace_tokens(stripped);
        tracing::debug!("debug directive handled, token stripped");
    }

    next.run(ctx)
}

fn wait_for_attach(config: &DebugDirectiveConfig) {
    let deadline = Instant::now() + config.timeout;
    while !(config.attach_probe)() {
        if Instant::now() >= deadline {
            tracing::warn!(
                timeout_ms = config.timeout.as_millis() as u64,
                "no debugger attached before timeout, continuing"
            );
            return;
        }
        thread::sleep(config.poll);
    }
    tracing::debug!("debugger attached");
}
