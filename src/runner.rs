//! Command runner — the invocation boundary.
//!
//! A [`CommandRunner`] is configured once (settings, stages, directives) and
//! then driven with raw process arguments. Each `run` builds the frozen
//! chain, constructs a fresh [`RunContext`], and returns the run's exit code.

use crate::console::{Console, StdConsole};
use crate::context::{AppSettings, RunContext};
use crate::directives::{attach_debugger, DebugDirectiveConfig, DEBUG_DIRECTIVE};
use crate::error::PipelineError;
use crate::pipeline::{Next, Phase, StageRegistry, StageResult};
use crate::tokens::tokenize;

type RunSetup = Box<dyn Fn(&mut RunContext) -> Result<(), PipelineError>>;
type ConsoleFactory = Box<dyn Fn() -> Box<dyn Console>>;

/// Configurable entry point for a pipeline-based CLI application.
pub struct CommandRunner {
    settings: AppSettings,
    registry: StageRegistry,
    /// Seeds each fresh run context (e.g. directive configuration) before
    /// the chain starts.
    run_setup: Vec<RunSetup>,
    /// Directive names with a registered interceptor.
    directive_names: Vec<&'static str>,
    console_factory: ConsoleFactory,
}

impl CommandRunner {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings,
            registry: StageRegistry::new(),
            run_setup: Vec::new(),
            directive_names: Vec::new(),
            console_factory: Box::new(|| Box::new(StdConsole)),
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Replace the console every run writes to. The console is cloned per
    /// run, so a test can keep one handle and read back what was written.
    pub fn with_console<C>(mut self, console: C) -> Self
    where
        C: Console + Clone + 'static,
    {
        self.console_factory = Box::new(move || Box::new(console.clone()));
        self
    }

    /// Open-ended configuration hook over the stage registry.
    pub fn configure<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut StageRegistry),
    {
        f(&mut self.registry);
        self
    }

    /// Register one stage under `(phase, priority, name)`.
    pub fn register_stage<F>(
        mut self,
        name: &'static str,
        phase: Phase,
        priority: i32,
        behavior: F,
    ) -> Self
    where
        F: Fn(&mut RunContext, Next<'_>) -> StageResult + 'static,
    {
        self.registry.register(name, phase, priority, behavior);
        self
    }

    /// Run a setup closure against every fresh run context before the chain
    /// starts. This is how build-time configuration reaches the per-run
    /// context store without ambient globals.
    pub fn prepare_run<F>(mut self, setup: F) -> Self
    where
        F: Fn(&mut RunContext) -> Result<(), PipelineError> + 'static,
    {
        self.run_setup.push(Box::new(setup));
        self
    }

    /// Install the `[debug]` directive with default wait policy.
    pub fn use_debug_directive(self, wait_for_attach: bool) -> Self {
        self.use_debug_directive_with(DebugDirectiveConfig::new(wait_for_attach))
    }

    /// Install the `[debug]` directive with an explicit configuration.
    ///
    /// Registers the interceptor outermost in the pre-transform phase and
    /// seeds each run's context store with a clone of `config`.
    pub fn use_debug_directive_with(mut self, config: DebugDirectiveConfig) -> Self {
        self.directive_names.push(DEBUG_DIRECTIVE);
        self.prepare_run(move |ctx| ctx.store_mut().insert(config.clone()))
            .register_stage(
                "debug-directive",
                Phase::PreTransformTokens,
                i32::MIN,
                attach_debugger,
            )
    }

    /// Execute one invocation against raw process arguments.
    ///
    /// Configuration errors (duplicate stage names) surface here, before any
    /// stage runs. Stage faults abort the run and propagate unchanged.
    pub fn run(&self, argv: &[String]) -> Result<i32, PipelineError> {
        let tokens = tokenize(argv);

        if let Some(name) = tokens.directive() {
            let known = self.directive_names.iter().any(|known| *known == name);
            if !known && !self.settings.ignore_unrecognized_directives {
                tracing::warn!(directive = name, "unrecognized directive, passing through");
            }
        }

        let plan = self.registry.plan()?;
        tracing::debug!(stages = ?plan.stage_names(), "pipeline chain built");

        let mut ctx = RunContext::new(
            argv.to_vec(),
            tokens,
            self.settings.clone(),
            (self.console_factory)(),
        );
        for setup in &self.run_setup {
            setup(&mut ctx)?;
        }

        plan.execute(&mut ctx)
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}
