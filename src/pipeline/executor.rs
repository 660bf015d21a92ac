//! Pipeline executor — drives the frozen stage chain for one run.

use crate::context::RunContext;
use crate::pipeline::registry::{StageRegistration, StageResult};

/// The frozen, totally ordered chain for one registration set.
///
/// Borrows the registrations; build one per run via
/// [`StageRegistry::plan`](crate::pipeline::StageRegistry::plan).
#[derive(Debug)]
pub struct StagePlan<'a> {
    stages: Vec<&'a StageRegistration>,
}

impl<'a> StagePlan<'a> {
    pub(crate) fn new(stages: Vec<&'a StageRegistration>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Drive the chain to completion.
    ///
    /// The first stage in sorted order is outermost and decides first whether
    /// the rest of the chain runs at all. If the run's exit latch is set at
    /// any point, the latched code is the final result regardless of what the
    /// chain returned. A stage fault aborts the run and propagates unchanged.
    pub fn execute(&self, ctx: &mut RunContext) -> StageResult {
        let result = Next::new(&self.stages).run(ctx)?;
        Ok(ctx.exit_code().unwrap_or(result))
    }
}

/// Continuation handed to each stage.
///
/// Consuming `run` advances the chain, so a stage can continue at most once;
/// dropping it without calling `run` short-circuits the rest of the chain and
/// makes the stage's own return value the pipeline's result.
pub struct Next<'a> {
    stages: &'a [&'a StageRegistration],
    index: usize,
}

impl<'a> Next<'a> {
    pub(crate) fn new(stages: &'a [&'a StageRegistration]) -> Self {
        Self { stages, index: 0 }
    }

    /// Run the remainder of the chain.
    ///
    /// A set exit latch stops the walk before the next stage is entered and
    /// yields the latched code. A fully exhausted chain where every stage
    /// passed through yields 0.
    pub fn run(self, ctx: &mut RunContext) -> StageResult {
        if let Some(code) = ctx.exit_code() {
            return Ok(code);
        }

        match self.stages.get(self.index) {
            None => Ok(0),
            Some(stage) => {
                tracing::trace!(
                    stage = stage.name(),
                    phase = ?stage.phase(),
                    priority = stage.priority(),
                    "entering stage"
                );
                let next = Next {
                    stages: self.stages,
                    index: self.index + 1,
                };
                stage.invoke(ctx, next)
            }
        }
    }
}
