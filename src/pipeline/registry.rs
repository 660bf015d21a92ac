//! Stage registry — single source of truth for the chain's composition.

use std::collections::HashSet;
use std::fmt;

use crate::context::RunContext;
use crate::error::PipelineError;
use crate::pipeline::executor::{Next, StagePlan};

/// Coarse pipeline phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Before any parsing; directive interceptors and token rewrites.
    PreTransformTokens,
    /// Token stream → parse result.
    ParseInput,
    /// Parse result → handler arguments.
    BindValues,
    /// Run the selected command handler.
    Invoke,
    /// After the handler; result post-processing.
    PostInvoke,
}

/// What a stage behavior produces: the run's exit code, or a fault that
/// aborts the run.
pub type StageResult = Result<i32, PipelineError>;

type StageBehavior = Box<dyn Fn(&mut RunContext, Next<'_>) -> StageResult>;

/// One registered stage: a named, prioritized unit of pipeline behavior.
pub struct StageRegistration {
    name: &'static str,
    phase: Phase,
    /// Lower runs earlier within the phase.
    priority: i32,
    behavior: StageBehavior,
}

impl StageRegistration {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub(crate) fn invoke(&self, ctx: &mut RunContext, next: Next<'_>) -> StageResult {
        (self.behavior)(ctx, next)
    }
}

impl fmt::Debug for StageRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageRegistration")
            .field("name", &self.name)
            .field("phase", &self.phase)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Ordered collection of stage registrations.
///
/// Registration order is preserved and serves as the final tiebreak when
/// phase and priority are equal, so the resolved chain is deterministic for
/// identical registration sets.
#[derive(Debug, Default)]
pub struct StageRegistry {
    stages: Vec<StageRegistration>,
}

impl StageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stage behavior under `(phase, priority, name)`.
    ///
    /// Name collisions within a phase are not rejected here; they surface as
    /// a configuration error when the chain is built, before any stage runs.
    pub fn register<F>(&mut self, name: &'static str, phase: Phase, priority: i32, behavior: F)
    where
        F: Fn(&mut RunContext, Next<'_>) -> StageResult + 'static,
    {
        self.stages.push(StageRegistration {
            name,
            phase,
            priority,
            behavior: Box::new(behavior),
        });
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Freeze the registrations into an executable chain.
    ///
    /// Validates per-phase name uniqueness, then orders stages by
    /// (phase ascending, priority ascending, registration order). The sort
    /// is stable, so equal (phase, priority) pairs keep registration order.
    pub fn plan(&self) -> Result<StagePlan<'_>, PipelineError> {
        let mut seen: HashSet<(Phase, &'static str)> = HashSet::new();
        for stage in &self.stages {
            if !seen.insert((stage.phase, stage.name)) {
                return Err(PipelineError::DuplicateStage {
                    name: stage.name,
                    phase: stage.phase,
                });
            }
        }

        let mut ordered: Vec<&StageRegistration> = self.stages.iter().collect();
        ordered.sort_by_key(|stage| (stage.phase, stage.priority));
        Ok(StagePlan::new(ordered))
    }
}
