//! Stage registry and pipeline executor.
//!
//! Hosts and extensions register named stages into coarse, totally ordered
//! phases; the executor freezes the registrations into one deterministic
//! chain and drives it for a single run.

mod executor;
mod registry;

pub use executor::{Next, StagePlan};
pub use registry::{Phase, StageRegistration, StageRegistry, StageResult};
