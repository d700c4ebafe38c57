//! The sync engine: one batch pass of collect, publish, sweep.

pub mod collect;
pub mod context;
pub mod publish;
pub mod runner;
pub mod sweep;

pub use collect::{collect, NormalizedTask};
pub use context::BoardContext;
pub use publish::publish;
pub use runner::{run_pass, PassSummary};
pub use sweep::{sweep, SweepOutcome};
