//! Steady-state (asynchronous) evolution.
//!
//! Instead of swapping whole populations at generation boundaries, the
//! steady-state controller breeds, evaluates, and replaces one
//! individual at a time, continuously, across one or more round-robin
//! subpopulations.
//!
//! # Core Traits
//!
//! - [`SteadyStateProblem`]: breeding pipeline, deselection policy,
//!   genome identity
//! - [`Evaluator`]: non-blocking submit/poll evaluation transport
//!
//! # Key Types
//!
//! - [`SteadyStateConfig`]: capacities, replacement probability,
//!   duplicate retries, budgets
//! - [`SteadyStateController`]: the bootstrapping → steady → terminated
//!   state machine
//! - [`SyncEvaluator`]: canonical synchronous evaluation mode

mod config;
mod controller;
mod types;

pub use config::SteadyStateConfig;
pub use controller::{ControllerState, SteadyStateController, StopReason};
pub use types::{EvalDone, EvalJob, Evaluator, SteadyStateProblem, SyncEvaluator};
