//! Multi-objective evolutionary-computation core.
//!
//! Provides the selection and archive-management machinery shared by
//! Pareto-based evolutionary algorithms:
//!
//! - **Objective space primitives**: direction-aware objective vectors
//!   and Pareto-dominance comparison.
//! - **SPEA2 selection core**: non-dominated front partitioning,
//!   k-th-nearest-neighbor density estimation, strength/raw-fitness
//!   assignment, archive construction with nearest-neighbor truncation,
//!   and a generational runner tying them together.
//! - **Steady-state evolution**: a continuous one-in-one-out controller
//!   with round-robin subpopulations, duplicate avoidance, and
//!   deselection-based replacement over a non-blocking evaluation queue.
//!
//! # Architecture
//!
//! This crate deliberately contains no genome representations, variation
//! operators, or problem-specific evaluation code. Consumers plug those
//! in through the [`spea2::Spea2Problem`] and
//! [`steady_state::SteadyStateProblem`] traits; the crate operates only
//! on objective vectors and opaque individual handles.

pub mod error;
pub mod objective;
pub mod random;
pub mod spea2;
pub mod steady_state;
