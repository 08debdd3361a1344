//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

mod id_generator;

pub use id_generator::TaskIdGenerator;
