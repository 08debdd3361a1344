//! Task store and filter projection for the board.
//!
//! The board holds three fixed sections of tasks plus the active filter
//! criteria. All transitions are pure functions over immutable snapshots;
//! [`services::TaskStore`] owns the current snapshot and is the only place
//! it is replaced. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
