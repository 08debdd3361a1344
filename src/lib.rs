//! Taskboard: single-board task tracker core.
//!
//! This crate provides the state machine behind a three-column task board:
//! the in-memory task store, the filter projection over it, the pointer
//! drag-and-drop protocol that moves tasks between sections, and the task
//! creation form. Rendering is left to the caller.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure transition functions over immutable snapshots
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Task store, board snapshots and filter projection
//! - [`drag`]: Drag session state machine and controller
//! - [`form`]: Task creation form
//! - [`session`]: Top-level session wiring the above together
//! - [`config`]: Session configuration

pub mod board;
pub mod config;
pub mod drag;
pub mod form;
pub mod session;

pub use config::BoardConfig;
pub use session::{BoardSession, ColumnView};
