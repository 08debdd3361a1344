//! Adapter implementations for board ports.

mod clock;
mod random;
mod sequential;

pub use clock::ClockTaskIdGenerator;
pub use random::UuidTaskIdGenerator;
pub use sequential::SequentialTaskIdGenerator;
