//! Deterministic implementations of the injectable capabilities, for tests of code that
//! consumes a [`ResolvedConfig`](crate::ResolvedConfig).

mod fixed_clock;
mod sequential_ids;

pub use fixed_clock::FixedClock;
pub use sequential_ids::SequentialIds;
