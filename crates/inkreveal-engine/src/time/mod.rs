//! Time subsystem.
//!
//! Everything time-driven in the engine runs on virtual time: hosts push
//! elapsed durations in, nothing sleeps and nothing reads the wall clock.
//! - [`Scheduler`]: cancellable one-shot and repeating tasks keyed by purpose
//! - [`Fade`]: linear opacity ramp advanced by the same deltas
//! - [`FrameClock`]: real-time delta source for interactive hosts, clamped so
//!   a stalled frame degrades into slower decay instead of a burst of ticks

mod fade;
mod frame_clock;
mod scheduler;

pub use fade::Fade;
pub use frame_clock::{FrameClock, FrameTime};
pub use scheduler::{Fired, Scheduler, TaskId};
