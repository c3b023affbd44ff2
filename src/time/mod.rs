//! Time sources and cancellable scheduled tasks.
//!
//! All input timing (double click windows, the mouse stop debounce) is
//! measured against a [`Clock`] so the state machines can be driven by a
//! [`ManualClock`] in tests and replays.

mod clock;
mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{Scheduler, TaskId};
