//! Input handling: raw event types, per-device state machines, and the
//! dispatcher that turns them into per-frame semantic events.

/// Optional `winit` event adapter.
#[cfg(feature = "winit")]
pub mod adapter;
/// Per-frame semantic event dispatch.
pub mod dispatcher;
/// Platform-agnostic input events.
pub mod event;
/// Held key tracking.
pub mod keyboard;
/// Mouse snapshot and click state machine.
pub mod mouse;
/// Touch snapshot and double tap state machine.
pub mod touch;

#[cfg(feature = "winit")]
pub use adapter::WinitAdapter;
pub use dispatcher::InputDispatcher;
pub use event::{InputEvent, MouseButton, TouchPhase, TouchPoint};
pub use keyboard::KeyboardState;
pub use mouse::{ButtonState, MouseState};
pub use touch::TouchState;
