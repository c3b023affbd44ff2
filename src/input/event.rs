//! Platform-agnostic raw input records.
//!
//! These are fed into
//! [`InputDispatcher::handle_input`](super::InputDispatcher::handle_input),
//! which only updates its state snapshots; semantic events fire on the next
//! [`handle_events`](super::InputDispatcher::handle_events).
//!
//! # Example
//!
//! ```
//! # use globenav::input::{InputDispatcher, InputEvent, MouseButton};
//! # use globenav::options::InputOptions;
//! let mut dispatcher = InputDispatcher::new(InputOptions::default());
//! dispatcher.handle_input(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
//! dispatcher.handle_input(InputEvent::MouseButton {
//!     button: MouseButton::Left,
//!     pressed: true,
//!     x: 100.0,
//!     y: 200.0,
//! });
//! ```

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Raw device event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f64,
        /// Vertical position in physical pixels.
        y: f64,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Horizontal pointer position in physical pixels.
        x: f64,
        /// Vertical pointer position in physical pixels.
        y: f64,
    },
    /// Wheel rotated.
    Wheel {
        /// Wheel delta (positive = away from the user).
        delta: f64,
    },
    /// Touch contact change.
    Touch {
        /// What happened.
        phase: TouchPhase,
        /// Contacts still on the surface after this event.
        touches: Vec<TouchPoint>,
    },
    /// Key pressed.
    KeyDown {
        /// Physical key string (`"KeyQ"`, `"Escape"`, ...).
        key: String,
    },
    /// Key released.
    KeyUp {
        /// Physical key string.
        key: String,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseButton {
    /// All buttons in dispatch order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Middle];

    /// Position in [`ALL`](Self::ALL).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
        }
    }
}

#[cfg(feature = "winit")]
impl TryFrom<winit::event::MouseButton> for MouseButton {
    /// Back, forward and extra buttons have no channels.
    type Error = winit::event::MouseButton;

    fn try_from(
        button: winit::event::MouseButton,
    ) -> Result<Self, Self::Error> {
        match button {
            winit::event::MouseButton::Left => Ok(Self::Left),
            winit::event::MouseButton::Right => Ok(Self::Right),
            winit::event::MouseButton::Middle => Ok(Self::Middle),
            other => Err(other),
        }
    }
}

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    /// A contact was added.
    Start,
    /// One or more contacts moved.
    Move,
    /// A contact was lifted.
    End,
    /// The platform cancelled the gesture.
    Cancel,
}

/// One touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    /// Platform contact identifier.
    pub id: u64,
    /// Horizontal position in physical pixels.
    pub x: f64,
    /// Vertical position in physical pixels.
    pub y: f64,
}

impl TouchPoint {
    /// Contact position.
    #[must_use]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_indices_follow_dispatch_order() {
        for (i, button) in MouseButton::ALL.into_iter().enumerate() {
            assert_eq!(button.index(), i);
        }
    }

    #[cfg(feature = "winit")]
    #[test]
    fn only_primary_winit_buttons_convert() {
        use winit::event::MouseButton as Winit;

        assert_eq!(MouseButton::try_from(Winit::Left), Ok(MouseButton::Left));
        assert_eq!(
            MouseButton::try_from(Winit::Middle),
            Ok(MouseButton::Middle)
        );
        for other in [Winit::Back, Winit::Forward, Winit::Other(8)] {
            assert_eq!(MouseButton::try_from(other), Err(other));
        }
    }

    #[test]
    fn events_deserialize_from_tagged_toml() {
        let text = r#"
type = "mouse_button"
button = "right"
pressed = true
x = 4.0
y = 8.0
"#;
        let event: InputEvent = toml::from_str(text).unwrap();
        assert_eq!(
            event,
            InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
                x: 4.0,
                y: 8.0,
            }
        );
    }
}
