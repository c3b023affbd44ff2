//! `winit` window events to [`InputEvent`]s.

use glam::DVec2;
use winit::event::{
    ElementState, MouseScrollDelta, Touch, TouchPhase as WinitTouchPhase,
    WindowEvent,
};
use winit::keyboard::PhysicalKey;

use super::event::{InputEvent, MouseButton, TouchPhase, TouchPoint};

/// Pixel wheel deltas are scaled to roughly one line per 100 px.
const PIXEL_DELTA_SCALE: f64 = 0.01;

/// Converts `winit` window events into [`InputEvent`]s.
///
/// `winit` reports mouse buttons without a position and touches one
/// contact at a time, so the adapter remembers the cursor position and the
/// set of active contacts.
///
/// ```ignore
/// if let Some(input) = adapter.convert(&event) {
///     navigator.handle_input(input);
/// }
/// ```
#[derive(Debug, Default)]
pub struct WinitAdapter {
    cursor: DVec2,
    contacts: Vec<TouchPoint>,
}

impl WinitAdapter {
    /// Create an adapter with no active contacts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert one window event. Events the dispatcher does not consume
    /// return `None`.
    pub fn convert(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = DVec2::new(position.x, position.y);
                Some(InputEvent::CursorMoved {
                    x: position.x,
                    y: position.y,
                })
            }
            WindowEvent::MouseInput { button, state, .. } => {
                self.button(*button, *state == ElementState::Pressed)
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y * PIXEL_DELTA_SCALE
                    }
                };
                Some(InputEvent::Wheel { delta })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                let key = format!("{code:?}");
                Some(match event.state {
                    ElementState::Pressed => InputEvent::KeyDown { key },
                    ElementState::Released => InputEvent::KeyUp { key },
                })
            }
            WindowEvent::Touch(touch) => Some(self.touch(touch)),
            _ => None,
        }
    }

    /// Buttons without channels (back, forward, extra) are dropped.
    fn button(
        &self,
        button: winit::event::MouseButton,
        pressed: bool,
    ) -> Option<InputEvent> {
        let button = MouseButton::try_from(button).ok()?;
        Some(InputEvent::MouseButton {
            button,
            pressed,
            x: self.cursor.x,
            y: self.cursor.y,
        })
    }

    fn touch(&mut self, touch: &Touch) -> InputEvent {
        let phase = match touch.phase {
            WinitTouchPhase::Started => TouchPhase::Start,
            WinitTouchPhase::Moved => TouchPhase::Move,
            WinitTouchPhase::Ended => TouchPhase::End,
            WinitTouchPhase::Cancelled => TouchPhase::Cancel,
        };
        self.track(
            phase,
            TouchPoint {
                id: touch.id,
                x: touch.location.x,
                y: touch.location.y,
            },
        )
    }

    /// Update the contact list and build the matching event.
    fn track(&mut self, phase: TouchPhase, point: TouchPoint) -> InputEvent {
        match phase {
            TouchPhase::Start | TouchPhase::Move => {
                match self.contacts.iter_mut().find(|c| c.id == point.id) {
                    Some(contact) => *contact = point,
                    None => self.contacts.push(point),
                }
            }
            TouchPhase::End => self.contacts.retain(|c| c.id != point.id),
            TouchPhase::Cancel => self.contacts.clear(),
        }
        InputEvent::Touch {
            phase,
            touches: self.contacts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: u64, x: f64) -> TouchPoint {
        TouchPoint { id, x, y: 0.0 }
    }

    fn contacts(event: &InputEvent) -> Vec<u64> {
        match event {
            InputEvent::Touch { touches, .. } => {
                touches.iter().map(|t| t.id).collect()
            }
            _ => Vec::new(),
        }
    }

    #[test]
    fn thumb_buttons_are_dropped() {
        use winit::event::MouseButton as Winit;

        let mut adapter = WinitAdapter::new();
        adapter.cursor = DVec2::new(3.0, 4.0);
        assert_eq!(
            adapter.button(Winit::Left, true),
            Some(InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
                x: 3.0,
                y: 4.0,
            })
        );
        assert_eq!(adapter.button(Winit::Back, true), None);
        assert_eq!(adapter.button(Winit::Forward, false), None);
        assert_eq!(adapter.button(Winit::Other(9), true), None);
    }

    #[test]
    fn contacts_follow_start_and_end() {
        let mut adapter = WinitAdapter::new();
        let first = adapter.track(TouchPhase::Start, point(1, 0.0));
        assert_eq!(contacts(&first), vec![1]);
        let second = adapter.track(TouchPhase::Start, point(2, 5.0));
        assert_eq!(contacts(&second), vec![1, 2]);
        let lifted = adapter.track(TouchPhase::End, point(1, 0.0));
        assert_eq!(contacts(&lifted), vec![2]);
        let last = adapter.track(TouchPhase::End, point(2, 5.0));
        assert!(contacts(&last).is_empty());
    }

    #[test]
    fn move_updates_contact_in_place() {
        let mut adapter = WinitAdapter::new();
        let _ = adapter.track(TouchPhase::Start, point(4, 0.0));
        let moved = adapter.track(TouchPhase::Move, point(4, 9.0));
        assert_eq!(
            moved,
            InputEvent::Touch {
                phase: TouchPhase::Move,
                touches: vec![point(4, 9.0)],
            }
        );
    }

    #[test]
    fn cancel_drops_every_contact() {
        let mut adapter = WinitAdapter::new();
        let _ = adapter.track(TouchPhase::Start, point(1, 0.0));
        let _ = adapter.track(TouchPhase::Start, point(2, 0.0));
        let cancelled = adapter.track(TouchPhase::Cancel, point(2, 0.0));
        assert!(contacts(&cancelled).is_empty());
    }
}
