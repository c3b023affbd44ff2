use std::time::Duration;

use glam::{DVec2, DVec3};

use super::event::MouseButton;
use crate::picking::ObjectId;

/// Per-button transition flags for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Button is pressed and has not been reported as `hold` yet, or is
    /// still held.
    pub down: bool,
    /// Released since the last frame.
    pub up: bool,
    /// Held across at least one dispatched frame.
    pub hold: bool,
    /// Released at the position it was pressed.
    pub click: bool,
    /// Second click inside the double click window.
    pub double_click: bool,
}

impl ButtonState {
    /// `true` while the button is pressed.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.down || self.hold
    }
}

/// Mouse snapshot for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseState {
    /// Pointer position in physical pixels.
    pub pos: DVec2,
    /// Pointer position divided by the surface size.
    pub normalized: DVec2,
    /// Position at the last dispatched `mousemove`.
    pub prev: DVec2,
    /// World-space ray direction under the pointer.
    pub direction: DVec3,
    /// Left, right and middle button flags, in [`MouseButton::ALL`] order.
    pub buttons: [ButtonState; 3],
    /// Accumulated wheel delta since the last frame.
    pub wheel_delta: f64,
    /// Pointer moved since the last frame.
    pub moving: bool,
    /// Pointer came to rest after the stop delay.
    pub just_stopped: bool,
    /// Object under the pointer, if any.
    pub picked: Option<ObjectId>,
}

impl Default for MouseState {
    fn default() -> Self {
        Self {
            pos: DVec2::ZERO,
            normalized: DVec2::ZERO,
            prev: DVec2::ZERO,
            direction: DVec3::ZERO,
            buttons: [ButtonState::default(); 3],
            wheel_delta: 0.0,
            moving: false,
            just_stopped: false,
            picked: None,
        }
    }
}

impl MouseState {
    /// Flags for one button.
    #[must_use]
    pub fn button(&self, button: MouseButton) -> &ButtonState {
        &self.buttons[button.index()]
    }

    /// `true` while any button is pressed.
    #[must_use]
    pub fn any_pressed(&self) -> bool {
        self.buttons.iter().any(ButtonState::is_pressed)
    }
}

/// Click bookkeeping for one button.
#[derive(Debug, Clone, Copy, Default)]
struct ClickTimer {
    /// Where the button went down, while it is down.
    pressed_at: Option<DVec2>,
    /// Time of the last single click still waiting for a second one.
    armed: Option<Duration>,
}

/// Mouse state machine: the public snapshot plus per-button click timers.
#[derive(Debug, Default)]
pub(crate) struct MouseInput {
    pub(crate) state: MouseState,
    timers: [ClickTimer; 3],
}

impl MouseInput {
    /// Record a cursor move. Returns `false` when the position is unchanged.
    pub(crate) fn moved(&mut self, pos: DVec2, surface: DVec2) -> bool {
        if pos == self.state.pos {
            return false;
        }
        for timer in &mut self.timers {
            timer.armed = None;
        }
        self.state.pos = pos;
        self.state.normalized = normalize(pos, surface);
        self.state.moving = true;
        true
    }

    /// Record a button press at `pos`.
    pub(crate) fn pressed(&mut self, button: MouseButton, pos: DVec2) {
        let i = button.index();
        self.timers[i].pressed_at = Some(pos);
        self.state.buttons[i].down = true;
    }

    /// Record a button release at `pos` and classify it as a click or
    /// double click.
    pub(crate) fn released(
        &mut self,
        button: MouseButton,
        pos: DVec2,
        now: Duration,
        double_click_delay: Duration,
    ) {
        let i = button.index();
        let timer = &mut self.timers[i];
        let flags = &mut self.state.buttons[i];
        flags.down = false;
        flags.up = true;

        if timer.pressed_at.take() != Some(pos) {
            return;
        }
        flags.click = true;
        match timer.armed {
            Some(at) if now.saturating_sub(at) <= double_click_delay => {
                flags.double_click = true;
                timer.armed = None;
            }
            _ => timer.armed = Some(now),
        }
    }

    pub(crate) fn wheel(&mut self, delta: f64) {
        self.state.wheel_delta += delta;
    }

    /// Forget pending double clicks and pressed buttons.
    pub(crate) fn reset(&mut self) {
        self.timers = [ClickTimer::default(); 3];
        self.state.buttons = [ButtonState::default(); 3];
    }
}

pub(crate) fn normalize(pos: DVec2, surface: DVec2) -> DVec2 {
    if surface.x > 0.0 && surface.y > 0.0 {
        pos / surface
    } else {
        DVec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);
    const SURFACE: DVec2 = DVec2::new(800.0, 600.0);

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn click(mouse: &mut MouseInput, pos: DVec2, at: u64) -> ButtonState {
        mouse.pressed(MouseButton::Left, pos);
        mouse.released(MouseButton::Left, pos, ms(at), DELAY);
        let flags = mouse.state.buttons[0];
        mouse.state.buttons[0] = ButtonState::default();
        flags
    }

    #[test]
    fn release_at_press_position_is_a_click() {
        let mut mouse = MouseInput::default();
        let flags = click(&mut mouse, DVec2::new(5.0, 5.0), 0);
        assert!(flags.click && flags.up && !flags.down);
        assert!(!flags.double_click);
    }

    #[test]
    fn release_elsewhere_is_not_a_click() {
        let mut mouse = MouseInput::default();
        mouse.pressed(MouseButton::Right, DVec2::new(5.0, 5.0));
        mouse.released(MouseButton::Right, DVec2::new(9.0, 5.0), ms(0), DELAY);
        let flags = mouse.state.button(MouseButton::Right);
        assert!(flags.up);
        assert!(!flags.click);
    }

    #[test]
    fn release_without_press_is_not_a_click() {
        let mut mouse = MouseInput::default();
        mouse.released(MouseButton::Left, DVec2::ZERO, ms(0), DELAY);
        assert!(!mouse.state.buttons[0].click);
    }

    #[test]
    fn second_click_inside_window_is_a_double_click() {
        let mut mouse = MouseInput::default();
        let pos = DVec2::new(1.0, 1.0);
        assert!(!click(&mut mouse, pos, 0).double_click);
        assert!(click(&mut mouse, pos, 300).double_click);
        // the pair resets the timer
        assert!(!click(&mut mouse, pos, 350).double_click);
    }

    #[test]
    fn late_click_rearms_the_timer() {
        let mut mouse = MouseInput::default();
        let pos = DVec2::new(1.0, 1.0);
        assert!(!click(&mut mouse, pos, 0).double_click);
        assert!(!click(&mut mouse, pos, 400).double_click);
        assert!(click(&mut mouse, pos, 450).double_click);
    }

    #[test]
    fn moving_cancels_pending_double_click() {
        let mut mouse = MouseInput::default();
        let pos = DVec2::new(1.0, 1.0);
        let _ = click(&mut mouse, pos, 0);
        assert!(mouse.moved(DVec2::new(2.0, 2.0), SURFACE));
        assert!(!click(&mut mouse, DVec2::new(2.0, 2.0), 50).double_click);
    }

    #[test]
    fn unchanged_position_is_not_a_move() {
        let mut mouse = MouseInput::default();
        assert!(mouse.moved(DVec2::new(400.0, 300.0), SURFACE));
        assert_eq!(mouse.state.normalized, DVec2::new(0.5, 0.5));
        mouse.state.moving = false;
        assert!(!mouse.moved(DVec2::new(400.0, 300.0), SURFACE));
        assert!(!mouse.state.moving);
    }

    #[test]
    fn wheel_accumulates_within_a_frame() {
        let mut mouse = MouseInput::default();
        mouse.wheel(1.0);
        mouse.wheel(2.0);
        assert_eq!(mouse.state.wheel_delta, 3.0);
    }

    #[test]
    fn zero_surface_normalizes_to_origin() {
        assert_eq!(normalize(DVec2::new(3.0, 4.0), DVec2::ZERO), DVec2::ZERO);
    }
}
