use std::time::Duration;

use glam::DVec2;

use super::event::TouchPoint;
use super::mouse::normalize;
use crate::picking::ObjectId;

/// Touch snapshot for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchState {
    /// Position of the first contact in physical pixels.
    pub pos: DVec2,
    /// Position divided by the surface size.
    pub normalized: DVec2,
    /// Position at the last dispatched `touchmove`.
    pub prev: DVec2,
    /// Number of active contacts.
    pub contacts: usize,
    /// A contact moved since the last frame.
    pub moving: bool,
    /// A contact was added since the last frame.
    pub started: bool,
    /// A contact was lifted since the last frame.
    pub ended: bool,
    /// The platform cancelled the gesture.
    pub cancelled: bool,
    /// Second single-finger tap inside the double touch window.
    pub double_touch: bool,
    /// Object under the touch, if any.
    pub picked: Option<ObjectId>,
}

/// Double tap detection parameters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TapWindow {
    pub(crate) delay: Duration,
    pub(crate) radius: f64,
}

/// Touch state machine: the public snapshot plus double tap tracking.
#[derive(Debug, Default)]
pub(crate) struct TouchInput {
    pub(crate) state: TouchState,
    /// A gesture that began with exactly one contact is in progress.
    single: bool,
    /// Start position of the current single-finger gesture.
    origin: DVec2,
    /// End time and start position of the last tap.
    last_tap: Option<(Duration, DVec2)>,
}

impl TouchInput {
    pub(crate) fn started(&mut self, touches: &[TouchPoint], surface: DVec2) {
        let Some(first) = touches.first() else {
            return;
        };
        self.place(first.position(), surface);
        self.state.prev = self.state.pos;
        self.state.contacts = touches.len();
        self.state.started = true;
        self.single = touches.len() == 1;
        if self.single {
            self.origin = self.state.pos;
        }
    }

    pub(crate) fn moved(&mut self, touches: &[TouchPoint], surface: DVec2) {
        let Some(first) = touches.first() else {
            return;
        };
        self.place(first.position(), surface);
        self.state.contacts = touches.len();
        self.state.moving = true;
        self.single = false;
        self.last_tap = None;
    }

    pub(crate) fn ended(
        &mut self,
        touches: &[TouchPoint],
        now: Duration,
        window: TapWindow,
    ) {
        self.state.ended = true;
        self.state.contacts = touches.len();
        if !touches.is_empty() {
            return;
        }
        self.state.prev = self.state.pos;
        if !self.single {
            return;
        }
        self.single = false;
        match self.last_tap {
            Some((at, origin))
                if now.saturating_sub(at) <= window.delay
                    && origin.distance(self.origin) <= window.radius =>
            {
                self.state.double_touch = true;
                self.last_tap = None;
            }
            _ => self.last_tap = Some((now, self.origin)),
        }
    }

    pub(crate) fn cancelled(&mut self) {
        self.state.cancelled = true;
        self.state.contacts = 0;
        self.single = false;
        self.last_tap = None;
    }

    fn place(&mut self, pos: DVec2, surface: DVec2) {
        self.state.pos = pos;
        self.state.normalized = normalize(pos, surface);
    }
}
