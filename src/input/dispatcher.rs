//! Per-frame semantic event dispatch.
//!
//! Raw [`InputEvent`]s only mutate the mouse, touch and keyboard
//! snapshots. Once per frame [`InputDispatcher::handle_events`] diffs those
//! snapshots and fires named events, first on the picked object's local bus
//! and then on the dispatcher's global bus.

use std::fmt;

use glam::DVec2;

use super::event::{InputEvent, MouseButton, TouchPhase, TouchPoint};
use super::keyboard::KeyboardState;
use super::mouse::{MouseInput, MouseState};
use super::touch::{TapWindow, TouchInput, TouchState};
use crate::camera::Camera;
use crate::events::{Channel, Event, EventBus, EventPayload, SubscriptionId};
use crate::options::InputOptions;
use crate::picking::{ColorKey, PickedObject, PickingSource};
use crate::time::{Clock, Scheduler, SystemClock, TaskId};

/// Deferred work owned by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    MouseStop,
}

/// Where an event is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    /// Picked object's bus, then the global bus.
    Both,
    /// Picked object's bus only.
    Local,
    /// Global bus only.
    Global,
}

// ─────────────────────────────────────────────────────────────────────────────
// InputDispatcher
// ─────────────────────────────────────────────────────────────────────────────

/// Turns raw pointer, touch and keyboard input into per-frame semantic
/// events.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// dispatcher.handle_input(event);
///
/// // Once per frame, after the picking pass:
/// dispatcher.handle_events(&camera, &registry);
/// ```
pub struct InputDispatcher {
    options: InputOptions,
    clock: Box<dyn Clock>,
    surface: DVec2,
    mouse: MouseInput,
    touch: TouchInput,
    keyboard: KeyboardState,
    scheduler: Scheduler<Timer>,
    stop_task: Option<TaskId>,
    /// Key hovered when the current drag began.
    drag_origin: Option<ColorKey>,
    /// Object under the pointer as of the last picking resolution.
    mouse_object: Option<PickedObject>,
    /// Object under the touch as of the last picking resolution.
    touch_object: Option<PickedObject>,
    events: EventBus,
}

impl fmt::Debug for InputDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputDispatcher")
            .field("options", &self.options)
            .field("surface", &self.surface)
            .field("mouse", &self.mouse.state)
            .field("touch", &self.touch.state)
            .field("keyboard", &self.keyboard)
            .field("stop_task", &self.stop_task)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl InputDispatcher {
    /// Create a dispatcher timed by the system clock.
    #[must_use]
    pub fn new(options: InputOptions) -> Self {
        Self::with_clock(options, SystemClock::new())
    }

    /// Create a dispatcher timed by `clock`.
    #[must_use]
    pub fn with_clock(
        options: InputOptions,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            options,
            clock: Box::new(clock),
            surface: DVec2::ONE,
            mouse: MouseInput::default(),
            touch: TouchInput::default(),
            keyboard: KeyboardState::default(),
            scheduler: Scheduler::new(),
            stop_task: None,
            drag_origin: None,
            mouse_object: None,
            touch_object: None,
            events: EventBus::new(),
        }
    }

    /// Current gesture thresholds.
    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Replace gesture thresholds. Pending timers keep their deadlines.
    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
    }

    /// Set the surface size used for normalized coordinates.
    pub fn set_surface_size(&mut self, width: u32, height: u32) {
        self.surface = DVec2::new(f64::from(width), f64::from(height));
    }

    /// Mouse snapshot.
    #[must_use]
    pub fn mouse(&self) -> &MouseState {
        &self.mouse.state
    }

    /// Touch snapshot.
    #[must_use]
    pub fn touch(&self) -> &TouchState {
        &self.touch.state
    }

    /// Whether a physical key is currently held.
    #[must_use]
    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.keyboard.is_pressed(key)
    }

    /// Object currently under the pointer.
    #[must_use]
    pub fn picked_object(&self) -> Option<&PickedObject> {
        self.mouse_object.as_ref()
    }

    /// The global bus.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Subscribe to a channel on the global bus.
    pub fn on(
        &self,
        channel: Channel,
        handler: impl FnMut(&Event) + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(channel, handler)
    }

    /// Unsubscribe from the global bus.
    pub fn off(&self, channel: Channel, id: SubscriptionId) -> bool {
        self.events.unsubscribe(channel, id)
    }

    /// Cancel the pending stop timer and forget every half-finished gesture.
    pub fn cancel_pending(&mut self) {
        self.scheduler.clear();
        self.stop_task = None;
        self.drag_origin = None;
        self.mouse.reset();
        self.touch = TouchInput::default();
        self.keyboard.clear();
    }

    // ── Raw input ──────────────────────────────────────────────────────

    /// Record a raw event. No semantic event fires until the next
    /// [`handle_events`](Self::handle_events).
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => self.cursor_moved(x, y),
            InputEvent::MouseButton {
                button,
                pressed,
                x,
                y,
            } => self.mouse_button(button, pressed, DVec2::new(x, y)),
            InputEvent::Wheel { delta } => self.mouse.wheel(delta),
            InputEvent::Touch { phase, touches } => {
                self.touch_input(phase, &touches);
            }
            InputEvent::KeyDown { key } => {
                let _ = self.keyboard.press(&key);
            }
            InputEvent::KeyUp { key } => {
                let _ = self.keyboard.release(&key);
            }
        }
    }

    fn cursor_moved(&mut self, x: f64, y: f64) {
        if !self.mouse.moved(DVec2::new(x, y), self.surface) {
            return;
        }
        let now = self.clock.now();
        // a stop that came due between frames still counts
        if let Some(id) = self.stop_task {
            if self.scheduler.deadline(id).is_some_and(|at| at <= now) {
                let _ = self.scheduler.cancel(id);
                self.stop_task = None;
                self.mouse.state.just_stopped = true;
            }
        }
        let deadline = now + self.options.mouse_stop_delay();
        let rescheduled = self
            .stop_task
            .is_some_and(|id| self.scheduler.reschedule(id, deadline));
        if !rescheduled {
            self.stop_task =
                Some(self.scheduler.schedule(deadline, Timer::MouseStop));
        }
    }

    fn mouse_button(&mut self, button: MouseButton, pressed: bool, pos: DVec2) {
        if pressed {
            self.mouse.pressed(button, pos);
        } else {
            let now = self.clock.now();
            self.mouse.released(
                button,
                pos,
                now,
                self.options.double_click_delay(),
            );
        }
    }

    fn touch_input(&mut self, phase: TouchPhase, touches: &[TouchPoint]) {
        match phase {
            TouchPhase::Start => self.touch.started(touches, self.surface),
            TouchPhase::Move => self.touch.moved(touches, self.surface),
            TouchPhase::End => {
                let window = TapWindow {
                    delay: self.options.double_touch_delay(),
                    radius: self.options.double_touch_radius,
                };
                let now = self.clock.now();
                self.touch.ended(touches, now, window);
            }
            TouchPhase::Cancel => self.touch.cancelled(),
        }
    }

    // ── Per-frame dispatch ─────────────────────────────────────────────

    /// Advance all state machines by one frame and fire the resulting
    /// events.
    pub fn handle_events(
        &mut self,
        camera: &Camera,
        picking: &impl PickingSource,
    ) {
        for timer in self.scheduler.poll(self.clock.now()) {
            match timer {
                Timer::MouseStop => {
                    self.stop_task = None;
                    self.mouse.state.just_stopped = true;
                }
            }
        }

        let pos = self.mouse.state.pos;
        self.mouse.state.direction = camera.unproject(pos.x, pos.y);

        // hover transitions wait until the drag is over
        if self.mouse.state.any_pressed() {
            if self.drag_origin.is_none() {
                self.drag_origin = Some(picking.previous_color());
            }
        } else {
            let previous = self
                .drag_origin
                .take()
                .unwrap_or_else(|| picking.previous_color());
            self.resolve_picking(picking, previous);
        }
        self.keyboard_events();
        self.mouse_events();
        self.touch_events(picking);
    }

    fn resolve_picking(
        &mut self,
        picking: &impl PickingSource,
        previous: ColorKey,
    ) {
        let current = picking.current_color();
        let object = picking.object(current);

        if current != previous {
            let left = if previous.is_none() {
                None
            } else {
                picking.object(previous)
            };
            if let Some(left) = left {
                log::debug!("pointer left {} ({previous})", left.id);
                self.mouse.state.picked = Some(left.id);
                self.touch.state.picked = Some(left.id);
                self.fire_mouse(Channel::MouseLeave, Some(&left), Route::Local);
                self.fire_touch(Channel::TouchLeave, Some(&left), Route::Local);
            }
            if let Some(entered) = &object {
                log::debug!("pointer entered {} ({current})", entered.id);
                self.mouse.state.picked = Some(entered.id);
                self.touch.state.picked = Some(entered.id);
                self.fire_mouse(
                    Channel::MouseEnter,
                    Some(entered),
                    Route::Local,
                );
                self.fire_touch(
                    Channel::TouchEnter,
                    Some(entered),
                    Route::Local,
                );
            }
        }

        let id = object.as_ref().map(|o| o.id);
        self.mouse.state.picked = id;
        // an active touch keeps the object sampled at touch start
        if self.touch.state.contacts == 0 && !self.touch.state.ended {
            self.touch.state.picked = id;
            self.touch_object.clone_from(&object);
        } else {
            self.touch.state.picked =
                self.touch_object.as_ref().map(|o| o.id);
        }
        self.mouse_object = object;
    }

    fn keyboard_events(&self) {
        for key in self.keyboard.held() {
            let event = Event {
                channel: Channel::KeyPress,
                payload: EventPayload::Key(key.to_owned()),
            };
            let _ = self.events.dispatch(&event);
        }
    }

    fn mouse_events(&mut self) {
        let object = self.mouse_object.clone();
        let object = object.as_ref();

        for button in MouseButton::ALL {
            if self.mouse.state.buttons[button.index()].click {
                self.fire_mouse(Channel::click(button), object, Route::Both);
                self.mouse.state.buttons[button.index()].click = false;
            }
        }

        for button in MouseButton::ALL {
            let flags = self.mouse.state.buttons[button.index()];
            if !flags.down {
                continue;
            }
            if flags.hold {
                self.fire_mouse(Channel::hold(button), object, Route::Both);
            } else {
                self.fire_mouse(Channel::down(button), object, Route::Both);
                self.mouse.state.buttons[button.index()].hold = true;
            }
        }

        for button in MouseButton::ALL {
            if self.mouse.state.buttons[button.index()].up {
                self.fire_mouse(Channel::up(button), object, Route::Both);
                let flags = &mut self.mouse.state.buttons[button.index()];
                flags.up = false;
                flags.hold = false;
            }
        }

        for button in MouseButton::ALL {
            if self.mouse.state.buttons[button.index()].double_click {
                self.fire_mouse(
                    Channel::double_click(button),
                    object,
                    Route::Both,
                );
                self.mouse.state.buttons[button.index()].double_click = false;
            }
        }

        if self.mouse.state.wheel_delta != 0.0 {
            self.fire_mouse(Channel::MouseWheel, object, Route::Both);
            self.mouse.state.wheel_delta = 0.0;
        }

        if self.mouse.state.moving {
            self.fire_mouse(Channel::MouseMove, object, Route::Both);
            self.mouse.state.prev = self.mouse.state.pos;
            self.mouse.state.moving = false;
        }

        if self.mouse.state.just_stopped {
            self.fire_mouse(Channel::MouseStop, None, Route::Global);
            self.mouse.state.just_stopped = false;
        }
    }

    fn touch_events(&mut self, picking: &impl PickingSource) {
        if self.touch.state.cancelled {
            self.fire_touch(Channel::TouchCancel, None, Route::Global);
            self.touch.state.cancelled = false;
        }

        if self.touch.state.started {
            // no hover on touch screens: sample under the finger
            let at = self.touch.state.normalized;
            let key = picking.read_pixel(at.x, 1.0 - at.y);
            let object = picking.object(key);
            self.touch.state.picked = object.as_ref().map(|o| o.id);
            self.touch_object = object;
            let object = self.touch_object.clone();
            self.fire_touch(Channel::TouchStart, object.as_ref(), Route::Both);
            self.touch.state.started = false;
        }

        let object = self.touch_object.clone();
        let object = object.as_ref();

        if self.touch.state.double_touch {
            self.fire_touch(Channel::DoubleTouch, object, Route::Both);
            self.touch.state.double_touch = false;
        }

        if self.touch.state.ended {
            self.fire_touch(Channel::TouchEnd, object, Route::Both);
            self.touch.state.ended = false;
            self.touch.state.pos = DVec2::ZERO;
        }

        if self.touch.state.moving {
            self.fire_touch(Channel::TouchMove, object, Route::Both);
            self.touch.state.prev = self.touch.state.pos;
            self.touch.state.moving = false;
        }
    }

    fn fire_mouse(
        &self,
        channel: Channel,
        object: Option<&PickedObject>,
        route: Route,
    ) {
        let payload = EventPayload::Mouse(self.mouse.state);
        self.fire(Event { channel, payload }, object, route);
    }

    fn fire_touch(
        &self,
        channel: Channel,
        object: Option<&PickedObject>,
        route: Route,
    ) {
        let payload = EventPayload::Touch(self.touch.state);
        self.fire(Event { channel, payload }, object, route);
    }

    fn fire(&self, event: Event, object: Option<&PickedObject>, route: Route) {
        log::trace!("dispatching '{}'", event.channel);
        if route != Route::Global {
            if let Some(object) = object {
                let _ = object.bus.dispatch(&event);
            }
        }
        if route != Route::Local {
            let _ = self.events.dispatch(&event);
        }
    }
}
