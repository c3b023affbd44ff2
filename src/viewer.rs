//! Top-level navigation state for one viewport.
//!
//! A [`Navigator`] owns the camera, the input dispatcher and the picking
//! registry, and wires them together once per frame.
//!
//! ```
//! # use globenav::{Navigator, Options};
//! # use globenav::input::InputEvent;
//! # use globenav::picking::ColorKey;
//! let mut navigator = Navigator::builder()
//!     .with_options(Options::default())
//!     .with_size(1280, 720)
//!     .build();
//! navigator.handle_input(InputEvent::CursorMoved { x: 640.0, y: 360.0 });
//! navigator.frame(ColorKey::NONE);
//! ```

use crate::camera::Camera;
use crate::events::{Channel, Event, SubscriptionId};
use crate::input::{InputDispatcher, InputEvent};
use crate::options::Options;
use crate::picking::{ColorKey, PickingRegistry};
use crate::time::{Clock, SystemClock};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Navigator`].
pub struct NavigatorBuilder {
    options: Option<Options>,
    size: (u32, u32),
    clock: Option<Box<dyn Clock>>,
}

impl NavigatorBuilder {
    /// Create a builder with default options, a 1x1 surface and the system
    /// clock.
    fn new() -> Self {
        Self {
            options: None,
            size: (1, 1),
            clock: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the surface size in physical pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Time gestures with `clock` instead of the system clock.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Consume the builder and produce a [`Navigator`].
    #[must_use]
    pub fn build(self) -> Navigator {
        let clock = self
            .clock
            .unwrap_or_else(|| Box::new(SystemClock::new()));
        Navigator::assemble(self.options.unwrap_or_default(), self.size, clock)
    }
}

// ── Navigator ────────────────────────────────────────────────────────────

/// Camera, input dispatcher and picking registry for one viewport.
#[derive(Debug)]
pub struct Navigator {
    options: Options,
    camera: Camera,
    dispatcher: InputDispatcher,
    picking: PickingRegistry,
}

impl Navigator {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> NavigatorBuilder {
        NavigatorBuilder::new()
    }

    /// Build a navigator for a surface of `size` physical pixels.
    #[must_use]
    pub fn new(options: Options, size: (u32, u32)) -> Self {
        Self::assemble(options, size, Box::new(SystemClock::new()))
    }

    fn assemble(
        options: Options,
        size: (u32, u32),
        clock: Box<dyn Clock>,
    ) -> Self {
        let camera = Camera::new(
            options.camera.view_angle,
            size,
            options.camera.near,
            options.camera.far,
        );
        let mut dispatcher =
            InputDispatcher::with_clock(options.input.clone(), clock);
        dispatcher.set_surface_size(size.0, size.1);
        log::debug!("navigator created for {}x{} surface", size.0, size.1);
        Self {
            options,
            camera,
            dispatcher,
            picking: PickingRegistry::new(),
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Apply new options to the camera projection and gesture thresholds.
    pub fn set_options(&mut self, options: Options) {
        let camera = &options.camera;
        self.camera.set_projection(
            camera.view_angle,
            self.camera.aspect(),
            camera.near,
            camera.far,
        );
        self.camera.update();
        self.dispatcher.set_options(options.input.clone());
        self.options = options;
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera, for navigation operations.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The input dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &InputDispatcher {
        &self.dispatcher
    }

    /// Mutable input dispatcher.
    pub fn dispatcher_mut(&mut self) -> &mut InputDispatcher {
        &mut self.dispatcher
    }

    /// The picking registry.
    #[must_use]
    pub fn picking(&self) -> &PickingRegistry {
        &self.picking
    }

    /// Mutable picking registry, for registering pickable objects.
    pub fn picking_mut(&mut self) -> &mut PickingRegistry {
        &mut self.picking
    }

    /// Subscribe to a channel on the global bus.
    pub fn on(
        &self,
        channel: Channel,
        handler: impl FnMut(&Event) + 'static,
    ) -> SubscriptionId {
        self.dispatcher.on(channel, handler)
    }

    /// Unsubscribe from the global bus.
    pub fn off(&self, channel: Channel, id: SubscriptionId) -> bool {
        self.dispatcher.off(channel, id)
    }

    /// Resize the rendering surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring resize to {width}x{height}");
            return;
        }
        self.camera.set_viewport(width, height);
        self.dispatcher.set_surface_size(width, height);
    }

    /// Record a raw input event.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.dispatcher.handle_input(event);
    }

    /// Run one frame: record the color sampled under the pointer, then
    /// dispatch every pending transition.
    pub fn frame(&mut self, sample: ColorKey) {
        self.picking.push_sample(sample);
        self.dispatcher.handle_events(&self.camera, &self.picking);
    }
}
