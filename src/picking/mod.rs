//! Color-coded object picking.
//!
//! The renderer draws every pickable object into an offscreen buffer with a
//! unique flat color, then samples the pixel under the pointer. This module
//! resolves sampled colors back to scene objects; it never renders.

mod registry;

use std::fmt;
use std::rc::Rc;

pub use registry::PickingRegistry;

use crate::events::EventBus;

/// Quantized RGB color identifying a pickable object.
///
/// `(0, 0, 0)` is reserved for "no object".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ColorKey {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl ColorKey {
    /// The "no object" sentinel.
    pub const NONE: Self = Self::new(0, 0, 0);

    /// Build a key from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Key for a flat pick ID (`0` maps to [`NONE`](Self::NONE)). Only the
    /// low 24 bits are used.
    #[must_use]
    pub const fn from_id(id: u32) -> Self {
        Self::new((id >> 16) as u8, (id >> 8) as u8, id as u8)
    }

    /// Flat pick ID of this key.
    #[must_use]
    pub const fn to_id(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Key from an RGBA8 pixel read back from the picking buffer. Alpha is
    /// ignored.
    #[must_use]
    pub const fn from_rgba8(pixel: [u8; 4]) -> Self {
        Self::new(pixel[0], pixel[1], pixel[2])
    }

    /// Whether this is the "no object" sentinel.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.r, self.g, self.b)
    }
}

/// Stable identifier of a scene object, chosen by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A pickable scene object as seen by the dispatcher.
///
/// `bus` is the object's local event bus. Objects that share a bus with
/// their owning collection or layer pass that shared bus here; the
/// dispatcher does no further lookup.
#[derive(Clone)]
pub struct PickedObject {
    /// Scene object identifier.
    pub id: ObjectId,
    /// Local event bus owned by the scene.
    pub bus: Rc<EventBus>,
}

impl PickedObject {
    /// Pair an object with its bus.
    #[must_use]
    pub fn new(id: ObjectId, bus: Rc<EventBus>) -> Self {
        Self { id, bus }
    }
}

impl fmt::Debug for PickedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickedObject")
            .field("id", &self.id)
            .field("bus", &Rc::as_ptr(&self.bus))
            .finish()
    }
}

/// What the dispatcher needs from the picking collaborator each frame.
pub trait PickingSource {
    /// Color sampled under the pointer this frame.
    fn current_color(&self) -> ColorKey;

    /// Color sampled under the pointer the previous frame.
    fn previous_color(&self) -> ColorKey;

    /// Sample the picking buffer at normalized coordinates (origin at the
    /// bottom-left, as stored by the GPU).
    fn read_pixel(&self, nx: f64, ny: f64) -> ColorKey;

    /// Object registered under `key`. Missing keys mean "no object".
    fn object(&self, key: ColorKey) -> Option<PickedObject>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_color() {
        for id in [0, 1, 255, 256, 65_535, 0x00AB_CDEF] {
            assert_eq!(ColorKey::from_id(id).to_id(), id);
        }
        assert!(ColorKey::from_id(0).is_none());
        assert_eq!(ColorKey::from_id(0x0A_141E), ColorKey::new(10, 20, 30));
    }

    #[test]
    fn rgba_pixel_ignores_alpha() {
        let key = ColorKey::from_rgba8([10, 20, 30, 255]);
        assert_eq!(key, ColorKey::new(10, 20, 30));
        assert_eq!(key.to_string(), "10_20_30");
    }
}
