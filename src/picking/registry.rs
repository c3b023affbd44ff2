use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::{ColorKey, ObjectId, PickedObject, PickingSource};
use crate::events::EventBus;

type PixelSampler = Box<dyn Fn(f64, f64) -> ColorKey>;

/// Every non-sentinel 24-bit color.
const MAX_ID: u32 = 0x00FF_FFFF;

/// Color → object map plus the last two pointer samples.
///
/// The rendering side assigns colors with [`assign`](Self::assign) while it
/// builds the picking pass, then reports the sampled color every frame with
/// [`push_sample`](Self::push_sample). Keys are handed out contiguously
/// starting at 1; `0` is the "no object" sentinel.
pub struct PickingRegistry {
    objects: FxHashMap<ColorKey, PickedObject>,
    next_id: u32,
    /// Highest id handed out by `assign`.
    max_id: u32,
    current: ColorKey,
    previous: ColorKey,
    sampler: Option<PixelSampler>,
}

impl Default for PickingRegistry {
    fn default() -> Self {
        Self {
            objects: FxHashMap::default(),
            next_id: 1,
            max_id: MAX_ID,
            current: ColorKey::NONE,
            previous: ColorKey::NONE,
            sampler: None,
        }
    }
}

impl fmt::Debug for PickingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickingRegistry")
            .field("objects", &self.objects.len())
            .field("next_id", &self.next_id)
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("sampler", &self.sampler.is_some())
            .finish()
    }
}

impl PickingRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object under the next free color. Returns `None` once
    /// every color is taken.
    pub fn assign(
        &mut self,
        id: ObjectId,
        bus: Rc<EventBus>,
    ) -> Option<ColorKey> {
        for _ in 0..self.max_id {
            let candidate = self.next_id;
            self.next_id = if candidate >= self.max_id {
                1
            } else {
                candidate + 1
            };
            let key = ColorKey::from_id(candidate);
            if !self.objects.contains_key(&key) {
                let _ = self.objects.insert(key, PickedObject::new(id, bus));
                return Some(key);
            }
        }
        log::warn!("no free picking color left for {id}");
        None
    }

    /// Register an object under an explicit color, replacing any previous
    /// owner. The sentinel key is rejected.
    pub fn insert(
        &mut self,
        key: ColorKey,
        object: PickedObject,
    ) -> Option<PickedObject> {
        if key.is_none() {
            log::warn!("refusing to register {} under the sentinel", object.id);
            return None;
        }
        self.objects.insert(key, object)
    }

    /// Unregister a color.
    pub fn remove(&mut self, key: ColorKey) -> Option<PickedObject> {
        self.objects.remove(&key)
    }

    /// Drop every registration and restart key assignment.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.next_id = 1;
    }

    /// Number of registered objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Record this frame's sample under the pointer.
    pub fn push_sample(&mut self, key: ColorKey) {
        self.previous = self.current;
        self.current = key;
    }

    /// Install the offscreen buffer reader used for touch picking.
    pub fn set_pixel_sampler(
        &mut self,
        sampler: impl Fn(f64, f64) -> ColorKey + 'static,
    ) {
        self.sampler = Some(Box::new(sampler));
    }
}

impl PickingSource for PickingRegistry {
    fn current_color(&self) -> ColorKey {
        self.current
    }

    fn previous_color(&self) -> ColorKey {
        self.previous
    }

    fn read_pixel(&self, nx: f64, ny: f64) -> ColorKey {
        // without a reader, the pointer sample is the best estimate
        self.sampler
            .as_ref()
            .map_or(self.current, |sample| sample(nx, ny))
    }

    fn object(&self, key: ColorKey) -> Option<PickedObject> {
        if key.is_none() {
            return None;
        }
        self.objects.get(&key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign(registry: &mut PickingRegistry, id: u64) -> ColorKey {
        registry.assign(ObjectId(id), EventBus::shared()).unwrap()
    }

    #[test]
    fn assign_hands_out_unique_non_sentinel_keys() {
        let mut registry = PickingRegistry::new();
        let a = assign(&mut registry, 1);
        let b = assign(&mut registry, 2);
        assert_ne!(a, b);
        assert!(!a.is_none() && !b.is_none());
        assert_eq!(registry.object(a).map(|o| o.id), Some(ObjectId(1)));
        assert_eq!(registry.object(b).map(|o| o.id), Some(ObjectId(2)));
    }

    #[test]
    fn assign_skips_explicitly_inserted_keys() {
        let mut registry = PickingRegistry::new();
        let taken = ColorKey::from_id(1);
        let _ = registry
            .insert(taken, PickedObject::new(ObjectId(9), EventBus::shared()));
        let key = assign(&mut registry, 1);
        assert_ne!(key, taken);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn sentinel_never_resolves() {
        let mut registry = PickingRegistry::new();
        let rejected = registry.insert(
            ColorKey::NONE,
            PickedObject::new(ObjectId(1), EventBus::shared()),
        );
        assert!(rejected.is_none());
        assert!(registry.is_empty());
        assert!(registry.object(ColorKey::NONE).is_none());
        assert!(registry.object(ColorKey::new(1, 2, 3)).is_none());
    }

    #[test]
    fn samples_shift_into_previous() {
        let mut registry = PickingRegistry::new();
        registry.push_sample(ColorKey::new(10, 20, 30));
        assert_eq!(registry.previous_color(), ColorKey::NONE);
        registry.push_sample(ColorKey::NONE);
        assert_eq!(registry.previous_color(), ColorKey::new(10, 20, 30));
        assert_eq!(registry.current_color(), ColorKey::NONE);
    }

    #[test]
    fn read_pixel_uses_sampler_when_installed() {
        let mut registry = PickingRegistry::new();
        registry.push_sample(ColorKey::new(1, 1, 1));
        assert_eq!(registry.read_pixel(0.5, 0.5), ColorKey::new(1, 1, 1));
        registry.set_pixel_sampler(|nx, _| {
            if nx < 0.5 {
                ColorKey::new(5, 0, 0)
            } else {
                ColorKey::NONE
            }
        });
        assert_eq!(registry.read_pixel(0.25, 0.5), ColorKey::new(5, 0, 0));
        assert_eq!(registry.read_pixel(0.75, 0.5), ColorKey::NONE);
    }

    #[test]
    fn assign_gives_up_when_every_color_is_taken() {
        let mut registry = PickingRegistry {
            max_id: 3,
            ..PickingRegistry::default()
        };
        let keys: Vec<ColorKey> =
            (1..=3).map(|id| assign(&mut registry, id)).collect();
        assert_eq!(
            keys,
            vec![
                ColorKey::from_id(1),
                ColorKey::from_id(2),
                ColorKey::from_id(3),
            ]
        );
        assert_eq!(registry.assign(ObjectId(4), EventBus::shared()), None);
        assert_eq!(registry.len(), 3);

        // a freed color is reused after wrapping
        let _ = registry.remove(ColorKey::from_id(2));
        assert_eq!(assign(&mut registry, 5), ColorKey::from_id(2));
    }

    #[test]
    fn clear_restarts_assignment() {
        let mut registry = PickingRegistry::new();
        let first = assign(&mut registry, 1);
        registry.clear();
        let again = assign(&mut registry, 2);
        assert_eq!(first, again);
    }
}
