use std::collections::BTreeSet;

/// Set of currently held physical keys.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format: `"KeyQ"`,
/// `"Tab"`, `"Escape"`, etc. Iteration is sorted, so per-frame `keypress`
/// events fire in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    held: BTreeSet<String>,
}

impl KeyboardState {
    /// Mark a key as held. Returns `false` for auto-repeat of an already
    /// held key.
    pub fn press(&mut self, key: &str) -> bool {
        if self.held.contains(key) {
            return false;
        }
        self.held.insert(key.to_owned())
    }

    /// Mark a key as released. Returns `false` if it was not held.
    pub fn release(&mut self, key: &str) -> bool {
        self.held.remove(key)
    }

    /// Whether a key is currently held.
    #[must_use]
    pub fn is_pressed(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Held keys in sorted order.
    pub fn held(&self) -> impl Iterator<Item = &str> {
        self.held.iter().map(String::as_str)
    }

    /// Release every key.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
