//! Semantic scene events and the publish/subscribe bus that carries them.
//!
//! The dispatcher owns one global [`EventBus`]; every pickable scene object
//! exposes its own shared bus through
//! [`PickedObject::bus`](crate::picking::PickedObject::bus).

/// Synchronous multi-channel bus.
pub mod bus;
/// Channel names.
pub mod channel;

pub use bus::{EventBus, SubscriptionId};
pub use channel::{Channel, UnknownChannel};

use crate::input::{MouseState, TouchState};

/// State snapshot delivered with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// Mouse snapshot at dispatch time.
    Mouse(MouseState),
    /// Touch snapshot at dispatch time.
    Touch(TouchState),
    /// Physical key string (`"KeyQ"`, `"Escape"`, ...).
    Key(String),
}

/// A fired transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Channel the event was fired on.
    pub channel: Channel,
    /// Input state at the moment of dispatch.
    pub payload: EventPayload,
}

impl Event {
    /// Mouse snapshot, if this is a mouse event.
    #[must_use]
    pub fn mouse(&self) -> Option<&MouseState> {
        match &self.payload {
            EventPayload::Mouse(state) => Some(state),
            _ => None,
        }
    }

    /// Touch snapshot, if this is a touch event.
    #[must_use]
    pub fn touch(&self) -> Option<&TouchState> {
        match &self.payload {
            EventPayload::Touch(state) => Some(state),
            _ => None,
        }
    }

    /// Key string, if this is a keyboard event.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match &self.payload {
            EventPayload::Key(key) => Some(key),
            _ => None,
        }
    }
}
