use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::{Channel, Event};

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Rc<RefCell<dyn FnMut(&Event)>>;

struct Subscriber {
    id: SubscriptionId,
    handler: Handler,
}

/// Publish/subscribe bus with named channels.
///
/// Subscribers on a channel are called synchronously, in subscription
/// order. All methods take `&self`, so a bus can be shared through an
/// `Rc` between a scene object and the dispatcher. The subscriber list is
/// snapshotted before delivery: handlers may subscribe or unsubscribe
/// (including themselves) while an event is being dispatched, and such
/// changes apply from the next dispatch.
#[derive(Default)]
pub struct EventBus {
    channels: RefCell<FxHashMap<Channel, Vec<Subscriber>>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels = self.channels.borrow();
        let mut counts: Vec<(Channel, usize)> = channels
            .iter()
            .map(|(channel, subs)| (*channel, subs.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("EventBus")
            .field("subscribers", &counts)
            .field("next_id", &self.next_id.get())
            .finish()
    }
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bus behind an `Rc`, ready to hand to a scene object.
    #[must_use]
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Append `handler` to the channel's subscriber list.
    pub fn subscribe(
        &self,
        channel: Channel,
        handler: impl FnMut(&Event) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let handler: Handler = Rc::new(RefCell::new(handler));
        self.channels
            .borrow_mut()
            .entry(channel)
            .or_default()
            .push(Subscriber { id, handler });
        id
    }

    /// Remove a subscriber. Returns `false` if it was not subscribed to
    /// `channel`.
    pub fn unsubscribe(&self, channel: Channel, id: SubscriptionId) -> bool {
        let mut channels = self.channels.borrow_mut();
        let Some(subscribers) = channels.get_mut(&channel) else {
            return false;
        };
        let before = subscribers.len();
        subscribers.retain(|sub| sub.id != id);
        before != subscribers.len()
    }

    /// Number of subscribers on a channel.
    #[must_use]
    pub fn subscriber_count(&self, channel: Channel) -> usize {
        self.channels.borrow().get(&channel).map_or(0, Vec::len)
    }

    /// Remove every subscriber from every channel.
    pub fn clear(&self) {
        self.channels.borrow_mut().clear();
    }

    /// Deliver `event` to the subscribers of `event.channel`.
    ///
    /// Returns the number of handlers invoked. A handler that is already
    /// running (an event dispatched from inside itself) is skipped.
    pub fn dispatch(&self, event: &Event) -> usize {
        let handlers: Vec<Handler> = {
            let channels = self.channels.borrow();
            let Some(subscribers) = channels.get(&event.channel) else {
                return 0;
            };
            subscribers.iter().map(|sub| Rc::clone(&sub.handler)).collect()
        };

        let mut delivered = 0;
        for handler in handlers {
            if let Ok(mut handler) = handler.try_borrow_mut() {
                (&mut *handler)(event);
                delivered += 1;
            } else {
                log::warn!(
                    "skipping re-entrant '{}' handler",
                    event.channel
                );
            }
        }
        delivered
    }
}
