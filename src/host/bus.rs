use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::mpsc;

use crate::model::{DocRef, Leaf, MetadataSnapshot};

/// Change notifications published by the host
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Workspace focus moved to a leaf
    FocusChanged(Leaf),
    /// The metadata index re-parsed a document
    MetadataChanged {
        doc: DocRef,
        snapshot: MetadataSnapshot,
    },
    /// A document was added to the store
    Created(DocRef),
    /// A document was removed from the store
    Deleted(DocRef),
}

/// The event streams a subscriber can register for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Focus,
    Metadata,
    Created,
    Deleted,
}

impl HostEvent {
    pub fn topic(&self) -> Topic {
        match self {
            HostEvent::FocusChanged(_) => Topic::Focus,
            HostEvent::MetadataChanged { .. } => Topic::Metadata,
            HostEvent::Created(_) => Topic::Created,
            HostEvent::Deleted(_) => Topic::Deleted,
        }
    }
}

/// Where a subscriber receives its events. Several subscriptions may share one
/// sink, which keeps events from different topics in emission order.
pub type EventSink = mpsc::Sender<HostEvent>;

struct Subscriber {
    id: u64,
    topic: Topic,
    sink: EventSink,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

/// Single-threaded publish/subscribe hub owned by the host.
#[derive(Default)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `sink` for one topic. Delivery stops when the returned handle is dropped.
    pub fn subscribe(&self, topic: Topic, sink: EventSink) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.subscribers.push(Subscriber { id, topic, sink });
        Subscription {
            id,
            topic,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver an event to every subscriber of its topic, in registration order.
    /// Subscribers whose receiver is gone are pruned.
    pub fn emit(&self, event: HostEvent) {
        let topic = event.topic();
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|s| s.topic != topic || s.sink.send(event.clone()).is_ok());
    }

    /// Number of live registrations across all topics
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// Handle for one registration on an [`EventBus`]. Dropping it unregisters.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    topic: Topic,
    bus: Weak<RefCell<BusInner>>,
}

impl Subscription {
    pub fn topic(&self) -> Topic {
        self.topic
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("topic", &self.topic)
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            inner.borrow_mut().subscribers.retain(|s| s.id != self.id);
        }
    }
}
