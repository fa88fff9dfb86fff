//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use inventory_core::InventoryEvent;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{DetectionEvent, InventoryChange, PanelEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Slot contents and world commands
    Inventory,
    /// Crosshair target changes
    Detection,
    /// Panel open/close
    Panel,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Inventory(InventoryChange),
    Detection(DetectionEvent),
    Panel(PanelEvent),
}

impl Event {
    /// Routes a core event produced during `tick` to its topic.
    pub fn from_core(tick: u64, event: InventoryEvent) -> Self {
        match event {
            InventoryEvent::DetectionChanged { tracked } => {
                Event::Detection(DetectionEvent { tick, tracked })
            }
            InventoryEvent::PanelToggled { open } => Event::Panel(PanelEvent { tick, open }),
            event => Event::Inventory(InventoryChange { tick, event }),
        }
    }

    pub fn topic(&self) -> Topic {
        match self {
            Event::Inventory(_) => Topic::Inventory,
            Event::Detection(_) => Topic::Detection,
            Event::Panel(_) => Topic::Panel,
        }
    }
}

struct Channels {
    inventory: broadcast::Sender<Event>,
    detection: broadcast::Sender<Event>,
    panel: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Inventory => &self.inventory,
            Topic::Detection => &self.detection,
            Topic::Panel => &self.panel,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; subscribers drain their
/// receivers with `try_recv` between ticks.
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                inventory: broadcast::channel(capacity).0,
                detection: broadcast::channel(capacity).0,
                panel: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{CatalogIndex, SlotIndex};
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn core_events_are_routed_by_kind() {
        let toggled = Event::from_core(3, InventoryEvent::PanelToggled { open: true });
        assert_eq!(toggled.topic(), Topic::Panel);

        let cleared = Event::from_core(3, InventoryEvent::DetectionChanged { tracked: None });
        assert_eq!(cleared.topic(), Topic::Detection);

        let full = Event::from_core(
            3,
            InventoryEvent::InventoryFull {
                index: CatalogIndex(0),
            },
        );
        assert_eq!(full.topic(), Topic::Inventory);
    }

    #[test]
    fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut panel = bus.subscribe(Topic::Panel);
        let mut inventory = bus.subscribe(Topic::Inventory);

        bus.publish(Event::from_core(1, InventoryEvent::PanelToggled { open: true }));
        bus.publish(Event::from_core(
            2,
            InventoryEvent::ItemsSwapped {
                source: SlotIndex(0),
                target: SlotIndex(1),
            },
        ));

        assert_eq!(
            panel.try_recv().unwrap(),
            Event::Panel(PanelEvent { tick: 1, open: true })
        );
        assert!(matches!(panel.try_recv(), Err(TryRecvError::Empty)));
        assert!(matches!(inventory.try_recv().unwrap(), Event::Inventory(_)));
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(Event::from_core(1, InventoryEvent::PanelToggled { open: false }));

        let receivers = bus.clone().subscribe_multiple(&[Topic::Detection, Topic::Panel]);
        assert_eq!(receivers.len(), 2);
    }
}
