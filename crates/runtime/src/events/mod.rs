//! Topic-based event bus for runtime events.
//!
//! Core events from every tick are published to specific topics, and
//! consumers can subscribe only to the topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{DetectionEvent, InventoryChange, PanelEvent};
