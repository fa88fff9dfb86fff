//! Everything a tick hands back to the runtime.

use arrayvec::ArrayVec;

use crate::catalog::CatalogIndex;
use crate::config::InventoryConfig;
use crate::input::{WorldItemRef, WorldPosition};
use crate::state::{SlotIndex, TrackedItem};

/// Scene mutation requested by the core. The runtime forwards these to the
/// world collaborator after the tick commits.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorldCommand {
    /// Destroy a collected world instance.
    Remove(WorldItemRef),
    /// Place a new instance of a catalog item in the world.
    Spawn {
        index: CatalogIndex,
        position: WorldPosition,
    },
}

/// User-facing notice produced by a tick.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Notification {
    /// A pickup was requested with no empty slot left.
    InventoryFull,
}

impl Notification {
    /// Message shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InventoryFull => "Inventory is full!",
        }
    }
}

/// Pointer presentation requested from the host.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CursorMode {
    /// Hidden and locked to the viewport center.
    #[default]
    Locked,
    /// Visible and unconstrained.
    Free,
}

/// Domain events describing what a tick changed.
#[derive(Clone, Debug, PartialEq, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum InventoryEvent {
    DetectionChanged {
        tracked: Option<TrackedItem>,
    },
    DragStarted {
        source: SlotIndex,
        index: CatalogIndex,
    },
    ItemsSwapped {
        source: SlotIndex,
        target: SlotIndex,
    },
    ItemDropped {
        slot: SlotIndex,
        index: CatalogIndex,
        position: WorldPosition,
    },
    ItemPickedUp {
        slot: SlotIndex,
        index: CatalogIndex,
        item_ref: WorldItemRef,
    },
    InventoryFull {
        index: CatalogIndex,
    },
    PanelToggled {
        open: bool,
    },
}

pub type WorldCommands = ArrayVec<WorldCommand, { InventoryConfig::MAX_WORLD_COMMANDS }>;

/// Complete outcome of one tick.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickOutcome {
    /// At most one removal (pickup) and one spawn (drop).
    pub commands: WorldCommands,
    pub notification: Option<Notification>,
    /// Events in the order the phases produced them.
    pub events: Vec<InventoryEvent>,
    /// Value for the movement lock, written every tick.
    pub movement_locked: bool,
    /// Cursor change, present only on the tick the panel toggles.
    pub cursor: Option<CursorMode>,
}

impl TickOutcome {
    pub fn has_changes(&self) -> bool {
        !self.commands.is_empty() || !self.events.is_empty() || self.notification.is_some()
    }

    pub fn spawns(&self) -> impl Iterator<Item = (CatalogIndex, WorldPosition)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            WorldCommand::Spawn { index, position } => Some((*index, *position)),
            WorldCommand::Remove(_) => None,
        })
    }

    pub fn removals(&self) -> impl Iterator<Item = WorldItemRef> + '_ {
        self.commands.iter().filter_map(|command| match command {
            WorldCommand::Remove(item_ref) => Some(*item_ref),
            WorldCommand::Spawn { .. } => None,
        })
    }
}
