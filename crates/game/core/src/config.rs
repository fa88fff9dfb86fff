/// Inventory configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventoryConfig {
    /// Maximum distance of the sight query cast from the viewport center.
    pub sight_range: f32,

    /// Upper bound for the time accumulated since the last panel toggle.
    ///
    /// The accumulated value doubles as the interpolation factor, so it must
    /// never exceed 1.
    pub max_animation_elapsed: f32,

    /// How far in front of the view origin dropped items are spawned.
    pub drop_distance: f32,

    /// Number of slots rendered per panel row.
    pub slots_per_row: usize,

    /// Panel x offset when fully open.
    pub panel_margin: f32,

    /// Distance the panel slides out of view when fully closed.
    pub panel_travel: f32,

    /// Key labels shown in prompts.
    pub key_bindings: KeyBindings,
}

impl InventoryConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of slots in the grid. Constant for the lifetime of a session.
    pub const SLOT_COUNT: usize = 12;
    /// Maximum world commands a single tick can produce (one removal, one spawn).
    pub const MAX_WORLD_COMMANDS: usize = 2;
    /// Maximum slots suppressed during a drag (source and hovered target).
    pub const MAX_SUPPRESSED_SLOTS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SIGHT_RANGE: f32 = 2.5;
    pub const DEFAULT_MAX_ANIMATION_ELAPSED: f32 = 1.0;
    pub const DEFAULT_DROP_DISTANCE: f32 = 1.0;
    pub const DEFAULT_SLOTS_PER_ROW: usize = 3;
    pub const DEFAULT_PANEL_MARGIN: f32 = 10.0;
    pub const DEFAULT_PANEL_TRAVEL: f32 = 430.0;

    pub fn new() -> Self {
        Self {
            sight_range: Self::DEFAULT_SIGHT_RANGE,
            max_animation_elapsed: Self::DEFAULT_MAX_ANIMATION_ELAPSED,
            drop_distance: Self::DEFAULT_DROP_DISTANCE,
            slots_per_row: Self::DEFAULT_SLOTS_PER_ROW,
            panel_margin: Self::DEFAULT_PANEL_MARGIN,
            panel_travel: Self::DEFAULT_PANEL_TRAVEL,
            key_bindings: KeyBindings::default(),
        }
    }

    pub fn with_sight_range(mut self, sight_range: f32) -> Self {
        self.sight_range = sight_range;
        self
    }

    pub fn with_drop_distance(mut self, drop_distance: f32) -> Self {
        self.drop_distance = drop_distance;
        self
    }

    /// Returns the interpolation cap, falling back to the default outside `(0, 1]`.
    ///
    /// Config loaders and the runtime builder reject such values up front.
    pub fn animation_cap(&self) -> f32 {
        if self.max_animation_elapsed > 0.0 && self.max_animation_elapsed <= 1.0 {
            self.max_animation_elapsed
        } else {
            Self::DEFAULT_MAX_ANIMATION_ELAPSED
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable key labels for the prompts shown by the presentation layer.
///
/// Polling keys is the host's job; these labels only keep prompts and the
/// host's bindings in agreement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyBindings {
    pub toggle_inventory: String,
    pub pickup: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle_inventory: "I".to_string(),
            pickup: "F".to_string(),
        }
    }
}
