//! Scripted sessions for headless playback and tests.
//!
//! A scenario places collectible objects in the world and lists the frames
//! to feed the runtime. World objects are numbered from 1 in placement order;
//! `look_at` refers to those numbers, and items dropped during playback
//! continue the sequence.

use std::path::Path;

use inventory_core::{Catalog, HoverSample, InputEvents, ViewRay, WorldItemRef, WorldPosition};
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};
use crate::runtime::FrameInput;

/// Collectible object present when the scenario starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemPlacement {
    /// Item name carried by the world object, matched against the catalog.
    pub name: String,
    pub position: WorldPosition,
    /// Objects without the capability are visible to the sight query but
    /// never detected.
    #[serde(default = "default_pickup_tagged")]
    pub pickup_tagged: bool,
}

fn default_pickup_tagged() -> bool {
    true
}

/// Input for one scripted frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptedFrame {
    #[serde(default = "default_frame_dt")]
    pub dt: f32,
    #[serde(default)]
    pub events: InputEvents,
    #[serde(default)]
    pub hover: Option<HoverSample>,
    /// World object under the crosshair this frame.
    #[serde(default)]
    pub look_at: Option<WorldItemRef>,
}

fn default_frame_dt() -> f32 {
    1.0 / 60.0
}

impl ScriptedFrame {
    pub fn new(events: InputEvents) -> Self {
        Self {
            dt: default_frame_dt(),
            events,
            hover: None,
            look_at: None,
        }
    }

    /// Frame input as seen from `view`.
    pub fn input(&self, view: ViewRay) -> FrameInput {
        FrameInput {
            dt: self.dt,
            events: self.events,
            hover: self.hover,
            view,
        }
    }
}

/// Scenario configuration for scripted playback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Player view for every frame.
    #[serde(default)]
    pub camera: ViewRay,

    /// World objects present at start
    pub placements: Vec<ItemPlacement>,

    /// Frames played in order
    pub frames: Vec<ScriptedFrame>,
}

impl Scenario {
    /// Creates a new scenario.
    pub fn new(placements: Vec<ItemPlacement>, frames: Vec<ScriptedFrame>) -> Self {
        Self {
            camera: ViewRay::default(),
            placements,
            frames,
        }
    }

    /// Names of tagged placements that the catalog cannot resolve.
    ///
    /// Such objects are sighted but never detected.
    pub fn unknown_items<'a>(&'a self, catalog: &Catalog) -> Vec<&'a str> {
        self.placements
            .iter()
            .filter(|placement| placement.pickup_tagged)
            .filter(|placement| catalog.find_by_name(&placement.name).is_none())
            .map(|placement| placement.name.as_str())
            .collect()
    }

    /// Parse a scenario from RON text.
    pub fn parse(content: &str) -> Result<Self> {
        ron::from_str(content).map_err(|e| {
            RuntimeError::InvalidConfig(format!("Failed to parse scenario RON: {}", e))
        })
    }

    /// Load scenario from a RON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuntimeError::InvalidConfig(format!("Failed to read scenario file: {}", e))
        })?;

        let scenario = Self::parse(&content)?;
        tracing::info!(
            "Loaded scenario {} with {} placements and {} frames",
            path.display(),
            scenario.placements.len(),
            scenario.frames.len()
        );
        Ok(scenario)
    }
}
