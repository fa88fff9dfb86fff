//! Headless host for the pickup inventory.
//!
//! Plays a scripted [`Scenario`] against a [`ScriptedWorld`] through the
//! runtime, exactly as an engine integration would: one
//! [`InventoryRuntime::tick`] per frame, with the scene answering sight
//! queries and carrying out pickups and drops.
//!
//! # Architecture
//!
//! ```text
//! Session
//!   ├─→ InventoryRuntime (core engine, event bus, message log)
//!   ├─→ ScriptedWorld    (sight query + world objects)
//!   └─→ HeadlessControls (movement lock + cursor)
//! ```
pub mod config;
pub mod logging;
pub mod world;

pub use config::ClientConfig;
pub use logging::setup_logging;
pub use world::{HeadlessControls, SceneObject, ScriptedWorld};

use anyhow::{Context, Result};
use inventory_core::WorldItemRef;
use runtime::{
    CollaboratorFailure, InventoryRuntime, InventoryView, MessageEntry, RuntimeConfig, Scenario,
};
use serde::Serialize;

/// Result of playing a scenario to the end.
#[derive(Clone, Debug, Serialize)]
pub struct PlaybackSummary {
    pub ticks: u64,
    pub view: InventoryView,
    /// Newest first.
    pub messages: Vec<MessageEntry>,
    /// Objects left in the scene, as `(ref, name)`.
    pub world: Vec<(WorldItemRef, String)>,
    /// World commands the scene refused, as `(tick, description)`.
    pub failures: Vec<(u64, String)>,
}

/// One scenario wired to a runtime and its scene.
pub struct Session {
    scenario: Scenario,
    runtime: InventoryRuntime,
    world: ScriptedWorld,
}

impl Session {
    /// Loads content and the configured scenario, then builds the runtime.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let content = config.content();
        let inventory = content
            .load_config()
            .with_context(|| format!("loading config from {}", content.data_dir().display()))?;
        let catalog = content.load_catalog()?;
        let scenario = Scenario::load_from_file(&content.scenario_path(&config.scenario))?;

        let runtime_config = RuntimeConfig {
            inventory,
            message_capacity: config.message_capacity,
            ..RuntimeConfig::default()
        };
        Self::new(scenario, catalog, runtime_config)
    }

    pub fn new(
        scenario: Scenario,
        catalog: inventory_core::Catalog,
        config: RuntimeConfig,
    ) -> Result<Self> {
        for name in scenario.unknown_items(&catalog) {
            tracing::warn!("scenario places '{}', which is not in the catalog", name);
        }

        let world = ScriptedWorld::new(&scenario.placements);
        let controls = HeadlessControls::default();
        let runtime = InventoryRuntime::builder()
            .config(config)
            .catalog(catalog)
            .movement(controls)
            .cursor(controls)
            .sight(world.clone())
            .world(world.clone())
            .build()?;

        Ok(Self {
            scenario,
            runtime,
            world,
        })
    }

    /// Plays every frame in order and returns the final state.
    pub fn play(&mut self) -> Result<PlaybackSummary> {
        let mut failures = Vec::new();

        for frame in &self.scenario.frames {
            self.world.look_at(frame.look_at);
            let report = self.runtime.tick(&frame.input(self.scenario.camera))?;
            failures.extend(
                report
                    .failures
                    .iter()
                    .map(|failure| (report.tick, describe(failure))),
            );
        }

        tracing::info!(
            ticks = self.runtime.ticks(),
            stored = self.runtime.state().slots.occupied_count(),
            "scenario finished"
        );

        Ok(PlaybackSummary {
            ticks: self.runtime.ticks(),
            view: self.runtime.view()?,
            messages: self.runtime.messages().recent(usize::MAX).cloned().collect(),
            world: self
                .world
                .objects()
                .into_iter()
                .map(|(item_ref, object)| (item_ref, object.name))
                .collect(),
            failures,
        })
    }

    pub fn runtime(&self) -> &InventoryRuntime {
        &self.runtime
    }

    pub fn world(&self) -> &ScriptedWorld {
        &self.world
    }
}

fn describe(failure: &CollaboratorFailure) -> String {
    format!("{:?}: {}", failure.command, failure.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{CatalogIndex, SlotIndex};

    #[test]
    fn bundled_demo_plays_to_completion() {
        let mut session = Session::from_config(&ClientConfig::default()).unwrap();
        let frames = session.scenario.frames.len() as u64;
        let summary = session.play().unwrap();

        assert_eq!(summary.ticks, frames);
        assert!(summary.failures.is_empty());
        assert!(summary.messages.is_empty());

        let catalog = session.runtime().catalog();
        let coin = catalog.find_by_name("Coin").unwrap();
        let key = catalog.find_by_name("Key").unwrap();
        let state = session.runtime().state();
        // The coin went 0 -> 4 -> world -> back into the first free slot
        assert_eq!(state.slots.item_at(SlotIndex(0)), Some(coin));
        assert_eq!(state.slots.item_at(SlotIndex(1)), Some(key));
        assert_eq!(state.slots.occupied_count(), 2);

        assert!(!summary.view.panel.is_open);
        assert!((summary.view.panel.progress - 1.0).abs() < 1e-6);
        assert!(summary.view.drag.is_none());

        let names: Vec<_> = summary.world.iter().map(|(_, name)| name.as_str()).collect();
        assert_eq!(names, vec!["Rock", "Gem"]);
        assert!(session.world().object(WorldItemRef(5)).is_none());
    }

    #[test]
    fn full_inventory_is_reported() {
        let content = inventory_content::ContentFactory::bundled();
        let catalog = content.load_catalog().unwrap();
        let scenario = Scenario::parse(
            r#"(
                placements: [(name: "Gem", position: (x: 0.0, y: 0.0, z: 1.0))],
                frames: [(look_at: Some(1), events: "PICKUP")],
            )"#,
        )
        .unwrap();

        let mut state = inventory_core::InteractionState::new();
        for slot in 0..state.slots.capacity() {
            state
                .slots
                .assign(SlotIndex(slot), CatalogIndex(0), &catalog)
                .unwrap();
        }

        let world = ScriptedWorld::new(&scenario.placements);
        let controls = HeadlessControls::default();
        let runtime = InventoryRuntime::builder()
            .catalog(catalog)
            .initial_state(state)
            .movement(controls)
            .cursor(controls)
            .sight(world.clone())
            .world(world.clone())
            .build()
            .unwrap();
        let mut session = Session {
            scenario,
            runtime,
            world,
        };

        let summary = session.play().unwrap();
        assert_eq!(summary.messages.len(), 1);
        assert_eq!(summary.messages[0].text, "Inventory is full!");
        assert_eq!(summary.messages[0].tick, Some(1));
        assert_eq!(summary.world.len(), 1);
    }
}
