//! High-level runtime orchestrator.
//!
//! The runtime owns the interaction state and the collaborators, runs the
//! core engine once per frame, forwards world commands, and republishes the
//! resulting events. Everything happens synchronously inside [`InventoryRuntime::tick`].

use inventory_core::{
    Catalog, CatalogIndex, CursorMode, HoverSample, InputEvents, InteractionState,
    InventoryConfig, InventoryEngine, TickInput, TickOutcome, ViewRay, WorldCommand, WorldItemRef,
};

use crate::api::{
    CollaboratorError, CollaboratorKind, CursorControl, MovementControl, Result, RuntimeError,
    SightQuery, WorldObjects,
};
use crate::events::{Event, EventBus};
use crate::message::{MessageEntry, MessageLevel, MessageLog};
use crate::view::InventoryView;

/// Runtime configuration shared across the orchestrator and its collaborators.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub inventory: InventoryConfig,
    pub event_buffer_size: usize,
    pub message_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            inventory: InventoryConfig::default(),
            event_buffer_size: 100,
            message_capacity: 32,
        }
    }
}

/// Facts sampled by the host for one frame.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FrameInput {
    pub dt: f32,
    pub events: InputEvents,
    pub hover: Option<HoverSample>,
    pub view: ViewRay,
}

/// A world command the scene failed to carry out.
#[derive(Clone, Debug, PartialEq)]
pub struct CollaboratorFailure {
    pub command: WorldCommand,
    pub error: CollaboratorError,
}

/// Everything a tick produced, for the host to render or inspect.
#[derive(Clone, Debug)]
pub struct TickReport {
    /// 1-based tick counter.
    pub tick: u64,
    pub outcome: TickOutcome,
    /// Instances created for dropped items.
    pub spawned: Vec<(CatalogIndex, WorldItemRef)>,
    pub failures: Vec<CollaboratorFailure>,
    pub view: InventoryView,
}

/// Main runtime that drives the inventory once per frame.
pub struct InventoryRuntime {
    config: RuntimeConfig,
    catalog: Catalog,
    state: InteractionState,
    tick: u64,

    movement: Box<dyn MovementControl>,
    sight: Box<dyn SightQuery>,
    world: Box<dyn WorldObjects>,
    cursor: Box<dyn CursorControl>,

    events: EventBus,
    messages: MessageLog,
}

impl InventoryRuntime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Runs the core pipeline for one frame and applies its outcome.
    ///
    /// Order: sight query, engine tick, world commands, movement lock, cursor,
    /// events and messages, then the view snapshot.
    ///
    /// When the engine fails partway, the commands and events of the phases
    /// that already ran are still applied and published, an error message is
    /// logged, and the engine error is returned.
    pub fn tick(&mut self, frame: &FrameInput) -> Result<TickReport> {
        self.tick += 1;
        let tick = self.tick;

        let sight = self.sight.cast(frame.view, self.config.inventory.sight_range);
        let input = TickInput {
            dt: frame.dt,
            events: frame.events,
            hover: frame.hover,
            view: frame.view,
            sight,
        };

        let mut outcome = TickOutcome::default();
        let result = InventoryEngine::new(&mut self.state, &self.catalog, &self.config.inventory)
            .tick_into(&input, &mut outcome);

        if let Err(err) = result {
            tracing::error!(tick, phase = %err.phase(), "inventory tick failed: {}", err);
            // The panel phase did not run; the lock still follows the open flag
            outcome.movement_locked = self.state.panel.movement_locked();
            self.apply_commands(tick, &outcome)?;
            self.movement.set_movement_locked(outcome.movement_locked);
            self.publish(tick, &outcome);
            self.messages.push(MessageEntry::new(
                format!("Inventory error: {}", err),
                Some(tick),
                MessageLevel::Error,
            ));
            return Err(RuntimeError::Engine(err));
        }

        if let Some((name, item_ref)) = input.sight.collectible()
            && !self.state.detection.is_tracking(item_ref)
        {
            tracing::trace!(tick, %item_ref, "no catalog entry named '{}'", name);
        }

        let (spawned, failures) = self.apply_commands(tick, &outcome)?;

        self.movement.set_movement_locked(outcome.movement_locked);
        if let Some(mode) = outcome.cursor {
            self.cursor.set_cursor_mode(mode);
        }

        self.publish(tick, &outcome);

        let view = InventoryView::build(&self.state, &self.catalog, &self.config.inventory)?;

        tracing::debug!(
            tick,
            events = outcome.events.len(),
            commands = outcome.commands.len(),
            progress = self.state.panel.progress(),
            "tick complete"
        );

        Ok(TickReport {
            tick,
            outcome,
            spawned,
            failures,
            view,
        })
    }

    /// Forwards world commands to the scene. Failures are logged and
    /// reported; the inventory keeps the state it already committed.
    fn apply_commands(
        &mut self,
        tick: u64,
        outcome: &TickOutcome,
    ) -> Result<(Vec<(CatalogIndex, WorldItemRef)>, Vec<CollaboratorFailure>)> {
        let mut spawned = Vec::new();
        let mut failures = Vec::new();

        for command in &outcome.commands {
            let result = match *command {
                WorldCommand::Remove(item_ref) => self.world.remove(item_ref).map(|()| {
                    tracing::info!(tick, %item_ref, "picked up world object");
                }),
                WorldCommand::Spawn { index, position } => {
                    let definition = self.catalog.get(index)?;
                    self.world
                        .spawn(index, definition, position)
                        .map(|item_ref| {
                            tracing::info!(
                                tick,
                                %item_ref,
                                "dropped '{}' at ({:.2}, {:.2}, {:.2})",
                                definition.name,
                                position.x,
                                position.y,
                                position.z
                            );
                            spawned.push((index, item_ref));
                        })
                }
            };

            if let Err(error) = result {
                tracing::warn!(tick, ?command, "world command failed: {}", error);
                failures.push(CollaboratorFailure {
                    command: *command,
                    error,
                });
            }
        }

        Ok((spawned, failures))
    }

    fn publish(&mut self, tick: u64, outcome: &TickOutcome) {
        if let Some(notification) = outcome.notification {
            tracing::info!(tick, %notification, "{}", notification.message());
            self.messages.push(MessageEntry::new(
                notification.message(),
                Some(tick),
                MessageLevel::Warning,
            ));
        }

        for event in &outcome.events {
            self.events.publish(Event::from_core(tick, event.clone()));
        }
    }

    /// Renderable snapshot of the current state.
    pub fn view(&self) -> Result<InventoryView> {
        Ok(InventoryView::build(
            &self.state,
            &self.catalog,
            &self.config.inventory,
        )?)
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Cloneable handle for subscribing to events.
    pub fn events(&self) -> EventBus {
        self.events.clone()
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }
}

/// Builder for [`InventoryRuntime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Option<Catalog>,
    state: Option<InteractionState>,
    movement: Option<Box<dyn MovementControl>>,
    sight: Option<Box<dyn SightQuery>>,
    world: Option<Box<dyn WorldObjects>>,
    cursor: Option<Box<dyn CursorControl>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: None,
            state: None,
            movement: None,
            sight: None,
            world: None,
            cursor: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the item catalog (required)
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Provide initial interaction state. Defaults to an empty inventory.
    pub fn initial_state(mut self, state: InteractionState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn movement(mut self, movement: impl MovementControl + 'static) -> Self {
        self.movement = Some(Box::new(movement));
        self
    }

    pub fn sight(mut self, sight: impl SightQuery + 'static) -> Self {
        self.sight = Some(Box::new(sight));
        self
    }

    pub fn world(mut self, world: impl WorldObjects + 'static) -> Self {
        self.world = Some(Box::new(world));
        self
    }

    pub fn cursor(mut self, cursor: impl CursorControl + 'static) -> Self {
        self.cursor = Some(Box::new(cursor));
        self
    }

    /// Build the runtime and apply the initial pointer and movement state.
    pub fn build(self) -> Result<InventoryRuntime> {
        let catalog = self.catalog.ok_or(RuntimeError::MissingCatalog)?;
        let missing = |kind| RuntimeError::CollaboratorNotSet { kind };
        let mut movement = self.movement.ok_or_else(|| missing(CollaboratorKind::Movement))?;
        let sight = self.sight.ok_or_else(|| missing(CollaboratorKind::Sight))?;
        let world = self.world.ok_or_else(|| missing(CollaboratorKind::World))?;
        let mut cursor = self.cursor.ok_or_else(|| missing(CollaboratorKind::Cursor))?;

        if self.config.inventory.slots_per_row == 0 {
            return Err(RuntimeError::InvalidConfig(
                "slots_per_row must be at least 1".to_string(),
            ));
        }
        let cap = self.config.inventory.max_animation_elapsed;
        if !(cap > 0.0 && cap <= 1.0) {
            return Err(RuntimeError::InvalidConfig(format!(
                "max_animation_elapsed must be in (0, 1] (got {})",
                cap
            )));
        }
        for name in catalog.duplicate_names() {
            tracing::warn!("catalog name '{}' is defined more than once; first entry wins", name);
        }

        let state = self.state.unwrap_or_default();
        movement.set_movement_locked(state.panel.movement_locked());
        cursor.set_cursor_mode(if state.panel.is_open() {
            CursorMode::Free
        } else {
            CursorMode::Locked
        });

        tracing::info!(
            items = catalog.len(),
            slots = state.slots.capacity(),
            "inventory runtime ready"
        );

        Ok(InventoryRuntime {
            events: EventBus::with_capacity(self.config.event_buffer_size),
            messages: MessageLog::new(self.config.message_capacity),
            config: self.config,
            catalog,
            state,
            tick: 0,
            movement,
            sight,
            world,
            cursor,
        })
    }
}
