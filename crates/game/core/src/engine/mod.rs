//! Per-tick interaction pipeline.
//!
//! The [`InventoryEngine`] is the only writer of [`InteractionState`]. One call
//! to [`InventoryEngine::tick`] runs every phase in a fixed order:
//!
//! 1. detection from the sight query
//! 2. hovered slot
//! 3. drag press, then drag release
//! 4. grab offset for later presses
//! 5. pickup
//! 6. panel toggle, animation and movement lock
//!
//! Scene mutations are not performed here. They come back as
//! [`WorldCommand`]s in the [`TickOutcome`] for the runtime to forward.

mod detection;
mod drag;
mod errors;
mod outcome;
mod panel;
mod pickup;

pub use errors::{EngineError, TickPhase, TickPhaseError};
pub use outcome::{
    CursorMode, InventoryEvent, Notification, TickOutcome, WorldCommand, WorldCommands,
};

use crate::catalog::Catalog;
use crate::config::InventoryConfig;
use crate::input::{InputEvents, TickInput};
use crate::state::InteractionState;

/// Inventory engine borrowing the state it mutates and the read-only data it
/// consults.
pub struct InventoryEngine<'a> {
    state: &'a mut InteractionState,
    catalog: &'a Catalog,
    config: &'a InventoryConfig,
}

impl<'a> InventoryEngine<'a> {
    pub fn new(
        state: &'a mut InteractionState,
        catalog: &'a Catalog,
        config: &'a InventoryConfig,
    ) -> Self {
        Self {
            state,
            catalog,
            config,
        }
    }

    pub fn state(&self) -> &InteractionState {
        self.state
    }

    /// Runs one tick.
    ///
    /// On error the phases that already ran stay committed and the remaining
    /// phases are skipped for this tick. Use [`InventoryEngine::tick_into`] to
    /// keep the commands and events those phases produced.
    pub fn tick(&mut self, input: &TickInput) -> Result<TickOutcome, EngineError> {
        let mut outcome = TickOutcome::default();
        self.tick_into(input, &mut outcome)?;
        Ok(outcome)
    }

    /// Runs one tick, accumulating into `outcome`.
    ///
    /// When a phase fails, `outcome` still holds everything the earlier phases
    /// committed, including world commands the host must carry out.
    pub fn tick_into(
        &mut self,
        input: &TickInput,
        outcome: &mut TickOutcome,
    ) -> Result<(), EngineError> {
        self.observe_sight(&input.sight, outcome);
        self.refresh_hover(input)?;

        if input.events.contains(InputEvents::PRESS_BEGIN) {
            self.begin_drag(outcome)?;
        }
        if input.events.contains(InputEvents::PRESS_END) {
            self.end_drag(&input.view, outcome)?;
        }

        // Offset recorded after the presses so a press grabs with an earlier one
        let dragging = self.state.drag.is_dragging();
        self.state.hover.record_offset(input.hover, dragging);

        if input.events.contains(InputEvents::PICKUP) {
            self.pickup(outcome)?;
        }

        self.update_panel(
            input.events.contains(InputEvents::TOGGLE_INVENTORY),
            input.dt,
            outcome,
        );
        Ok(())
    }

    /// Records the hovered slot, rejecting indices outside the grid.
    fn refresh_hover(&mut self, input: &TickInput) -> Result<(), EngineError> {
        if let Some(sample) = input.hover {
            self.state
                .slots
                .check(sample.slot)
                .map_err(|err| EngineError::slot(TickPhase::Hover, err))?;
        }
        self.state.hover.set_hovered(input.hover);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::Fixture;
    use super::*;
    use crate::catalog::CatalogIndex;
    use crate::input::{HoverSample, PointerOffset, SightHit, ViewRay, WorldItemRef, WorldPosition};
    use crate::state::{DragState, SlotIndex};

    const FRAME: f32 = 1.0 / 60.0;

    fn hover(slot: usize) -> HoverSample {
        HoverSample::new(SlotIndex(slot), PointerOffset::new(-10.0, -10.0))
    }

    #[test]
    fn looking_at_coin_and_picking_up_fills_slot_zero() {
        let mut fixture = Fixture::with_items(&["Key", "Coin"]);
        let coin = SightHit::pickup("Coin", WorldItemRef(42));

        let input = TickInput::new(FRAME)
            .with_sight(coin)
            .with_events(InputEvents::PICKUP);
        let outcome = fixture.engine().tick(&input).unwrap();

        assert_eq!(fixture.state.slots.item_at(SlotIndex(0)), Some(CatalogIndex(1)));
        assert_eq!(
            outcome.commands.as_slice(),
            &[WorldCommand::Remove(WorldItemRef(42))]
        );
        assert_eq!(outcome.notification, None);
    }

    #[test]
    fn full_grid_pickup_raises_exactly_one_notification() {
        let mut fixture = Fixture::with_items(&["Key", "Coin"]);
        let all: Vec<(usize, u16)> = (0..12).map(|slot| (slot, 0)).collect();
        fixture.fill(&all);
        let grid = fixture.state.slots.clone();

        let input = TickInput::new(FRAME)
            .with_sight(SightHit::pickup("Coin", WorldItemRef(42)))
            .with_events(InputEvents::PICKUP);
        let outcome = fixture.engine().tick(&input).unwrap();

        assert_eq!(fixture.state.slots, grid);
        assert_eq!(outcome.notification, Some(Notification::InventoryFull));
        let full_events = outcome
            .events
            .iter()
            .filter(|event| matches!(event, InventoryEvent::InventoryFull { .. }))
            .count();
        assert_eq!(full_events, 1);
        assert!(outcome.commands.is_empty());
    }

    #[test]
    fn dragging_out_of_the_grid_spawns_exactly_once() {
        let mut fixture = Fixture::with_items(&["Key", "Coin"]);
        fixture.fill(&[(3, 0)]);

        let press = TickInput::new(FRAME)
            .with_hover(hover(3))
            .with_events(InputEvents::PRESS_BEGIN);
        fixture.engine().tick(&press).unwrap();
        assert!(fixture.state.drag.is_dragging());

        let view = ViewRay::new(WorldPosition::new(0.0, 1.0, 0.0), WorldPosition::new(0.0, 0.0, 1.0));
        let release = TickInput::new(FRAME)
            .with_view(view)
            .with_events(InputEvents::PRESS_END);
        let outcome = fixture.engine().tick(&release).unwrap();

        assert_eq!(fixture.state.slots.item_at(SlotIndex(3)), None);
        assert_eq!(fixture.state.drag, DragState::Idle);
        let spawns: Vec<_> = outcome.spawns().collect();
        assert_eq!(
            spawns,
            vec![(CatalogIndex(0), WorldPosition::new(0.0, 1.0, 1.0))]
        );
    }

    #[test]
    fn press_grabs_with_offset_from_previous_tick() {
        let mut fixture = Fixture::with_items(&["Key"]);
        fixture.fill(&[(1, 0)]);

        let hovering = TickInput::new(FRAME).with_hover(HoverSample::new(
            SlotIndex(1),
            PointerOffset::new(-3.0, -7.0),
        ));
        fixture.engine().tick(&hovering).unwrap();

        let press = TickInput::new(FRAME)
            .with_hover(HoverSample::new(SlotIndex(1), PointerOffset::new(-20.0, -20.0)))
            .with_events(InputEvents::PRESS_BEGIN);
        fixture.engine().tick(&press).unwrap();

        assert_eq!(
            fixture.state.drag.pointer_offset(),
            Some(PointerOffset::new(-3.0, -7.0))
        );

        let moving = TickInput::new(FRAME)
            .with_hover(HoverSample::new(SlotIndex(4), PointerOffset::new(-1.0, -1.0)));
        fixture.engine().tick(&moving).unwrap();
        assert_eq!(fixture.state.hover.last_offset, PointerOffset::new(-3.0, -7.0));
        assert_eq!(
            fixture.state.drag.pointer_offset(),
            Some(PointerOffset::new(-3.0, -7.0))
        );
    }

    #[test]
    fn offset_resumes_recording_on_release_tick() {
        let mut fixture = Fixture::with_items(&["Key"]);
        fixture.fill(&[(1, 0)]);
        let press = TickInput::new(FRAME)
            .with_hover(hover(1))
            .with_events(InputEvents::PRESS_BEGIN);
        fixture.engine().tick(&press).unwrap();

        let release = TickInput::new(FRAME)
            .with_hover(HoverSample::new(SlotIndex(2), PointerOffset::new(-6.0, -2.0)))
            .with_events(InputEvents::PRESS_END);
        fixture.engine().tick(&release).unwrap();

        assert_eq!(fixture.state.drag, DragState::Idle);
        assert_eq!(fixture.state.hover.last_offset, PointerOffset::new(-6.0, -2.0));
    }

    #[test]
    fn press_and_release_in_one_tick_resolve_in_order() {
        let mut fixture = Fixture::with_items(&["Key"]);
        fixture.fill(&[(0, 0)]);

        let click = TickInput::new(FRAME)
            .with_hover(hover(0))
            .with_events(InputEvents::PRESS_BEGIN | InputEvents::PRESS_END);
        let outcome = fixture.engine().tick(&click).unwrap();

        // Released over its own slot: a self-swap, nothing moves
        assert_eq!(fixture.state.drag, DragState::Idle);
        assert_eq!(fixture.state.slots.item_at(SlotIndex(0)), Some(CatalogIndex(0)));
        assert!(outcome.commands.is_empty());
        assert!(outcome.events.contains(&InventoryEvent::ItemsSwapped {
            source: SlotIndex(0),
            target: SlotIndex(0)
        }));
    }

    #[test]
    fn drop_and_pickup_in_one_tick_emit_both_commands() {
        let mut fixture = Fixture::with_items(&["Key", "Coin"]);
        fixture.fill(&[(0, 0)]);
        let press = TickInput::new(FRAME)
            .with_hover(hover(0))
            .with_events(InputEvents::PRESS_BEGIN);
        fixture.engine().tick(&press).unwrap();

        let input = TickInput::new(FRAME)
            .with_sight(SightHit::pickup("Coin", WorldItemRef(5)))
            .with_events(InputEvents::PRESS_END | InputEvents::PICKUP);
        let outcome = fixture.engine().tick(&input).unwrap();

        // The drop frees slot 0 before pickup runs, so the coin lands there
        assert_eq!(fixture.state.slots.item_at(SlotIndex(0)), Some(CatalogIndex(1)));
        assert_eq!(outcome.commands.len(), 2);
        assert_eq!(outcome.spawns().count(), 1);
        assert_eq!(outcome.removals().collect::<Vec<_>>(), vec![WorldItemRef(5)]);
    }

    #[test]
    fn movement_lock_tracks_open_flag_every_tick() {
        let mut fixture = Fixture::with_items(&[]);
        let toggles = [true, false, false, true, false, true, true, false];

        for toggle in toggles {
            let mut input = TickInput::new(FRAME);
            if toggle {
                input = input.with_events(InputEvents::TOGGLE_INVENTORY);
            }
            let outcome = fixture.engine().tick(&input).unwrap();
            assert_eq!(outcome.movement_locked, fixture.state.panel.is_open());
        }
    }

    #[test]
    fn panel_converges_after_toggle() {
        let mut fixture = Fixture::with_items(&[]);
        let open = TickInput::new(FRAME).with_events(InputEvents::TOGGLE_INVENTORY);
        fixture.engine().tick(&open).unwrap();

        for _ in 0..120 {
            fixture.engine().tick(&TickInput::new(FRAME)).unwrap();
        }
        assert!(fixture.state.panel.progress() < 1e-3);
        assert!(fixture.state.panel.is_visible());
    }

    #[test]
    fn hover_outside_grid_fails_in_hover_phase() {
        let mut fixture = Fixture::with_items(&["Key"]);
        let input = TickInput::new(FRAME)
            .with_sight(SightHit::pickup("Key", WorldItemRef(1)))
            .with_hover(hover(30));
        let err = fixture.engine().tick(&input).unwrap_err();

        assert_eq!(err.phase(), TickPhase::Hover);
        // Detection ran before the failing phase and stays committed
        assert!(fixture.state.detection.is_set());
    }

    #[test]
    fn failed_tick_keeps_commands_from_earlier_phases() {
        let mut fixture = Fixture::with_items(&["Key", "Coin"]);
        fixture.fill(&[(0, 0)]);
        let press = TickInput::new(FRAME)
            .with_hover(hover(0))
            .with_events(InputEvents::PRESS_BEGIN);
        fixture.engine().tick(&press).unwrap();

        // A tracked index past the catalog makes the pickup phase fail
        fixture
            .state
            .detection
            .track(WorldItemRef(9), CatalogIndex(7));
        let input = TickInput::new(FRAME)
            .with_sight(SightHit::pickup("Coin", WorldItemRef(9)))
            .with_events(InputEvents::PRESS_END | InputEvents::PICKUP);
        let mut outcome = TickOutcome::default();
        let err = fixture
            .engine()
            .tick_into(&input, &mut outcome)
            .unwrap_err();

        assert_eq!(err.phase(), TickPhase::Pickup);
        assert_eq!(fixture.state.slots.item_at(SlotIndex(0)), None);
        assert_eq!(outcome.spawns().count(), 1);
        assert_eq!(outcome.removals().count(), 0);
    }
}
