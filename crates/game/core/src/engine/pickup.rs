use super::{
    EngineError, InventoryEngine, InventoryEvent, Notification, TickOutcome, TickPhase,
    WorldCommand,
};

impl InventoryEngine<'_> {
    /// Moves the tracked item into the first empty slot.
    ///
    /// Does nothing unless a target is tracked. With no empty slot the grid
    /// stays as it is and an `InventoryFull` notification is raised instead.
    /// Detection is left untouched either way; the next sight query clears it
    /// once the world instance is gone.
    pub fn pickup(&mut self, outcome: &mut TickOutcome) -> Result<(), EngineError> {
        let Some(tracked) = self.state.detection.tracked() else {
            return Ok(());
        };

        let Some(slot) = self.state.slots.first_empty_slot() else {
            outcome.notification = Some(Notification::InventoryFull);
            outcome.events.push(InventoryEvent::InventoryFull {
                index: tracked.index,
            });
            return Ok(());
        };

        self.state
            .slots
            .assign(slot, tracked.index, self.catalog)
            .map_err(|err| EngineError::slot(TickPhase::Pickup, err))?;
        outcome.commands.push(WorldCommand::Remove(tracked.item_ref));
        outcome.events.push(InventoryEvent::ItemPickedUp {
            slot,
            index: tracked.index,
            item_ref: tracked.item_ref,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::CatalogIndex;
    use crate::engine::test_support::Fixture;
    use crate::engine::{InventoryEvent, Notification, TickOutcome, TickPhase, WorldCommand};
    use crate::input::WorldItemRef;
    use crate::state::SlotIndex;

    #[test]
    fn pickup_without_detection_is_noop() {
        let mut fixture = Fixture::with_items(&["Coin"]);
        let mut outcome = TickOutcome::default();
        fixture.engine().pickup(&mut outcome).unwrap();
        assert!(!outcome.has_changes());
        assert_eq!(fixture.state.slots.occupied_count(), 0);
    }

    #[test]
    fn pickup_fills_first_empty_slot_and_requests_removal() {
        let mut fixture = Fixture::with_items(&["Key", "Coin"]);
        fixture.fill(&[(0, 0), (1, 0), (3, 0)]);
        fixture.state.detection.track(WorldItemRef(9), CatalogIndex(1));

        let mut outcome = TickOutcome::default();
        fixture.engine().pickup(&mut outcome).unwrap();

        assert_eq!(fixture.state.slots.item_at(SlotIndex(2)), Some(CatalogIndex(1)));
        assert_eq!(
            outcome.commands.as_slice(),
            &[WorldCommand::Remove(WorldItemRef(9))]
        );
        assert_eq!(
            outcome.events,
            vec![InventoryEvent::ItemPickedUp {
                slot: SlotIndex(2),
                index: CatalogIndex(1),
                item_ref: WorldItemRef(9)
            }]
        );
        // Detection is cleared by the next sight query, not by the pickup
        assert!(fixture.state.detection.is_set());
    }

    #[test]
    fn full_grid_notifies_and_changes_nothing() {
        let mut fixture = Fixture::with_items(&["Key", "Coin"]);
        let all: Vec<(usize, u16)> = (0..12).map(|slot| (slot, 0)).collect();
        fixture.fill(&all);
        fixture.state.detection.track(WorldItemRef(9), CatalogIndex(1));
        let before = fixture.state.clone();

        let mut outcome = TickOutcome::default();
        fixture.engine().pickup(&mut outcome).unwrap();

        assert_eq!(fixture.state, before);
        assert_eq!(outcome.notification, Some(Notification::InventoryFull));
        assert!(outcome.commands.is_empty());
    }

    #[test]
    fn stale_catalog_index_is_an_internal_error() {
        let mut fixture = Fixture::with_items(&["Coin"]);
        fixture.state.detection.track(WorldItemRef(9), CatalogIndex(4));

        let mut outcome = TickOutcome::default();
        let err = fixture.engine().pickup(&mut outcome).unwrap_err();
        assert_eq!(err.phase(), TickPhase::Pickup);
        assert!(outcome.commands.is_empty());
    }
}
