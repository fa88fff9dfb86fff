use crate::input::SightHit;

use super::{InventoryEngine, InventoryEvent, TickOutcome};

impl InventoryEngine<'_> {
    /// Updates the tracked pickup target from this tick's sight query.
    ///
    /// - Nothing hit, or the hit lacks the pickup capability: detection clears.
    /// - A new collectible instance: the catalog is scanned by exact name and
    ///   the first match is tracked. Without a match detection keeps whatever
    ///   it tracked before.
    /// - The instance already tracked: nothing happens and no scan is made.
    pub fn observe_sight(&mut self, sight: &SightHit, outcome: &mut TickOutcome) {
        let detection = &mut self.state.detection;

        if !sight.is_pickup_hit() {
            if detection.clear().is_some() {
                outcome
                    .events
                    .push(InventoryEvent::DetectionChanged { tracked: None });
            }
            return;
        }

        let Some((name, item_ref)) = sight.collectible() else {
            return;
        };
        if detection.is_tracking(item_ref) {
            return;
        }

        if let Some(index) = self.catalog.find_by_name(name) {
            detection.track(item_ref, index);
            outcome.events.push(InventoryEvent::DetectionChanged {
                tracked: detection.tracked(),
            });
        }
    }
}
