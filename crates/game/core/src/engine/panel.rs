use super::{CursorMode, InventoryEngine, InventoryEvent, TickOutcome};

impl InventoryEngine<'_> {
    /// Applies a pending toggle, then advances the open/close animation.
    ///
    /// The movement lock is written on every tick. A cursor change is only
    /// requested on the tick the panel toggles.
    pub fn update_panel(&mut self, toggle: bool, dt: f32, outcome: &mut TickOutcome) {
        let panel = &mut self.state.panel;

        if toggle {
            let open = panel.toggle();
            outcome.cursor = Some(if open {
                CursorMode::Free
            } else {
                CursorMode::Locked
            });
            outcome.events.push(InventoryEvent::PanelToggled { open });
        }

        panel.advance(dt, self.config.animation_cap());
        outcome.movement_locked = panel.movement_locked();
    }
}
