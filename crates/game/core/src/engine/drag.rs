use crate::input::ViewRay;
use crate::state::DragState;

use super::{EngineError, InventoryEngine, InventoryEvent, TickOutcome, TickPhase, WorldCommand};

impl InventoryEngine<'_> {
    /// Starts a drag from the hovered slot if it holds an item.
    ///
    /// The grab offset is the one the hover tracker recorded on an earlier
    /// tick, not this tick's sample. A press during an ongoing drag is ignored.
    pub fn begin_drag(&mut self, outcome: &mut TickOutcome) -> Result<(), EngineError> {
        if self.state.drag.is_dragging() {
            return Ok(());
        }
        let Some(hovered) = self.state.hover.hovered_slot else {
            return Ok(());
        };
        let content = self
            .state
            .slots
            .get(hovered)
            .map_err(|err| EngineError::slot(TickPhase::Drag, err))?;
        let Some(index) = content.item() else {
            return Ok(());
        };

        self.state.drag = DragState::Dragging {
            source: hovered,
            pointer_offset: self.state.hover.last_offset,
        };
        outcome.events.push(InventoryEvent::DragStarted {
            source: hovered,
            index,
        });
        Ok(())
    }

    /// Resolves an ongoing drag.
    ///
    /// Released outside every slot, the source item is dropped into the world
    /// in front of `view`. Released over a slot, source and target swap.
    pub fn end_drag(
        &mut self,
        view: &ViewRay,
        outcome: &mut TickOutcome,
    ) -> Result<(), EngineError> {
        let DragState::Dragging { source, .. } = self.state.drag else {
            return Ok(());
        };
        self.state.drag = DragState::Idle;

        match self.state.hover.hovered_slot {
            Some(target) => {
                self.state
                    .slots
                    .swap(source, target)
                    .map_err(|err| EngineError::slot(TickPhase::Drag, err))?;
                outcome
                    .events
                    .push(InventoryEvent::ItemsSwapped { source, target });
            }
            None => {
                let content = self
                    .state
                    .slots
                    .get(source)
                    .map_err(|err| EngineError::slot(TickPhase::Drag, err))?;
                let Some(index) = content.item() else {
                    return Ok(());
                };
                self.catalog
                    .get(index)
                    .map_err(|err| EngineError::catalog(TickPhase::Drag, err))?;

                let position = view.point_at(self.config.drop_distance);
                self.state
                    .slots
                    .clear(source)
                    .map_err(|err| EngineError::slot(TickPhase::Drag, err))?;
                outcome.commands.push(WorldCommand::Spawn { index, position });
                outcome.events.push(InventoryEvent::ItemDropped {
                    slot: source,
                    index,
                    position,
                });
            }
        }
        Ok(())
    }
}
