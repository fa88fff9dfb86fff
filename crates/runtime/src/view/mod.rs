//! Renderable snapshot of the inventory.
//!
//! The presentation layer never reads [`InteractionState`] directly. After each
//! tick the runtime builds an [`InventoryView`] holding everything needed to
//! draw the panel, the dragged item, the tooltip, the crosshair and prompts.
mod prompt;

pub use prompt::{hint_text, pickup_prompt_text};

use inventory_core::{
    Catalog, CatalogError, CatalogIndex, InteractionState, InventoryConfig, PointerOffset,
    PreviewHandle, SlotIndex,
};
use serde::Serialize;

/// A catalog item as shown in a slot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemView {
    pub index: CatalogIndex,
    pub name: String,
    pub preview: Option<PreviewHandle>,
}

impl ItemView {
    fn resolve(catalog: &Catalog, index: CatalogIndex) -> Result<Self, CatalogError> {
        let definition = catalog.get(index)?;
        Ok(Self {
            index,
            name: definition.name.clone(),
            preview: definition.preview.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlotView {
    pub index: SlotIndex,
    pub item: Option<ItemView>,
    /// Rendered as a disabled placeholder while a drag is in progress.
    pub suppressed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PanelView {
    /// 1 fully closed, 0 fully open.
    pub progress: f32,
    pub is_open: bool,
    /// Any part of the panel is on screen.
    pub visible: bool,
    /// Horizontal position of the panel's left edge.
    pub offset_x: f32,
}

/// Item following the pointer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DragView {
    pub source: SlotIndex,
    pub item: ItemView,
    pub pointer_offset: PointerOffset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CrosshairView {
    pub visible: bool,
    /// A collectible is in sight.
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InventoryView {
    pub slots: Vec<SlotView>,
    pub slots_per_row: usize,
    pub panel: PanelView,
    pub drag: Option<DragView>,
    pub tooltip: Option<String>,
    pub crosshair: CrosshairView,
    pub pickup_prompt: Option<String>,
    pub hint: String,
}

impl InventoryView {
    pub fn build(
        state: &InteractionState,
        catalog: &Catalog,
        config: &InventoryConfig,
    ) -> Result<Self, CatalogError> {
        let suppressed = state.suppressed_slots();
        let slots = state
            .slots
            .iter()
            .map(|(index, content)| {
                Ok(SlotView {
                    index,
                    item: content
                        .item()
                        .map(|item| ItemView::resolve(catalog, item))
                        .transpose()?,
                    suppressed: suppressed.contains(&index),
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let progress = state.panel.progress();
        let panel = PanelView {
            progress,
            is_open: state.panel.is_open(),
            visible: state.panel.is_visible(),
            offset_x: config.panel_margin - config.panel_travel * progress,
        };

        let drag = match (state.drag.source(), state.drag.pointer_offset()) {
            (Some(source), Some(pointer_offset)) => state
                .slots
                .item_at(source)
                .map(|item| ItemView::resolve(catalog, item))
                .transpose()?
                .map(|item| DragView {
                    source,
                    item,
                    pointer_offset,
                }),
            _ => None,
        };

        let tooltip = if state.drag.is_dragging() {
            None
        } else {
            state
                .hover
                .hovered_slot
                .and_then(|slot| state.slots.item_at(slot))
                .map(|item| catalog.get(item).map(|definition| definition.name.clone()))
                .transpose()?
        };

        let detected = state
            .detection
            .index()
            .map(|index| catalog.get(index))
            .transpose()?;

        let crosshair = CrosshairView {
            visible: !state.panel.is_open(),
            highlighted: detected.is_some(),
        };

        let pickup_prompt = match detected {
            Some(definition) if !state.panel.is_open() => Some(pickup_prompt_text(
                &config.key_bindings.pickup,
                &definition.name,
            )),
            _ => None,
        };

        Ok(Self {
            slots,
            slots_per_row: config.slots_per_row,
            panel,
            drag,
            tooltip,
            crosshair,
            pickup_prompt,
            hint: hint_text(&config.key_bindings.toggle_inventory),
        })
    }

    /// Slots grouped into panel rows.
    pub fn rows(&self) -> impl Iterator<Item = &[SlotView]> {
        self.slots.chunks(self.slots_per_row.max(1))
    }

    pub fn slot(&self, index: SlotIndex) -> Option<&SlotView> {
        self.slots.get(index.0)
    }
}
