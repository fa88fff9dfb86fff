/// Prompt shown above the crosshair while a collectible is in sight.
pub fn pickup_prompt_text(key: &str, item_name: &str) -> String {
    format!("Press '{}' to pick up '{}'", key, item_name)
}

/// Corner hint for opening the panel.
pub fn hint_text(key: &str) -> String {
    format!("Press '{}' to open Inventory", key)
}
