use tracing::info;

use crate::models::InventoryItem;
use crate::store::InventoryStore;

/// Stock loaded at startup: (id, name, quantity, reserved).
static SEED_ITEMS: &[(i64, &str, u32, u32)] = &[
    (1, "Gloss Label Roll", 100, 10),
    (2, "Matte Cover Sheet", 200, 0),
];

pub fn seed_inventory() -> InventoryStore {
    let store: InventoryStore = SEED_ITEMS
        .iter()
        .map(|&(id, name, quantity, reserved)| InventoryItem::new(id, name, quantity, reserved))
        .collect();

    info!("Seeded {} inventory items", store.len());
    store
}
