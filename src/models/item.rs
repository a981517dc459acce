use serde::{Deserialize, Serialize};

/// One stock line. `quantity` is what can still be loaned out, `reserved` is
/// what is currently out on loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    /// Display name, serialized as `item` to match the front-end's table.
    #[serde(rename = "item")]
    pub name: String,
    pub quantity: u32,
    pub reserved: u32,
}

impl InventoryItem {
    pub fn new(id: i64, name: impl Into<String>, quantity: u32, reserved: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            reserved,
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoanRequest {
    pub item_id: i64,
    pub quantity: u32,
    pub to_location: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReturnRequest {
    pub item_id: i64,
    pub quantity: u32,
    pub from_location: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_name_as_item() {
        let item = InventoryItem::new(1, "Gloss Label Roll", 100, 10);
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({ "id": 1, "item": "Gloss Label Roll", "quantity": 100, "reserved": 10 })
        );
    }

    #[test]
    fn loan_request_rejects_negative_quantity() {
        let res = serde_json::from_value::<LoanRequest>(json!({
            "item_id": 1,
            "quantity": -5,
            "to_location": "Warehouse B",
        }));
        assert!(res.is_err());
    }

    #[test]
    fn return_request_requires_origin() {
        let res = serde_json::from_value::<ReturnRequest>(json!({ "item_id": 2, "quantity": 5 }));
        assert!(res.is_err());
    }

    #[test]
    fn loan_request_rejects_unknown_fields() {
        let res = serde_json::from_value::<LoanRequest>(json!({
            "item_id": 1,
            "quantity": 3,
            "to_location": "Site A",
            "note": "rush",
        }));
        assert!(res.is_err());
    }

    #[test]
    fn return_request_parses() {
        let req: ReturnRequest = serde_json::from_value(json!({
            "item_id": 2,
            "quantity": 5,
            "from_location": "Site C",
        }))
        .unwrap();
        assert_eq!((req.item_id, req.quantity, req.from_location.as_str()), (2, 5, "Site C"));
    }
}
