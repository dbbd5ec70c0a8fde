use serde::{Deserialize, Serialize};

/// Create input. Missing fields default to empty/zero and are then rejected
/// by validation instead of by the JSON decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: i32,
}

/// Stored room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "room_id")]
    pub id: i32,
    pub description: String,
    pub price: i32,
}

impl From<models::room::Model> for Room {
    fn from(m: models::room::Model) -> Self {
        Room { id: m.id, description: m.description, price: m.price }
    }
}
