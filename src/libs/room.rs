use crate::libs::lifecycle::RecordStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Option<i32>,
    pub room_number: String,
    pub description: Option<String>,
    pub max_capacity: Option<i32>,
    pub price_per_day: Option<f64>,
    pub room_type_id: i32,
    pub status: RecordStatus,
}

impl Room {
    pub fn new(room_number: &str, description: Option<String>, max_capacity: Option<i32>, price_per_day: Option<f64>, room_type_id: i32) -> Self {
        Room {
            id: None,
            room_number: room_number.to_string(),
            description,
            max_capacity,
            price_per_day,
            room_type_id,
            status: RecordStatus::Active,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RoomFilter {
    /// Active rooms only; the default listing.
    Active,
    /// Every row including soft-deleted ones.
    All,
    /// Active rooms of one room type.
    ByType(i32),
    /// Substring match over room number and description of active rooms.
    Search(String),
}
