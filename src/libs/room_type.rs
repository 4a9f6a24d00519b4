use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomType {
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub note: Option<String>,
}

impl RoomType {
    pub fn new(name: &str, description: Option<String>, note: Option<String>) -> Self {
        RoomType {
            id: None,
            name: name.to_string(),
            description,
            note,
        }
    }
}
