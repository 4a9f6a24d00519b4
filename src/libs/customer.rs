use crate::libs::lifecycle::RecordStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Option<i32>,
    pub full_name: String,
    pub email: String,
    pub telephone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub password: Option<String>,
    pub status: RecordStatus,
}

impl Customer {
    pub fn new(full_name: &str, email: &str, telephone: Option<String>, birthday: Option<NaiveDate>, password: Option<String>) -> Self {
        Customer {
            id: None,
            full_name: full_name.to_string(),
            email: email.to_string(),
            telephone,
            birthday,
            password,
            status: RecordStatus::Active,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CustomerFilter {
    /// Active customers only; the default listing.
    Active,
    /// Every row including soft-deleted ones.
    All,
    /// Substring match over name, email and telephone of active customers.
    Search(String),
}
