//! Configuration management for the innkeep application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory resolved by [`DataStorage`]. A missing file yields the default
//! configuration; `innkeep init` runs the interactive setup wizard.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Hotel name shown in table headers and exports.
    pub hotel_name: Option<String>,
    /// Currency symbol used when printing prices.
    pub currency: Option<String>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when absent.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive setup wizard, starting from the current values.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;

        let hotel_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHotelName.to_string())
            .with_initial_text(current.hotel_name.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let currency: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCurrency.to_string())
            .with_initial_text(current.currency.unwrap_or_else(|| "$".to_string()))
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            hotel_name: Some(hotel_name).filter(|s| !s.is_empty()),
            currency: Some(currency).filter(|s| !s.is_empty()),
        })
    }

    /// Currency symbol to print next to prices.
    pub fn currency_symbol(&self) -> String {
        self.currency.clone().unwrap_or_else(|| "$".to_string())
    }
}
