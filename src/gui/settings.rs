use serde::{
    Deserialize,
    Serialize,
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub base_url: String,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { base_url: "http://localhost:5000".to_string() }
    }
}
