use std::{
    fs,
    path::PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

const APP_NAME: &str = "fukushu";
const CONNECTION_FILE: &str = "connection.json";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// How to reach the sheet bridge. The only local state the app keeps; record
/// data lives exclusively in the remote worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub endpoint: String,
    pub worksheet: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfig {
            endpoint: "http://localhost:9414/".to_string(),
            worksheet: "Sheet1".to_string(),
            api_key: None,
        }
    }
}

impl ConnectionConfig {
    fn file_path() -> PathBuf {
        get_app_data_dir().join(CONNECTION_FILE)
    }

    /// Missing or unreadable config falls back to defaults so the app always
    /// starts; the parse failure is reported on stderr.
    pub fn load_or_default() -> Self {
        let path = Self::file_path();
        if !path.exists() {
            return ConnectionConfig::default();
        }

        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    ConnectionConfig::default()
                }
            },
            Err(e) => {
                eprintln!("Failed to read {}: {}. Using defaults.", path.display(), e);
                ConnectionConfig::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), crate::core::FukushuError> {
        let path = Self::file_path();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        println!("Connection settings saved to: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_shape() {
        let config = ConnectionConfig::default();
        assert_eq!(config.worksheet, "Sheet1");
        assert!(config.api_key.is_none());
        assert!(config.endpoint.starts_with("http://"));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = ConnectionConfig {
            endpoint: "http://sheets.example:9414/".to_string(),
            worksheet: "Errors".to_string(),
            api_key: Some("k-123".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: ConnectionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_api_key_defaults_when_absent() {
        let back: ConnectionConfig =
            serde_json::from_str(r#"{"endpoint":"http://x/","worksheet":"Sheet1"}"#).unwrap();
        assert!(back.api_key.is_none());
    }
}
