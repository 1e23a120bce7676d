use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Startup configuration for the engine window and canvas.
/// Persisted as JSON so a setup can be tuned without recompiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    #[serde(default = "default_vsync")]
    pub vsync: bool,
}

fn default_vsync() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "lopix".to_string(),
            width: 160,
            height: 120,
            scale: 4,
            vsync: true,
        }
    }
}

impl EngineConfig {
    /// Save configuration to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vsync_defaults_on_when_missing() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"title":"t","width":64,"height":48,"scale":2}"#).unwrap();
        assert!(config.vsync);
        assert_eq!(config.width, 64);
        assert_eq!(config.scale, 2);
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(EngineConfig::load("definitely/not/here.json").is_err());
    }
}
