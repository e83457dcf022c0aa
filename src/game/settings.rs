use crate::model::{DeckMode, Difficulty};
use glib;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub deck_mode: DeckMode,

    /// How long mismatched cards stay face up before flipping back.
    #[serde(default = "default_flip_back_delay_ms")]
    pub flip_back_delay_ms: u64,
}

fn default_version() -> u32 {
    1
}

fn default_flip_back_delay_ms() -> u64 {
    750
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: 1,
            difficulty: Difficulty::default(),
            deck_mode: DeckMode::default(),
            flip_back_delay_ms: default_flip_back_delay_ms(),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        Settings::load_from(&Settings::settings_path())
    }

    fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(mut settings) = serde_json::from_str::<Settings>(&contents) {
                settings.migrate();
                return settings;
            }
        }
        let default = Settings::default();
        let _ = default.save_to(path);
        default
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&Settings::settings_path())
    }

    fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string(self)?;
        fs::write(path, contents)
    }

    fn settings_path() -> PathBuf {
        glib::user_data_dir().join("pairhunt").join("settings.json")
    }

    fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
    }

    pub fn flip_back_delay(&self) -> Duration {
        Duration::from_millis(self.flip_back_delay_ms)
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_settings_round_trip() {
        let path = std::env::temp_dir().join("pairhunt-test-settings.json");
        let settings = Settings {
            version: 1,
            difficulty: Difficulty::Hard,
            deck_mode: DeckMode::Custom,
            flip_back_delay_ms: 500,
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.difficulty, Difficulty::Hard);
        assert_eq!(loaded.deck_mode, DeckMode::Custom);
        assert_eq!(loaded.flip_back_delay(), Duration::from_millis(500));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    #[serial]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let path = std::env::temp_dir().join("pairhunt-test-settings.json");
        std::fs::write(&path, "{ definitely not settings").unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.difficulty, Difficulty::Easy);
        assert_eq!(loaded.deck_mode, DeckMode::Default);

        std::fs::remove_file(&path).unwrap();
    }
}
