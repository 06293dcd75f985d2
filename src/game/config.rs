use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Width and height of the LED matrix
pub const BOARD_SIZE: usize = 5;

/// Pixel brightness for each kind of occupied cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessLevels {
    pub head: u8,
    pub body: u8,
    pub food: u8,
}

impl Default for BrightnessLevels {
    fn default() -> Self {
        Self {
            head: 150,
            body: 15,
            food: 255,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay between two ticks in milliseconds
    pub tick_ms: u64,
    /// Pixel brightness levels
    pub brightness: BrightnessLevels,

    // Game over sequence
    /// Number of brightness toggles while the dead snake flashes
    pub flash_count: u32,
    /// Delay between two flash toggles in milliseconds
    pub flash_interval_ms: u64,
    /// Text scrolled before the score
    pub score_label: String,
    /// Per-step delay when scrolling the label
    pub text_scroll_ms: u64,
    /// Per-step delay when scrolling the score
    pub number_scroll_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: 500,
            brightness: BrightnessLevels::default(),
            flash_count: 10,
            flash_interval_ms: 500,
            score_label: "SCORE-".to_string(),
            text_scroll_ms: 120,
            number_scroll_ms: 150,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom tick cadence
    pub fn with_tick_ms(tick_ms: u64) -> Self {
        Self {
            tick_ms,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file
    ///
    /// Missing fields fall back to their defaults. The result is validated.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        config
            .validate()
            .map_err(|message| anyhow!("Invalid config {:?}: {}", path, message))?;
        Ok(config)
    }

    /// Validate configuration parameters
    ///
    /// `Ok(())` if all parameters are usable, `Err(String)` with an error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_ms == 0 {
            return Err("tick_ms must be positive".to_string());
        }
        if self.text_scroll_ms == 0 || self.number_scroll_ms == 0 {
            return Err(format!(
                "scroll delays must be positive, got text {} and number {}",
                self.text_scroll_ms, self.number_scroll_ms
            ));
        }

        let levels = &self.brightness;
        if levels.body == 0 || levels.head == 0 || levels.food == 0 {
            return Err(format!("brightness levels must be non-zero, got {:?}", levels));
        }
        if levels.body >= levels.head {
            return Err(format!(
                "body brightness ({}) must be below head brightness ({})",
                levels.body, levels.head
            ));
        }

        Ok(())
    }
}
