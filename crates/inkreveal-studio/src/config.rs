use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use inkreveal_engine::ScratchConfig;
use serde::Deserialize;

/// Studio settings, read from a TOML file.
///
/// ```toml
/// width = 320.0
/// height = 200.0
/// frame_ms = 16
/// rows = 4
///
/// [scratch]
/// stroke_width = 50.0
/// reveal_threshold = 60.0
/// ```
///
/// Fields missing from `[scratch]` fall back to the bare-surface defaults;
/// a file without a `[scratch]` table uses the card preset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Card width in logical pixels.
    pub width: f32,
    /// Card height in logical pixels.
    pub height: f32,
    /// Virtual frame length in milliseconds.
    pub frame_ms: u64,
    /// Horizontal passes in the scripted zigzag.
    pub rows: u32,
    /// Pointer travel per frame in logical pixels.
    pub step: f32,
    #[serde(default = "ScratchConfig::card")]
    pub scratch: ScratchConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 200.0,
            frame_ms: 16,
            rows: 4,
            step: 12.0,
            scratch: ScratchConfig::card(),
        }
    }
}

impl StudioConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: StudioConfig = toml::from_str(content)?;
        anyhow::ensure!(config.width > 0.0 && config.height > 0.0, "card size must be positive");
        anyhow::ensure!(config.frame_ms > 0, "frame_ms must be at least 1");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_the_default() {
        assert_eq!(StudioConfig::parse("").unwrap(), StudioConfig::default());
    }

    #[test]
    fn scratch_table_overrides_tuning() {
        let c = StudioConfig::parse(
            r#"
            width = 100.0
            [scratch]
            stroke_width = 30.0
            reveal_threshold = 40.0
            reveal_hold = 1.5
            "#,
        )
        .unwrap();
        assert_eq!(c.width, 100.0);
        assert_eq!(c.height, 200.0);
        assert_eq!(c.scratch.stroke_width, 30.0);
        assert_eq!(c.scratch.reveal_threshold, 40.0);
        assert_eq!(c.scratch.reveal_hold, 1.5);
        assert_eq!(c.scratch.decay_grace, 3.0);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(StudioConfig::parse("width = 0.0").is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(StudioConfig::parse("width = \"wide\"").is_err());
    }
}
