use std::path::{Path, PathBuf};

use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::random::RngSource;
use crate::types::Color;

/// Highest frame rate the player will schedule.
pub const MAX_FPS: u32 = 240;
/// Largest width or height of the canvas, in pixels.
pub const MAX_SURFACE: u32 = 8192;
/// Ceiling on `max_fireworks * max_sparks`.
pub const MAX_PARTICLES: usize = 100_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Surface must be at least 1x1, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },
    #[error("Surface must be at most 8192x8192, got {width}x{height}")]
    SurfaceTooLarge { width: u32, height: u32 },
    #[error("Frame rate must be between 1 and 240, got {0}")]
    FrameRate(u32),
    #[error("{fireworks} fireworks x {sparks} sparks exceeds 100000 particles")]
    TooManyParticles { fireworks: usize, sparks: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub max_fireworks: usize,
    pub max_sparks: usize,
    pub background: Color,
    pub fps: u32,
    /// Fixed seed for a reproducible show.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 800,
            height: 500,
            max_fireworks: 5,
            max_sparks: 50,
            background: Color::default(),
            fps: 30,
            seed: None,
        }
    }
}

impl Config {
    /// Load the user config, falling back to defaults.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring {} ({e}), using defaults", config_path.display());
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptySurface {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_SURFACE || self.height > MAX_SURFACE {
            return Err(ConfigError::SurfaceTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::FrameRate(self.fps));
        }
        let particles = self.max_fireworks.checked_mul(self.max_sparks);
        if particles.is_none_or(|n| n > MAX_PARTICLES) {
            return Err(ConfigError::TooManyParticles {
                fireworks: self.max_fireworks,
                sparks: self.max_sparks,
            });
        }
        Ok(())
    }

    /// Seeded when `seed` is set, otherwise from OS entropy.
    pub fn rng(&self) -> RngSource<StdRng> {
        match self.seed {
            Some(seed) => RngSource(StdRng::seed_from_u64(seed)),
            None => RngSource(StdRng::from_os_rng()),
        }
    }

    pub fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("fireworks");
        path.push("config.json");
        path
    }
}
