//! Viewport configuration resource.
//!
//! Camera settings loaded from an INI configuration file. Defaults are safe
//! to start with; values missing from the file keep them.
//!
//! # Configuration File Format
//!
//! ```ini
//! [viewport]
//! width = 800
//! height = 600
//!
//! [bounds]
//! min_x = 0
//! min_y = 0
//! max_x = 2000
//! max_y = 1200
//!
//! [follow]
//! dist_x = 400
//! dist_y = 300
//!
//! [fit]
//! margin_x = 10
//! margin_y = 10
//! ```
//!
//! The `[bounds]` section is optional; without it the viewport is
//! unbounded. A partial section fills the missing sides with ±infinity.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::viewport::{Viewport, WorldBounds};

const DEFAULT_WIDTH: f32 = 800.0;
const DEFAULT_HEIGHT: f32 = 600.0;
const DEFAULT_FOLLOW_DIST_X: f32 = 400.0;
const DEFAULT_FOLLOW_DIST_Y: f32 = 300.0;
const DEFAULT_FIT_MARGIN: f32 = 10.0;
const DEFAULT_CONFIG_PATH: &str = "./camera.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewportConfig {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
    /// Clamp rectangle for entity following; `None` means unbounded.
    pub bounds: Option<WorldBounds>,
    /// Offset subtracted from the followed entity's position.
    pub follow_dist_x: f32,
    pub follow_dist_y: f32,
    /// Margin added around the framed entities in fit mode.
    pub fit_margin_x: f32,
    pub fit_margin_y: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bounds: None,
            follow_dist_x: DEFAULT_FOLLOW_DIST_X,
            follow_dist_y: DEFAULT_FOLLOW_DIST_Y,
            fit_margin_x: DEFAULT_FIT_MARGIN,
            fit_margin_y: DEFAULT_FIT_MARGIN,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config)?;

        info!(
            "Loaded camera config: {}x{} viewport, bounds={:?}, follow=({}, {}), fit margin=({}, {})",
            self.width,
            self.height,
            self.bounds,
            self.follow_dist_x,
            self.follow_dist_y,
            self.fit_margin_x,
            self.fit_margin_y
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), String> {
        let float = |section: &str, key: &str| -> Result<Option<f32>, String> {
            config
                .getfloat(section, key)
                .map(|v| v.map(|v| v as f32))
                .map_err(|e| format!("[{section}] {key}: {e}"))
        };

        // Parse everything before touching `self` so a bad file leaves the
        // current values in place.
        let width = float("viewport", "width")?.unwrap_or(self.width);
        let height = float("viewport", "height")?.unwrap_or(self.height);
        if width <= 0.0 || height <= 0.0 {
            return Err(format!(
                "Viewport size must be positive, got {}x{}",
                width, height
            ));
        }

        let sides = [
            float("bounds", "min_x")?,
            float("bounds", "min_y")?,
            float("bounds", "max_x")?,
            float("bounds", "max_y")?,
        ];
        let follow_x = float("follow", "dist_x")?;
        let follow_y = float("follow", "dist_y")?;
        let margin_x = float("fit", "margin_x")?;
        let margin_y = float("fit", "margin_y")?;

        // [viewport] section
        self.width = width;
        self.height = height;

        // [bounds] section
        if sides.iter().any(Option::is_some) {
            let unbounded = WorldBounds::UNBOUNDED;
            self.bounds = Some(WorldBounds::new(
                sides[0].unwrap_or(unbounded.min_x),
                sides[1].unwrap_or(unbounded.min_y),
                sides[2].unwrap_or(unbounded.max_x),
                sides[3].unwrap_or(unbounded.max_y),
            ));
        }

        // [follow] section
        if let Some(x) = follow_x {
            self.follow_dist_x = x;
        }
        if let Some(y) = follow_y {
            self.follow_dist_y = y;
        }

        // [fit] section
        if let Some(x) = margin_x {
            self.fit_margin_x = x;
        }
        if let Some(y) = margin_y {
            self.fit_margin_y = y;
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [viewport] section
        config.set("viewport", "width", Some(self.width.to_string()));
        config.set("viewport", "height", Some(self.height.to_string()));

        // [bounds] section
        if let Some(b) = self.bounds {
            config.set("bounds", "min_x", Some(b.min_x.to_string()));
            config.set("bounds", "min_y", Some(b.min_y.to_string()));
            config.set("bounds", "max_x", Some(b.max_x.to_string()));
            config.set("bounds", "max_y", Some(b.max_y.to_string()));
        }

        // [follow] section
        config.set("follow", "dist_x", Some(self.follow_dist_x.to_string()));
        config.set("follow", "dist_y", Some(self.follow_dist_y.to_string()));

        // [fit] section
        config.set("fit", "margin_x", Some(self.fit_margin_x.to_string()));
        config.set("fit", "margin_y", Some(self.fit_margin_y.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved camera config to {:?}", self.config_path);

        Ok(())
    }

    /// Build a free viewport of the configured size with the configured
    /// bounds applied.
    pub fn build_viewport(&self) -> Viewport {
        let mut viewport = Viewport::new(self.width, self.height);
        if let Some(b) = self.bounds {
            viewport.set_bounds(b.min_x, b.min_y, b.max_x, b.max_y);
        }
        viewport
    }
}
