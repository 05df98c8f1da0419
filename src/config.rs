//! Rendering configuration.
//!
//! Loaded from YAML; every field falls back to its default when omitted.
//!
//! ```yaml
//! screen:
//!   width: 500
//!   height: 500
//!   background: { r: 255, g: 255, b: 255 }
//! line_color: { r: 0, g: 0, b: 0 }
//! shapes:
//!   growth: 100
//!   sphere_step: 20
//!   torus_step: 20
//!   circle_step: 100
//!   curve_step: 100
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::point_buffer::{DEFAULT_GROWTH, MAX_GROWTH};

/// Drawing surface settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Width in pixels.
    #[serde(default = "default_size")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_size")]
    pub height: u32,

    /// Color the screen is cleared to.
    #[serde(default = "default_background")]
    pub background: Rgba,
}

fn default_size() -> u32 {
    500
}
fn default_background() -> Rgba {
    Rgba::WHITE
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self { width: default_size(), height: default_size(), background: default_background() }
    }
}

/// Shape sampling and edge buffer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Columns added each time an edge buffer fills up.
    #[serde(default = "default_growth")]
    pub growth: usize,

    /// Samples per sphere semicircle.
    #[serde(default = "default_surface_step")]
    pub sphere_step: usize,

    /// Samples per torus circle.
    #[serde(default = "default_surface_step")]
    pub torus_step: usize,

    /// Segments per circle.
    #[serde(default = "default_outline_step")]
    pub circle_step: usize,

    /// Segments per curve.
    #[serde(default = "default_outline_step")]
    pub curve_step: usize,
}

fn default_growth() -> usize {
    DEFAULT_GROWTH
}
fn default_surface_step() -> usize {
    20
}
fn default_outline_step() -> usize {
    100
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            growth: default_growth(),
            sphere_step: default_surface_step(),
            torus_step: default_surface_step(),
            circle_step: default_outline_step(),
            curve_step: default_outline_step(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Screen settings.
    #[serde(default)]
    pub screen: ScreenConfig,

    /// Color used for wireframe lines.
    #[serde(default = "default_line_color")]
    pub line_color: Rgba,

    /// Shape settings.
    #[serde(default)]
    pub shapes: ShapeConfig,
}

fn default_line_color() -> Rgba {
    Rgba::BLACK
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            line_color: default_line_color(),
            shapes: ShapeConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        debug!("loaded render configuration from {}", path.display());
        Ok(config)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::ConfigInvalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Check values that would make rendering impossible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] for a zero screen dimension or a growth
    /// block outside `1..=MAX_GROWTH`.
    pub fn validate(&self) -> Result<()> {
        let invalid = |key: &str, message: &str| Error::ConfigInvalid {
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.screen.width == 0 {
            return Err(invalid("screen.width", "must be greater than 0"));
        }
        if self.screen.height == 0 {
            return Err(invalid("screen.height", "must be greater than 0"));
        }
        if self.shapes.growth == 0 {
            return Err(invalid("shapes.growth", "must be greater than 0"));
        }
        if self.shapes.growth > MAX_GROWTH {
            return Err(invalid("shapes.growth", &format!("must be at most {MAX_GROWTH}")));
        }
        Ok(())
    }
}
