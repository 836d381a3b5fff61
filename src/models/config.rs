use mono_bitmap::{Converter, DitherMethod, LumaWeights, Polarity, Template};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::AppError;

/// Conversion profile loaded from a YAML file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Target width in pixels (input is resampled to fit)
    #[serde(default = "default_width")]
    pub width: usize,

    /// Target height in pixels
    #[serde(default = "default_height")]
    pub height: usize,

    /// Dithering method: "floyd" or "atkinson"
    #[serde(default = "default_dither")]
    pub dither: String,

    /// Brightness offset (-1.0 to 1.0)
    #[serde(default)]
    pub brightness: f32,

    /// Contrast amount (-1.0 to 1.0)
    #[serde(default)]
    pub contrast: f32,

    /// Output template: "macro" or "descriptor"
    #[serde(default = "default_template")]
    pub template: String,

    /// Bit polarity: "direct" (set bit = white) or "inverted" (set bit = ink)
    #[serde(default = "default_polarity")]
    pub polarity: String,

    /// RGB to gray weights: "bt601" or "bt709"
    #[serde(default = "default_luma")]
    pub luma: String,

    /// Base symbol name (defaults to the input file stem)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Write a PNG preview of the dithered image next to the output
    #[serde(default = "default_preview")]
    pub preview: bool,
}

fn default_width() -> usize {
    250
}

fn default_height() -> usize {
    102
}

fn default_dither() -> String {
    "atkinson".to_string()
}

fn default_template() -> String {
    "descriptor".to_string()
}

fn default_polarity() -> String {
    "inverted".to_string()
}

fn default_luma() -> String {
    "bt601".to_string()
}

fn default_preview() -> bool {
    true
}

/// Values given on the command line; `None` keeps the profile value
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub dither: Option<String>,
    pub brightness: Option<f32>,
    pub contrast: Option<f32>,
    pub template: Option<String>,
    pub polarity: Option<String>,
    pub luma: Option<String>,
    pub name: Option<String>,
    pub no_preview: bool,
}

impl ConvertConfig {
    /// Load a profile from a YAML file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            width = config.width,
            height = config.height,
            dither = %config.dither,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `path` if given, otherwise start from defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a profile from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Serialize the profile back to YAML
    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Apply command line values on top of this profile
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        if let Some(dither) = overrides.dither {
            self.dither = dither;
        }
        if let Some(brightness) = overrides.brightness {
            self.brightness = brightness;
        }
        if let Some(contrast) = overrides.contrast {
            self.contrast = contrast;
        }
        if let Some(template) = overrides.template {
            self.template = template;
        }
        if let Some(polarity) = overrides.polarity {
            self.polarity = polarity;
        }
        if let Some(luma) = overrides.luma {
            self.luma = luma;
        }
        if overrides.name.is_some() {
            self.name = overrides.name;
        }
        if overrides.no_preview {
            self.preview = false;
        }
    }

    pub fn dither_method(&self) -> Result<DitherMethod, AppError> {
        Ok(self.dither.parse::<DitherMethod>()?)
    }

    pub fn output_template(&self) -> Result<Template, AppError> {
        Ok(self.template.parse::<Template>()?)
    }

    pub fn bit_polarity(&self) -> Result<Polarity, AppError> {
        Ok(self.polarity.parse::<Polarity>()?)
    }

    pub fn luma_weights(&self) -> Result<LumaWeights, AppError> {
        match self.luma.trim().to_ascii_lowercase().as_str() {
            "bt601" | "rec601" => Ok(LumaWeights::BT601),
            "bt709" | "rec709" => Ok(LumaWeights::BT709),
            other => Err(AppError::Config(format!("unknown luma weights: {other}"))),
        }
    }

    /// Build a converter from this profile
    ///
    /// Out-of-range brightness and contrast are clamped with a warning.
    pub fn converter(&self) -> Result<Converter, AppError> {
        if !(-1.0..=1.0).contains(&self.brightness) {
            tracing::warn!(
                brightness = self.brightness,
                "Brightness out of range, clamping to -1.0..=1.0"
            );
        }
        if !(-1.0..=1.0).contains(&self.contrast) {
            tracing::warn!(
                contrast = self.contrast,
                "Contrast out of range, clamping to -1.0..=1.0"
            );
        }

        Ok(Converter::new(
            self.dither_method()?,
            self.bit_polarity()?,
            self.output_template()?,
        )
        .brightness(self.brightness)
        .contrast(self.contrast)
        .luma_weights(self.luma_weights()?))
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            dither: default_dither(),
            brightness: 0.0,
            contrast: 0.0,
            template: default_template(),
            polarity: default_polarity(),
            luma: default_luma(),
            name: None,
            preview: default_preview(),
        }
    }
}
