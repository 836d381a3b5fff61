use mono_bitmap::matrix::ImageSource;
use mono_bitmap::Converter;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::ConvertConfig;
use crate::rendering::{load_png, write_preview};

/// Files written by one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub preview: Option<PathBuf>,
    pub symbol: String,
    pub width: usize,
    pub height: usize,
    pub packed_bytes: usize,
}

/// Converts PNG files to C sources using one profile
pub struct ConversionService {
    config: ConvertConfig,
    converter: Converter,
}

impl ConversionService {
    pub fn new(config: ConvertConfig) -> Result<Self, AppError> {
        let converter = config.converter()?;
        Ok(Self { config, converter })
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert `input` and write the C source to `output`
    ///
    /// `output` defaults to the input path with a `.c` extension. A preview
    /// is written to `preview`, or to `preview_<input name>` next to the
    /// output when the profile enables previews.
    pub fn convert_file(
        &self,
        input: &Path,
        output: Option<&Path>,
        preview: Option<&Path>,
    ) -> Result<ConversionReport, AppError> {
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| input.with_extension("c"));
        let preview = match preview {
            Some(path) => Some(path.to_path_buf()),
            None if self.config.preview => Some(default_preview_path(input, &output)),
            None => None,
        };
        let symbol = match &self.config.name {
            Some(name) => name.clone(),
            None => symbol_from_path(input),
        };

        let image = load_png(input)?.resize(self.config.width, self.config.height)?;
        let conversion = self.converter.convert(&image, &symbol)?;
        if conversion.clamped > 0 {
            tracing::debug!(clamped = conversion.clamped, "Tone adjustment clamped samples");
        }

        std::fs::write(&output, &conversion.text)?;
        tracing::info!(
            path = %output.display(),
            symbol = %symbol,
            bytes = conversion.bitmap.len(),
            "Wrote C source"
        );

        if let Some(path) = &preview {
            write_preview(path, &conversion.binary)?;
        }

        Ok(ConversionReport {
            output,
            preview,
            symbol,
            width: image.width(),
            height: image.height(),
            packed_bytes: conversion.bitmap.len(),
        })
    }
}

/// `preview_<input file name>` in the output directory
fn default_preview_path(input: &Path, output: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image.png".to_string());
    let dir = output.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!("preview_{file_name}"))
}

/// Turn a file stem into a C identifier
///
/// Characters outside `[A-Za-z0-9_]` become `_`, and a leading digit gets a
/// `_` prefix.
pub fn symbol_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut symbol: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if symbol.is_empty() {
        symbol.push_str("image");
    } else if symbol.starts_with(|c: char| c.is_ascii_digit()) {
        symbol.insert(0, '_');
    }
    symbol
}
