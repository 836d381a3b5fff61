use mono_bitmap::matrix::{GrayBuffer, ImageSource, RgbBuffer, Sample};
use std::io::Cursor;
use std::path::Path;

use crate::error::AppError;

/// A decoded PNG, reduced to 8-bit gray or RGB samples
///
/// Alpha channels are dropped and palettes expanded during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedImage {
    Gray(GrayBuffer),
    Rgb(RgbBuffer),
}

impl DecodedImage {
    /// Resample to `width`x`height` with bilinear interpolation
    ///
    /// Returns a copy unchanged when the size already matches.
    pub fn resize(&self, width: usize, height: usize) -> Result<Self, AppError> {
        if width == self.width() && height == self.height() {
            return Ok(self.clone());
        }

        tracing::debug!(
            from_width = self.width(),
            from_height = self.height(),
            width,
            height,
            "Resampling image"
        );

        let (src_width, src_height) = (self.width(), self.height());
        let resized = match self {
            DecodedImage::Gray(buf) => DecodedImage::Gray(GrayBuffer::new(
                resample_bilinear(buf.as_slice(), 1, src_width, src_height, width, height),
                width,
                height,
            )?),
            DecodedImage::Rgb(buf) => DecodedImage::Rgb(RgbBuffer::new(
                resample_bilinear(buf.as_slice(), 3, src_width, src_height, width, height),
                width,
                height,
            )?),
        };
        Ok(resized)
    }
}

impl ImageSource for DecodedImage {
    fn width(&self) -> usize {
        match self {
            DecodedImage::Gray(buf) => buf.width(),
            DecodedImage::Rgb(buf) => buf.width(),
        }
    }

    fn height(&self) -> usize {
        match self {
            DecodedImage::Gray(buf) => buf.height(),
            DecodedImage::Rgb(buf) => buf.height(),
        }
    }

    fn sample(&self, x: usize, y: usize) -> Sample {
        match self {
            DecodedImage::Gray(buf) => buf.sample(x, y),
            DecodedImage::Rgb(buf) => buf.sample(x, y),
        }
    }
}

/// Read and decode a PNG file
pub fn load_png(path: &Path) -> Result<DecodedImage, AppError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Decode PNG bytes into 8-bit samples
pub fn decode_png(bytes: &[u8]) -> Result<DecodedImage, AppError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| AppError::Decode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| AppError::Decode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let (width, height) = (info.width as usize, info.height as usize);
    tracing::debug!(width, height, color_type = ?info.color_type, "Decoded PNG");

    let image = match info.color_type {
        png::ColorType::Grayscale => DecodedImage::Gray(GrayBuffer::new(buf, width, height)?),
        png::ColorType::GrayscaleAlpha => DecodedImage::Gray(GrayBuffer::new(
            buf.chunks_exact(2).map(|px| px[0]).collect(),
            width,
            height,
        )?),
        png::ColorType::Rgb => DecodedImage::Rgb(RgbBuffer::new(buf, width, height)?),
        png::ColorType::Rgba => DecodedImage::Rgb(RgbBuffer::new(
            buf.chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            width,
            height,
        )?),
        png::ColorType::Indexed => {
            return Err(AppError::Decode("palette was not expanded".to_string()))
        }
    };
    Ok(image)
}

/// Source coordinate for a destination pixel, using pixel-center mapping
#[inline]
fn src_coord(dst: usize, src_len: usize, dst_len: usize) -> f32 {
    let scale = src_len as f32 / dst_len as f32;
    ((dst as f32 + 0.5) * scale - 0.5).clamp(0.0, (src_len - 1) as f32)
}

/// Bilinear resample of an interleaved 8-bit buffer with `channels` per pixel
fn resample_bilinear(
    src: &[u8],
    channels: usize,
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
) -> Vec<u8> {
    let mut dst = Vec::with_capacity(dst_width * dst_height * channels);

    for dst_y in 0..dst_height {
        let sy = src_coord(dst_y, src_height, dst_height);
        let y0 = sy.floor() as usize;
        let y1 = (y0 + 1).min(src_height - 1);
        let fy = sy - y0 as f32;

        for dst_x in 0..dst_width {
            let sx = src_coord(dst_x, src_width, dst_width);
            let x0 = sx.floor() as usize;
            let x1 = (x0 + 1).min(src_width - 1);
            let fx = sx - x0 as f32;

            for c in 0..channels {
                let at = |x: usize, y: usize| src[(y * src_width + x) * channels + c] as f32;
                let top = at(x0, y0) + (at(x1, y0) - at(x0, y0)) * fx;
                let bottom = at(x0, y1) + (at(x1, y1) - at(x0, y1)) * fx;
                let v = top + (bottom - top) * fy;
                dst.push(v.round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    dst
}
