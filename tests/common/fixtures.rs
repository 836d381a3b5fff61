//! Test fixtures: PNG files written into temporary directories.

use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Encode an 8-bit PNG of the given color type
pub fn encode_png(
    width: u32,
    height: u32,
    color: png::ColorType,
    palette: Option<&[u8]>,
    data: &[u8],
) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        if let Some(palette) = palette {
            encoder.set_palette(palette.to_vec());
        }
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    buf.into_inner()
}

/// Write an 8-bit grayscale PNG to `dir/name`
pub fn write_gray_png(dir: &Path, name: &str, width: u32, height: u32, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let bytes = encode_png(width, height, png::ColorType::Grayscale, None, data);
    std::fs::write(&path, bytes).expect("write PNG fixture");
    path
}

/// Write an 8-bit RGB PNG to `dir/name`
pub fn write_rgb_png(dir: &Path, name: &str, width: u32, height: u32, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let bytes = encode_png(width, height, png::ColorType::Rgb, None, data);
    std::fs::write(&path, bytes).expect("write PNG fixture");
    path
}

/// Write an 8-bit indexed PNG to `dir/name`
pub fn write_indexed_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    palette: &[u8],
    indices: &[u8],
) -> PathBuf {
    let path = dir.join(name);
    let bytes = encode_png(width, height, png::ColorType::Indexed, Some(palette), indices);
    std::fs::write(&path, bytes).expect("write PNG fixture");
    path
}

/// Horizontal RGB gradient, black on the left to white on the right
pub fn rgb_gradient(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            data.extend_from_slice(&[v, v, v]);
        }
    }
    data
}

/// Rows of four black then four white pixels
pub fn split_rows(height: usize) -> Vec<u8> {
    [0, 0, 0, 0, 255, 255, 255, 255].repeat(height)
}
