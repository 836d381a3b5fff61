//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::io::Cursor;
use std::path::Path;

/// PNG file signature
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert the file at `path` is a 1-bit grayscale PNG of the given size
pub fn assert_preview_png(path: &Path, width: u32, height: u32) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected preview at {}: {e}", path.display()));
    assert_eq!(&bytes[..8], &PNG_SIGNATURE, "Preview is not a PNG");

    let decoder = png::Decoder::new(Cursor::new(&bytes[..]));
    let reader = decoder.read_info().expect("Preview should decode");
    let info = reader.info();
    assert_eq!((info.width, info.height), (width, height));
    assert_eq!(info.color_type, png::ColorType::Grayscale);
    assert_eq!(info.bit_depth, png::BitDepth::One);
}

/// All `0x..` literals in emitted C source, lowercased
pub fn hex_values(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| t.starts_with("0x"))
        .map(|t| t.to_ascii_lowercase())
        .collect()
}

/// Assert the descriptor template shape for `symbol`
pub fn assert_descriptor_source(text: &str, symbol: &str, width: usize, height: usize) {
    let packed = width.div_ceil(8) * height;
    assert!(text.starts_with("#ifdef __has_include\n"), "Missing LVGL preamble");
    assert!(
        text.contains(&format!("uint8_t {symbol}_map[] = {{")),
        "Missing array {symbol}_map"
    );
    assert!(text.contains(&format!("const lv_img_dsc_t {symbol} = {{")));
    assert!(text.contains(&format!(".header.w = {width},")));
    assert!(text.contains(&format!(".header.h = {height},")));
    assert!(text.contains(&format!(".data_size = {},", packed + 8)));
    assert_eq!(hex_values(text).len(), packed + 8, "Wrong number of bytes");
}
