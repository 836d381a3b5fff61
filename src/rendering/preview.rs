use mono_bitmap::matrix::BinaryMatrix;
use mono_bitmap::pack::{pack, Polarity};
use std::io::Cursor;
use std::path::Path;

use crate::error::AppError;

/// Encode the dither decisions as a 1-bit grayscale PNG
///
/// In 1-bit grayscale a set bit is white, which is exactly the direct
/// packing of the decisions, so the rows go to the encoder as packed.
pub fn encode_preview(matrix: &BinaryMatrix) -> Result<Vec<u8>, AppError> {
    let packed = pack(matrix, Polarity::Direct);

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder =
            png::Encoder::new(&mut buf, matrix.width() as u32, matrix.height() as u32);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::One);
        encoder.set_compression(png::Compression::Best);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::Encode(e.to_string()))?;
        writer
            .write_image_data(packed.bytes())
            .map_err(|e| AppError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode the preview and write it to `path`
pub fn write_preview(path: &Path, matrix: &BinaryMatrix) -> Result<usize, AppError> {
    let bytes = encode_preview(matrix)?;
    std::fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote preview");
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_gray(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
        let mut decoder = png::Decoder::new(Cursor::new(bytes));
        decoder.set_transformations(png::Transformations::EXPAND);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info.width, info.height, buf)
    }

    #[test]
    fn test_preview_header() {
        let matrix = BinaryMatrix::from_bits(vec![1; 30], 10, 3).unwrap();
        let bytes = encode_preview(&matrix).unwrap();

        let decoder = png::Decoder::new(Cursor::new(&bytes[..]));
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (10, 3));
        assert_eq!(info.color_type, png::ColorType::Grayscale);
        assert_eq!(info.bit_depth, png::BitDepth::One);
    }

    #[test]
    fn test_preview_pixels_match_decisions() {
        #[rustfmt::skip]
        let bits = vec![
            1, 0, 1,
            0, 1, 0,
        ];
        let matrix = BinaryMatrix::from_bits(bits, 3, 2).unwrap();
        let (width, height, pixels) = decode_gray(&encode_preview(&matrix).unwrap());

        assert_eq!((width, height), (3, 2));
        assert_eq!(pixels, vec![255, 0, 255, 0, 255, 0]);
    }
}
