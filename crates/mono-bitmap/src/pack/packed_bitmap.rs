//! Packed 1-bit bitmap.

use tracing::debug;

use crate::matrix::BinaryMatrix;

use super::Polarity;

/// Bytes needed for one row of `width` pixels at 1 bit per pixel.
///
/// ```
/// use mono_bitmap::pack::bytes_per_row;
/// assert_eq!(bytes_per_row(8), 1);
/// assert_eq!(bytes_per_row(10), 2);
/// assert_eq!(bytes_per_row(250), 32);
/// ```
#[inline]
pub fn bytes_per_row(width: usize) -> usize {
    (width + 7) >> 3
}

/// A byte-packed 1-bit image.
///
/// Invariant: `bytes().len() == height() * bytes_per_row()`, and every bit
/// past `width` in a row's last byte is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    bytes: Vec<u8>,
    width: usize,
    height: usize,
    bytes_per_row: usize,
}

impl PackedBitmap {
    /// Packed bytes, row-major.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the bitmap and return the packed bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row stride in bytes.
    #[inline]
    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Total packed length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for bitmaps built by [`pack`]; matrices are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Iterate over the packed rows.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.bytes.chunks_exact(self.bytes_per_row)
    }
}

/// Pack a binary matrix MSB-first with per-row padding.
///
/// Bit `7 - p` of row byte `b` holds pixel `x = b * 8 + p`, mapped through
/// `polarity`. Pixels with `x >= width` are padding and stay 0.
pub fn pack(matrix: &BinaryMatrix, polarity: Polarity) -> PackedBitmap {
    let (width, height) = (matrix.width(), matrix.height());
    let stride = bytes_per_row(width);
    let mut bytes = Vec::with_capacity(stride * height);

    for y in 0..height {
        let row = matrix.row(y);
        for b in 0..stride {
            let mut byte = 0u8;
            for p in 0..8 {
                let x = b * 8 + p;
                if x < width {
                    byte |= polarity.bit(row[x]) << (7 - p);
                }
            }
            bytes.push(byte);
        }
    }

    debug!(width, height, stride, len = bytes.len(), %polarity, "Packed bitmap");

    PackedBitmap {
        bytes,
        width,
        height,
        bytes_per_row: stride,
    }
}
