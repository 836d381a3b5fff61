//! 1-bit packing of binary matrices.
//!
//! Rows are packed MSB-first, each row padded to a whole byte. Padding bits
//! are always 0, whatever the polarity.
//!
//! # Example
//!
//! ```
//! use mono_bitmap::matrix::BinaryMatrix;
//! use mono_bitmap::pack::{pack, Polarity};
//!
//! let matrix = BinaryMatrix::from_bits(vec![1; 10], 10, 1).unwrap();
//! let packed = pack(&matrix, Polarity::Direct);
//! assert_eq!(packed.bytes(), &[0xFF, 0xC0]);
//! ```

mod packed_bitmap;
mod polarity;

pub use packed_bitmap::{bytes_per_row, pack, PackedBitmap};
pub use polarity::Polarity;
