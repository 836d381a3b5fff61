pub mod conversion;

pub use conversion::{symbol_from_path, ConversionReport, ConversionService};
