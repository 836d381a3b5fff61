//! Image descriptor value object.

use crate::api::error::{check_dimensions, ConvertError};
use crate::pack::PackedBitmap;

use super::Template;

/// Suffix appended to the base name to form the array symbol.
pub const ARRAY_SUFFIX: &str = "_map";

/// Everything the emitter needs to know about one image.
///
/// Built from a [`PackedBitmap`] for a specific [`Template`]; construction
/// validates the dimensions and the base name, and derives `data_size` from
/// the template.
///
/// # Example
///
/// ```
/// use mono_bitmap::emit::ImageDescriptor;
/// use mono_bitmap::matrix::BinaryMatrix;
/// use mono_bitmap::pack::{pack, Polarity};
/// use mono_bitmap::Template;
///
/// let matrix = BinaryMatrix::from_bits(vec![1; 16], 8, 2).unwrap();
/// let bitmap = pack(&matrix, Polarity::Direct);
///
/// let descriptor = ImageDescriptor::new("logo", &bitmap, Template::Descriptor).unwrap();
/// assert_eq!(descriptor.array_symbol(), "logo_map");
/// assert_eq!(descriptor.data_size(), 2 + 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor<'a> {
    width: usize,
    height: usize,
    data_size: usize,
    name: String,
    bytes: &'a [u8],
    template: Template,
}

impl<'a> ImageDescriptor<'a> {
    /// Describe `bitmap` under base name `name` for `template`.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::InvalidDimension`] for a zero-sized bitmap
    /// - [`ConvertError::InvalidName`] if `name` is not a C identifier
    pub fn new(
        name: &str,
        bitmap: &'a PackedBitmap,
        template: Template,
    ) -> Result<Self, ConvertError> {
        check_dimensions(bitmap.width(), bitmap.height())?;
        validate_name(name)?;
        Ok(Self {
            width: bitmap.width(),
            height: bitmap.height(),
            data_size: template.data_size(bitmap.len()),
            name: name.to_string(),
            bytes: bitmap.bytes(),
            template,
        })
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

    /// Reported data size: packed length plus the template's header.
    #[inline]
    pub fn data_size(&self) -> usize {
        self.data_size
    }

    /// Base name as provided.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Packed pixel bytes (without any template header).
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Template this descriptor was sized for.
    #[inline]
    pub fn template(&self) -> Template {
        self.template
    }

    /// Array symbol: the base name verbatim plus [`ARRAY_SUFFIX`].
    pub fn array_symbol(&self) -> String {
        format!("{}{ARRAY_SUFFIX}", self.name)
    }

    /// Prefix for `#define` constants: the array symbol upper-cased.
    pub fn macro_prefix(&self) -> String {
        self.array_symbol().to_uppercase()
    }
}

/// Accept `[A-Za-z_][A-Za-z0-9_]*`.
fn validate_name(name: &str) -> Result<(), ConvertError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ConvertError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::BinaryMatrix;
    use crate::pack::{pack, Polarity};

    fn bitmap(width: usize, height: usize) -> PackedBitmap {
        let matrix = BinaryMatrix::from_bits(vec![0; width * height], width, height).unwrap();
        pack(&matrix, Polarity::Direct)
    }

    #[test]
    fn test_data_size_per_template() {
        let bitmap = bitmap(250, 102);
        assert_eq!(bitmap.len(), 32 * 102);

        let macro_desc = ImageDescriptor::new("tag", &bitmap, Template::Macro).unwrap();
        assert_eq!(macro_desc.data_size(), 3264);

        let full_desc = ImageDescriptor::new("tag", &bitmap, Template::Descriptor).unwrap();
        assert_eq!(full_desc.data_size(), 3272);
    }

    #[test]
    fn test_symbol_case_rules() {
        let bitmap = bitmap(8, 1);
        let descriptor = ImageDescriptor::new("NameTag_v2", &bitmap, Template::Macro).unwrap();
        assert_eq!(descriptor.array_symbol(), "NameTag_v2_map");
        assert_eq!(descriptor.macro_prefix(), "NAMETAG_V2_MAP");
        assert_eq!(descriptor.name(), "NameTag_v2");
    }

    #[test]
    fn test_rejects_invalid_names() {
        let bitmap = bitmap(8, 1);
        for name in ["", "2fast", "my-logo", "logo.png", "with space", "é"] {
            assert_eq!(
                ImageDescriptor::new(name, &bitmap, Template::Macro),
                Err(ConvertError::InvalidName(name.to_string())),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_underscore_names() {
        let bitmap = bitmap(8, 1);
        assert!(ImageDescriptor::new("_private", &bitmap, Template::Macro).is_ok());
        assert!(ImageDescriptor::new("a", &bitmap, Template::Macro).is_ok());
    }
}
