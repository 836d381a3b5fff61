//! C source rendering for both templates.

use std::fmt;

use tracing::debug;

use super::{ImageDescriptor, Template};

/// Render `descriptor` as C source text using its template.
///
/// Output is deterministic: identical descriptors always yield identical
/// bytes, ending in a single newline.
pub fn render(descriptor: &ImageDescriptor<'_>) -> String {
    let text = CSource(descriptor).to_string();
    debug!(
        template = %descriptor.template(),
        symbol = %descriptor.array_symbol(),
        data_size = descriptor.data_size(),
        chars = text.len(),
        "Rendered C source"
    );
    text
}

/// Display adapter that writes the C source for a descriptor.
pub struct CSource<'d, 'a>(pub &'d ImageDescriptor<'a>);

impl fmt::Display for CSource<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.template() {
            Template::Macro => write_macro(f, self.0),
            Template::Descriptor => write_descriptor(f, self.0),
        }
    }
}

/// Comma-separated two-digit hex literals.
fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8], upper: bool) -> fmt::Result {
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        if upper {
            write!(f, "0x{byte:02X}")?;
        } else {
            write!(f, "0x{byte:02x}")?;
        }
    }
    Ok(())
}

fn write_macro(f: &mut fmt::Formatter<'_>, d: &ImageDescriptor<'_>) -> fmt::Result {
    let prefix = d.macro_prefix();
    let symbol = d.array_symbol();
    let stride = d.bytes().len() / d.height();

    writeln!(f, "#define {prefix}_WIDTH {}", d.width())?;
    writeln!(f, "#define {prefix}_HEIGHT {}", d.height())?;
    writeln!(f)?;
    writeln!(f, "static const uint8_t {symbol}[] = {{")?;
    writeln!(f, "    /* Pixel format: Monochrome, MSB first */")?;
    for row in d.bytes().chunks(stride) {
        f.write_str("    ")?;
        write_hex(f, row, true)?;
        writeln!(f, ", ")?;
    }
    writeln!(f, "}};")?;
    writeln!(f)?;
    writeln!(f, "static lv_img_dsc_t img_dsc = {{")?;
    writeln!(f, "    .header.cf = LV_IMG_CF_ALPHA_1BIT,")?;
    writeln!(f, "    .header.always_zero = 0,")?;
    writeln!(f, "    .header.reserved = 0,")?;
    writeln!(f, "    .header.w = {},", d.width())?;
    writeln!(f, "    .header.h = {},", d.height())?;
    writeln!(f, "    .data_size = {},", d.data_size())?;
    writeln!(f, "    .data = {symbol}")?;
    writeln!(f, "}};")
}

const LVGL_PREAMBLE: &str = r#"#ifdef __has_include
    #if __has_include("lvgl.h")
        #ifndef LV_LVGL_H_INCLUDE_SIMPLE
            #define LV_LVGL_H_INCLUDE_SIMPLE
        #endif
    #endif
#endif

#if defined(LV_LVGL_H_INCLUDE_SIMPLE)
    #include "lvgl.h"
#else
    #include "lvgl/lvgl.h"
#endif

#ifndef LV_ATTRIBUTE_MEM_ALIGN
#define LV_ATTRIBUTE_MEM_ALIGN
#endif
"#;

fn write_descriptor(f: &mut fmt::Formatter<'_>, d: &ImageDescriptor<'_>) -> fmt::Result {
    let name = d.name();
    let symbol = d.array_symbol();
    let attribute = format!("LV_ATTRIBUTE_IMG_{}", name.to_uppercase());
    let header = Template::COLOR_INDEX_HEADER;
    let per_line = Template::Descriptor.values_per_line().unwrap_or(32);

    f.write_str(LVGL_PREAMBLE)?;
    writeln!(f)?;
    writeln!(f, "#ifndef {attribute}")?;
    writeln!(f, "#define {attribute}")?;
    writeln!(f, "#endif")?;
    writeln!(f)?;
    writeln!(
        f,
        "const LV_ATTRIBUTE_MEM_ALIGN LV_ATTRIBUTE_LARGE_CONST {attribute} uint8_t {symbol}[] = {{"
    )?;
    f.write_str("    ")?;
    write_hex(f, &header[..4], false)?;
    writeln!(f, ",  /*Color of index 0*/")?;
    f.write_str("    ")?;
    write_hex(f, &header[4..], false)?;
    writeln!(f, ",  /*Color of index 1*/")?;
    writeln!(f)?;
    writeln!(f, "    /* Color bytes */")?;
    for chunk in d.bytes().chunks(per_line) {
        f.write_str("    ")?;
        write_hex(f, chunk, false)?;
        writeln!(f, ",")?;
    }
    writeln!(f, "}};")?;
    writeln!(f)?;
    writeln!(f, "const lv_img_dsc_t {name} = {{")?;
    writeln!(f, "    .header.cf = LV_IMG_CF_INDEXED_1BIT,")?;
    writeln!(f, "    .header.always_zero = 0,")?;
    writeln!(f, "    .header.reserved = 0,")?;
    writeln!(f, "    .header.w = {},", d.width())?;
    writeln!(f, "    .header.h = {},", d.height())?;
    writeln!(f, "    .data_size = {},", d.data_size())?;
    writeln!(f, "    .data = {symbol},")?;
    writeln!(f, "}};")
}
