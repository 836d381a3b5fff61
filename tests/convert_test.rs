//! End-to-end conversion of PNG files into C sources.

mod common;

use common::{assert_descriptor_source, assert_preview_png, fixtures, hex_values};
use lvmono::error::AppError;
use lvmono::models::ConvertConfig;
use lvmono::services::ConversionService;
use pretty_assertions::assert_eq;

fn macro_config(width: usize, height: usize) -> ConvertConfig {
    ConvertConfig {
        width,
        height,
        dither: "floyd".to_string(),
        template: "macro".to_string(),
        polarity: "direct".to_string(),
        preview: false,
        ..Default::default()
    }
}

#[test]
fn test_convert_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_rgb_png(
        dir.path(),
        "name-tag.png",
        500,
        204,
        &fixtures::rgb_gradient(500, 204),
    );

    let service = ConversionService::new(ConvertConfig::default()).unwrap();
    let report = service.convert_file(&input, None, None).unwrap();

    assert_eq!(report.output, dir.path().join("name-tag.c"));
    assert_eq!(report.symbol, "name_tag");
    assert_eq!((report.width, report.height), (250, 102));
    assert_eq!(report.packed_bytes, 3264);

    let text = std::fs::read_to_string(&report.output).unwrap();
    assert_descriptor_source(&text, "name_tag", 250, 102);
    assert!(text.contains("LV_IMG_CF_INDEXED_1BIT"));

    let preview = dir.path().join("preview_name-tag.png");
    assert_eq!(report.preview.as_deref(), Some(preview.as_path()));
    assert_preview_png(&preview, 250, 102);
}

#[test]
fn test_macro_template_exact_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_gray_png(dir.path(), "strip.png", 8, 2, &fixtures::split_rows(2));

    let service = ConversionService::new(macro_config(8, 2)).unwrap();
    let report = service.convert_file(&input, None, None).unwrap();
    let text = std::fs::read_to_string(&report.output).unwrap();

    let expected = concat!(
        "#define STRIP_MAP_WIDTH 8\n",
        "#define STRIP_MAP_HEIGHT 2\n",
        "\n",
        "static const uint8_t strip_map[] = {\n",
        "    /* Pixel format: Monochrome, MSB first */\n",
        "    0x0F, \n",
        "    0x0F, \n",
        "};\n",
        "\n",
        "static lv_img_dsc_t img_dsc = {\n",
        "    .header.cf = LV_IMG_CF_ALPHA_1BIT,\n",
        "    .header.always_zero = 0,\n",
        "    .header.reserved = 0,\n",
        "    .header.w = 8,\n",
        "    .header.h = 2,\n",
        "    .data_size = 2,\n",
        "    .data = strip_map\n",
        "};\n",
    );
    assert_eq!(text, expected);
    assert_eq!(report.preview, None);
}

#[test]
fn test_explicit_output_and_preview_paths() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_gray_png(dir.path(), "logo.png", 8, 2, &fixtures::split_rows(2));
    let output = dir.path().join("generated.c");
    let preview = dir.path().join("check.png");

    let config = ConvertConfig {
        name: Some("company_logo".to_string()),
        ..macro_config(16, 4)
    };
    let service = ConversionService::new(config).unwrap();
    let report = service
        .convert_file(&input, Some(&output), Some(&preview))
        .unwrap();

    assert_eq!(report.output, output);
    assert_eq!(report.symbol, "company_logo");
    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("static const uint8_t company_logo_map[] = {"));
    assert!(text.contains("#define COMPANY_LOGO_MAP_WIDTH 16"));
    assert_preview_png(&preview, 16, 4);
}

#[test]
fn test_full_brightness_inverted_is_blank() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_gray_png(dir.path(), "dark.png", 16, 3, &[0; 16 * 3]);

    let config = ConvertConfig {
        width: 16,
        height: 3,
        brightness: 1.0,
        preview: false,
        ..Default::default()
    };
    let report = ConversionService::new(config)
        .unwrap()
        .convert_file(&input, None, None)
        .unwrap();
    let text = std::fs::read_to_string(&report.output).unwrap();

    let values = hex_values(&text);
    assert_eq!(
        &values[..8],
        &["0xff", "0xff", "0xff", "0xff", "0x00", "0x00", "0x00", "0xff"]
    );
    assert!(values[8..].iter().all(|v| v == "0x00"));
    assert_eq!(values.len(), 8 + 6);
}

#[test]
fn test_indexed_png_is_expanded() {
    let dir = tempfile::tempdir().unwrap();
    let palette = [0, 0, 0, 255, 255, 255];
    let input = fixtures::write_indexed_png(
        dir.path(),
        "palette.png",
        8,
        1,
        &palette,
        &[0, 0, 0, 0, 1, 1, 1, 1],
    );

    let report = ConversionService::new(macro_config(8, 1))
        .unwrap()
        .convert_file(&input, None, None)
        .unwrap();
    let text = std::fs::read_to_string(&report.output).unwrap();
    assert_eq!(hex_values(&text), vec!["0x0f"]);
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let service = ConversionService::new(ConvertConfig::default()).unwrap();

    let result = service.convert_file(&dir.path().join("absent.png"), None, None);
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_non_png_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.png");
    std::fs::write(&input, "just some text").unwrap();

    let service = ConversionService::new(ConvertConfig::default()).unwrap();
    let result = service.convert_file(&input, None, None);
    assert!(matches!(result, Err(AppError::Decode(_))));
    assert!(!dir.path().join("notes.c").exists(), "No partial output");
}

#[test]
fn test_zero_target_size_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_gray_png(dir.path(), "tiny.png", 8, 1, &fixtures::split_rows(1));

    let service = ConversionService::new(macro_config(0, 1)).unwrap();
    let result = service.convert_file(&input, None, None);
    assert!(matches!(result, Err(AppError::Convert(_))));
    assert!(!dir.path().join("tiny.c").exists());
}

#[test]
fn test_invalid_name_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_gray_png(dir.path(), "ok.png", 8, 1, &fixtures::split_rows(1));

    let config = ConvertConfig {
        name: Some("not-an-identifier".to_string()),
        ..macro_config(8, 1)
    };
    let result = ConversionService::new(config)
        .unwrap()
        .convert_file(&input, None, None);
    assert!(matches!(result, Err(AppError::Convert(_))));
}
