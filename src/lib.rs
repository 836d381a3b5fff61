//! lvmono - image to LVGL 1-bit C array converter
//!
//! PNG decoding, conversion profiles and file handling around the
//! `mono-bitmap` core. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
