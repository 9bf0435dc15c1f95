use std::path::PathBuf;

use super::*;
use crate::foundation::core::{Rgb8, SurfaceSize};
use crate::render::surface::TextCanvas;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("unit_raster")
        .join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn png_round_trip_keeps_size_and_pixels() {
    let dir = scratch("png");
    let path = dir.join("out.png");
    let surface = Surface::new(SurfaceSize::new(7, 5), Rgb8::new(12, 34, 56)).unwrap();
    save_surface(&surface, &path).unwrap();

    let back = load_surface(&path).unwrap();
    assert_eq!(back.size(), SurfaceSize::new(7, 5));
    assert!(!back.has_alpha());
    assert_eq!(back.pixel(6, 4), Some([12, 34, 56, 255]));
}

#[test]
fn opaque_surfaces_save_as_jpeg() {
    let dir = scratch("jpeg");
    let path = dir.join("out.jpg");
    let surface = Surface::new(SurfaceSize::new(16, 16), Rgb8::WHITE).unwrap();
    save_surface(&surface, &path).unwrap();
    assert_eq!(load_surface(&path).unwrap().size(), SurfaceSize::new(16, 16));
}

#[test]
fn missing_file_is_reported_as_missing() {
    let err = load_surface(Path::new("no/such/base.png")).unwrap_err();
    assert!(matches!(err, BannerError::MissingFontOrImage(_)), "{err}");
}

#[test]
fn undecodable_file_is_an_image_error() {
    let dir = scratch("garbage");
    let path = dir.join("broken.png");
    std::fs::write(&path, b"not a png").unwrap();
    assert!(matches!(
        load_surface(&path).unwrap_err(),
        BannerError::Image(_)
    ));
    assert!(decode_surface(b"not a png").is_err());
}

#[test]
fn decodes_alpha_sources() {
    let mut bytes = Vec::new();
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 0]));
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    let s = decode_surface(&bytes).unwrap();
    assert!(s.has_alpha());
    assert_eq!(s.pixel(0, 0), Some([0, 0, 0, 0]));
}
