use super::*;

#[test]
fn location_converts_to_point() {
    let p = Location::new(-3, 7).to_point();
    assert_eq!(p, Point::new(-3.0, 7.0));
    assert_eq!(Location::from((1, 2)), Location::new(1, 2));
}

#[test]
fn centering_any() {
    assert!(!Centering::NONE.any());
    assert!(Centering::new(true, false).any());
    assert!(Centering::new(false, true).any());
    assert!(Centering::BOTH.any());
}

#[test]
fn rgb_is_opaque_when_premultiplied() {
    assert_eq!(Rgb8::new(10, 20, 30).to_premul_rgba8(), [10, 20, 30, 255]);
    assert_eq!(SurfaceSize::new(200, 100).pixel_count(), 20_000);
}
