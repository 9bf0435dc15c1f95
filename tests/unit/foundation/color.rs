use super::*;
use serde_json::json;

#[test]
fn parses_long_and_short_hex() {
    assert_eq!(Rgb8::from_hex("#ff0000").unwrap(), Rgb8::new(255, 0, 0));
    assert_eq!(Rgb8::from_hex("A1b2C3").unwrap(), Rgb8::new(0xa1, 0xb2, 0xc3));
    assert_eq!(Rgb8::from_hex("#fff").unwrap(), Rgb8::WHITE);
    assert_eq!(Rgb8::from_hex(" #0a0 ").unwrap(), Rgb8::new(0, 0xaa, 0));
}

#[test]
fn rejects_bad_hex() {
    for bad in ["", "#", "#ff00", "#ff00000", "#gg0000", "#ff00ff80", "red"] {
        let err = Rgb8::from_hex(bad).unwrap_err();
        assert!(matches!(err, BannerError::Validation(_)), "{bad}: {err}");
    }
}

#[test]
fn from_str_parses_hex() {
    let c: Rgb8 = "#0A0B0C".parse().unwrap();
    assert_eq!(c, Rgb8::new(10, 11, 12));
    assert!("0a0b0".parse::<Rgb8>().is_err());
}

#[test]
fn deserializes_hex_and_array() {
    let c: Rgb8 = serde_json::from_value(json!("#00ff00")).unwrap();
    assert_eq!(c, Rgb8::new(0, 255, 0));

    let c: Rgb8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgb8::new(1, 2, 3));

    assert!(serde_json::from_value::<Rgb8>(json!("#12")).is_err());
}
