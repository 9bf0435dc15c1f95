use super::*;

fn def() -> TextItemDef {
    TextItemDef::new("HI", "fonts/a.ttf", 24)
}

#[test]
fn accepts_plain_item() {
    let item = TextItem::new(def()).unwrap();
    assert_eq!(item.text(), "HI");
    assert_eq!(item.font_size(), 24);
    assert_eq!(item.color(), Rgb8::BLACK);
    assert_eq!(item.border(), None);
    assert_eq!(item.location(), Location::ORIGIN);
    assert_eq!(item.centering(), Centering::NONE);
}

#[test]
fn border_without_color_is_rejected() {
    let mut d = def();
    d.border_width = 2.0;
    assert!(matches!(
        TextItem::new(d).unwrap_err(),
        BannerError::InvalidBorderConfig
    ));
}

#[test]
fn border_color_without_width_draws_no_border() {
    let mut d = def();
    d.border_color = Some(Rgb8::new(255, 0, 0));
    let item = TextItem::new(d).unwrap();
    assert_eq!(item.border(), None);
    assert_eq!(item.border_color(), Some(Rgb8::new(255, 0, 0)));
}

#[test]
fn border_with_color_is_exposed() {
    let mut d = def();
    d.border_width = 1.5;
    d.border_color = Some(Rgb8::new(255, 0, 0));
    let item = TextItem::new(d).unwrap();
    assert_eq!(item.border(), Some((1.5, Rgb8::new(255, 0, 0))));
}

#[test]
fn rejects_zero_font_size_and_bad_border_width() {
    let mut d = def();
    d.font_size = 0;
    assert!(matches!(
        TextItem::new(d).unwrap_err(),
        BannerError::Validation(_)
    ));

    for w in [-1.0, f64::NAN, f64::INFINITY] {
        let mut d = def();
        d.border_width = w;
        d.border_color = Some(Rgb8::BLACK);
        assert!(matches!(
            TextItem::new(d).unwrap_err(),
            BannerError::Validation(_)
        ));
    }
}

#[test]
fn output_path_uses_base_image_file_name() {
    let g = ImageGroup::new("g", "images/in/banner.png");
    assert_eq!(
        g.output_path(Path::new("public")).unwrap(),
        Path::new("public").join("banner.png")
    );

    let g = ImageGroup::new("g", "/");
    assert!(g.output_path(Path::new("public")).is_err());
}
