use super::*;

fn dejavu() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/fonts/DejaVuSans.ttf")
}

#[test]
fn loads_family_from_font_bytes() {
    let mut lib = FontLibrary::new();
    let face = lib.face(&dejavu(), 24.0).unwrap();
    assert_eq!(face.family(), "DejaVu Sans");
    assert_eq!(face.size_px(), 24.0);
    assert_eq!(lib.len(), 1);
}

#[test]
fn same_path_is_loaded_once() {
    let mut lib = FontLibrary::new();
    lib.face(&dejavu(), 12.0).unwrap();
    lib.face(&dejavu(), 48.0).unwrap();
    assert_eq!(lib.len(), 1);
}

#[test]
fn missing_font_is_a_render_error_and_not_cached() {
    let mut lib = FontLibrary::new();
    let err = lib
        .face(Path::new("tests/data/fonts/nope.ttf"), 12.0)
        .err()
        .unwrap();
    assert!(matches!(err, BannerError::Render(_)), "{err}");
    assert!(lib.is_empty());
}

#[test]
fn rejects_bad_sizes() {
    let mut lib = FontLibrary::new();
    for size in [0.0, -3.0, f32::NAN] {
        assert!(matches!(
            lib.face(&dejavu(), size).err().unwrap(),
            BannerError::Validation(_)
        ));
    }
}

#[test]
fn measures_lines() {
    let mut lib = FontLibrary::new();
    let mut face = lib.face(&dejavu(), 40.0).unwrap();

    assert_eq!(face.measure_line(""), GlyphMetrics::ZERO);

    let hi = face.measure_line("HI");
    let hii = face.measure_line("HII");
    assert!(hi.width > 0.0 && hi.height > 0.0, "{hi:?}");
    assert!(hii.width > hi.width);
    assert_eq!(hii.height, hi.height);
}

#[test]
fn larger_size_measures_larger() {
    let mut lib = FontLibrary::new();
    let small = lib.face(&dejavu(), 20.0).unwrap().measure_line("Banner");
    let big = lib.face(&dejavu(), 40.0).unwrap().measure_line("Banner");
    assert!(big.width > small.width * 1.5);
    assert!(big.height > small.height * 1.5);
}

#[test]
fn shapes_one_glyph_per_char() {
    let mut lib = FontLibrary::new();
    let mut face = lib.face(&dejavu(), 32.0).unwrap();

    assert_eq!(face.shape("").glyph_count(), 0);

    let shaped = face.shape("AB");
    assert_eq!(shaped.glyph_count(), 2);
    let glyphs: Vec<PlacedGlyph> = shaped
        .runs()
        .iter()
        .flat_map(|r| r.glyphs.iter().copied())
        .collect();
    assert!(glyphs[1].x > glyphs[0].x);
    // Baseline sits below the block top.
    assert!(glyphs[0].y > 0.0);
    assert!(shaped.runs().iter().all(|r| r.font_size == 32.0));
}

#[test]
fn multi_line_shapes_stack_downward() {
    let mut lib = FontLibrary::new();
    let mut face = lib.face(&dejavu(), 32.0).unwrap();
    let shaped = face.shape("A\nA");
    let ys: Vec<f32> = shaped
        .runs()
        .iter()
        .flat_map(|r| r.glyphs.iter().map(|g| g.y))
        .collect();
    assert!(ys.len() >= 2);
    assert!(ys.last().unwrap() > ys.first().unwrap());
}

#[test]
fn lines_get_distinct_baselines_one_line_height_apart() {
    let mut lib = FontLibrary::new();
    let mut face = lib.face(&dejavu(), 32.0).unwrap();
    let line_height = face.measure_line("A").height;
    let shaped = face.shape("A\nB");

    let glyphs: Vec<PlacedGlyph> = shaped
        .runs()
        .iter()
        .flat_map(|r| r.glyphs.iter().copied())
        .collect();
    let (a, b) = (glyphs[0], glyphs[glyphs.len() - 1]);
    assert!((b.y - a.y - line_height).abs() < 1.5, "{glyphs:?}");
    // Both lines start at the block's left edge.
    assert!((a.x - b.x).abs() < 1.0, "{glyphs:?}");
}
