use std::path::PathBuf;

use super::*;
use crate::foundation::core::{Centering, Location, Rgb8, SurfaceSize};
use crate::foundation::report::CollectingDiagnostics;
use crate::model::TextItemDef;
use crate::render::surface::Surface;

fn dejavu() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/fonts/DejaVuSans.ttf")
}

fn white(width: u32, height: u32) -> Surface {
    Surface::new(SurfaceSize::new(width, height), Rgb8::WHITE).unwrap()
}

fn item(text: &str, color: Rgb8, at: Location) -> TextItem {
    let mut def = TextItemDef::new(text, dejavu(), 48);
    def.color = color;
    def.location = at;
    TextItem::new(def).unwrap()
}

fn pixels(s: &Surface) -> impl Iterator<Item = [u8; 4]> + '_ {
    s.data().chunks_exact(4).map(|p| [p[0], p[1], p[2], p[3]])
}

const RED: Rgb8 = Rgb8::new(255, 0, 0);
const BLUE: Rgb8 = Rgb8::new(0, 0, 255);

#[test]
fn later_items_win_overlaps() {
    let at = Location::new(10, 10);
    let mut renderer = GroupRenderer::default();
    let mut diag = CollectingDiagnostics::new();

    let out = renderer.render(
        white(120, 80),
        "g",
        &[item("H", RED, at), item("H", BLUE, at)],
        &mut diag,
    );
    assert_eq!(out.rendered(), 2);
    assert!(pixels(&out.surface).any(|p| p == [0, 0, 255, 255]));
    assert!(pixels(&out.surface).all(|p| u16::from(p[0]) <= u16::from(p[2]) + 2));

    let out = renderer.render(
        white(120, 80),
        "g",
        &[item("H", BLUE, at), item("H", RED, at)],
        &mut diag,
    );
    assert!(pixels(&out.surface).any(|p| p == [255, 0, 0, 255]));
    assert!(pixels(&out.surface).all(|p| u16::from(p[2]) <= u16::from(p[0]) + 2));
}

#[test]
fn failing_item_does_not_stop_the_group() {
    let good = item("OK", Rgb8::BLACK, Location::new(5, 5));
    let bad = TextItem::new(TextItemDef::new("X", "missing/font.ttf", 20)).unwrap();

    let mut diag = CollectingDiagnostics::new();
    let out = GroupRenderer::default().render(
        white(120, 80),
        "banner",
        &[bad, good.clone()],
        &mut diag,
    );

    assert_eq!(out.outcomes.len(), 2);
    assert!(!out.outcomes[0].is_ok());
    assert!(out.outcomes[1].is_ok());
    assert_eq!((out.rendered(), out.failed()), (1, 1));
    assert_eq!(diag.failed_items(), vec![("banner".to_string(), 0)]);

    // Identical to drawing only the good item.
    let alone = GroupRenderer::default().render(
        white(120, 80),
        "banner",
        &[good],
        &mut CollectingDiagnostics::new(),
    );
    assert_eq!(out.surface, alone.surface);
    assert_ne!(out.surface, white(120, 80));
}

#[test]
fn empty_group_returns_surface_unchanged() {
    let out = GroupRenderer::default().render(
        white(8, 8),
        "empty",
        &[],
        &mut CollectingDiagnostics::new(),
    );
    assert!(out.outcomes.is_empty());
    assert_eq!(out.surface, white(8, 8));
}

#[test]
fn centering_ignores_earlier_drawing() {
    let mut def = TextItemDef::new("mid", dejavu(), 30);
    def.centering = Centering::BOTH;
    let centered = TextItem::new(def).unwrap();

    let first = GroupRenderer::default().render(
        white(200, 100),
        "g",
        &[centered.clone()],
        &mut CollectingDiagnostics::new(),
    );
    let second = GroupRenderer::default().render(
        white(200, 100),
        "g",
        &[item("noise", RED, Location::new(0, 0)), centered],
        &mut CollectingDiagnostics::new(),
    );

    let loc = |o: &ItemOutcome| o.result.as_ref().map(|p| p.location).unwrap();
    assert_eq!(loc(&first.outcomes[0]), loc(&second.outcomes[1]));
}

#[test]
fn reports_rendered_items_in_order() {
    let mut diag = CollectingDiagnostics::new();
    GroupRenderer::default().render(
        white(120, 80),
        "g",
        &[
            item("a", RED, Location::new(0, 0)),
            item("b", BLUE, Location::new(40, 0)),
        ],
        &mut diag,
    );
    let indices: Vec<usize> = diag
        .events
        .iter()
        .filter_map(|e| match e {
            crate::foundation::report::DiagnosticEvent::ItemRendered { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(indices, vec![0, 1]);
}
