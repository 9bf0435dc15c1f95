//! Draw-origin resolution: explicit locations or block-centered on the surface.

use crate::foundation::core::{Centering, Location, SurfaceSize};

/// Rendered size of one line of text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphMetrics {
    pub width: f32,
    pub height: f32,
}

impl GlyphMetrics {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Measures single lines of text under a fixed font and size.
pub trait MeasureText {
    /// `line` never contains `'\n'`.
    fn measure_line(&mut self, line: &str) -> GlyphMetrics;
}

/// Size of a multi-line block: widest line by summed line heights.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockMetrics {
    pub max_width: f64,
    pub total_height: f64,
}

pub fn measure_block<M: MeasureText + ?Sized>(text: &str, font: &mut M) -> BlockMetrics {
    let mut out = BlockMetrics::default();
    for line in text.split('\n') {
        let m = font.measure_line(line);
        out.max_width = out.max_width.max(f64::from(m.width));
        out.total_height += f64::from(m.height);
    }
    out
}

/// Resolve the final draw origin of `text`.
///
/// With no centering this is `explicit`, and the font is not consulted. Otherwise the block is
/// centered on `surface` as a whole (every line shares the same x), and an axis that is not
/// centered keeps its `explicit` coordinate. Halves round to even.
pub fn resolve<M: MeasureText + ?Sized>(
    text: &str,
    font: &mut M,
    surface: SurfaceSize,
    explicit: Location,
    centering: Centering,
) -> Location {
    if !centering.any() {
        return explicit;
    }

    let block = measure_block(text, font);
    let x = if centering.x {
        centered_axis(surface.width, block.max_width)
    } else {
        explicit.x
    };
    let y = if centering.y {
        centered_axis(surface.height, block.total_height)
    } else {
        explicit.y
    };
    Location::new(x, y)
}

fn centered_axis(extent: u32, content: f64) -> i32 {
    let v = ((f64::from(extent) - content) / 2.0).round_ties_even();
    v.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/position.rs"]
mod tests;
