//! Outline approximation by stamping the text at points sampled on a ring.

use std::f64::consts::TAU;

use crate::foundation::core::Point;

/// Ring samples per pixel of border width.
pub const DEFAULT_SAMPLE_DENSITY: u32 = 15;

/// Lazy ring of `floor(border_width * sample_density)` offset draw positions.
#[derive(Clone, Debug)]
pub struct StrokeRing {
    center: Point,
    radius: f64,
    count: usize,
    step: f64,
    next: usize,
}

impl StrokeRing {
    pub fn empty(center: Point) -> Self {
        Self {
            center,
            radius: 0.0,
            count: 0,
            step: 0.0,
            next: 0,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn point_at(&self, i: usize) -> Point {
        let angle = i as f64 * self.step;
        Point::new(
            self.center.x - self.radius * angle.cos(),
            self.center.y - self.radius * angle.sin(),
        )
    }
}

impl Iterator for StrokeRing {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.count {
            return None;
        }
        let p = self.point_at(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.count - self.next;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for StrokeRing {}

/// Sample a stroke ring of radius `border_width` around `location`.
///
/// Point `i` is `location - border_width * (cos(i * step), sin(i * step))` with
/// `step = 2π / count`. A width `<= 0`, a non-finite width, or a zero count yields no points.
pub fn synthesize(location: Point, border_width: f64, sample_density: u32) -> StrokeRing {
    if !border_width.is_finite() || border_width <= 0.0 {
        return StrokeRing::empty(location);
    }
    let count = (border_width * f64::from(sample_density)).floor();
    if count < 1.0 {
        return StrokeRing::empty(location);
    }
    let count = count as usize;
    StrokeRing {
        center: location,
        radius: border_width,
        count,
        step: TAU / count as f64,
        next: 0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/stroke.rs"]
mod tests;
