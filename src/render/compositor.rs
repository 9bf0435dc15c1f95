use crate::foundation::core::Location;
use crate::foundation::error::BannerResult;
use crate::layout::position;
use crate::layout::stroke::{self, DEFAULT_SAMPLE_DENSITY};
use crate::model::TextItem;
use crate::render::surface::{TextCanvas, TextStamp};
use crate::text::font::FontLibrary;

/// Where a text item ended up and how many border copies were drawn under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub location: Location,
    pub border_stamps: usize,
}

/// Draws text items onto a canvas: position, border ring, then foreground.
pub struct TextCompositor {
    fonts: FontLibrary,
    sample_density: u32,
}

impl Default for TextCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCompositor {
    pub fn new() -> Self {
        Self::with_sample_density(DEFAULT_SAMPLE_DENSITY)
    }

    /// `sample_density` is the number of ring points per pixel of border width.
    pub fn with_sample_density(sample_density: u32) -> Self {
        Self {
            fonts: FontLibrary::new(),
            sample_density,
        }
    }

    pub fn sample_density(&self) -> u32 {
        self.sample_density
    }

    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    /// Draw `item` onto `canvas`.
    ///
    /// Every border copy is stamped before the foreground, and all stamps are committed in a
    /// single canvas call, so a failing item leaves the canvas untouched.
    pub fn apply<C: TextCanvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        item: &TextItem,
    ) -> BannerResult<Placement> {
        let mut face = self
            .fonts
            .face(item.font_path(), item.font_size() as f32)?;

        let location = position::resolve(
            item.text(),
            &mut face,
            canvas.size(),
            item.location(),
            item.centering(),
        );
        let shaped = face.shape(item.text());

        let origin = location.to_point();
        let mut stamps = Vec::new();
        if let Some((width, color)) = item.border() {
            stamps.extend(
                stroke::synthesize(origin, width, self.sample_density)
                    .map(|p| TextStamp { origin: p, color }),
            );
        }
        let border_stamps = stamps.len();
        stamps.push(TextStamp {
            origin,
            color: item.color(),
        });

        canvas.stamp_text(&shaped, &stamps)?;
        Ok(Placement {
            location,
            border_stamps,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
