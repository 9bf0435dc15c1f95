use crate::foundation::core::{Point, Rgb8, SurfaceSize};
use crate::foundation::error::{BannerError, BannerResult};
use crate::render::composite::{
    over_in_place, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place,
};
use crate::text::font::ShapedText;

/// One draw of a shaped text block: its top-left origin and fill color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStamp {
    pub origin: Point,
    pub color: Rgb8,
}

/// Draw target for text layers.
pub trait TextCanvas {
    /// Fixed size of the target; never changes while drawing.
    fn size(&self) -> SurfaceSize;

    /// Draw `text` once per stamp, in order, so later stamps cover earlier ones.
    ///
    /// Implementations must be all-or-nothing: on error the target is left untouched.
    fn stamp_text(&mut self, text: &ShapedText, stamps: &[TextStamp]) -> BannerResult<()>;
}

/// Premultiplied RGBA8 pixel buffer with a size fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    size: SurfaceSize,
    width_u16: u16,
    height_u16: u16,
    has_alpha: bool,
    rgba8_premul: Vec<u8>,
}

impl Surface {
    /// Opaque surface filled with `fill`.
    pub fn new(size: SurfaceSize, fill: Rgb8) -> BannerResult<Self> {
        check_size(size)?;
        let mut rgba = Vec::with_capacity(size.pixel_count().saturating_mul(4));
        for _ in 0..size.pixel_count() {
            rgba.extend_from_slice(&fill.to_premul_rgba8());
        }
        Self::from_premul_bytes(size, rgba, false)
    }

    /// Build from straight (non-premultiplied) RGBA8 bytes.
    pub fn from_straight_rgba8(
        size: SurfaceSize,
        mut rgba: Vec<u8>,
        has_alpha: bool,
    ) -> BannerResult<Self> {
        premultiply_rgba8_in_place(&mut rgba);
        Self::from_premul_bytes(size, rgba, has_alpha)
    }

    /// Convert a decoded image; sources without an alpha channel stay opaque on save.
    pub fn from_image(img: &image::DynamicImage) -> BannerResult<Self> {
        let has_alpha = img.color().has_alpha();
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_straight_rgba8(SurfaceSize::new(width, height), rgba.into_raw(), has_alpha)
    }

    fn from_premul_bytes(
        size: SurfaceSize,
        rgba8_premul: Vec<u8>,
        has_alpha: bool,
    ) -> BannerResult<Self> {
        let (width_u16, height_u16) = check_size(size)?;
        if rgba8_premul.len() != size.pixel_count().saturating_mul(4) {
            return Err(BannerError::image("surface byte length mismatch"));
        }

        Ok(Self {
            size,
            width_u16,
            height_u16,
            has_alpha,
            rgba8_premul,
        })
    }

    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// Row-major premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.rgba8_premul
    }

    /// Premultiplied pixel at `(x, y)`, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = ((y as usize) * (self.size.width as usize) + (x as usize)) * 4;
        let px = self.rgba8_premul.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha image for encoding: RGB8 when the source had no alpha, RGBA8 otherwise.
    pub fn to_image(&self) -> BannerResult<image::DynamicImage> {
        let mut straight = self.rgba8_premul.clone();
        unpremultiply_rgba8_in_place(&mut straight);
        let rgba = image::RgbaImage::from_raw(self.size.width, self.size.height, straight)
            .ok_or_else(|| BannerError::image("failed to build image buffer from surface"))?;
        let img = image::DynamicImage::ImageRgba8(rgba);
        if self.has_alpha {
            Ok(img)
        } else {
            Ok(image::DynamicImage::ImageRgb8(img.to_rgb8()))
        }
    }
}

/// Non-empty and within the rasterizer's u16 limits.
fn check_size(size: SurfaceSize) -> BannerResult<(u16, u16)> {
    if size.width == 0 || size.height == 0 {
        return Err(BannerError::image("surface must be at least 1x1"));
    }
    let width_u16: u16 = size
        .width
        .try_into()
        .map_err(|_| BannerError::image("surface width exceeds u16"))?;
    let height_u16: u16 = size
        .height
        .try_into()
        .map_err(|_| BannerError::image("surface height exceeds u16"))?;
    Ok((width_u16, height_u16))
}

impl TextCanvas for Surface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn stamp_text(&mut self, text: &ShapedText, stamps: &[TextStamp]) -> BannerResult<()> {
        if stamps.is_empty() {
            return Ok(());
        }

        let mut ctx = vello_cpu::RenderContext::new(self.width_u16, self.height_u16);
        for stamp in stamps {
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((
                stamp.origin.x,
                stamp.origin.y,
            )));
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                stamp.color.r,
                stamp.color.g,
                stamp.color.b,
                255,
            ));
            for run in text.runs() {
                let glyphs = run.glyphs.iter().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(text.font())
                    .font_size(run.font_size)
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();

        // Text goes to a transparent layer first, then over the existing pixels in one pass.
        let mut layer = vello_cpu::Pixmap::new(self.width_u16, self.height_u16);
        ctx.render_to_pixmap(&mut layer);
        over_in_place(&mut self.rgba8_premul, layer.data_as_u8_slice())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
