use std::{
    borrow::Cow,
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{BannerError, BannerResult};
use crate::layout::position::{GlyphMetrics, MeasureText};

/// One font file registered in its own Parley font context.
///
/// A context per file keeps family lookup unambiguous, so the glyph ids Parley shapes with always
/// belong to the face handed to the rasterizer.
struct FontSource {
    font_ctx: parley::FontContext,
    family: String,
    data: vello_cpu::peniko::FontData,
}

impl FontSource {
    fn load(path: &Path) -> BannerResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            BannerError::render(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes)
    }

    fn from_bytes(bytes: Vec<u8>) -> BannerResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| BannerError::render("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BannerError::render("registered font family has no name"))?
            .to_string();
        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);

        Ok(Self {
            font_ctx,
            family,
            data,
        })
    }
}

/// Fonts loaded from disk, cached by path for the lifetime of the library.
pub struct FontLibrary {
    fonts: HashMap<PathBuf, FontSource>,
    layout_ctx: parley::LayoutContext<Rgb8>,
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FontLibrary {
    pub fn new() -> Self {
        Self {
            fonts: HashMap::new(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Number of distinct font files loaded so far.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Borrow the font at `path` at `size_px`, reading it on first use.
    ///
    /// Read or parse failures are not cached, so a later call retries the file.
    pub fn face(&mut self, path: &Path, size_px: f32) -> BannerResult<TextFace<'_>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(BannerError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        if !self.fonts.contains_key(path) {
            let source = FontSource::load(path)?;
            tracing::debug!(font = %path.display(), family = %source.family, "font loaded");
            self.fonts.insert(path.to_path_buf(), source);
        }
        let source = self.fonts.get_mut(path).ok_or_else(|| {
            BannerError::render(format!("font '{}' missing from cache", path.display()))
        })?;

        Ok(TextFace {
            source,
            layout_ctx: &mut self.layout_ctx,
            size_px,
        })
    }
}

/// A loaded font at a fixed pixel size; measures and shapes text.
pub struct TextFace<'a> {
    source: &'a mut FontSource,
    layout_ctx: &'a mut parley::LayoutContext<Rgb8>,
    size_px: f32,
}

impl TextFace<'_> {
    /// Family name detected from the font data.
    pub fn family(&self) -> &str {
        &self.source.family
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    /// Shape `text` into positioned glyph runs relative to the block's top-left corner.
    pub fn shape(&mut self, text: &str) -> ShapedText {
        let layout = self.layout(text);

        let mut runs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                // Absolute within the block: run offset along x, line baseline in y.
                let glyphs: Vec<PlacedGlyph> = run
                    .positioned_glyphs()
                    .map(|g| PlacedGlyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    })
                    .collect();
                if glyphs.is_empty() {
                    continue;
                }
                runs.push(GlyphRun {
                    font_size: run.run().font_size(),
                    glyphs,
                });
            }
        }

        ShapedText {
            runs,
            font: self.source.data.clone(),
        }
    }

    fn layout(&mut self, text: &str) -> parley::Layout<Rgb8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.source.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.source.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));

        let mut layout: parley::Layout<Rgb8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

impl MeasureText for TextFace<'_> {
    fn measure_line(&mut self, line: &str) -> GlyphMetrics {
        if line.is_empty() {
            return GlyphMetrics::ZERO;
        }
        let layout = self.layout(line);
        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for l in layout.lines() {
            let m = l.metrics();
            width = width.max(m.advance);
            height += m.ascent + m.descent + m.leading;
        }
        GlyphMetrics::new(width, height)
    }
}

/// One glyph positioned relative to the text block origin (y is the baseline).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedGlyph {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// Consecutive glyphs sharing one font size.
#[derive(Clone, Debug)]
pub struct GlyphRun {
    pub font_size: f32,
    pub glyphs: Vec<PlacedGlyph>,
}

/// Text shaped once and stamped any number of times.
#[derive(Clone)]
pub struct ShapedText {
    runs: Vec<GlyphRun>,
    font: vello_cpu::peniko::FontData,
}

impl ShapedText {
    pub fn runs(&self) -> &[GlyphRun] {
        &self.runs
    }

    pub fn font(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }

    pub fn glyph_count(&self) -> usize {
        self.runs.iter().map(|r| r.glyphs.len()).sum()
    }
}

impl std::fmt::Debug for ShapedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedText")
            .field("runs", &self.runs.len())
            .field("glyphs", &self.glyph_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
