use std::path::{Path, PathBuf};

use crate::foundation::core::{Centering, Location, Rgb8};
use crate::foundation::error::{BannerError, BannerResult};

/// Unvalidated field set for a [`TextItem`]; pass it to [`TextItem::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextItemDef {
    /// Text to draw; `\n` separates lines.
    pub text: String,
    /// Font file (TrueType/OpenType).
    pub font_path: PathBuf,
    /// Font size in pixels, must be > 0.
    pub font_size: u32,
    /// Foreground color.
    pub color: Rgb8,
    /// Border radius in pixels; `0.0` disables the border.
    pub border_width: f64,
    /// Border color, required when `border_width > 0`.
    pub border_color: Option<Rgb8>,
    /// Explicit draw origin, also the fallback for axes that are not centered.
    pub location: Location,
    /// Per-axis auto-centering.
    pub centering: Centering,
}

impl TextItemDef {
    /// Black, borderless, uncentered text at the origin.
    pub fn new(text: impl Into<String>, font_path: impl Into<PathBuf>, font_size: u32) -> Self {
        Self {
            text: text.into(),
            font_path: font_path.into(),
            font_size,
            color: Rgb8::BLACK,
            border_width: 0.0,
            border_color: None,
            location: Location::ORIGIN,
            centering: Centering::NONE,
        }
    }
}

/// One validated text layer. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    text: String,
    font_path: PathBuf,
    font_size: u32,
    color: Rgb8,
    border_width: f64,
    border_color: Option<Rgb8>,
    location: Location,
    centering: Centering,
}

impl TextItem {
    /// Validate `def`. Fails on a zero font size, a negative or non-finite border width, or a
    /// border width > 0 without a border color.
    pub fn new(def: TextItemDef) -> BannerResult<Self> {
        if def.font_size == 0 {
            return Err(BannerError::validation("font size must be > 0"));
        }
        if !def.border_width.is_finite() || def.border_width < 0.0 {
            return Err(BannerError::validation(format!(
                "border width must be finite and >= 0, got {}",
                def.border_width
            )));
        }
        if def.border_width > 0.0 && def.border_color.is_none() {
            return Err(BannerError::InvalidBorderConfig);
        }

        Ok(Self {
            text: def.text,
            font_path: def.font_path,
            font_size: def.font_size,
            color: def.color,
            border_width: def.border_width,
            border_color: def.border_color,
            location: def.location,
            centering: def.centering,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_path(&self) -> &Path {
        &self.font_path
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn color(&self) -> Rgb8 {
        self.color
    }

    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    pub fn border_color(&self) -> Option<Rgb8> {
        self.border_color
    }

    /// Border width and color when a border is drawn at all.
    pub fn border(&self) -> Option<(f64, Rgb8)> {
        if self.border_width > 0.0 {
            self.border_color.map(|c| (self.border_width, c))
        } else {
            None
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn centering(&self) -> Centering {
        self.centering
    }
}

/// Text items sharing one base image, rendered together into one output file.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageGroup {
    /// Group key from the configuration.
    pub name: String,
    /// Base image; the output file takes its file name.
    pub base_image: PathBuf,
    /// Items in render order.
    pub items: Vec<TextItem>,
}

impl ImageGroup {
    pub fn new(name: impl Into<String>, base_image: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            base_image: base_image.into(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: TextItem) {
        self.items.push(item);
    }

    /// Output path for this group inside `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> BannerResult<PathBuf> {
        let name = self.base_image.file_name().ok_or_else(|| {
            BannerError::validation(format!(
                "base image path '{}' has no file name",
                self.base_image.display()
            ))
        })?;
        Ok(output_dir.join(name))
    }
}

#[cfg(test)]
#[path = "../tests/unit/model.rs"]
mod tests;
