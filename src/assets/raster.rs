use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{BannerError, BannerResult};
use crate::render::surface::Surface;

/// Decode encoded image bytes into a [`Surface`].
pub fn decode_surface(bytes: &[u8]) -> BannerResult<Surface> {
    let img = image::load_from_memory(bytes).context("decode image from memory")?;
    Surface::from_image(&img)
}

/// Load the base image at `path`.
pub fn load_surface(path: &Path) -> BannerResult<Surface> {
    if !path.is_file() {
        return Err(BannerError::missing(path));
    }
    let img = image::open(path)
        .map_err(|e| BannerError::image(format!("failed to load '{}': {e}", path.display())))?;
    Surface::from_image(&img)
}

/// Encode `surface` to `path`; the format follows the file extension.
pub fn save_surface(surface: &Surface, path: &Path) -> BannerResult<()> {
    let img = surface.to_image()?;
    img.save(path)
        .map_err(|e| BannerError::image(format!("failed to write '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
