//! banner-maker draws text overlays onto images in batches.
//!
//! A row table describes image groups: one base image each, plus an ordered list of text items
//! with font, size, color, position, optional outline border and optional per-axis centering.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `config JSON -> LoadedConfig` (validated [`ImageGroup`]s; bad rows are reported)
//! 2. **Render**: `Surface + [TextItem] -> RenderedGroup` via [`GroupRenderer`]
//! 3. **Save**: one file per group, named after the base image, in the output directory
//!
//! Per item, the [`TextCompositor`] resolves the draw origin ([`resolve`]), stamps the text
//! around a sampled ring for the border ([`synthesize`]) and then stamps the foreground.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No global logging**: outcomes go to an explicitly passed [`Diagnostics`] sink.
//! - **Premultiplied RGBA8** surfaces; text is rasterized with `vello_cpu` and shaped with
//!   `parley`.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod foundation;
mod layout;
mod model;
mod pipeline;
mod render;
mod text;

/// Logging setup for binaries.
pub mod logging;

pub use assets::raster::{decode_surface, load_surface, save_surface};
pub use config::table::{
    CellText, ConfigRow, FlagCell, LoadedConfig, RejectedRow, group_rows, load_config,
    parse_config, validate_row,
};
pub use foundation::core::{Centering, Location, Point, Rgb8, SurfaceSize};
pub use foundation::error::{BannerError, BannerResult};
pub use foundation::report::{
    CollectingDiagnostics, DiagnosticEvent, Diagnostics, TracingDiagnostics,
};
pub use layout::position::{BlockMetrics, GlyphMetrics, MeasureText, measure_block, resolve};
pub use layout::stroke::{DEFAULT_SAMPLE_DENSITY, StrokeRing, synthesize};
pub use model::{ImageGroup, TextItem, TextItemDef};
pub use pipeline::{BatchOpts, BatchSummary, GroupSummary, render_batch, render_group};
pub use render::composite::{over, over_in_place};
pub use render::compositor::{Placement, TextCompositor};
pub use render::group::{GroupRenderer, ItemOutcome, RenderedGroup};
pub use render::surface::{Surface, TextCanvas, TextStamp};
pub use text::font::{FontLibrary, GlyphRun, PlacedGlyph, ShapedText, TextFace};
