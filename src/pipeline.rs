use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::assets::raster::{load_surface, save_surface};
use crate::foundation::error::{BannerError, BannerResult};
use crate::foundation::report::Diagnostics;
use crate::layout::stroke::DEFAULT_SAMPLE_DENSITY;
use crate::model::ImageGroup;
use crate::render::compositor::TextCompositor;
use crate::render::group::{GroupRenderer, RenderedGroup};
use crate::render::surface::Surface;

/// Options for [`render_batch`].
#[derive(Clone, Debug)]
pub struct BatchOpts {
    /// Directory receiving one file per group, named after the group's base image.
    pub output_dir: PathBuf,
    /// Border ring samples per pixel of border width.
    pub sample_density: u32,
}

impl BatchOpts {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            sample_density: DEFAULT_SAMPLE_DENSITY,
        }
    }
}

/// What happened to one group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSummary {
    pub name: String,
    /// Written file; `None` when the group produced no output.
    pub output: Option<PathBuf>,
    pub items_rendered: usize,
    pub items_failed: usize,
    /// Why the group produced no output.
    pub error: Option<String>,
}

/// Per-group results of a batch, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub groups: Vec<GroupSummary>,
}

impl BatchSummary {
    pub fn written(&self) -> usize {
        self.groups.iter().filter(|g| g.output.is_some()).count()
    }

    pub fn failed_groups(&self) -> usize {
        self.groups.len() - self.written()
    }

    pub fn failed_items(&self) -> usize {
        self.groups.iter().map(|g| g.items_failed).sum()
    }
}

/// Load, render and save one group.
///
/// Item failures are folded into the returned group; only image load/save failures are errors.
pub fn render_group(
    renderer: &mut GroupRenderer,
    group: &ImageGroup,
    output_dir: &Path,
    diagnostics: &mut dyn Diagnostics,
) -> BannerResult<(PathBuf, RenderedGroup<Surface>)> {
    diagnostics.group_started(&group.name, &group.base_image);
    let output = group.output_path(output_dir)?;
    let surface = load_surface(&group.base_image)?;
    let rendered = renderer.render(surface, &group.name, &group.items, diagnostics);
    save_surface(&rendered.surface, &output)?;
    Ok((output, rendered))
}

/// Render every group into `opts.output_dir`.
///
/// Groups are independent: a group whose image cannot be loaded or saved is reported and
/// skipped. The only hard error is failing to create the output directory.
#[tracing::instrument(skip(groups, diagnostics), fields(groups = groups.len()))]
pub fn render_batch(
    groups: &[ImageGroup],
    opts: &BatchOpts,
    diagnostics: &mut dyn Diagnostics,
) -> BannerResult<BatchSummary> {
    std::fs::create_dir_all(&opts.output_dir)
        .with_context(|| format!("create output dir '{}'", opts.output_dir.display()))
        .map_err(BannerError::from)?;

    let mut renderer =
        GroupRenderer::new(TextCompositor::with_sample_density(opts.sample_density));
    let mut summary = BatchSummary::default();

    for group in groups {
        let entry = match render_group(&mut renderer, group, &opts.output_dir, diagnostics) {
            Ok((output, rendered)) => {
                diagnostics.group_written(&group.name, &output);
                GroupSummary {
                    name: group.name.clone(),
                    output: Some(output),
                    items_rendered: rendered.rendered(),
                    items_failed: rendered.failed(),
                    error: None,
                }
            }
            Err(err) => {
                diagnostics.group_failed(&group.name, &err);
                GroupSummary {
                    name: group.name.clone(),
                    output: None,
                    items_rendered: 0,
                    items_failed: 0,
                    error: Some(err.to_string()),
                }
            }
        };
        summary.groups.push(entry);
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
