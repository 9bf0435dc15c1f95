use crate::foundation::error::BannerResult;
use crate::foundation::report::Diagnostics;
use crate::model::TextItem;
use crate::render::compositor::{Placement, TextCompositor};
use crate::render::surface::TextCanvas;

/// Result of one item within a group.
#[derive(Debug)]
pub struct ItemOutcome {
    /// Position of the item in the group's list.
    pub index: usize,
    pub result: BannerResult<Placement>,
}

impl ItemOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// A finished surface plus the per-item outcomes that produced it.
#[derive(Debug)]
pub struct RenderedGroup<C> {
    pub surface: C,
    pub outcomes: Vec<ItemOutcome>,
}

impl<C> RenderedGroup<C> {
    pub fn rendered(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.rendered()
    }
}

/// Applies a group's items in order onto one surface.
#[derive(Default)]
pub struct GroupRenderer {
    compositor: TextCompositor,
}

impl GroupRenderer {
    pub fn new(compositor: TextCompositor) -> Self {
        Self { compositor }
    }

    pub fn compositor(&self) -> &TextCompositor {
        &self.compositor
    }

    /// Draw `items` in list order onto `surface` and hand it back.
    ///
    /// A failing item is reported to `diagnostics` and skipped; the remaining items still draw.
    #[tracing::instrument(skip(self, surface, items, diagnostics), fields(items = items.len()))]
    pub fn render<C: TextCanvas>(
        &mut self,
        mut surface: C,
        group: &str,
        items: &[TextItem],
        diagnostics: &mut dyn Diagnostics,
    ) -> RenderedGroup<C> {
        let outcomes = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let result = self.compositor.apply(&mut surface, item);
                match &result {
                    Ok(placement) => diagnostics.item_rendered(group, index, placement),
                    Err(err) => diagnostics.item_failed(group, index, err),
                }
                ItemOutcome { index, result }
            })
            .collect();

        RenderedGroup { surface, outcomes }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/group.rs"]
mod tests;
