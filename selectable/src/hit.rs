use crate::types::Rect;

/// What part of a dropdown a pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTarget {
    /// The trigger itself (toggles the list).
    Body,
    /// The clear affordance.
    Clear,
    /// The removal affordance of the n-th selected option.
    Chip(usize),
    /// The n-th row of the open option list (index into the options).
    Option(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub rect: Rect,
    pub widget_id: String,
    pub target: HitTarget,
}

/// Clickable regions recorded during a render pass.
///
/// Regions pushed later sit on top of earlier ones.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<Region>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, rect: Rect, widget_id: &str, target: HitTarget) {
        if rect.is_empty() {
            return;
        }
        self.regions.push(Region {
            rect,
            widget_id: widget_id.to_string(),
            target,
        });
    }

    /// Topmost region containing the point.
    pub fn hit(&self, x: u16, y: u16) -> Option<&Region> {
        self.regions.iter().rev().find(|r| r.rect.contains(x, y))
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Find the region recorded for a given target.
    pub fn find(&self, widget_id: &str, target: HitTarget) -> Option<&Region> {
        self.regions
            .iter()
            .find(|r| r.widget_id == widget_id && r.target == target)
    }
}
