//! Gallery items, category filtering, and the staged filter transition.
//!
//! The gallery owns the fixed sequence of portfolio items and the single
//! active filter. Filtering never creates or destroys items; it only moves
//! them between phases. Items leaving the grid keep their slot for a short
//! fade-out window before being removed from layout, and items re-entering
//! are laid out immediately and settle one tick later.

use std::collections::HashSet;
use std::ops::Range;

/// Sentinel filter that matches every item.
pub const ALL_CATEGORIES: &str = "all";

/// How long a hidden-bound item stays in layout while fading out.
pub const FADE_OUT_MS: u64 = 300;

/// Delay before a freshly revealed item settles into the resting phase.
pub const REVEAL_DELAY_MS: u64 = 10;

/// Where an item currently is in the filter transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    /// At rest and part of the grid.
    Shown,
    /// Just restored to the grid, settling to `Shown` on the next tick.
    FadingIn,
    /// Filtered out but still occupying its slot until the fade-out elapses.
    FadingOut,
    /// Removed from layout entirely.
    Hidden,
}

impl ItemPhase {
    /// Whether the item currently occupies a slot in the grid. This is the
    /// visibility the lightbox polls when it rebuilds its image list.
    pub fn in_layout(self) -> bool {
        !matches!(self, ItemPhase::Hidden)
    }
}

/// A single portfolio image. Identity is its position in the scan order;
/// `source` doubles as the lookup key when a tile is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    /// Category tag used by the filter bar.
    pub category: String,
    /// Full-resolution image path, the item's stable key.
    pub source: String,
    /// Caption shown under the tile and inside the lightbox.
    pub caption: String,
    /// Current transition phase.
    pub phase: ItemPhase,
}

impl GalleryItem {
    pub fn new(category: impl Into<String>, source: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            source: source.into(),
            caption: caption.into(),
            phase: ItemPhase::Shown,
        }
    }
}

/// An entry of the lightbox's navigable sequence: one visible image.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleImage {
    pub source: String,
    pub caption: String,
}

/// Timers the caller must schedule after a filter change.
///
/// The generation token invalidates settles scheduled by an earlier filter
/// change; a stale token is ignored by the settle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTransition {
    pub generation: u64,
    /// At least one item started fading out.
    pub fade_out_pending: bool,
    /// At least one item was restored and needs the reveal tick.
    pub reveal_pending: bool,
}

/// The gallery: all items plus the single-select filter state.
#[derive(Debug, Clone)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    active_filter: String,
    generation: u64,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            active_filter: ALL_CATEGORIES.to_string(),
            generation: 0,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The currently active filter. Exactly one filter is active at a time.
    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Distinct categories in item order, for the filter bar.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for item in &self.items {
            if seen.insert(item.category.as_str()) {
                out.push(item.category.clone());
            }
        }
        out
    }

    fn matches(filter: &str, item: &GalleryItem) -> bool {
        filter == ALL_CATEGORIES || item.category == filter
    }

    /// Applies a category filter. An unmatched category is not an error; it
    /// simply hides every item (a valid empty-result state).
    ///
    /// Matching items are restored to layout immediately; non-matching items
    /// begin their fade-out and stay in layout until [`Gallery::settle_fade_out`]
    /// runs with the returned generation.
    pub fn apply_filter(&mut self, selected: &str) -> FilterTransition {
        self.active_filter = selected.to_string();
        self.generation += 1;

        let mut fade_out_pending = false;
        let mut reveal_pending = false;

        for item in &mut self.items {
            if Self::matches(selected, item) {
                match item.phase {
                    ItemPhase::Hidden | ItemPhase::FadingOut => {
                        item.phase = ItemPhase::FadingIn;
                        reveal_pending = true;
                    }
                    ItemPhase::FadingIn => reveal_pending = true,
                    ItemPhase::Shown => {}
                }
            } else if item.phase.in_layout() {
                item.phase = ItemPhase::FadingOut;
                fade_out_pending = true;
            }
        }

        FilterTransition {
            generation: self.generation,
            fade_out_pending,
            reveal_pending,
        }
    }

    /// Removes faded-out items from layout. A stale generation means another
    /// filter change superseded this timer; the settle is dropped so a
    /// re-shown item can never be yanked out by an old timer.
    pub fn settle_fade_out(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        for item in &mut self.items {
            if item.phase == ItemPhase::FadingOut {
                item.phase = ItemPhase::Hidden;
            }
        }
    }

    /// Settles freshly revealed items. Stale generations are dropped.
    pub fn settle_reveal(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        for item in &mut self.items {
            if item.phase == ItemPhase::FadingIn {
                item.phase = ItemPhase::Shown;
            }
        }
    }

    /// Indices of items currently occupying grid slots, in item order.
    pub fn laid_out_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.phase.in_layout())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Snapshot of the currently visible images, in item order. The lightbox
    /// calls this once per open; the snapshot is never maintained
    /// incrementally.
    pub fn visible_images(&self) -> Vec<VisibleImage> {
        self.items
            .iter()
            .filter(|item| item.phase.in_layout())
            .map(|item| VisibleImage {
                source: item.source.clone(),
                caption: item.caption.clone(),
            })
            .collect()
    }
}

/// Which grid slots are worth requesting thumbnails for, given the scroll
/// position. One row of overscan on each side so tiles arriving into view
/// rarely show a placeholder.
pub fn visible_slot_range(
    scroll_y: f32,
    viewport_height: f32,
    columns: usize,
    row_height: f32,
    total_slots: usize,
) -> Range<usize> {
    if total_slots == 0 || columns == 0 || row_height <= 0.0 {
        return 0..0;
    }
    let first_row = (scroll_y / row_height).floor().max(0.0) as usize;
    let rows_in_view = (viewport_height / row_height).ceil() as usize + 1;
    let start_row = first_row.saturating_sub(1);
    let start = (start_row * columns).min(total_slots);
    let end = ((first_row + rows_in_view + 1) * columns).min(total_slots);
    start..end
}

/// One-shot request bookkeeping for lazy thumbnails. Once a slot has been
/// requested it is never requested again, regardless of later scrolling —
/// the loader equivalent of unobserving an element after its first
/// intersection.
#[derive(Debug, Clone, Default)]
pub struct LazyLoader {
    requested: HashSet<usize>,
}

impl LazyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the given item indices as requested and returns only the ones
    /// that were not requested before.
    pub fn mark_due<I>(&mut self, candidates: I) -> Vec<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .filter(|idx| self.requested.insert(*idx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Gallery {
        Gallery::new(vec![
            GalleryItem::new("weddings", "a.jpg", "A"),
            GalleryItem::new("portraits", "b.jpg", "B"),
            GalleryItem::new("weddings", "c.jpg", "C"),
        ])
    }

    fn settle(gallery: &mut Gallery, transition: FilterTransition) {
        gallery.settle_reveal(transition.generation);
        gallery.settle_fade_out(transition.generation);
    }

    #[test]
    fn test_filter_partitions_items() {
        let mut gallery = sample();
        let t = gallery.apply_filter("weddings");
        settle(&mut gallery, t);

        let phases: Vec<ItemPhase> = gallery.items().iter().map(|i| i.phase).collect();
        assert_eq!(
            phases,
            vec![ItemPhase::Shown, ItemPhase::Hidden, ItemPhase::Shown]
        );
        assert_eq!(gallery.active_filter(), "weddings");
    }

    #[test]
    fn test_all_filter_restores_everything() {
        let mut gallery = sample();
        let t = gallery.apply_filter("portraits");
        settle(&mut gallery, t);
        let t = gallery.apply_filter(ALL_CATEGORIES);
        settle(&mut gallery, t);

        assert!(gallery.items().iter().all(|i| i.phase == ItemPhase::Shown));
    }

    #[test]
    fn test_unmatched_filter_hides_all_items() {
        let mut gallery = sample();
        let t = gallery.apply_filter("landscapes");
        settle(&mut gallery, t);

        assert!(gallery.items().iter().all(|i| i.phase == ItemPhase::Hidden));
        assert!(gallery.visible_images().is_empty());
    }

    #[test]
    fn test_fading_out_items_remain_in_layout_until_settle() {
        let mut gallery = sample();
        let t = gallery.apply_filter("weddings");

        // The fade-out has not elapsed: the filtered-out portrait is still
        // part of the visible snapshot.
        assert_eq!(gallery.visible_images().len(), 3);

        gallery.settle_fade_out(t.generation);
        let visible = gallery.visible_images();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].source, "a.jpg");
        assert_eq!(visible[1].source, "c.jpg");
    }

    #[test]
    fn test_stale_fade_out_is_ignored() {
        let mut gallery = sample();
        let first = gallery.apply_filter("weddings");
        // A second change supersedes the first before its timer fires.
        let second = gallery.apply_filter(ALL_CATEGORIES);

        gallery.settle_fade_out(first.generation);
        assert_eq!(gallery.visible_images().len(), 3);

        gallery.settle_reveal(second.generation);
        assert!(gallery.items().iter().all(|i| i.phase == ItemPhase::Shown));
    }

    #[test]
    fn test_reveal_settles_to_shown() {
        let mut gallery = sample();
        let t = gallery.apply_filter("portraits");
        settle(&mut gallery, t);

        let t = gallery.apply_filter("weddings");
        assert!(t.reveal_pending);
        assert_eq!(gallery.items()[0].phase, ItemPhase::FadingIn);
        gallery.settle_reveal(t.generation);
        assert_eq!(gallery.items()[0].phase, ItemPhase::Shown);
    }

    #[test]
    fn test_categories_are_distinct_and_ordered() {
        let gallery = sample();
        assert_eq!(gallery.categories(), vec!["weddings", "portraits"]);
    }

    #[test]
    fn test_visible_slot_range_clamps_and_overscans() {
        // 10 slots, 2 columns, 100px rows, viewport shows 2 rows.
        let range = visible_slot_range(0.0, 200.0, 2, 100.0, 10);
        assert_eq!(range.start, 0);
        assert!(range.end >= 4 && range.end <= 10);

        // Scrolled to the bottom the range must stay in bounds.
        let range = visible_slot_range(10_000.0, 200.0, 2, 100.0, 10);
        assert!(range.start <= 10 && range.end <= 10);

        assert_eq!(visible_slot_range(0.0, 200.0, 2, 100.0, 0), 0..0);
    }

    #[test]
    fn test_lazy_loader_requests_once() {
        let mut lazy = LazyLoader::new();
        assert_eq!(lazy.mark_due([0, 1, 2]), vec![0, 1, 2]);
        // Scrolling back over the same tiles yields nothing new.
        assert_eq!(lazy.mark_due([1, 2, 3]), vec![3]);
        assert_eq!(lazy.mark_due([0]), Vec::<usize>::new());
    }
}
