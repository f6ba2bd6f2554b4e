//! Rubber-band selection of blocks.
//!
//! # Usage
//!
//! ```rust
//! use blockgraph::editor::SelectionRegion;
//! use blockgraph::geometry::Pos;
//!
//! let mut sel = SelectionRegion::new();
//! sel.toggle(Pos::new(10.0, 10.0));
//! sel.update(Pos::new(210.0, 210.0));
//! assert!(sel.is_active());
//! assert_eq!(sel.rect().w, 200.0);
//! ```

use indexmap::IndexSet;

use crate::geometry::{Pos, Rect, rects_intersect};
use crate::ids::BlockId;

/// The transient selection rectangle plus the committed set of selected blocks.
#[derive(Clone, Debug, Default)]
pub struct SelectionRegion {
    active: bool,
    start: Pos,
    end: Pos,
    selected: IndexSet<BlockId>,
}

impl SelectionRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn end(&self) -> Pos {
        self.end
    }

    /// Normalized rectangle, recomputed from the raw gesture points.
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }

    /// Open a rectangle at `at`, or cancel an open one without selecting.
    pub fn toggle(&mut self, at: Pos) {
        if self.active {
            self.active = false;
        } else {
            self.active = true;
            self.start = at;
            self.end = at;
        }
    }

    /// Cancel an open rectangle; the committed set is untouched.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn update(&mut self, at: Pos) {
        if self.active {
            self.end = at;
        }
    }

    /// Close the rectangle and select every candidate whose bounds overlap it.
    /// Returns the newly selected ids.
    pub fn commit(&mut self, candidates: impl IntoIterator<Item = (BlockId, Rect)>) -> Vec<BlockId> {
        if !self.active {
            return Vec::new();
        }
        self.active = false;
        let area = self.rect();
        let hits: Vec<BlockId> = candidates
            .into_iter()
            .filter(|(_, r)| rects_intersect(*r, area))
            .map(|(id, _)| id)
            .collect();
        self.selected.extend(hits.iter().copied());
        hits
    }

    pub fn selected(&self) -> &IndexSet<BlockId> {
        &self.selected
    }

    pub fn is_selected(&self, id: BlockId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn insert(&mut self, id: BlockId) {
        self.selected.insert(id);
    }

    pub fn remove(&mut self, id: BlockId) -> bool {
        self.selected.shift_remove(&id)
    }

    /// Empty the committed set, returning what was in it so callers can clear flags.
    pub fn take_selected(&mut self) -> IndexSet<BlockId> {
        std::mem::take(&mut self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_cancels() {
        let mut sel = SelectionRegion::new();
        sel.toggle(Pos::new(5.0, 5.0));
        assert!(sel.is_active());
        sel.toggle(Pos::new(50.0, 50.0));
        assert!(!sel.is_active());
        assert_eq!(sel.start(), Pos::new(5.0, 5.0));
    }

    #[test]
    fn test_update_moves_only_end() {
        let mut sel = SelectionRegion::new();
        sel.update(Pos::new(1.0, 1.0));
        assert_eq!(sel.end(), Pos::default());
        sel.toggle(Pos::new(100.0, 200.0));
        sel.update(Pos::new(50.0, 150.0));
        assert_eq!(sel.start(), Pos::new(100.0, 200.0));
        assert_eq!(sel.rect(), Rect::new(50.0, 150.0, 50.0, 50.0));
    }

    #[test]
    fn test_commit_selects_overlapping() {
        let mut sel = SelectionRegion::new();
        sel.toggle(Pos::new(10.0, 10.0));
        sel.update(Pos::new(210.0, 210.0));
        let hits = sel.commit([
            (BlockId(1), Rect::new(0.0, 0.0, 50.0, 50.0)),
            (BlockId(2), Rect::new(300.0, 300.0, 50.0, 50.0)),
        ]);
        assert_eq!(hits, vec![BlockId(1)]);
        assert!(!sel.is_active());
        assert!(sel.is_selected(BlockId(1)));
        assert_eq!(sel.take_selected().len(), 1);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_commit_when_inactive_is_noop() {
        let mut sel = SelectionRegion::new();
        assert!(sel.commit([(BlockId(1), Rect::new(0.0, 0.0, 1.0, 1.0))]).is_empty());
        assert!(sel.is_empty());
    }
}
