//! Popup menu bound to a block, opened by a right-click on its header.

use crate::canvas::TextMeasure;
use crate::geometry::{Pos, Rect, point_in_rect};
use crate::ids::{BlockId, IdSequence, WidgetId};

use super::widget::{Action, Button, WIDGET_HEIGHT, WIDGET_PADDING, Widget, WidgetKind};

pub const MENU_WIDTH: f32 = 100.0;
const ENTRY_PITCH: f32 = 30.0;
const MENU_PADDING: f32 = 10.0;
/// The menu opens slightly up-left of the click so the pointer starts inside it.
const OPEN_OFFSET: f32 = 5.0;

#[derive(Clone, Debug, Default)]
pub struct ContextMenu {
    visible: bool,
    origin: Pos,
    target: Option<BlockId>,
    entries: Vec<Widget>,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn target(&self) -> Option<BlockId> {
        self.target
    }

    pub fn entries(&self) -> &[Widget] {
        &self.entries
    }

    /// Show the block menu for `target` at the click position.
    pub fn open_for_block(&mut self, target: BlockId, at: Pos, ids: &mut IdSequence, measure: &dyn TextMeasure) {
        self.entries.clear();
        self.add_entry(ids.next_widget(), "Delete this", Action::DeleteBlock(target));
        self.target = Some(target);
        self.origin = Pos::new(at.x - OPEN_OFFSET, at.y - OPEN_OFFSET);
        self.visible = true;
        self.layout(measure);
    }

    fn add_entry(&mut self, id: WidgetId, label: &str, action: Action) {
        self.entries.push(Widget::button(id, Button::new(label, action)));
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.target = None;
    }

    pub fn bounds(&self) -> Rect {
        let h = self.entries.len() as f32 * ENTRY_PITCH + MENU_PADDING;
        Rect::new(self.origin.x, self.origin.y, MENU_WIDTH, h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        point_in_rect(p, self.bounds())
    }

    pub fn layout(&mut self, measure: &dyn TextMeasure) {
        let Pos { x, y } = self.origin;
        for (i, entry) in self.entries.iter_mut().enumerate() {
            let w = measure.text_width(entry.label()) + WIDGET_PADDING;
            let top = y + MENU_PADDING + ENTRY_PITCH * i as f32;
            entry.bounds = Rect::new(x + MENU_PADDING, top, w, WIDGET_HEIGHT);
        }
    }

    /// The action of the entry under `p`, when the menu is showing.
    pub fn entry_at(&self, p: Pos) -> Option<Action> {
        if !self.visible {
            return None;
        }
        self.entries.iter().find(|e| e.hit_test(p)).and_then(|e| match &e.kind {
            WidgetKind::Button(b) => Some(b.activate()),
            WidgetKind::TextInput(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::MonospaceMeasure;

    #[test]
    fn test_open_places_entries() {
        let mut ids = IdSequence::new();
        let mut menu = ContextMenu::new();
        assert!(!menu.is_visible());
        menu.open_for_block(BlockId(1), Pos::new(105.0, 105.0), &mut ids, &MonospaceMeasure::default());
        assert!(menu.is_visible());
        assert_eq!(menu.target(), Some(BlockId(1)));
        assert_eq!(menu.bounds(), Rect::new(100.0, 100.0, 100.0, 40.0));
        assert_eq!(menu.entries()[0].bounds, Rect::new(110.0, 110.0, 76.0, 20.0));
        assert_eq!(ids.highest(), 1);
    }

    #[test]
    fn test_entry_hit() {
        let mut ids = IdSequence::new();
        let mut menu = ContextMenu::new();
        menu.open_for_block(BlockId(4), Pos::new(5.0, 5.0), &mut ids, &MonospaceMeasure::default());
        assert!(matches!(menu.entry_at(Pos::new(15.0, 15.0)), Some(Action::DeleteBlock(BlockId(4)))));
        assert!(menu.entry_at(Pos::new(95.0, 35.0)).is_none());
        assert!(menu.contains(Pos::new(95.0, 35.0)));
        menu.hide();
        assert!(menu.entry_at(Pos::new(15.0, 15.0)).is_none());
    }
}
