//! Interactive elements embedded in a block body.

use std::fmt;
use std::rc::Rc;

use crate::geometry::{Pos, Rect, point_in_rect};
use crate::ids::{BlockId, WidgetId};

use super::timers::TimerId;

/// Height of every widget footprint.
pub const WIDGET_HEIGHT: f32 = 20.0;
/// Horizontal padding added to the measured label/content width.
pub const WIDGET_PADDING: f32 = 10.0;

/// What activating a button does. Performed by the surface.
#[derive(Clone)]
pub enum Action {
    /// Show a non-fatal notice to the user.
    Notify(String),
    /// Delete the bound block.
    DeleteBlock(BlockId),
    /// Host supplied closure.
    Callback(Rc<dyn Fn()>),
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Notify(msg) => f.debug_tuple("Notify").field(msg).finish(),
            Action::DeleteBlock(id) => f.debug_tuple("DeleteBlock").field(id).finish(),
            Action::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Button {
    pub label: String,
    pub action: Action,
}

impl Button {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self { label: label.into(), action }
    }

    /// The bound action; the caller performs it and ignores any outcome.
    pub fn activate(&self) -> Action {
        self.action.clone()
    }
}

/// Single-line text field with a char-indexed caret.
#[derive(Clone, Debug)]
pub struct TextInput {
    text: String,
    pub placeholder: String,
    caret: usize,
    focused: bool,
    caret_visible: bool,
    pub(crate) timer: TimerId,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>, timer: TimerId) -> Self {
        Self {
            text: String::new(),
            placeholder: placeholder.into(),
            caret: 0,
            focused: false,
            caret_visible: false,
            timer,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    pub fn timer(&self) -> TimerId {
        self.timer
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text.char_indices().nth(char_idx).map_or(self.text.len(), |(i, _)| i)
    }

    /// Replace the content; the caret is clamped to the new length.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.set_caret(self.caret);
    }

    pub fn set_caret(&mut self, idx: usize) {
        self.caret = idx.min(self.char_len());
    }

    /// What the footprint is measured from: content, or the placeholder when empty.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() { &self.placeholder } else { &self.text }
    }

    /// Text left of the caret, for positioning the caret bar.
    pub fn text_before_caret(&self) -> &str {
        &self.text[..self.byte_index(self.caret)]
    }

    pub(crate) fn focus(&mut self) {
        self.focused = true;
        self.caret_visible = true;
        self.caret = self.char_len();
    }

    pub(crate) fn blur(&mut self) {
        self.focused = false;
        self.caret_visible = false;
    }

    /// Blink tick; only a focused input toggles. Returns whether anything changed.
    pub(crate) fn blink(&mut self) -> bool {
        if self.focused {
            self.caret_visible = !self.caret_visible;
        }
        self.focused
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.caret);
        self.text.insert(at, c);
        self.caret += 1;
    }

    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        let at = self.byte_index(self.caret - 1);
        self.text.remove(at);
        self.caret -= 1;
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.set_caret(self.caret + 1);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetTag {
    Button,
    TextInput,
}

#[derive(Clone, Debug)]
pub enum WidgetKind {
    Button(Button),
    TextInput(TextInput),
}

/// A widget and its footprint; `bounds` is assigned by the block layout pass.
#[derive(Clone, Debug)]
pub struct Widget {
    pub id: WidgetId,
    pub bounds: Rect,
    pub kind: WidgetKind,
}

impl Widget {
    pub fn button(id: WidgetId, button: Button) -> Self {
        Self { id, bounds: Rect::default(), kind: WidgetKind::Button(button) }
    }

    pub fn text_input(id: WidgetId, input: TextInput) -> Self {
        Self { id, bounds: Rect::default(), kind: WidgetKind::TextInput(input) }
    }

    pub fn tag(&self) -> WidgetTag {
        match self.kind {
            WidgetKind::Button(_) => WidgetTag::Button,
            WidgetKind::TextInput(_) => WidgetTag::TextInput,
        }
    }

    /// The string whose measured width determines the footprint.
    pub fn label(&self) -> &str {
        match &self.kind {
            WidgetKind::Button(b) => &b.label,
            WidgetKind::TextInput(t) => t.display_text(),
        }
    }

    pub fn hit_test(&self, p: Pos) -> bool {
        point_in_rect(p, self.bounds)
    }

    pub fn as_text_input(&self) -> Option<&TextInput> {
        match &self.kind {
            WidgetKind::TextInput(t) => Some(t),
            WidgetKind::Button(_) => None,
        }
    }

    pub fn as_text_input_mut(&mut self) -> Option<&mut TextInput> {
        match &mut self.kind {
            WidgetKind::TextInput(t) => Some(t),
            WidgetKind::Button(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::timers::Timers;
    use std::time::Duration;

    fn input() -> TextInput {
        let mut timers = Timers::new();
        TextInput::new("input?", timers.schedule(Duration::from_millis(500), Duration::ZERO))
    }

    #[test]
    fn test_typing_and_caret() {
        let mut t = input();
        t.focus();
        t.insert_char('h');
        t.insert_char('i');
        assert_eq!((t.text(), t.caret()), ("hi", 2));
        t.backspace();
        assert_eq!((t.text(), t.caret()), ("h", 1));
        t.move_left();
        assert_eq!(t.caret(), 0);
        t.move_left();
        assert_eq!(t.caret(), 0);
        t.backspace();
        assert_eq!(t.text(), "h");
        t.move_right();
        t.move_right();
        assert_eq!(t.caret(), 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut t = input();
        t.set_text("äö");
        t.focus();
        assert_eq!(t.caret(), 2);
        t.move_left();
        t.insert_char('ß');
        assert_eq!(t.text(), "äßö");
        assert_eq!(t.text_before_caret(), "äß");
        t.backspace();
        assert_eq!(t.text(), "äö");
    }

    #[test]
    fn test_caret_clamped_on_set_text() {
        let mut t = input();
        t.set_text("hello");
        t.set_caret(99);
        assert_eq!(t.caret(), 5);
        t.set_text("hi");
        assert_eq!(t.caret(), 2);
    }

    #[test]
    fn test_display_text_falls_back_to_placeholder() {
        let mut t = input();
        assert_eq!(t.display_text(), "input?");
        t.set_text("x");
        assert_eq!(t.display_text(), "x");
    }

    #[test]
    fn test_blink_only_while_focused() {
        let mut t = input();
        assert!(!t.blink());
        assert!(!t.caret_visible());
        t.focus();
        assert!(t.caret_visible());
        assert!(t.blink());
        assert!(!t.caret_visible());
        t.blur();
        assert!(!t.blink());
    }

    #[test]
    fn test_button_activate_returns_bound_action() {
        let b = Button::new("Delete this", Action::DeleteBlock(BlockId(7)));
        assert!(matches!(b.activate(), Action::DeleteBlock(BlockId(7))));
        let w = Widget::button(WidgetId(3), b);
        assert_eq!(w.tag(), WidgetTag::Button);
        assert_eq!(w.label(), "Delete this");
        assert!(w.as_text_input().is_none());
    }
}
