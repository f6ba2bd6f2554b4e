use std::time::Duration;

use blockgraph::config::EditorConfig;
use blockgraph::editor::{GraphSurface, Key, PointerButton};
use blockgraph::geometry::Pos;
use blockgraph::ids::{BlockId, WidgetId};

/// Surface with one default block; returns the block and its text input.
fn setup() -> (GraphSurface, BlockId, WidgetId) {
    let mut s = GraphSurface::headless(EditorConfig::default());
    let id = s.create_default_block(Pos::new(150.0, 150.0));
    let input = s.block(id).unwrap().widgets[2].id;
    (s, id, input)
}

fn click(s: &mut GraphSurface, p: Pos) {
    s.pointer_down(p, PointerButton::Primary);
    s.pointer_up(p);
}

fn input_pos(s: &GraphSurface, block: BlockId) -> Pos {
    let b = s.block(block).unwrap().widgets[2].bounds;
    Pos::new(b.x + 2.0, b.y + 2.0)
}

#[test]
fn typing_editing_and_caret_clamp() {
    let (mut s, block, input) = setup();
    assert_eq!(s.text_input(block, input).unwrap().placeholder, "input?");
    let at = input_pos(&s, block);
    click(&mut s, at);
    assert!(s.is_input_suppressed());

    s.key_down(Key::Char('h'));
    s.key_down(Key::Char('i'));
    let t = s.focused_input().unwrap();
    assert_eq!((t.text(), t.caret()), ("hi", 2));

    s.key_down(Key::Backspace);
    let t = s.focused_input().unwrap();
    assert_eq!((t.text(), t.caret()), ("h", 1));

    s.key_down(Key::ArrowLeft);
    assert_eq!(s.focused_input().unwrap().caret(), 0);
    s.key_down(Key::ArrowLeft);
    assert_eq!(s.focused_input().unwrap().caret(), 0);
    s.key_down(Key::ArrowRight);
    s.key_down(Key::ArrowRight);
    assert_eq!(s.focused_input().unwrap().caret(), 1);
}

#[test]
fn focus_suppresses_shortcuts() {
    let (mut s, block, input) = setup();
    let at = input_pos(&s, block);
    click(&mut s, at);
    s.key_down(Key::Char('a'));
    s.key_down(Key::Backspace);
    assert_eq!(s.block_count(), 1);
    assert!(s.selection().is_empty());
    assert_eq!(s.text_input(block, input).unwrap().text(), "");

    s.key_down(Key::Enter);
    assert!(!s.is_input_suppressed());
    assert!(!s.text_input(block, input).unwrap().is_focused());
    s.key_down(Key::Char('a'));
    assert_eq!(s.selection().len(), 1);
}

#[test]
fn click_elsewhere_blurs_and_refocus_puts_caret_at_end() {
    let (mut s, block, input) = setup();
    let at = input_pos(&s, block);
    click(&mut s, at);
    for c in "abc".chars() {
        s.key_down(Key::Char(c));
    }
    s.key_down(Key::ArrowLeft);
    click(&mut s, Pos::new(600.0, 600.0));
    assert!(s.focused_input().is_none());
    assert!(!s.text_input(block, input).unwrap().caret_visible());

    click(&mut s, at);
    let t = s.focused_input().unwrap();
    assert_eq!((t.text(), t.caret()), ("abc", 3));
}

#[test]
fn only_one_input_focused() {
    let (mut s, first, first_input) = setup();
    let second = s.create_default_block(Pos::new(450.0, 150.0));
    let second_input = s.block(second).unwrap().widgets[2].id;
    let at = input_pos(&s, first);
    click(&mut s, at);
    let at = input_pos(&s, second);
    click(&mut s, at);
    assert!(!s.text_input(first, first_input).unwrap().is_focused());
    assert!(s.text_input(second, second_input).unwrap().is_focused());
}

#[test]
fn caret_blinks_while_focused() {
    let (mut s, block, input) = setup();
    s.tick(Duration::from_millis(100));
    let at = input_pos(&s, block);
    click(&mut s, at);
    assert!(s.focused_input().unwrap().caret_visible());
    s.tick(Duration::from_millis(600));
    assert!(!s.focused_input().unwrap().caret_visible());
    s.tick(Duration::from_millis(1100));
    assert!(s.focused_input().unwrap().caret_visible());

    s.key_down(Key::Escape);
    s.tick(Duration::from_millis(1600));
    assert!(!s.text_input(block, input).unwrap().caret_visible());
}

#[test]
fn deleting_block_stops_its_timer() {
    let (mut s, block, _) = setup();
    let at = input_pos(&s, block);
    click(&mut s, at);
    assert_eq!(s.active_timers(), 1);
    s.delete_block(block).unwrap();
    assert_eq!(s.active_timers(), 0);
    assert!(!s.is_input_suppressed());
    s.tick(Duration::from_secs(5));
    assert!(s.focused_input().is_none());
}
