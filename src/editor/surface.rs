//! The graph surface: owner of every block, port and link, and the single
//! receiver of pointer, keyboard and timer events.
//!
//! Events are dispatched in a fixed priority order: ports first (a port can be
//! dragged independently of its block), then the block/widget under the
//! pointer, then the selection rectangle and background. All mutation happens
//! synchronously inside the handler; the host repaints when
//! [`GraphSurface::take_redraw`] reports a change.

use std::collections::VecDeque;
use std::time::Duration;

use indexmap::IndexMap;

use crate::canvas::{Canvas, MonospaceMeasure, TextMeasure};
use crate::config::EditorConfig;
use crate::error::GraphError;
use crate::geometry::{Pos, Rect, Vec2};
use crate::ids::{BlockId, IdSequence, PortId, WidgetId};

use super::block::Block;
use super::connections::{Connection, ConnectionChange, ConnectionSet};
use super::context_menu::ContextMenu;
use super::layout::{apply_layout, layout_block};
use super::port::{ConnectionPoint, PortKind};
use super::render;
use super::selection::SelectionRegion;
use super::timers::Timers;
use super::widget::{Action, Button, TextInput, Widget, WidgetKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Keys the editor reacts to. Character keys arrive already translated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Enter,
    Escape,
    ArrowLeft,
    ArrowRight,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorIcon {
    #[default]
    Default,
    /// Over something clickable: a header, a widget or a menu entry.
    Pointer,
    /// Dragging a block.
    Move,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    /// Internal inconsistency; the host must block until it is dismissed.
    Fatal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

pub struct GraphSurface {
    config: EditorConfig,
    measure: Box<dyn TextMeasure>,
    ids: IdSequence,
    /// Z-order: last is drawn on top and hit first.
    blocks: IndexMap<BlockId, Block>,
    /// Flat index of every port, in creation order.
    ports: IndexMap<PortId, BlockId>,
    connections: ConnectionSet,
    selection: SelectionRegion,
    menu: ContextMenu,
    timers: Timers,
    dragged_block: Option<BlockId>,
    focused: Option<(BlockId, WidgetId)>,
    cursor: CursorIcon,
    pointer: Pos,
    clock: Duration,
    notices: VecDeque<Notice>,
    redraw: bool,
}

impl GraphSurface {
    pub fn new(config: EditorConfig, measure: impl TextMeasure + 'static) -> Self {
        Self::with_ids(config, measure, IdSequence::new())
    }

    /// Surface with fixed-advance text metrics, for driving the engine without a window.
    pub fn headless(config: EditorConfig) -> Self {
        Self::new(config, MonospaceMeasure::default())
    }

    pub fn with_ids(config: EditorConfig, measure: impl TextMeasure + 'static, ids: IdSequence) -> Self {
        Self {
            config,
            measure: Box::new(measure),
            ids,
            blocks: IndexMap::new(),
            ports: IndexMap::new(),
            connections: ConnectionSet::new(),
            selection: SelectionRegion::new(),
            menu: ContextMenu::new(),
            timers: Timers::new(),
            dragged_block: None,
            focused: None,
            cursor: CursorIcon::Default,
            pointer: Pos::default(),
            clock: Duration::ZERO,
            notices: VecDeque::new(),
            redraw: true,
        }
    }

    // ── accessors ───────────────────────────────────────────────────────────

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Blocks in z-order, bottom first.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(&id)
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Every port in creation order.
    pub fn ports(&self) -> impl Iterator<Item = &ConnectionPoint> {
        self.ports.iter().filter_map(|(pid, bid)| self.blocks.get(bid)?.port(*pid))
    }

    pub fn port(&self, id: PortId) -> Option<&ConnectionPoint> {
        let bid = self.ports.get(&id)?;
        self.blocks.get(bid)?.port(id)
    }

    fn port_mut(&mut self, id: PortId) -> Option<&mut ConnectionPoint> {
        let bid = self.ports.get(&id)?;
        self.blocks.get_mut(bid)?.port_mut(id)
    }

    pub fn connections(&self) -> &ConnectionSet {
        &self.connections
    }

    pub fn selection(&self) -> &SelectionRegion {
        &self.selection
    }

    pub fn context_menu(&self) -> &ContextMenu {
        &self.menu
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub fn dragged_block(&self) -> Option<BlockId> {
        self.dragged_block
    }

    /// Last identity handed out to any block, widget, port or menu entry.
    pub fn highest_id(&self) -> u64 {
        self.ids.highest()
    }

    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    /// True while a text input owns the keyboard; surface shortcuts are off.
    pub fn is_input_suppressed(&self) -> bool {
        self.focused.is_some()
    }

    pub fn focused_input(&self) -> Option<&TextInput> {
        let (bid, wid) = self.focused?;
        self.blocks.get(&bid)?.widgets.iter().find(|w| w.id == wid)?.as_text_input()
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        let (bid, wid) = self.focused?;
        self.blocks.get_mut(&bid)?.widget_mut(wid)?.as_text_input_mut()
    }

    pub fn text_input(&self, block: BlockId, widget: WidgetId) -> Option<&TextInput> {
        self.blocks.get(&block)?.widgets.iter().find(|w| w.id == widget)?.as_text_input()
    }

    pub fn pending_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        let n = self.notices.pop_front();
        if n.is_some() {
            self.redraw = true;
        }
        n
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Consume the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    // ── graph construction ──────────────────────────────────────────────────

    /// Empty block with the configured colors and text.
    pub fn create_block(&mut self, rect: Rect) -> BlockId {
        let block = self.new_block(rect);
        let id = block.id;
        self.insert_block(block);
        id
    }

    /// The creation gesture: a default-sized block centred-ish on `at` with two
    /// buttons, a text input, one input and one output port.
    pub fn create_default_block(&mut self, at: Pos) -> BlockId {
        let size = (self.config.block.width, self.config.block.height);
        let mut block = self.new_block(Rect::new(at.x - 50.0, at.y - 50.0, size.0, size.1));
        for label in ["Button 1", "Button 2"] {
            let action = Action::Notify(format!("{label} clicked!"));
            block.add_widget(Widget::button(self.ids.next_widget(), Button::new(label, action)));
        }
        let input = self.new_text_input("input?");
        block.add_widget(input);
        let radius = self.config.port_radius;
        block.add_port(self.ids.next_port(), PortKind::Input, radius);
        block.add_port(self.ids.next_port(), PortKind::Output, radius);
        let id = block.id;
        self.insert_block(block);
        id
    }

    fn new_block(&mut self, rect: Rect) -> Block {
        let d = &self.config.block;
        Block::new(self.ids.next_block(), rect, d.color, d.header_color, d.text.clone())
    }

    fn new_text_input(&mut self, placeholder: &str) -> Widget {
        let timer = self.timers.schedule(self.config.caret_blink_interval(), self.clock);
        Widget::text_input(self.ids.next_widget(), TextInput::new(placeholder, timer))
    }

    fn insert_block(&mut self, mut block: Block) {
        for p in &block.ports {
            self.ports.insert(p.id, block.id);
        }
        let layout = layout_block(&block, &*self.measure);
        apply_layout(&mut block, &layout);
        log::debug!("created {} at ({}, {})", block.id, block.rect.x, block.rect.y);
        self.blocks.insert(block.id, block);
        self.redraw = true;
    }

    pub fn add_port(&mut self, block: BlockId, kind: PortKind) -> Result<PortId, GraphError> {
        let b = self.blocks.get_mut(&block).ok_or(GraphError::BlockNotFound(block))?;
        let id = self.ids.next_port();
        b.add_port(id, kind, self.config.port_radius);
        self.ports.insert(id, block);
        self.relayout();
        Ok(id)
    }

    pub fn add_button(&mut self, block: BlockId, label: &str, action: Action) -> Result<WidgetId, GraphError> {
        if !self.blocks.contains_key(&block) {
            return Err(GraphError::BlockNotFound(block));
        }
        let widget = Widget::button(self.ids.next_widget(), Button::new(label, action));
        Ok(self.attach_widget(block, widget))
    }

    pub fn add_text_input(&mut self, block: BlockId, placeholder: &str) -> Result<WidgetId, GraphError> {
        if !self.blocks.contains_key(&block) {
            return Err(GraphError::BlockNotFound(block));
        }
        let widget = self.new_text_input(placeholder);
        Ok(self.attach_widget(block, widget))
    }

    // Callers have checked that `block` exists.
    fn attach_widget(&mut self, block: BlockId, widget: Widget) -> WidgetId {
        let id = widget.id;
        if let Some(b) = self.blocks.get_mut(&block) {
            b.add_widget(widget);
        }
        self.relayout();
        id
    }

    /// Remove a block: sever every link touching its ports, stop its widget
    /// timers and drop it from selection, drag and focus state.
    pub fn delete_block(&mut self, id: BlockId) -> Result<(), GraphError> {
        let block = self.blocks.shift_remove(&id).ok_or(GraphError::BlockNotFound(id))?;
        if self.focused.is_some_and(|(b, _)| b == id) {
            self.focused = None;
        }
        let mut severed = 0;
        for port in block.destroy(&mut self.timers) {
            severed += self.connections.sever(port);
            self.ports.shift_remove(&port);
        }
        self.selection.remove(id);
        if self.dragged_block == Some(id) {
            self.dragged_block = None;
        }
        if self.menu.target() == Some(id) {
            self.menu.hide();
        }
        log::debug!("deleted {id}, severed {severed} connection(s)");
        self.redraw = true;
        Ok(())
    }

    fn delete_or_report(&mut self, id: BlockId) {
        if let Err(e) = self.delete_block(id) {
            log::error!("delete failed: {e}");
            self.notices.push_back(Notice { level: NoticeLevel::Fatal, message: format!("Error: {e}") });
            self.redraw = true;
        }
    }

    /// Delete every selected block; each deletion stands on its own.
    pub fn delete_selected(&mut self) {
        for id in self.selection.take_selected() {
            self.delete_or_report(id);
        }
    }

    pub fn select_all(&mut self) {
        for b in self.blocks.values_mut() {
            b.selected = true;
            self.selection.insert(b.id);
        }
        self.redraw = true;
    }

    fn clear_selection(&mut self) {
        for id in self.selection.take_selected() {
            if let Some(b) = self.blocks.get_mut(&id) {
                b.selected = false;
            }
        }
    }

    pub fn is_connected(&self, a: PortId, b: PortId) -> bool {
        match (self.port(a), self.port(b)) {
            (Some(pa), Some(pb)) => Connection::between((a, pa.kind), (b, pb.kind))
                .is_some_and(|c| self.connections.contains(&c)),
            _ => false,
        }
    }

    /// Link two ports, or unlink them if already linked. A pair of the same
    /// kind is ignored (`Ok(None)`).
    pub fn toggle_connection(&mut self, a: PortId, b: PortId) -> Result<Option<ConnectionChange>, GraphError> {
        let ka = self.port(a).ok_or(GraphError::PortNotFound(a))?.kind;
        let kb = self.port(b).ok_or(GraphError::PortNotFound(b))?.kind;
        let Some(conn) = Connection::between((a, ka), (b, kb)) else {
            return Ok(None);
        };
        let change = self.connections.toggle(conn);
        log::debug!("{change:?}");
        self.redraw = true;
        Ok(Some(change))
    }

    // ── geometry ────────────────────────────────────────────────────────────

    fn relayout(&mut self) {
        let measure = &*self.measure;
        for b in self.blocks.values_mut() {
            let layout = layout_block(b, measure);
            apply_layout(b, &layout);
        }
        self.menu.layout(measure);
    }

    /// Topmost block under `p` and whether `p` is in its header.
    pub fn block_at(&self, p: Pos) -> Option<(BlockId, bool)> {
        self.blocks.values().rev().find(|b| b.hit_test(p)).map(|b| (b.id, b.is_in_header(p.y)))
    }

    /// Topmost port within `margin` of `p`, skipping `except`.
    pub fn port_at(&self, p: Pos, margin: f32, except: Option<PortId>) -> Option<PortId> {
        self.ports
            .keys()
            .rev()
            .filter(|id| Some(**id) != except)
            .find(|id| self.port(**id).is_some_and(|port| port.hit_test(p, margin)))
            .copied()
    }

    /// Topmost port near `at` that `from` could link to.
    fn snap_target(&self, from: &ConnectionPoint, at: Pos) -> Option<&ConnectionPoint> {
        self.ports
            .keys()
            .rev()
            .filter(|id| **id != from.id)
            .filter_map(|id| self.port(*id))
            .find(|p| from.is_compatible(p) && p.hit_test(at, self.config.port_snap_margin))
    }

    fn port_ids_topmost_first(&self) -> Vec<PortId> {
        self.ports.keys().rev().copied().collect()
    }

    // ── events ──────────────────────────────────────────────────────────────

    pub fn pointer_down(&mut self, pos: Pos, button: PointerButton) {
        self.pointer = pos;
        self.blur_unless_over_focused(pos);

        let mut port_pressed = false;
        for pid in self.port_ids_topmost_first() {
            if let Some(port) = self.port_mut(pid) {
                if port.begin_drag(pos) {
                    log::debug!("dragging from {pid}");
                    port_pressed = true;
                    break;
                }
            }
        }

        let hovered = self.block_at(pos);

        let menu_visible = self.menu.is_visible();
        if button == PointerButton::Primary && hovered.is_none() && !port_pressed && !menu_visible {
            self.selection.toggle(pos);
            self.clear_selection();
        }

        // A visible menu swallows the press whether or not an entry was hit.
        if menu_visible {
            if let Some(action) = self.menu.entry_at(pos) {
                self.perform(action);
                self.menu.hide();
            }
            self.redraw = true;
            return;
        }

        match (button, hovered) {
            (PointerButton::Secondary, Some((bid, true))) if !port_pressed => {
                self.menu.open_for_block(bid, pos, &mut self.ids, &*self.measure);
                self.cursor = CursorIcon::Pointer;
            }
            (PointerButton::Secondary, None) if !port_pressed => {
                self.create_default_block(pos);
            }
            (PointerButton::Primary, Some((bid, in_header))) if !port_pressed => {
                if in_header {
                    self.begin_block_drag(bid);
                }
                self.activate_widget_at(bid, pos);
            }
            _ => {}
        }
        self.redraw = true;
    }

    fn begin_block_drag(&mut self, bid: BlockId) {
        if !self.selection.is_selected(bid) {
            self.clear_selection();
        }
        if let Some(block) = self.blocks.shift_remove(&bid) {
            self.blocks.insert(bid, block);
        }
        self.dragged_block = Some(bid);
        self.cursor = CursorIcon::Move;
    }

    fn activate_widget_at(&mut self, bid: BlockId, pos: Pos) {
        let Some(block) = self.blocks.get(&bid) else { return };
        let Some(widget) = block.widget_at(pos, None) else { return };
        match &widget.kind {
            WidgetKind::Button(b) => {
                let action = b.activate();
                self.perform(action);
            }
            WidgetKind::TextInput(_) => {
                let wid = widget.id;
                if self.focused != Some((bid, wid)) {
                    self.focus_input(bid, wid);
                }
            }
        }
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Notify(message) => {
                log::info!("{message}");
                self.notices.push_back(Notice { level: NoticeLevel::Info, message });
            }
            Action::DeleteBlock(id) => self.delete_or_report(id),
            Action::Callback(f) => f(),
        }
    }

    fn focus_input(&mut self, bid: BlockId, wid: WidgetId) {
        self.blur();
        let now = self.clock;
        let Some(input) = self
            .blocks
            .get_mut(&bid)
            .and_then(|b| b.widget_mut(wid))
            .and_then(|w| w.as_text_input_mut())
        else {
            return;
        };
        input.focus();
        let timer = input.timer();
        self.timers.restart(timer, now);
        self.focused = Some((bid, wid));
        log::debug!("focused {wid} of {bid}");
    }

    fn blur(&mut self) {
        if let Some(input) = self.focused_input_mut() {
            input.blur();
        }
        self.focused = None;
    }

    fn blur_unless_over_focused(&mut self, pos: Pos) {
        let Some((bid, wid)) = self.focused else { return };
        let over = self
            .blocks
            .get(&bid)
            .and_then(|b| b.widgets.iter().find(|w| w.id == wid))
            .is_some_and(|w| w.hit_test(pos));
        if !over {
            self.blur();
            self.redraw = true;
        }
    }

    pub fn pointer_move(&mut self, pos: Pos, delta: Vec2) {
        self.pointer = pos;
        let mut repaint = self.selection.is_active();
        self.selection.update(pos);

        let menu_visible = self.menu.is_visible();
        let mut hover_repaint = false;
        for port in self.blocks.values().flat_map(|b| &b.ports) {
            hover_repaint |= port.on_hover(menu_visible);
        }
        repaint |= hover_repaint;

        if let Some(dragged) = self.dragged_block {
            if !self.selection.is_empty() && self.selection.is_selected(dragged) {
                for id in self.selection.selected() {
                    if let Some(b) = self.blocks.get_mut(id) {
                        b.translate(delta);
                    }
                }
            } else {
                if self.selection.is_active() || !self.selection.is_empty() {
                    self.selection.cancel();
                    self.clear_selection();
                }
                if let Some(b) = self.blocks.get_mut(&dragged) {
                    b.translate(delta);
                }
            }
            self.relayout();
            repaint = true;
        } else {
            self.cursor = match self.block_at(pos) {
                Some((bid, in_header)) => {
                    let over_widget = self.blocks.get(&bid).is_some_and(|b| b.widget_at(pos, None).is_some());
                    if in_header || over_widget { CursorIcon::Pointer } else { CursorIcon::Default }
                }
                None => CursorIcon::Default,
            };
        }

        if menu_visible {
            if !self.menu.contains(pos) {
                self.menu.hide();
                repaint = true;
            } else if self.menu.entry_at(pos).is_some() {
                self.cursor = CursorIcon::Pointer;
            } else {
                self.cursor = CursorIcon::Default;
            }
        }

        if repaint {
            self.redraw = true;
        }
    }

    pub fn pointer_up(&mut self, pos: Pos) {
        self.pointer = pos;
        if self.selection.is_active() {
            let candidates: Vec<(BlockId, Rect)> = self.blocks.values().map(|b| (b.id, b.rect)).collect();
            for id in self.selection.commit(candidates) {
                if let Some(b) = self.blocks.get_mut(&id) {
                    b.selected = true;
                }
            }
            log::debug!("selected {} block(s)", self.selection.len());
        }

        for pid in self.port_ids_topmost_first() {
            let was_dragging = self.port_mut(pid).is_some_and(|p| p.end_drag());
            if was_dragging {
                self.finish_port_drag(pid, pos);
            }
        }

        self.dragged_block = None;
        self.cursor = CursorIcon::Default;
        self.redraw = true;
    }

    fn finish_port_drag(&mut self, from: PortId, pos: Pos) {
        let Some(target) = self.port_at(pos, self.config.port_snap_margin, Some(from)) else {
            return;
        };
        match self.toggle_connection(from, target) {
            Ok(Some(_)) => {}
            Ok(None) => log::debug!("ignored drop of {from} on incompatible {target}"),
            Err(e) => log::error!("drop failed: {e}"),
        }
    }

    pub fn key_down(&mut self, key: Key) {
        if self.focused.is_some() {
            self.edit_focused(key);
            return;
        }
        match key {
            Key::Char('a') => self.select_all(),
            Key::Backspace | Key::Delete => self.delete_selected(),
            Key::Escape => {
                self.menu.hide();
                self.selection.cancel();
            }
            _ => return,
        }
        self.redraw = true;
    }

    fn edit_focused(&mut self, key: Key) {
        match key {
            Key::Enter | Key::Escape => self.blur(),
            _ => {
                let Some(input) = self.focused_input_mut() else { return };
                match key {
                    Key::Char(c) if !c.is_control() => input.insert_char(c),
                    Key::Backspace => input.backspace(),
                    Key::ArrowLeft => input.move_left(),
                    Key::ArrowRight => input.move_right(),
                    _ => return,
                }
                self.relayout();
            }
        }
        self.redraw = true;
    }

    /// Advance the clock to `now` (monotonic, host supplied) and run due timers.
    pub fn tick(&mut self, now: Duration) {
        self.clock = now;
        let fired = self.timers.poll(now);
        if fired.is_empty() {
            return;
        }
        if let Some(input) = self.focused_input_mut() {
            if fired.contains(&input.timer()) && input.blink() {
                self.redraw = true;
            }
        }
    }

    // ── drawing ─────────────────────────────────────────────────────────────

    /// Full repaint of `viewport`: background, selection area, blocks in
    /// z-order, links, the pending link tether, then the context menu.
    pub fn draw(&mut self, canvas: &mut dyn Canvas, viewport: Rect) {
        self.relayout();
        canvas.clear(viewport, self.config.background);
        if self.selection.is_active() {
            render::draw_selection_area(canvas, self.selection.rect());
        }
        for block in self.blocks.values() {
            render::draw_block(canvas, block);
        }
        for conn in self.connections.iter() {
            if let (Some(out), Some(inp)) = (self.port(conn.output), self.port(conn.input)) {
                render::draw_connection(canvas, out.center, inp.center, out.kind.color());
            }
        }
        for port in self.ports().filter(|p| p.is_dragging()) {
            let to = self.snap_target(port, self.pointer).map_or(self.pointer, |target| target.center);
            render::draw_tether(canvas, port.center, to, port.kind.color());
        }
        render::draw_context_menu(canvas, &self.menu);
        self.redraw = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> GraphSurface {
        GraphSurface::headless(EditorConfig::default())
    }

    #[test]
    fn test_default_block_contents() {
        let mut s = surface();
        let id = s.create_default_block(Pos::new(150.0, 150.0));
        let b = s.block(id).unwrap();
        assert_eq!(b.rect, Rect::new(100.0, 100.0, 200.0, 120.0));
        let labels: Vec<&str> = b.widgets.iter().map(|w| w.label()).collect();
        assert_eq!(labels, ["Button 1", "Button 2", "input?"]);
        assert_eq!(b.ports.len(), 2);
        assert_eq!(b.ports[0].kind, PortKind::Input);
        assert_eq!(b.ports[0].center, Pos::new(100.0, 150.0));
        assert_eq!(b.ports[1].center, Pos::new(300.0, 175.0));
        assert_eq!(s.ports().count(), 2);
        assert_eq!(s.active_timers(), 1);
        assert_eq!(s.highest_id(), 6);
    }

    #[test]
    fn test_add_to_missing_block() {
        let mut s = surface();
        assert_eq!(s.add_port(BlockId(9), PortKind::Input), Err(GraphError::BlockNotFound(BlockId(9))));
        assert!(s.add_text_input(BlockId(9), "x").is_err());
        assert_eq!(s.active_timers(), 0);
    }

    #[test]
    fn test_header_press_raises_block() {
        let mut s = surface();
        let a = s.create_block(Rect::new(0.0, 0.0, 100.0, 100.0));
        let b = s.create_block(Rect::new(50.0, 0.0, 100.0, 100.0));
        s.pointer_down(Pos::new(20.0, 10.0), PointerButton::Primary);
        assert_eq!(s.dragged_block(), Some(a));
        assert_eq!(s.blocks().last().map(|blk| blk.id), Some(a));
        assert_eq!(s.cursor(), CursorIcon::Move);
        s.pointer_up(Pos::new(20.0, 10.0));
        assert_eq!(s.dragged_block(), None);
        assert_eq!(s.block_at(Pos::new(75.0, 50.0)).map(|(id, _)| id), Some(a));
        assert_ne!(a, b);
    }

    #[test]
    fn test_tick_blinks_only_focused_input() {
        let mut s = surface();
        let id = s.create_default_block(Pos::new(150.0, 150.0));
        s.take_redraw();
        s.tick(Duration::from_millis(500));
        assert!(!s.needs_redraw());

        let input_bounds = s.block(id).unwrap().widgets[2].bounds;
        s.pointer_down(Pos::new(input_bounds.x + 2.0, input_bounds.y + 2.0), PointerButton::Primary);
        s.pointer_up(Pos::new(input_bounds.x + 2.0, input_bounds.y + 2.0));
        assert!(s.focused_input().unwrap().caret_visible());
        s.take_redraw();
        s.tick(Duration::from_millis(900));
        assert!(!s.needs_redraw());
        s.tick(Duration::from_millis(1000));
        assert!(s.take_redraw());
        assert!(!s.focused_input().unwrap().caret_visible());
    }
}
