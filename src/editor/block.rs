//! Blocks: draggable, selectable rectangles owning widgets and ports.

use crate::color::Rgba;
use crate::geometry::{Pos, Rect, Vec2, point_in_rect};
use crate::ids::{BlockId, PortId, WidgetId};

use super::port::{ConnectionPoint, PortKind};
use super::timers::{TimerId, Timers};
use super::widget::{Widget, WidgetTag};

/// Height of the header band; pressing inside it starts a block drag.
pub const HEADER_HEIGHT: f32 = 30.0;
/// Horizontal spacing between stacked ports at creation time.
const PORT_SPACING: f32 = 30.0;

#[derive(Clone, Debug)]
pub struct Block {
    pub id: BlockId,
    pub rect: Rect,
    pub color: Rgba,
    pub header_color: Rgba,
    pub text: String,
    pub widgets: Vec<Widget>,
    pub ports: Vec<ConnectionPoint>,
    pub selected: bool,
}

impl Block {
    pub fn new(id: BlockId, rect: Rect, color: Rgba, header_color: Rgba, text: impl Into<String>) -> Self {
        Self {
            id,
            rect,
            color,
            header_color,
            text: text.into(),
            widgets: Vec::new(),
            ports: Vec::new(),
            selected: false,
        }
    }

    pub fn add_widget(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    /// Append a port. Inputs start left of the block, outputs right of it,
    /// each further port of the same kind one spacing further out; the next
    /// layout pass snaps it to the block edge.
    pub fn add_port(&mut self, id: PortId, kind: PortKind, radius: f32) -> &ConnectionPoint {
        let same_kind = self.ports.iter().filter(|p| p.kind == kind).count() as f32;
        let x = match kind {
            PortKind::Input => self.rect.x - PORT_SPACING - PORT_SPACING * same_kind,
            PortKind::Output => self.rect.right() + PORT_SPACING + PORT_SPACING * same_kind,
        };
        let center = Pos::new(x, self.rect.y + self.rect.h / 2.0);
        let idx = self.ports.len();
        self.ports.push(ConnectionPoint::new(id, kind, self.id, center, radius));
        &self.ports[idx]
    }

    pub fn hit_test(&self, p: Pos) -> bool {
        point_in_rect(p, self.rect)
    }

    pub fn is_in_header(&self, y: f32) -> bool {
        y <= self.rect.y + HEADER_HEIGHT
    }

    pub fn header_rect(&self) -> Rect {
        Rect::new(self.rect.x, self.rect.y, self.rect.w, HEADER_HEIGHT)
    }

    /// First widget (insertion order) under `p`, optionally of one kind only.
    pub fn widget_at(&self, p: Pos, filter: Option<WidgetTag>) -> Option<&Widget> {
        self.widgets
            .iter()
            .filter(|w| filter.is_none_or(|tag| w.tag() == tag))
            .find(|w| w.hit_test(p))
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id == id)
    }

    pub fn port(&self, id: PortId) -> Option<&ConnectionPoint> {
        self.ports.iter().find(|p| p.id == id)
    }

    pub fn port_mut(&mut self, id: PortId) -> Option<&mut ConnectionPoint> {
        self.ports.iter_mut().find(|p| p.id == id)
    }

    pub fn translate(&mut self, d: Vec2) {
        self.rect.translate(d);
    }

    /// Background timers held by this block's widgets.
    pub fn timers(&self) -> impl Iterator<Item = TimerId> + '_ {
        self.widgets.iter().filter_map(|w| w.as_text_input().map(|t| t.timer()))
    }

    /// Tear the block down: stop its widget timers and hand back the port ids
    /// so the caller can sever links and drop index entries.
    pub fn destroy(self, timers: &mut Timers) -> Vec<PortId> {
        for t in self.timers() {
            timers.cancel(t);
        }
        self.ports.into_iter().map(|p| p.id).collect()
    }
}
