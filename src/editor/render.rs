//! Drawing of blocks, widgets, ports and overlays onto a [`Canvas`].

use crate::canvas::{Canvas, Corners, Shadow, Stroke};
use crate::color::Rgba;
use crate::geometry::{Pos, Rect, Vec2};

use super::block::Block;
use super::context_menu::ContextMenu;
use super::port::ConnectionPoint;
use super::widget::{Widget, WidgetKind};

const BLOCK_RADIUS: f32 = 5.0;
const WIDGET_RADIUS: f32 = 2.0;
const TEXT_COLOR: Rgba = Rgba::BLACK;
const BUTTON_FILL: Rgba = Rgba::rgb(0xdd, 0xdd, 0xdd);
const INPUT_BORDER: Rgba = Rgba::rgb(0x99, 0x99, 0x99);
const PLACEHOLDER_COLOR: Rgba = Rgba::rgb(0x88, 0x88, 0x88);
const PORT_OUTLINE: Rgba = Rgba::rgb(0x22, 0x22, 0x22);
const MENU_FILL: Rgba = Rgba::rgb(0xf0, 0xf0, 0xf0);

fn drop_shadow() -> Shadow {
    Shadow { color: Rgba::with_alpha(0, 0, 0, 0.3), blur: 5.0, offset: Vec2::new(3.0, 3.0) }
}

fn selection_tint() -> Rgba {
    Rgba::with_alpha(80, 188, 255, 0.3)
}

/// Body, header, outline, text and widgets in shadow; ports on top without it.
pub fn draw_block(canvas: &mut dyn Canvas, block: &Block) {
    let r = block.rect;
    canvas.set_shadow(Some(drop_shadow()));
    canvas.fill_rounded_rect(r, BLOCK_RADIUS, Corners::ALL, block.color);
    if block.selected {
        canvas.stroke_rounded_rect(r, BLOCK_RADIUS, Corners::ALL, Stroke::new(4.0, selection_tint()));
    }
    canvas.fill_rounded_rect(block.header_rect(), BLOCK_RADIUS, Corners::TOP, block.header_color);
    if block.selected {
        canvas.stroke_rounded_rect(block.header_rect(), BLOCK_RADIUS, Corners::TOP, Stroke::new(2.0, selection_tint()));
    }
    canvas.text(Pos::new(r.x + 10.0, r.y + 20.0), &block.text, TEXT_COLOR);
    for w in &block.widgets {
        draw_widget(canvas, w);
    }
    canvas.set_shadow(None);

    for p in &block.ports {
        draw_port(canvas, p);
    }
}

pub fn draw_widget(canvas: &mut dyn Canvas, widget: &Widget) {
    let b = widget.bounds;
    let text_pos = Pos::new(b.x + 5.0, b.y + 15.0);
    match &widget.kind {
        WidgetKind::Button(button) => {
            canvas.fill_rounded_rect(b, WIDGET_RADIUS, Corners::ALL, BUTTON_FILL);
            canvas.text(text_pos, &button.label, TEXT_COLOR);
        }
        WidgetKind::TextInput(input) => {
            canvas.fill_rounded_rect(b, WIDGET_RADIUS, Corners::ALL, Rgba::WHITE);
            canvas.stroke_rounded_rect(b, WIDGET_RADIUS, Corners::ALL, Stroke::new(1.0, INPUT_BORDER));
            if input.text().is_empty() {
                canvas.text(text_pos, &input.placeholder, PLACEHOLDER_COLOR);
            } else {
                canvas.text(text_pos, input.text(), TEXT_COLOR);
            }
            if input.is_focused() && input.caret_visible() {
                let x = text_pos.x + canvas.text_width(input.text_before_caret());
                canvas.fill_rounded_rect(Rect::new(x, b.y + 3.0, 1.0, b.h - 6.0), 0.0, Corners::NONE, TEXT_COLOR);
            }
        }
    }
}

pub fn draw_port(canvas: &mut dyn Canvas, port: &ConnectionPoint) {
    canvas.fill_circle(port.center, port.radius, port.kind.color());
    canvas.stroke_circle(port.center, port.radius, Stroke::new(2.0, PORT_OUTLINE));
}

/// Horizontal-tangent cubic from `from` (output side) to `to`.
pub fn draw_connection(canvas: &mut dyn Canvas, from: Pos, to: Pos, color: Rgba) {
    let dx = (to.x - from.x).abs();
    let dir = if from.x < to.x { 1.0 } else { -1.0 };
    let c1 = Pos::new(from.x + dx * 0.25 * dir, from.y);
    let c2 = Pos::new(from.x + dx * 0.75 * dir, to.y);
    canvas.bezier(from, c1, c2, to, Stroke::new(2.0, color));
}

/// Straight line from a dragged port to its pending target.
pub fn draw_tether(canvas: &mut dyn Canvas, from: Pos, to: Pos, color: Rgba) {
    canvas.bezier(from, from, to, to, Stroke::new(2.0, color));
}

pub fn draw_selection_area(canvas: &mut dyn Canvas, area: Rect) {
    canvas.fill_rounded_rect(area, 0.0, Corners::NONE, Rgba::with_alpha(135, 206, 250, 0.3));
    canvas.stroke_rounded_rect(area, 0.0, Corners::NONE, Stroke::new(1.0, selection_tint()));
}

pub fn draw_context_menu(canvas: &mut dyn Canvas, menu: &ContextMenu) {
    if !menu.is_visible() {
        return;
    }
    canvas.set_shadow(Some(drop_shadow()));
    canvas.fill_rounded_rect(menu.bounds(), BLOCK_RADIUS, Corners::ALL, MENU_FILL);
    for entry in menu.entries() {
        draw_widget(canvas, entry);
    }
    canvas.set_shadow(None);
}
