//! [`Canvas`] implementation over an `egui::Painter`.

use egui::epaint::CubicBezierShape;
use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2};

use crate::canvas::{Canvas, Corners, Shadow, Stroke, TextMeasure};
use crate::color::Rgba;
use crate::geometry::{Pos, Rect};

const FONT_SIZE: f32 = 12.0;

pub fn to_color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.0, c.1, c.2, c.3)
}

fn to_stroke(s: Stroke) -> egui::Stroke {
    egui::Stroke::new(s.width, to_color32(s.color))
}

fn corner_radius(radius: f32, corners: Corners) -> CornerRadius {
    let r = radius.round().clamp(0.0, u8::MAX as f32) as u8;
    let pick = |c: Corners| if corners.has(c) { r } else { 0 };
    CornerRadius {
        nw: pick(Corners::TOP_LEFT),
        ne: pick(Corners::TOP_RIGHT),
        sw: pick(Corners::BOTTOM_LEFT),
        se: pick(Corners::BOTTOM_RIGHT),
    }
}

/// Text metrics from the egui font system.
#[derive(Clone)]
pub struct EguiMeasure {
    ctx: egui::Context,
}

impl EguiMeasure {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for EguiMeasure {
    fn text_width(&self, text: &str) -> f32 {
        let galley = self
            .ctx
            .fonts_mut(|f| f.layout_no_wrap(text.to_string(), FontId::proportional(FONT_SIZE), Color32::BLACK));
        galley.size().x
    }
}

/// Paints canvas coordinates offset by `origin` (the panel's top-left corner).
pub struct EguiCanvas {
    painter: Painter,
    origin: Pos2,
    shadow: Option<Shadow>,
}

impl EguiCanvas {
    pub fn new(painter: Painter, origin: Pos2) -> Self {
        Self { painter, origin, shadow: None }
    }

    fn pos(&self, p: Pos) -> Pos2 {
        Pos2::new(self.origin.x + p.x, self.origin.y + p.y)
    }

    fn rect(&self, r: Rect) -> egui::Rect {
        egui::Rect::from_min_size(self.pos(r.min()), egui::vec2(r.w, r.h))
    }
}

impl TextMeasure for EguiCanvas {
    fn text_width(&self, text: &str) -> f32 {
        let galley = self
            .painter
            .layout_no_wrap(text.to_string(), FontId::proportional(FONT_SIZE), Color32::BLACK);
        galley.size().x
    }
}

impl Canvas for EguiCanvas {
    fn clear(&mut self, rect: Rect, color: Rgba) {
        self.painter.rect_filled(self.rect(rect), 0.0, to_color32(color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, corners: Corners, color: Rgba) {
        let cr = corner_radius(radius, corners);
        // Blur is approximated by a single offset layer.
        if let Some(shadow) = self.shadow {
            let shifted = self.rect(rect).translate(egui::vec2(shadow.offset.x, shadow.offset.y));
            self.painter.rect_filled(shifted, cr, to_color32(shadow.color));
        }
        self.painter.rect_filled(self.rect(rect), cr, to_color32(color));
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, corners: Corners, stroke: Stroke) {
        self.painter.rect_stroke(
            self.rect(rect),
            corner_radius(radius, corners),
            to_stroke(stroke),
            egui::StrokeKind::Outside,
        );
    }

    fn fill_circle(&mut self, center: Pos, radius: f32, color: Rgba) {
        self.painter.circle_filled(self.pos(center), radius, to_color32(color));
    }

    fn stroke_circle(&mut self, center: Pos, radius: f32, stroke: Stroke) {
        self.painter.circle_stroke(self.pos(center), radius, to_stroke(stroke));
    }

    fn bezier(&mut self, from: Pos, c1: Pos, c2: Pos, to: Pos, stroke: Stroke) {
        let points = [self.pos(from), self.pos(c1), self.pos(c2), self.pos(to)];
        let shape = CubicBezierShape::from_points_stroke(points, false, Color32::TRANSPARENT, to_stroke(stroke));
        self.painter.add(shape);
    }

    fn text(&mut self, pos: Pos, text: &str, color: Rgba) {
        self.painter.text(
            self.pos(pos),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(FONT_SIZE),
            to_color32(color),
        );
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.shadow = shadow;
    }
}
