//! The drawing surface the editor renders onto.
//!
//! The engine only needs a handful of 2D primitives; hosts implement
//! [`Canvas`] over their painter (see `egui_app::EguiCanvas`). Headless users
//! and tests use [`MonospaceMeasure`] and [`RecordingCanvas`].

use crate::color::Rgba;
use crate::geometry::{Pos, Rect, Vec2};

/// Rounded-corner selection, one bit per corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Corners(pub u8);

impl Corners {
    pub const NONE: Corners = Corners(0);
    pub const TOP_RIGHT: Corners = Corners(1);
    pub const BOTTOM_RIGHT: Corners = Corners(2);
    pub const BOTTOM_LEFT: Corners = Corners(4);
    pub const TOP_LEFT: Corners = Corners(8);
    pub const TOP: Corners = Corners(1 | 8);
    pub const ALL: Corners = Corners(15);

    pub fn has(self, corner: Corners) -> bool {
        self.0 & corner.0 == corner.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Rgba,
}

impl Stroke {
    pub const fn new(width: f32, color: Rgba) -> Self {
        Self { width, color }
    }
}

/// Drop shadow applied to subsequent fills until cleared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Rgba,
    pub blur: f32,
    pub offset: Vec2,
}

/// Rendered width of a string in the active font.
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> f32;
}

pub trait Canvas: TextMeasure {
    fn clear(&mut self, rect: Rect, color: Rgba);
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, corners: Corners, color: Rgba);
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, corners: Corners, stroke: Stroke);
    fn fill_circle(&mut self, center: Pos, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Pos, radius: f32, stroke: Stroke);
    fn bezier(&mut self, from: Pos, c1: Pos, c2: Pos, to: Pos, stroke: Stroke);
    /// Draw text with its baseline-left corner at `pos`.
    fn text(&mut self, pos: Pos, text: &str, color: Rgba);
    fn set_shadow(&mut self, shadow: Option<Shadow>);
}

/// Fixed advance per character; good enough for headless layout.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMeasure {
    pub advance: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance: 6.0 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}

/// One recorded primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillRect { rect: Rect, radius: f32, corners: Corners, color: Rgba },
    StrokeRect { rect: Rect, radius: f32, corners: Corners, stroke: Stroke },
    FillCircle { center: Pos, radius: f32, color: Rgba },
    StrokeCircle { center: Pos, radius: f32, stroke: Stroke },
    Bezier { from: Pos, c1: Pos, c2: Pos, to: Pos, stroke: Stroke },
    Text { pos: Pos, text: String, color: Rgba },
    Shadow(Option<Shadow>),
}

/// Canvas that records every call instead of painting.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub measure: MonospaceMeasure,
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn beziers(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Bezier { .. })).count()
    }
}

impl TextMeasure for RecordingCanvas {
    fn text_width(&self, text: &str) -> f32 {
        self.measure.text_width(text)
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, rect: Rect, _color: Rgba) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, corners: Corners, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, radius, corners, color });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, corners: Corners, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeRect { rect, radius, corners, stroke });
    }

    fn fill_circle(&mut self, center: Pos, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Pos, radius: f32, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, stroke });
    }

    fn bezier(&mut self, from: Pos, c1: Pos, c2: Pos, to: Pos, stroke: Stroke) {
        self.commands.push(DrawCommand::Bezier { from, c1, c2, to, stroke });
    }

    fn text(&mut self, pos: Pos, text: &str, color: Rgba) {
        self.commands.push(DrawCommand::Text { pos, text: text.to_string(), color });
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.commands.push(DrawCommand::Shadow(shadow));
    }
}
