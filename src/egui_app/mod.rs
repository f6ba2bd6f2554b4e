//! Egui-based native front end for the editor engine (feature = "egui").
//!
//! [`EditorApp`] owns a [`GraphSurface`], translates egui input events into
//! surface events in canvas coordinates, feeds it the frame clock and paints
//! it through [`EguiCanvas`]. Run it with `eframe::run_native`.

#![cfg(feature = "egui")]

mod canvas;

use std::time::Duration;

use egui::Sense;

use crate::config::EditorConfig;
use crate::editor::{CursorIcon, GraphSurface, Key, NoticeLevel, PointerButton};
use crate::geometry::{Pos, Rect, Vec2};

pub use canvas::{EguiCanvas, EguiMeasure, to_color32};

pub struct EditorApp {
    surface: GraphSurface,
    /// Last pointer position in canvas coordinates, for move deltas.
    last_pointer: Option<Pos>,
}

impl EditorApp {
    pub fn new(ctx: &egui::Context, config: EditorConfig) -> Self {
        let surface = GraphSurface::new(config, EguiMeasure::new(ctx.clone()));
        Self { surface, last_pointer: None }
    }

    pub fn surface(&self) -> &GraphSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut GraphSurface {
        &mut self.surface
    }

    fn handle_events(&mut self, events: &[egui::Event], origin: egui::Pos2) {
        let to_canvas = |p: egui::Pos2| Pos::new(p.x - origin.x, p.y - origin.y);
        for event in events {
            match event {
                egui::Event::PointerMoved(p) => {
                    let pos = to_canvas(*p);
                    let delta = self.last_pointer.map_or(Vec2::ZERO, |last| Vec2::new(pos.x - last.x, pos.y - last.y));
                    self.last_pointer = Some(pos);
                    self.surface.pointer_move(pos, delta);
                }
                egui::Event::PointerButton { pos, button, pressed, .. } => {
                    let pos = to_canvas(*pos);
                    self.last_pointer = Some(pos);
                    if !*pressed {
                        self.surface.pointer_up(pos);
                    } else if let Some(button) = map_button(*button) {
                        self.surface.pointer_down(pos, button);
                    }
                }
                egui::Event::PointerGone => self.last_pointer = None,
                egui::Event::Text(text) => {
                    for c in text.chars() {
                        self.surface.key_down(Key::Char(c));
                    }
                }
                egui::Event::Key { key, pressed: true, .. } => {
                    if let Some(key) = map_key(*key) {
                        self.surface.key_down(key);
                    }
                }
                _ => {}
            }
        }
    }

    /// Show the oldest pending notice as a modal window. The canvas ignores
    /// input while one is showing.
    fn show_notice(&mut self, ctx: &egui::Context) -> bool {
        let Some(notice) = self.surface.pending_notice().cloned() else {
            return false;
        };
        let title = match notice.level {
            NoticeLevel::Info => "Notice",
            NoticeLevel::Fatal => "Error",
        };
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice.message.as_str());
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.surface.dismiss_notice();
                }
            });
        true
    }
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

// Printable keys arrive through `Event::Text`.
fn map_key(key: egui::Key) -> Option<Key> {
    Some(match key {
        egui::Key::Backspace => Key::Backspace,
        egui::Key::Delete => Key::Delete,
        egui::Key::Enter => Key::Enter,
        egui::Key::Escape => Key::Escape,
        egui::Key::ArrowLeft => Key::ArrowLeft,
        egui::Key::ArrowRight => Key::ArrowRight,
        _ => return None,
    })
}

fn map_cursor(cursor: CursorIcon) -> egui::CursorIcon {
    match cursor {
        CursorIcon::Default => egui::CursorIcon::Default,
        CursorIcon::Pointer => egui::CursorIcon::PointingHand,
        CursorIcon::Move => egui::CursorIcon::Grabbing,
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));
        self.surface.tick(now);

        let blocked = self.show_notice(ctx);

        let background = to_color32(self.surface.config().background);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let avail = ui.max_rect();
                let _ = ui.allocate_rect(avail, Sense::click_and_drag());
                if !blocked {
                    let events = ui.input(|i| i.events.clone());
                    self.handle_events(&events, avail.min);
                }
                let viewport = Rect::new(0.0, 0.0, avail.width(), avail.height());
                let mut canvas = EguiCanvas::new(ui.painter_at(avail), avail.min);
                self.surface.draw(&mut canvas, viewport);
            });

        ctx.set_cursor_icon(map_cursor(self.surface.cursor()));
        // Events and ticks are handled before painting, so the frame is current.
        // A focused input still needs frames for its caret blink.
        if self.surface.is_input_suppressed() {
            ctx.request_repaint_after(self.surface.config().caret_blink_interval() / 2);
        }
    }
}
