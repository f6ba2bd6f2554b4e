//! Interactive block graph editor.
//!
//! This crate provides a [`editor::GraphSurface`] holding blocks with embedded
//! widgets and typed connection ports, plus the links between them. The engine
//! is independent of any windowing toolkit; it is driven by plain pointer, key
//! and tick events and paints through the [`canvas::Canvas`] trait.
//!
//! The binary `blockgraph` opens the editor in a native window.

pub mod canvas;
pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod logging;

// The native front end lives behind the `egui` feature flag.
#[cfg(feature = "egui")]
pub mod egui_app;
