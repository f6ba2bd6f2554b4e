//! The block graph editor engine.
//!
//! Host independent: a [`GraphSurface`] receives pointer, key and tick events
//! in canvas coordinates and draws itself onto any [`crate::canvas::Canvas`].
//!
//! - **Blocks**: draggable rectangles with a header, widgets and ports
//! - **Connections**: output/input links created by dragging between ports
//! - **Selection**: rubber-band selection and group dragging
//! - **Context menu**: per-block menu opened on the header

pub mod block;
pub mod connections;
pub mod context_menu;
pub mod layout;
pub mod port;
pub mod render;
pub mod selection;
pub mod surface;
pub mod timers;
pub mod widget;

pub use block::Block;
pub use connections::{Connection, ConnectionChange, ConnectionSet};
pub use context_menu::ContextMenu;
pub use layout::{BlockLayout, apply_layout, layout_block};
pub use port::{ConnectionPoint, PortKind};
pub use selection::SelectionRegion;
pub use surface::{CursorIcon, GraphSurface, Key, Notice, NoticeLevel, PointerButton};
pub use timers::{TimerId, Timers};
pub use widget::{Action, Button, TextInput, Widget, WidgetKind, WidgetTag};
