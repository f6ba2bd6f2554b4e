//! Connection points ("ports") attached to the sides of a block.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::geometry::{Pos, point_in_circle};
use crate::ids::{BlockId, PortId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortKind {
    Input,
    Output,
}

impl PortKind {
    /// Only an input and an output can be linked.
    pub fn is_compatible(self, other: PortKind) -> bool {
        self != other
    }

    pub fn color(self) -> Rgba {
        match self {
            PortKind::Input => Rgba::rgb(0, 0, 255),
            PortKind::Output => Rgba::rgb(255, 0, 0),
        }
    }
}

/// A circular port. Owned by its block; `block` is a lookup handle only.
#[derive(Clone, Debug)]
pub struct ConnectionPoint {
    pub id: PortId,
    pub kind: PortKind,
    pub block: BlockId,
    pub center: Pos,
    pub radius: f32,
    dragging: bool,
}

impl ConnectionPoint {
    pub fn new(id: PortId, kind: PortKind, block: BlockId, center: Pos, radius: f32) -> Self {
        Self { id, kind, block, center, radius, dragging: false }
    }

    pub fn hit_test(&self, p: Pos, margin: f32) -> bool {
        point_in_circle(p, self.center, self.radius, margin)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start a connection drag when `p` is on the port itself (no margin).
    pub fn begin_drag(&mut self, p: Pos) -> bool {
        if self.hit_test(p, 0.0) {
            self.dragging = true;
            true
        } else {
            false
        }
    }

    /// Leave the dragging state, reporting whether a drag was in progress.
    pub fn end_drag(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    /// Whether pointer movement should repaint this port; a visible context
    /// menu obstructs hover feedback.
    pub fn on_hover(&self, menu_visible: bool) -> bool {
        !menu_visible
    }

    pub fn is_compatible(&self, other: &ConnectionPoint) -> bool {
        self.kind.is_compatible(other.kind)
    }
}
