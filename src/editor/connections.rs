//! Links between ports, stored as edge records owned by the graph.
//!
//! A link always joins one output and one input, so an edge is keyed by the
//! (output, input) pair regardless of which end the user dragged from. That
//! makes toggling symmetric: dragging A onto B and B onto A address the same
//! record.

use indexmap::IndexSet;

use crate::ids::PortId;

use super::port::PortKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Connection {
    pub output: PortId,
    pub input: PortId,
}

impl Connection {
    /// Normalize two endpoints into an edge; `None` when the kinds match.
    pub fn between(a: (PortId, PortKind), b: (PortId, PortKind)) -> Option<Self> {
        match (a.1, b.1) {
            (PortKind::Output, PortKind::Input) => Some(Self { output: a.0, input: b.0 }),
            (PortKind::Input, PortKind::Output) => Some(Self { output: b.0, input: a.0 }),
            _ => None,
        }
    }

    pub fn touches(&self, port: PortId) -> bool {
        self.output == port || self.input == port
    }
}

/// Outcome of [`ConnectionSet::toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionChange {
    Connected(Connection),
    Disconnected(Connection),
}

#[derive(Clone, Debug, Default)]
pub struct ConnectionSet {
    edges: IndexSet<Connection>,
}

impl ConnectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, conn: &Connection) -> bool {
        self.edges.contains(conn)
    }

    /// Remove the edge if present, add it otherwise.
    pub fn toggle(&mut self, conn: Connection) -> ConnectionChange {
        if self.edges.shift_remove(&conn) {
            ConnectionChange::Disconnected(conn)
        } else {
            self.edges.insert(conn);
            ConnectionChange::Connected(conn)
        }
    }

    /// Drop every edge touching `port`; returns how many were removed.
    pub fn sever(&mut self, port: PortId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|c| !c.touches(port));
        before - self.edges.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.edges.iter()
    }
}
