//! Identity allocation for blocks, widgets and ports.
//!
//! All identity-bearing entities of one surface draw from a single
//! [`IdSequence`], so a newly created entity always carries a strictly
//! greater number than everything created before it.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($name:ident, $prefix:literal) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

id_type!(BlockId, "block");
id_type!(PortId, "port");
id_type!(WidgetId, "widget");

/// Monotonic sequence shared by every entity of a surface.
#[derive(Clone, Debug, Default)]
pub struct IdSequence {
    highest: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue numbering after `highest` (e.g. when several surfaces share a namespace).
    pub fn starting_after(highest: u64) -> Self {
        Self { highest }
    }

    /// The most recently issued value (0 when nothing was issued yet).
    pub fn highest(&self) -> u64 {
        self.highest
    }

    fn next(&mut self) -> u64 {
        self.highest += 1;
        self.highest
    }

    pub fn next_block(&mut self) -> BlockId {
        BlockId(self.next())
    }

    pub fn next_port(&mut self) -> PortId {
        PortId(self.next())
    }

    pub fn next_widget(&mut self) -> WidgetId {
        WidgetId(self.next())
    }
}
