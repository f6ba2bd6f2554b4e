//! Per-frame placement of a block's widgets and ports.
//!
//! Children carry no placement authority of their own: everything is derived
//! from the block's current rectangle, so moving a block moves its children
//! on the next pass.

use crate::canvas::TextMeasure;
use crate::geometry::{Pos, Rect};
use crate::ids::{PortId, WidgetId};

use super::block::Block;
use super::port::PortKind;
use super::widget::{WIDGET_HEIGHT, WIDGET_PADDING};

const WIDGET_INSET_X: f32 = 10.0;
const WIDGET_TOP: f32 = 40.0;
const WIDGET_PITCH: f32 = 25.0;
const PORT_TOP: f32 = 50.0;
const PORT_PITCH: f32 = 25.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockLayout {
    pub widgets: Vec<(WidgetId, Rect)>,
    pub ports: Vec<(PortId, Pos)>,
}

pub fn layout_block(block: &Block, measure: &dyn TextMeasure) -> BlockLayout {
    let r = block.rect;
    let widgets = block
        .widgets
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let width = measure.text_width(w.label()) + WIDGET_PADDING;
            let y = r.y + WIDGET_TOP + WIDGET_PITCH * i as f32;
            (w.id, Rect::new(r.x + WIDGET_INSET_X, y, width, WIDGET_HEIGHT))
        })
        .collect();
    let ports = block
        .ports
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = match p.kind {
                PortKind::Input => r.x,
                PortKind::Output => r.right(),
            };
            (p.id, Pos::new(x, r.y + PORT_TOP + PORT_PITCH * i as f32))
        })
        .collect();
    BlockLayout { widgets, ports }
}

/// Write a computed layout back onto the block's children.
pub fn apply_layout(block: &mut Block, layout: &BlockLayout) {
    for (w, (id, bounds)) in block.widgets.iter_mut().zip(&layout.widgets) {
        debug_assert_eq!(w.id, *id);
        w.bounds = *bounds;
    }
    for (p, (id, center)) in block.ports.iter_mut().zip(&layout.ports) {
        debug_assert_eq!(p.id, *id);
        p.center = *center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::MonospaceMeasure;
    use crate::color::Rgba;
    use crate::editor::timers::TimerId;
    use crate::editor::widget::{Action, Button, TextInput, Widget};
    use crate::ids::BlockId;

    #[test]
    fn test_slots_follow_block_position() {
        let mut b = Block::new(BlockId(1), Rect::new(10.0, 20.0, 200.0, 100.0), Rgba::WHITE, Rgba::BLACK, "B");
        b.add_widget(Widget::button(WidgetId(2), Button::new("Button 1", Action::Notify(String::new()))));
        b.add_widget(Widget::text_input(WidgetId(3), TextInput::new("input?", TimerId::for_tests(1))));
        b.add_port(PortId(4), PortKind::Input, 6.0);
        b.add_port(PortId(5), PortKind::Output, 6.0);

        let layout = layout_block(&b, &MonospaceMeasure { advance: 6.0 });
        assert_eq!(layout.widgets[0], (WidgetId(2), Rect::new(20.0, 60.0, 58.0, 20.0)));
        assert_eq!(layout.widgets[1], (WidgetId(3), Rect::new(20.0, 85.0, 46.0, 20.0)));
        assert_eq!(layout.ports[0], (PortId(4), Pos::new(10.0, 70.0)));
        assert_eq!(layout.ports[1], (PortId(5), Pos::new(210.0, 95.0)));

        apply_layout(&mut b, &layout);
        assert_eq!(b.ports[1].center, Pos::new(210.0, 95.0));
        assert_eq!(b.widgets[0].bounds.w, 58.0);
    }
}
