use crate::geometry::{Rect, Size};
use crate::layout::{FlowItem, Placement};
use crate::style::{BoxStyle, RenderedBlock};

/// A rectangle of rendered text whose size follows its content.
///
/// `width`/`height` exclude the style margins: they cover exactly the cells
/// the colored body occupies once composed, which is what hit-testing needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowBox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub row: usize,
    pub col: usize,
    content: String,
    rendered: RenderedBlock,
}

impl FlowBox {
    pub fn new(content: impl Into<String>, style: &BoxStyle) -> Self {
        let mut flow_box = Self::default();
        flow_box.update_content(content, style);
        flow_box
    }

    /// Re-derive the rendered block and size from `content`. Position is
    /// left untouched until the next pack pass.
    pub fn update_content(&mut self, content: impl Into<String>, style: &BoxStyle) {
        let content = content.into();
        let rendered = style.render(&content);
        self.width = rendered.width.saturating_sub(style.margin_left);
        self.height = rendered.height.saturating_sub(style.margin_top);
        self.rendered = rendered;
        self.content = content;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn rendered(&self) -> &RenderedBlock {
        &self.rendered
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn placement(&self) -> Placement {
        Placement {
            x: self.x,
            y: self.y,
            row: self.row,
            col: self.col,
        }
    }
}

impl FlowItem for FlowBox {
    fn extent(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn place(&mut self, placement: Placement) {
        self.x = placement.x;
        self.y = placement.y;
        self.row = placement.row;
        self.col = placement.col;
    }
}

/// Box labelled with a click counter. The label is always `Count: N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterBox {
    inner: FlowBox,
    counter: u32,
}

impl CounterBox {
    pub fn new(style: &BoxStyle) -> Self {
        Self::with_count(0, style)
    }

    pub fn with_count(counter: u32, style: &BoxStyle) -> Self {
        Self {
            inner: FlowBox::new(label(counter), style),
            counter,
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn set_counter(&mut self, counter: u32, style: &BoxStyle) {
        self.counter = counter;
        self.inner.update_content(label(counter), style);
    }

    pub fn increment(&mut self, style: &BoxStyle) {
        self.set_counter(self.counter.saturating_add(1), style);
    }

    pub fn flow_box(&self) -> &FlowBox {
        &self.inner
    }

    pub fn rect(&self) -> Rect {
        self.inner.rect()
    }

    pub fn content(&self) -> &str {
        self.inner.content()
    }

    pub fn rendered(&self) -> &RenderedBlock {
        self.inner.rendered()
    }

    pub fn row(&self) -> usize {
        self.inner.row
    }
}

impl FlowItem for CounterBox {
    fn extent(&self) -> Size {
        self.inner.extent()
    }

    fn place(&mut self, placement: Placement) {
        self.inner.place(placement);
    }
}

fn label(counter: u32) -> String {
    format!("Count: {counter}")
}
