use crate::boxes::CounterBox;
use crate::geometry::{Point, Size};
use crate::hit;
use crate::layout::{FlowConfig, FlowLayout};
use crate::render::compose_rows;
use crate::style::BoxStyle;

use super::{AppEvent, Control, Effects};

/// Everything the app knows: boxes in creation order, the viewport and the
/// pointer state. One instance is owned by the runtime and mutated only
/// through [`AppState::handle`] or the per-event methods below.
#[derive(Debug, Clone)]
pub struct AppState {
    boxes: Vec<CounterBox>,
    viewport: Size,
    ready: bool,
    pending_click: bool,
    last_pointer: Option<Point>,
    style: BoxStyle,
    layout: FlowLayout,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BoxStyle::default(), FlowConfig::default())
    }
}

impl AppState {
    pub fn new(style: BoxStyle, flow: FlowConfig) -> Self {
        Self {
            boxes: Vec::new(),
            viewport: Size::default(),
            ready: false,
            pending_click: false,
            last_pointer: None,
            style,
            layout: FlowLayout::new(flow),
        }
    }

    pub fn handle(&mut self, event: AppEvent) -> Effects {
        match event {
            AppEvent::Resize { width, height } => self.resize(Size::new(width, height)),
            AppEvent::CreateRequest => self.create_box(),
            AppEvent::PointerDown { x, y } => self.pointer_down(Point::new(x, y)),
            AppEvent::PointerUp { x, y } => self.pointer_up(Point::new(x, y)),
            AppEvent::PointerMove { x, y } => self.pointer_move(Point::new(x, y)),
            AppEvent::Quit => Effects {
                control: Control::Exit,
                ..Effects::default()
            },
        }
    }

    /// Record the new viewport and repack against it. The first resize also
    /// makes the app ready and seeds one default box.
    pub fn resize(&mut self, size: Size) -> Effects {
        self.viewport = size;
        let mut effects = Effects::redraw();
        if !self.ready {
            self.ready = true;
            effects.merge(self.create_box());
        } else {
            effects.repacks += self.repack();
        }
        effects
    }

    pub fn create_box(&mut self) -> Effects {
        self.boxes.push(CounterBox::new(&self.style));
        let mut effects = Effects::redraw();
        effects.created = 1;
        effects.repacks = self.repack();
        effects
    }

    pub fn pointer_down(&mut self, point: Point) -> Effects {
        self.pending_click = true;
        self.last_pointer = Some(point);
        Effects::default()
    }

    /// Complete a click at the release point. Only the release coordinate
    /// matters; where the press happened is not tracked.
    pub fn pointer_up(&mut self, point: Point) -> Effects {
        self.last_pointer = Some(point);
        if !self.pending_click {
            return Effects::default();
        }
        self.pending_click = false;

        let targets: Vec<usize> = hit::hits(point, &self.boxes).collect();
        let mut effects = Effects::default();
        for idx in targets {
            let next = self.boxes[idx].counter().saturating_add(1);
            if self.set_counter(idx, next) {
                effects.clicks += 1;
                effects.repacks += 1;
            }
        }
        effects.redraw = effects.clicks > 0;
        effects
    }

    pub fn pointer_move(&mut self, point: Point) -> Effects {
        self.last_pointer = Some(point);
        Effects::default()
    }

    /// Set one box's counter, re-derive its content and repack every box.
    /// Returns `false` for an unknown index.
    pub fn set_counter(&mut self, index: usize, counter: u32) -> bool {
        let Some(target) = self.boxes.get_mut(index) else {
            return false;
        };
        target.set_counter(counter, &self.style);
        self.repack();
        true
    }

    /// Full pack pass over all boxes. Does nothing until the first resize.
    fn repack(&mut self) -> u64 {
        if !self.ready {
            return 0;
        }
        self.layout.repack(&mut self.boxes, self.viewport.width);
        1
    }

    /// Compose the current frame, one entry per terminal line.
    pub fn view(&self) -> Vec<String> {
        compose_rows(&self.boxes)
    }

    pub fn view_text(&self) -> String {
        self.view().join("\n")
    }

    pub fn boxes(&self) -> &[CounterBox] {
        &self.boxes
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn click_pending(&self) -> bool {
        self.pending_click
    }

    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    pub fn style(&self) -> &BoxStyle {
        &self.style
    }
}
