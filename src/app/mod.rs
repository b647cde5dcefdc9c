//! Application controller: event vocabulary and the owned state it drives.

mod state;

pub use state::AppState;

/// Events the controller understands, already stripped of terminal detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Resize { width: u16, height: u16 },
    CreateRequest,
    PointerDown { x: u16, y: u16 },
    PointerUp { x: u16, y: u16 },
    PointerMove { x: u16, y: u16 },
    Quit,
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::Resize { .. } => "resize",
            AppEvent::CreateRequest => "create_request",
            AppEvent::PointerDown { .. } => "pointer_down",
            AppEvent::PointerUp { .. } => "pointer_up",
            AppEvent::PointerMove { .. } => "pointer_move",
            AppEvent::Quit => "quit",
        }
    }
}

/// Whether the session keeps running after an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Control {
    #[default]
    Continue,
    Exit,
}

/// What handling an event changed, for the runtime's redraw, logging and
/// metrics decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Effects {
    pub control: Control,
    pub redraw: bool,
    pub repacks: u64,
    pub created: usize,
    pub clicks: usize,
}

impl Effects {
    fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }

    fn merge(&mut self, other: Effects) {
        if other.control == Control::Exit {
            self.control = Control::Exit;
        }
        self.redraw |= other.redraw;
        self.repacks += other.repacks;
        self.created += other.created;
        self.clicks += other.clicks;
    }
}
