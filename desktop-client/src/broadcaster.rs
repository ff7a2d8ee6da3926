use common::snake::{SnakeFrame, SnakeRenderer};
use common::terminal::{OutputLine, TerminalOutput};

use crate::state::SharedState;

/// Forwards terminal lines and snake frames to the UI state.
#[derive(Clone)]
pub struct PanelBroadcaster {
    shared_state: SharedState,
}

impl PanelBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl TerminalOutput for PanelBroadcaster {
    fn append_line(&self, line: OutputLine) {
        self.shared_state.push_terminal_line(line);
    }
}

impl SnakeRenderer for PanelBroadcaster {
    fn render(&self, frame: SnakeFrame) {
        self.shared_state.set_snake_frame(frame);
    }
}
