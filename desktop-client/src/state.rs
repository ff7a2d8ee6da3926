use std::sync::{Arc, Mutex, MutexGuard};

use common::snake::{Direction, SnakeFrame};
use common::terminal::OutputLine;
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};

#[derive(Debug, Clone)]
pub enum TerminalCommand {
    Submit { input: String },
}

#[derive(Debug, Clone, Copy)]
pub enum SnakeCommand {
    Start,
    Turn { direction: Direction },
}

#[derive(Debug, Clone)]
pub enum ClientCommand {
    Terminal(TerminalCommand),
    Snake(SnakeCommand),
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Manifesto,
    Game,
}

pub struct PanelState {
    pub marker: String,
    pub display_name: String,
    pub terminal_lines: AllocRingBuffer<OutputLine>,
    pub snake_frame: Option<SnakeFrame>,
}

/// State shared between the site task and the egui thread.
#[derive(Clone)]
pub struct SharedState {
    panel: Arc<Mutex<PanelState>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new(marker: String, scrollback: usize) -> Self {
        Self {
            panel: Arc::new(Mutex::new(PanelState {
                marker,
                display_name: String::new(),
                terminal_lines: AllocRingBuffer::new(scrollback.max(1)),
                snake_frame: None,
            })),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    pub fn push_terminal_line(&self, line: OutputLine) {
        lock(&self.panel).terminal_lines.enqueue(line);
        self.request_repaint();
    }

    pub fn set_display_name(&self, display_name: &str) {
        let mut panel = lock(&self.panel);
        if panel.display_name != display_name {
            panel.display_name = display_name.to_string();
            drop(panel);
            self.request_repaint();
        }
    }

    pub fn set_snake_frame(&self, frame: SnakeFrame) {
        lock(&self.panel).snake_frame = Some(frame);
        self.request_repaint();
    }

    /// Runs `f` with the panel locked; keep it short, the site task waits on it.
    pub fn with_panel<T>(&self, f: impl FnOnce(&PanelState) -> T) -> T {
        f(&lock(&self.panel))
    }

    fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::terminal::LineKind;

    #[test]
    fn test_scrollback_drops_oldest_lines() {
        let state = SharedState::new(">".to_string(), 3);

        for index in 0..5 {
            state.push_terminal_line(OutputLine::new(LineKind::Answer, format!("line {}", index)));
        }

        let texts: Vec<String> =
            state.with_panel(|panel| panel.terminal_lines.iter().map(|l| l.text.clone()).collect());
        assert_eq!(texts, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_display_name_is_stored() {
        let state = SharedState::new(">".to_string(), 10);
        state.set_display_name("anon00001");
        assert_eq!(state.with_panel(|panel| panel.display_name.clone()), "anon00001");
    }
}
