use common::snake::GameStatus;
use eframe::egui;

use crate::command_sender::CommandSender;
use crate::state::{ClientCommand, SharedState, SnakeCommand, View};
use super::snake_view::SnakeView;
use super::terminal_view::TerminalView;

pub struct SiteApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    view: View,
    terminal_view: TerminalView,
    snake_view: SnakeView,
}

impl SiteApp {
    pub fn new(shared_state: SharedState, command_sender: CommandSender) -> Self {
        Self {
            shared_state,
            command_sender,
            view: View::Manifesto,
            terminal_view: TerminalView::new(),
            snake_view: SnakeView::new(),
        }
    }

    fn on_view_changed(&mut self) {
        match self.view {
            View::Manifesto => self.terminal_view.request_focus(),
            View::Game => {
                let idle = self.shared_state.with_panel(|panel| {
                    panel
                        .snake_frame
                        .as_ref()
                        .is_none_or(|frame| frame.status == GameStatus::Idle)
                });
                if idle {
                    self.command_sender.send(ClientCommand::Snake(SnakeCommand::Start));
                }
            }
        }
    }

    fn render_view_switcher(&mut self, ui: &mut egui::Ui) {
        let previous = self.view;

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.view, View::Manifesto, "< Manifesto");
            ui.separator();
            ui.selectable_value(&mut self.view, View::Game, "Game >");
        });

        if self.view != previous {
            self.on_view_changed();
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        egui::TopBottomPanel::top("view_switcher").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_view_switcher(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Manifesto => {
                self.terminal_view.render(ui, &self.shared_state, &self.command_sender);
            }
            View::Game => {
                self.snake_view.render(ui, ctx, &self.shared_state, &self.command_sender);
            }
        });
    }
}
