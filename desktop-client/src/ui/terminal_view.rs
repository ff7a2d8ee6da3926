use common::terminal::{LineKind, normalize_command};
use eframe::egui;
use egui::{Align, Layout, RichText};
use ringbuffer::RingBuffer;

use crate::command_sender::CommandSender;
use crate::state::{ClientCommand, SharedState, TerminalCommand};
use super::colors::line_color;

pub struct TerminalView {
    input: String,
    wants_focus: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            wants_focus: true,
        }
    }

    pub fn request_focus(&mut self) {
        self.wants_focus = true;
    }

    pub fn render(&mut self, ui: &mut egui::Ui, shared_state: &SharedState, command_sender: &CommandSender) {
        let (prompt, lines) = shared_state.with_panel(|panel| {
            let lines: Vec<(LineKind, String)> = panel
                .terminal_lines
                .iter()
                .map(|line| (line.kind, line.display(&panel.marker)))
                .collect();
            (format!("{} {}", panel.display_name, panel.marker), lines)
        });

        let available_width = ui.available_width();
        let mut submitted = false;

        ui.with_layout(Layout::bottom_up(Align::LEFT), |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&prompt).monospace().color(line_color(LineKind::Echo)));

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let send_clicked = ui.button("Send").clicked();
                    let response = ui.add_sized(
                        egui::vec2(ui.available_width(), 24.0),
                        egui::TextEdit::singleline(&mut self.input)
                            .font(egui::TextStyle::Monospace)
                            .hint_text("type help and press Enter"),
                    );

                    let enter_pressed =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if enter_pressed || send_clicked {
                        submitted = self.submit(command_sender);
                        self.wants_focus = true;
                    }

                    if self.wants_focus {
                        response.request_focus();
                        self.wants_focus = false;
                    }
                });
            });

            ui.add_space(6.0);

            ui.with_layout(Layout::top_down(Align::LEFT), |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("terminal_scroll")
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        ui.set_min_width(available_width - 15.0);
                        for (kind, text) in &lines {
                            ui.label(RichText::new(text).monospace().color(line_color(*kind)));
                        }
                    });
            });
        });

        if submitted {
            ui.ctx().request_repaint();
        }
    }

    /// Sends the current input if it is not blank; blank input stays in the field.
    fn submit(&mut self, command_sender: &CommandSender) -> bool {
        let command = normalize_command(&self.input);
        if command.is_empty() {
            return false;
        }

        command_sender.send(ClientCommand::Terminal(TerminalCommand::Submit { input: command }));
        self.input.clear();
        true
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}
