use common::snake::{Direction, GameStatus, SnakeFrame};
use eframe::egui;
use egui::{Align2, Color32, FontId, RichText};

use crate::command_sender::CommandSender;
use crate::state::{ClientCommand, SharedState, SnakeCommand};
use super::colors::{ACCENT, BACKGROUND, GRID_LINE, OVERLAY, cell_color};

const MAX_BOARD_SIZE: f32 = 520.0;

#[derive(Default)]
pub struct SnakeView;

impl SnakeView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        shared_state: &SharedState,
        command_sender: &CommandSender,
    ) {
        let Some(frame) = shared_state.with_panel(|panel| panel.snake_frame.clone()) else {
            ui.centered_and_justified(|ui| {
                ui.label("Booting game...");
            });
            return;
        };

        if frame.status == GameStatus::Running {
            self.handle_input(ctx, command_sender);
        }

        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("Score: {}", frame.score)).monospace().color(ACCENT));
                ui.separator();
                ui.label(RichText::new(format!("Length: {}", frame.length)).monospace());
                ui.separator();
                if ui.button("Restart").clicked() {
                    command_sender.send(ClientCommand::Snake(SnakeCommand::Start));
                }
            });
            ui.add_space(8.0);
            self.render_board(ui, &frame);
            ui.add_space(8.0);
            ui.label("Arrow keys or WASD to steer");
        });
    }

    fn handle_input(&self, ctx: &egui::Context, command_sender: &CommandSender) {
        let direction = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                Some(Direction::Right)
            } else {
                None
            }
        });

        if let Some(direction) = direction {
            command_sender.send(ClientCommand::Snake(SnakeCommand::Turn { direction }));
        }
    }

    fn render_board(&self, ui: &mut egui::Ui, frame: &SnakeFrame) {
        let available = ui.available_size();
        let board_size = available.x.min(available.y - 40.0).clamp(100.0, MAX_BOARD_SIZE);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(board_size, board_size), egui::Sense::hover());
        let rect = response.rect;
        let cell_size = board_size / frame.grid_size as f32;

        painter.rect_filled(rect, 0.0, BACKGROUND);

        for (index, kind) in frame.cells.iter().enumerate() {
            let row = index / frame.grid_size;
            let col = index % frame.grid_size;
            let min = rect.min + egui::vec2(col as f32 * cell_size, row as f32 * cell_size);
            let cell_rect = egui::Rect::from_min_size(min, egui::vec2(cell_size, cell_size));
            painter.rect_filled(cell_rect.shrink(1.0), 2.0, cell_color(*kind));
        }

        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, GRID_LINE),
            egui::StrokeKind::Outside,
        );

        let overlay_text = match frame.status {
            GameStatus::Lost => Some(("GAME OVER", Color32::from_rgb(0xff, 0x6b, 0x6b))),
            GameStatus::Won => Some(("GRID CLEARED", ACCENT)),
            GameStatus::Idle | GameStatus::Running => None,
        };

        if let Some((text, color)) = overlay_text {
            painter.rect_filled(rect, 0.0, OVERLAY);
            painter.text(rect.center(), Align2::CENTER_CENTER, text, FontId::monospace(32.0), color);
            painter.text(
                rect.center() + egui::vec2(0.0, 36.0),
                Align2::CENTER_CENTER,
                "press Restart",
                FontId::monospace(14.0),
                Color32::LIGHT_GRAY,
            );
        }
    }
}
