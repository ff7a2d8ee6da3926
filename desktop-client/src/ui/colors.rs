use common::snake::CellKind;
use common::terminal::LineKind;
use eframe::egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x0b, 0x0f, 0x0b);
pub const GRID_LINE: Color32 = Color32::from_rgb(0x16, 0x22, 0x16);
pub const OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 190);
pub const ACCENT: Color32 = Color32::from_rgb(0x5c, 0xff, 0x7a);

pub fn line_color(kind: LineKind) -> Color32 {
    match kind {
        LineKind::Intro => Color32::from_rgb(0x7f, 0xb8, 0x86),
        LineKind::Echo => Color32::from_rgb(0xe6, 0xe6, 0xe6),
        LineKind::Answer => ACCENT,
        LineKind::Notice => Color32::from_rgb(0x6c, 0xd4, 0xff),
        LineKind::Error => Color32::from_rgb(0xff, 0x6b, 0x6b),
    }
}

pub fn cell_color(kind: CellKind) -> Color32 {
    match kind {
        CellKind::Empty => BACKGROUND,
        CellKind::SnakeHead => Color32::from_rgb(0xb8, 0xff, 0xc4),
        CellKind::SnakeBody => ACCENT,
        CellKind::Food => Color32::from_rgb(0xff, 0x4f, 0x9a),
    }
}
