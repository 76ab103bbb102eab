use egui::{Color32, Rounding, Stroke, Style, Visuals};

pub fn setup_custom_style(ctx: &egui::Context) {
    let mut style = Style {
        visuals: Visuals::dark(),
        ..Default::default()
    };

    style.visuals.window_fill = Color32::from_rgb(18, 16, 24);
    style.visuals.panel_fill = Color32::from_rgb(24, 22, 30);
    style.visuals.faint_bg_color = Color32::from_rgb(30, 28, 36);
    style.visuals.extreme_bg_color = Color32::from_rgb(12, 11, 16);

    style.visuals.override_text_color = Some(Color32::from_rgb(245, 245, 245));

    style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(52, 48, 62);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(200, 200, 200));
    style.visuals.widgets.inactive.rounding = Rounding::same(5.0);

    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(68, 62, 80);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::from_rgb(240, 240, 240));
    style.visuals.widgets.hovered.rounding = Rounding::same(5.0);

    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.rounding = Rounding::same(5.0);

    // Selected nav item
    style.visuals.selection.bg_fill = ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.5, ACCENT);

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

pub const CARD_BG: Color32 = Color32::from_rgb(30, 28, 36);
pub const ACCENT: Color32 = Color32::from_rgb(124, 77, 255);
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(76, 175, 80);
pub const WARNING_AMBER: Color32 = Color32::from_rgb(255, 193, 7);
pub const ERROR_RED: Color32 = Color32::from_rgb(244, 67, 54);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
