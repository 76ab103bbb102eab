use egui::RichText;

use crate::gui::styles;

pub struct StatusBar;

impl StatusBar {
    /// Bottom line with the latest message, plus a badge while sample data is on screen.
    pub fn show(ui: &mut egui::Ui, message: &str, showing_sample: bool, on_clear: &mut bool) {
        if message.is_empty() && !showing_sample {
            return;
        }

        ui.separator();
        ui.horizontal(|ui| {
            if showing_sample {
                ui.label(
                    RichText::new("SAMPLE DATA")
                        .size(11.0)
                        .strong()
                        .background_color(styles::WARNING_AMBER)
                        .color(egui::Color32::BLACK),
                );
            }

            if !message.is_empty() {
                ui.label(
                    RichText::new(message)
                        .size(13.0)
                        .color(if message.contains("Failed") || message.contains("Error") {
                            styles::ERROR_RED
                        } else {
                            egui::Color32::from_rgb(200, 200, 200)
                        }),
                );
                if ui.button(RichText::new("Clear").size(12.0)).clicked() {
                    *on_clear = true;
                }
            }
        });
    }
}
