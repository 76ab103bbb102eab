use chrono::{DateTime, Utc};
use egui::{Color32, RichText, Vec2};

use crate::api::{AchievementRecord, FriendRecord, GamePlayRecord};
use crate::gui::styles;

pub struct RecordCard;

impl RecordCard {
    pub fn game(ui: &mut egui::Ui, record: &GamePlayRecord) {
        Self::frame(ui, |ui| {
            ui.label(RichText::new(&record.name).size(16.0).strong().color(Color32::WHITE));
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "Played {} · last {}",
                    record.play_time,
                    relative_time(&record.last_played)
                ))
                .size(12.0)
                .color(styles::TEXT_SECONDARY),
            );
        });
    }

    pub fn achievement(ui: &mut egui::Ui, record: &AchievementRecord) {
        Self::frame(ui, |ui| {
            ui.horizontal(|ui| {
                let (mark, color) = if record.unlocked {
                    ("🏆", styles::SUCCESS_GREEN)
                } else {
                    ("🔒", styles::TEXT_SECONDARY)
                };
                ui.label(RichText::new(mark).size(18.0).color(color));
                ui.vertical(|ui| {
                    ui.label(RichText::new(&record.name).size(15.0).strong());
                    ui.label(
                        RichText::new(&record.description)
                            .size(12.0)
                            .color(styles::TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    pub fn friend(ui: &mut egui::Ui, record: &FriendRecord) {
        Self::frame(ui, |ui| {
            ui.horizontal(|ui| {
                // Images are not loaded; the initial stands in for the avatar.
                let initial = record
                    .display_name
                    .chars()
                    .next()
                    .map(|c| c.to_uppercase().to_string())
                    .unwrap_or_else(|| "?".to_string());
                ui.label(RichText::new(initial).size(20.0).strong().color(styles::ACCENT));
                ui.add_space(8.0);
                ui.label(RichText::new(&record.display_name).size(15.0).strong());
            });
        });
    }

    fn frame(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .fill(styles::CARD_BG)
            .stroke(egui::Stroke::new(1.0, Color32::from_rgb(45, 45, 50)))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(ui.available_width(), 0.0));
                add_contents(ui);
            });
        ui.add_space(8.0);
    }
}

/// "3 days ago"-style rendering of an RFC 3339 timestamp. Unparseable input is shown as-is.
pub fn relative_time(timestamp: &str) -> String {
    let Ok(at) = DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };

    let elapsed = Utc::now().signed_duration_since(at.with_timezone(&Utc));
    if elapsed.num_days() >= 1 {
        plural(elapsed.num_days(), "day")
    } else if elapsed.num_hours() >= 1 {
        plural(elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() >= 1 {
        plural(elapsed.num_minutes(), "minute")
    } else {
        "just now".to_string()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}
