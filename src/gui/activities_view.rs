use egui::{Color32, RichText, ScrollArea};

use crate::api::{AchievementRecord, GamePlayRecord};
use super::components::RecordCard;
use super::loadable::Loadable;
use super::styles;

pub enum ActivitiesAction {
    Refresh,
}

pub struct ActivitiesView;

impl ActivitiesView {
    pub fn ui(
        ui: &mut egui::Ui,
        games: &Loadable<GamePlayRecord>,
        achievements: &Loadable<AchievementRecord>,
    ) -> Option<ActivitiesAction> {
        let mut action = None;
        let busy = games.is_loading() || achievements.is_loading();

        ui.horizontal(|ui| {
            ui.heading(RichText::new("My activities").size(20.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add_enabled(!busy, egui::Button::new("⟳ Refresh")).clicked() {
                    action = Some(ActivitiesAction::Refresh);
                }
            });
        });

        ui.separator();
        ui.add_space(10.0);

        ScrollArea::vertical().show(ui, |ui| {
            ui.label(RichText::new("Recently played").size(16.0).strong());
            ui.add_space(6.0);
            section(ui, games, "No games played recently", RecordCard::game);

            ui.add_space(20.0);

            ui.label(RichText::new("Achievements").size(16.0).strong());
            ui.add_space(6.0);
            section(ui, achievements, "No achievements yet", RecordCard::achievement);
        });

        action
    }
}

fn section<T>(
    ui: &mut egui::Ui,
    load: &Loadable<T>,
    empty_text: &str,
    card: fn(&mut egui::Ui, &T),
) {
    if load.is_loading() {
        ui.spinner();
    } else if let Some(error) = load.error() {
        ui.colored_label(styles::ERROR_RED, format!("Failed to load: {}", error));
    } else if load.records().is_empty() {
        ui.label(RichText::new(empty_text).color(Color32::GRAY));
    } else {
        for record in load.records() {
            card(ui, record);
        }
    }
}
