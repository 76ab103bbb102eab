use egui::{RichText, Vec2};
use serde_json::Value;

use crate::api::ProfileData;
use super::styles;

pub enum ProfileAction {
    Refresh,
    SignOut,
}

pub struct ProfileView;

impl ProfileView {
    /// `profile` is `None` both while loading and when the lookup failed.
    pub fn ui(
        ui: &mut egui::Ui,
        profile: Option<&Value>,
        loading: bool,
        signed_in: bool,
    ) -> Option<ProfileAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);

            let data = profile.map(ProfileData::new);
            let name = data.as_ref().and_then(|p| p.display_name()).unwrap_or("Player");

            // Placeholder avatar; remote photos are not fetched.
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(96.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 48.0, styles::ACCENT);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                name.chars().next().unwrap_or('?').to_uppercase().to_string(),
                egui::FontId::proportional(40.0),
                egui::Color32::WHITE,
            );

            ui.add_space(15.0);

            if loading {
                ui.spinner();
            } else {
                ui.heading(RichText::new(name).size(24.0).strong());
                if let Some(email) = data.as_ref().and_then(|p| p.email()) {
                    ui.label(RichText::new(email).color(styles::TEXT_SECONDARY));
                }
                if profile.is_none() && signed_in {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Profile unavailable")
                            .size(12.0)
                            .color(styles::TEXT_SECONDARY),
                    );
                }
            }

            ui.add_space(25.0);

            ui.horizontal(|ui| {
                if signed_in && ui.add_enabled(!loading, egui::Button::new("⟳ Refresh")).clicked() {
                    action = Some(ProfileAction::Refresh);
                }
                let label = if signed_in { "Sign out" } else { "Leave sample mode" };
                if ui.button(label).clicked() {
                    action = Some(ProfileAction::SignOut);
                }
            });
        });

        action
    }
}
