use egui::{Color32, RichText, ScrollArea};

use crate::api::FriendRecord;
use super::components::{relative_time, RecordCard};
use super::create_view::ActivityPost;
use super::loadable::Loadable;
use super::styles;

pub enum HomeAction {
    Refresh,
}

pub struct HomeView;

impl HomeView {
    pub fn ui(
        ui: &mut egui::Ui,
        friends: &Loadable<FriendRecord>,
        posts: &[ActivityPost],
    ) -> Option<HomeAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading(RichText::new("Friends").size(20.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add_enabled(!friends.is_loading(), egui::Button::new("⟳ Refresh")).clicked() {
                    action = Some(HomeAction::Refresh);
                }
            });
        });

        ui.separator();
        ui.add_space(10.0);

        ScrollArea::vertical().show(ui, |ui| {
            if friends.is_loading() {
                ui.spinner();
            } else if let Some(error) = friends.error() {
                ui.colored_label(styles::ERROR_RED, format!("Failed to load friends: {}", error));
            } else if friends.records().is_empty() {
                ui.label(RichText::new("No friends yet").color(Color32::GRAY));
            } else {
                for friend in friends.records() {
                    RecordCard::friend(ui, friend);
                }
            }

            if !posts.is_empty() {
                ui.add_space(20.0);
                ui.heading(RichText::new("Your posts").size(18.0).strong());
                ui.add_space(8.0);

                for post in posts.iter().rev() {
                    ui.label(RichText::new(&post.title).size(15.0).strong());
                    if !post.note.is_empty() {
                        ui.label(&post.note);
                    }
                    ui.label(
                        RichText::new(relative_time(&post.created_at.to_rfc3339()))
                            .size(11.0)
                            .color(styles::TEXT_SECONDARY),
                    );
                    ui.add_space(10.0);
                }
            }
        });

        action
    }
}
