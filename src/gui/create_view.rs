use chrono::{DateTime, Utc};
use egui::RichText;

use super::styles;

/// A note the user shares about what they are playing. Kept in memory only.
#[derive(Debug, Clone)]
pub struct ActivityPost {
    pub title: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl ActivityPost {
    /// Build a post from form input; `None` when the title is blank.
    pub fn from_input(title: &str, note: &str) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        Some(Self {
            title: title.to_string(),
            note: note.trim().to_string(),
            created_at: Utc::now(),
        })
    }
}

#[derive(Default)]
pub struct CreateView {
    title_input: String,
    note_input: String,
}

impl CreateView {
    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<ActivityPost> {
        let mut post = None;

        ui.heading(RichText::new("Share an activity").size(20.0).strong());
        ui.separator();
        ui.add_space(15.0);

        ui.label("What are you playing?");
        ui.add(
            egui::TextEdit::singleline(&mut self.title_input)
                .hint_text("Game or playlist")
                .desired_width(400.0),
        );

        ui.add_space(10.0);
        ui.label("Say something about it");
        ui.add(
            egui::TextEdit::multiline(&mut self.note_input)
                .desired_rows(4)
                .desired_width(400.0),
        );

        ui.add_space(15.0);

        let ready = !self.title_input.trim().is_empty();
        let post_button = egui::Button::new(RichText::new("Post").strong()).fill(styles::ACCENT);
        if ui.add_enabled(ready, post_button).clicked() {
            post = ActivityPost::from_input(&self.title_input, &self.note_input);
            if post.is_some() {
                self.title_input.clear();
                self.note_input.clear();
            }
        }

        post
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_requires_title() {
        assert!(ActivityPost::from_input("   ", "note").is_none());

        let post = ActivityPost::from_input(" Stardew Valley ", " farming again \n").unwrap();
        assert_eq!(post.title, "Stardew Valley");
        assert_eq!(post.note, "farming again");
    }
}
