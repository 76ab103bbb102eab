use egui::{Align, Layout, RichText};

use crate::gui::styles;

pub enum SignInAction {
    OpenBrowser,
    SubmitRedirect(String),
    ContinueAsGuest,
}

#[derive(Default)]
pub struct SignInView {
    redirect_input: String,
    status: String,
}

impl SignInView {
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, credentials_valid: bool) -> Option<SignInAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(50.0);

            ui.heading(RichText::new("See what your friends are playing").size(28.0));
            ui.add_space(10.0);
            ui.label(RichText::new("Connect your Google Play Games account").size(16.0));

            ui.add_space(30.0);

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.set_max_width(460.0);

                ui.add_enabled_ui(credentials_valid, |ui| {
                    if ui
                        .button(RichText::new("Sign in with Google").size(16.0))
                        .clicked()
                    {
                        action = Some(SignInAction::OpenBrowser);
                    }
                });

                if !credentials_valid {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Google Play Games credentials are not configured.")
                            .size(12.0)
                            .color(styles::WARNING_AMBER),
                    );
                }

                ui.add_space(25.0);

                ui.label("After signing in, paste the URL you were redirected to:");
                ui.add_space(5.0);
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.redirect_input)
                        .hint_text("http://localhost:5173/auth/callback#access_token=...")
                        .desired_width(440.0),
                );

                let can_submit = !self.redirect_input.trim().is_empty();
                ui.add_space(10.0);
                ui.add_enabled_ui(can_submit, |ui| {
                    if ui.button("Connect").clicked() {
                        action = Some(SignInAction::SubmitRedirect(self.redirect_input.clone()));
                    }
                });

                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) && can_submit {
                    action = Some(SignInAction::SubmitRedirect(self.redirect_input.clone()));
                }

                ui.add_space(20.0);

                if !self.status.is_empty() {
                    ui.colored_label(styles::ERROR_RED, &self.status);
                    ui.add_space(10.0);
                }

                if ui
                    .link(RichText::new("Explore with sample data").size(13.0))
                    .clicked()
                {
                    action = Some(SignInAction::ContinueAsGuest);
                }
            });
        });

        if matches!(action, Some(SignInAction::SubmitRedirect(_))) {
            self.redirect_input.clear();
        }

        action
    }
}
