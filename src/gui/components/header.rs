use egui::{Color32, RichText};

use crate::gui::styles;
use crate::gui::Route;

pub struct NavItem {
    pub id: Route,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        id: Route::Home,
        label: "Home",
        icon: "🏠",
    },
    NavItem {
        id: Route::MyActivities,
        label: "Activities",
        icon: "🎮",
    },
    NavItem {
        id: Route::Profile,
        label: "Profile",
        icon: "👤",
    },
];

pub struct NavEntry {
    pub item: &'static NavItem,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderControl {
    Title,
    Create,
    Nav(Route),
}

/// Top bar: brand title, a create action, and navigation once a user is signed in.
pub struct Header;

impl Header {
    /// Navigation entries to draw. Empty when no user is signed in.
    pub fn nav_entries(current: Route, user_present: bool) -> Vec<NavEntry> {
        if !user_present {
            return Vec::new();
        }

        NAV_ITEMS
            .iter()
            .map(|item| NavEntry {
                item,
                active: item.id == current,
            })
            .collect()
    }

    pub fn activate(control: HeaderControl, on_navigate: &mut impl FnMut(Route)) {
        match control {
            HeaderControl::Title => on_navigate(Route::Home),
            HeaderControl::Create => on_navigate(Route::Create),
            HeaderControl::Nav(route) => on_navigate(route),
        }
    }

    /// Draw the bar and report any click through `on_navigate`. Returns the create button's response.
    pub fn show(
        ui: &mut egui::Ui,
        current: Route,
        user_present: bool,
        mut on_navigate: impl FnMut(Route),
    ) -> egui::Response {
        let mut clicked = None;

        let create_response = ui.horizontal(|ui| {
            let title = egui::Label::new(
                RichText::new("Friender")
                    .size(22.0)
                    .strong()
                    .color(Color32::WHITE),
            )
            .sense(egui::Sense::click());

            if ui.add(title).on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                clicked = Some(HeaderControl::Title);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let create_button = egui::Button::new(
                    RichText::new("+ Create").size(14.0).strong().color(Color32::WHITE),
                )
                .fill(styles::ACCENT);

                let create_response = ui.add(create_button);
                if create_response.clicked() {
                    clicked = Some(HeaderControl::Create);
                }

                ui.add_space(10.0);

                // Right-to-left layout, so walk the items backwards to keep their order.
                for entry in Self::nav_entries(current, user_present).iter().rev() {
                    let text = RichText::new(format!("{} {}", entry.item.icon, entry.item.label)).size(14.0);
                    if ui.selectable_label(entry.active, text).clicked() {
                        clicked = Some(HeaderControl::Nav(entry.item.id));
                    }
                }

                create_response
            })
            .inner
        })
        .inner;

        if let Some(control) = clicked {
            Self::activate(control, &mut on_navigate);
        }

        create_response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROUTES: [Route; 4] = [Route::Home, Route::MyActivities, Route::Profile, Route::Create];

    #[test]
    fn test_exactly_one_active_entry() {
        let entries = Header::nav_entries(Route::Profile, true);
        assert_eq!(entries.len(), 3);

        let active: Vec<_> = entries.iter().filter(|e| e.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].item.id, Route::Profile);
        assert_eq!(active[0].item.id.as_str(), "profile");
    }

    #[test]
    fn test_nav_order_is_fixed() {
        let ids: Vec<_> = Header::nav_entries(Route::Home, true)
            .iter()
            .map(|e| e.item.id.as_str())
            .collect();
        assert_eq!(ids, ["home", "my-activities", "profile"]);
    }

    #[test]
    fn test_no_entries_without_user() {
        for route in ALL_ROUTES {
            assert!(Header::nav_entries(route, false).is_empty());
        }
    }

    #[test]
    fn test_create_on_create_route_has_no_active_nav() {
        let entries = Header::nav_entries(Route::Create, true);
        assert!(entries.iter().all(|e| !e.active));
    }

    #[test]
    fn test_create_always_navigates_to_create() {
        let mut seen = Vec::new();
        Header::activate(HeaderControl::Create, &mut |route: Route| seen.push(route.as_str()));
        assert_eq!(seen, ["create"]);
    }

    #[test]
    fn test_title_navigates_home() {
        let mut seen = Vec::new();
        Header::activate(HeaderControl::Title, &mut |route: Route| seen.push(route));
        assert_eq!(seen, [Route::Home]);
    }

    #[test]
    fn test_nav_control_passes_item_id() {
        let mut seen = Vec::new();
        Header::activate(HeaderControl::Nav(Route::MyActivities), &mut |route: Route| {
            seen.push(route)
        });
        assert_eq!(seen, [Route::MyActivities]);
    }

    #[test]
    fn test_show_renders_headless_without_navigating() {
        let ctx = egui::Context::default();
        let mut navigated = Vec::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                Header::show(ui, Route::Profile, true, |route| navigated.push(route));
                Header::show(ui, Route::Home, false, |route| navigated.push(route));
            });
        });

        assert!(navigated.is_empty());
    }

    fn run_frame(
        ctx: &egui::Context,
        route: Route,
        user_present: bool,
        events: Vec<egui::Event>,
        navigated: &mut Vec<Route>,
    ) -> egui::Rect {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 200.0))),
            events,
            ..Default::default()
        };

        let mut create_rect = egui::Rect::NOTHING;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                create_rect = Header::show(ui, route, user_present, |r| navigated.push(r)).rect;
            });
        });
        create_rect
    }

    fn primary_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn test_clicking_create_navigates_to_create_from_every_route() {
        for route in ALL_ROUTES {
            for user_present in [true, false] {
                let ctx = egui::Context::default();
                let mut navigated = Vec::new();

                let rect = run_frame(&ctx, route, user_present, Vec::new(), &mut navigated);
                assert!(rect.is_positive());
                let pos = rect.center();

                run_frame(&ctx, route, user_present, vec![egui::Event::PointerMoved(pos)], &mut navigated);
                run_frame(&ctx, route, user_present, vec![primary_button(pos, true)], &mut navigated);
                run_frame(&ctx, route, user_present, vec![primary_button(pos, false)], &mut navigated);

                assert_eq!(
                    navigated,
                    [Route::Create],
                    "route {:?}, user present {}",
                    route,
                    user_present
                );
            }
        }
    }
}
