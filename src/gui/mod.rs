mod activities_view;
mod app;
pub mod components;
mod create_view;
mod home_view;
mod loadable;
mod profile_view;
mod route;
mod sign_in_view;
mod styles;

pub use app::FrienderApp;
pub use create_view::ActivityPost;
pub use route::Route;

pub const WINDOW_TITLE: &str = "Friender";

/// Open the main window and block until it is closed.
pub fn run(
    config: crate::config::Config,
    platform: crate::config::PlatformConfig,
    tokens: crate::auth::TokenStore,
) -> crate::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(FrienderApp::new(cc, config, platform, tokens)?))),
    )
    .map_err(|e| crate::Error::Other(format!("Failed to run GUI: {}", e)))
}
