use eframe::egui;
use poll_promise::Promise;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    AchievementRecord, FriendRecord, GamePlayRecord, PlatformEndpoint, PlayGamesClient,
};
use crate::auth::{self, TokenStore};
use crate::config::{Config, PlatformConfig};

use super::activities_view::{ActivitiesAction, ActivitiesView};
use super::components::{Header, StatusBar};
use super::create_view::{ActivityPost, CreateView};
use super::home_view::{HomeAction, HomeView};
use super::loadable::Loadable;
use super::profile_view::{ProfileAction, ProfileView};
use super::sign_in_view::{SignInAction, SignInView};
use super::styles;
use super::Route;

/// What the central panel draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    SignIn,
    Home,
    MyActivities,
    Profile,
    Create,
}

/// Every screen, Create included, sits behind sign-in.
fn screen_for(route: Route, user_present: bool) -> Screen {
    if !user_present {
        return Screen::SignIn;
    }

    match route {
        Route::Home => Screen::Home,
        Route::MyActivities => Screen::MyActivities,
        Route::Profile => Screen::Profile,
        Route::Create => Screen::Create,
    }
}

pub struct FrienderApp {
    route: Route,
    platform: PlatformConfig,
    credentials_valid: bool,
    client: Arc<PlayGamesClient>,
    tokens: TokenStore,
    guest: bool,
    oauth_state: Option<String>,
    sign_in_view: SignInView,
    create_view: CreateView,
    friends: Loadable<FriendRecord>,
    games: Loadable<GamePlayRecord>,
    achievements: Loadable<AchievementRecord>,
    profile: Option<Value>,
    profile_promise: Option<Promise<Option<Value>>>,
    posts: Vec<ActivityPost>,
    status_message: String,
}

impl FrienderApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        platform: PlatformConfig,
        tokens: TokenStore,
    ) -> crate::Result<Self> {
        styles::setup_custom_style(&cc.egui_ctx);

        let credentials_valid = platform.is_valid();
        let client = Arc::new(PlayGamesClient::new(&config)?);

        let mut app = Self {
            route: Route::Home,
            platform,
            credentials_valid,
            client,
            tokens,
            guest: false,
            oauth_state: None,
            sign_in_view: SignInView::default(),
            create_view: CreateView::default(),
            friends: Loadable::Idle,
            games: Loadable::Idle,
            achievements: Loadable::Idle,
            profile: None,
            profile_promise: None,
            posts: Vec::new(),
            status_message: String::new(),
        };

        if !credentials_valid {
            app.status_message =
                "Google Play Games is not configured; screens will show sample data".to_string();
        }

        Ok(app)
    }

    fn user_present(&self) -> bool {
        self.tokens.is_authenticated() || self.guest
    }

    /// Bearer token for requests. Guests send an empty one and get sample data back.
    fn access_token(&self) -> String {
        self.tokens
            .get_token()
            .map(|t| t.access_token.clone())
            .unwrap_or_default()
    }

    fn spawn_fetch(&self, endpoint: PlatformEndpoint) -> Promise<crate::Result<crate::api::PlatformData>> {
        let client = Arc::clone(&self.client);
        let token = self.access_token();
        Promise::spawn_async(async move { client.fetch_platform_data(&endpoint, &token).await })
    }

    fn navigate(&mut self, route: Route) {
        log::debug!("Navigating to {}", route);
        self.route = route;
        self.load_for_route();
    }

    /// Start the fetches the current screen needs, unless they already ran.
    fn load_for_route(&mut self) {
        if !self.user_present() {
            return;
        }

        match self.route {
            Route::Home if self.friends.is_idle() => {
                self.friends = Loadable::Loading(self.spawn_fetch(PlatformEndpoint::Friends));
            }
            Route::MyActivities => {
                if self.games.is_idle() {
                    self.games = Loadable::Loading(self.spawn_fetch(PlatformEndpoint::PlayedGames));
                }
                if self.achievements.is_idle() {
                    self.achievements =
                        Loadable::Loading(self.spawn_fetch(PlatformEndpoint::Achievements));
                }
            }
            Route::Profile if self.profile.is_none() && self.profile_promise.is_none() => {
                if self.tokens.is_authenticated() {
                    let client = Arc::clone(&self.client);
                    let token = self.access_token();
                    self.profile_promise = Some(Promise::spawn_async(async move {
                        client.fetch_user_profile(&token).await
                    }));
                }
            }
            _ => {}
        }
    }

    fn reset_data(&mut self) {
        self.friends = Loadable::Idle;
        self.games = Loadable::Idle;
        self.achievements = Loadable::Idle;
        self.profile = None;
        self.profile_promise = None;
    }

    fn handle_sign_in(&mut self, action: SignInAction) {
        match action {
            SignInAction::OpenBrowser => {
                let state = auth::new_state();
                match auth::authorization_url(&self.platform, &state) {
                    Ok(url) => {
                        if let Err(e) = webbrowser::open(&url) {
                            log::warn!("Could not open browser: {}", e);
                            self.status_message = format!("Open this URL to sign in: {}", url);
                        }
                        self.oauth_state = Some(state);
                    }
                    Err(e) => self.sign_in_view.set_status(e.to_string()),
                }
            }
            SignInAction::SubmitRedirect(redirect) => {
                let parsed = auth::parse_redirect_fragment(&redirect, self.oauth_state.as_deref());
                match parsed.and_then(|token| self.tokens.set_token(token)) {
                    Ok(()) => {
                        log::info!("Signed in to Google Play Games");
                        self.sign_in_view.set_status("");
                        self.oauth_state = None;
                        self.guest = false;
                        self.reset_data();
                        self.navigate(Route::Home);
                    }
                    Err(e) => self.sign_in_view.set_status(e.to_string()),
                }
            }
            SignInAction::ContinueAsGuest => {
                self.guest = true;
                self.navigate(Route::Home);
            }
        }
    }

    fn sign_out(&mut self) {
        if let Err(e) = self.tokens.logout() {
            self.status_message = format!("Failed to sign out: {}", e);
        }
        self.guest = false;
        self.reset_data();
        self.route = Route::Home;
    }

    fn poll_loads(&mut self) {
        if self.friends.poll() {
            self.report_failure("friends", self.friends.error().map(str::to_string));
        }
        if self.games.poll() {
            self.report_failure("played games", self.games.error().map(str::to_string));
        }
        if self.achievements.poll() {
            self.report_failure("achievements", self.achievements.error().map(str::to_string));
        }

        if let Some(profile) = self.profile_promise.as_ref().and_then(|p| p.ready()) {
            self.profile = profile.clone();
            if self.profile.is_none() {
                self.status_message = "Profile unavailable".to_string();
            }
            self.profile_promise = None;
        }
    }

    fn report_failure(&mut self, what: &str, error: Option<String>) {
        if let Some(error) = error {
            self.status_message = format!("Failed to load {}: {}", what, error);
        }
    }

    fn showing_sample(&self) -> bool {
        match self.route {
            Route::Home => self.friends.is_sample(),
            Route::MyActivities => self.games.is_sample() || self.achievements.is_sample(),
            _ => false,
        }
    }
}

impl eframe::App for FrienderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loads();

        let mut target = None;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            Header::show(ui, self.route, self.user_present(), |route| target = Some(route));
            ui.add_space(6.0);
        });
        if let Some(route) = target {
            self.navigate(route);
        }

        let mut clear_status = false;
        let showing_sample = self.showing_sample();
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            StatusBar::show(ui, &self.status_message, showing_sample, &mut clear_status);
        });
        if clear_status {
            self.status_message.clear();
        }

        let screen = screen_for(self.route, self.user_present());
        egui::CentralPanel::default().show(ctx, |ui| match screen {
            Screen::SignIn => {
                if let Some(action) = self.sign_in_view.ui(ui, self.credentials_valid) {
                    self.handle_sign_in(action);
                }
            }
            Screen::Create => {
                if let Some(post) = self.create_view.ui(ui) {
                    log::info!("New activity post: {}", post.title);
                    self.posts.push(post);
                    self.status_message = "Posted".to_string();
                }
            }
            Screen::Home => {
                if let Some(HomeAction::Refresh) = HomeView::ui(ui, &self.friends, &self.posts) {
                    self.friends = Loadable::Idle;
                    self.load_for_route();
                }
            }
            Screen::MyActivities => {
                if let Some(ActivitiesAction::Refresh) =
                    ActivitiesView::ui(ui, &self.games, &self.achievements)
                {
                    self.games = Loadable::Idle;
                    self.achievements = Loadable::Idle;
                    self.load_for_route();
                }
            }
            Screen::Profile => {
                let loading = self.profile_promise.is_some();
                let signed_in = self.tokens.is_authenticated();
                match ProfileView::ui(ui, self.profile.as_ref(), loading, signed_in) {
                    Some(ProfileAction::Refresh) => {
                        self.profile = None;
                        self.load_for_route();
                    }
                    Some(ProfileAction::SignOut) => self.sign_out(),
                    None => {}
                }
            }
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
