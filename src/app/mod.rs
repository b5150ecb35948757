// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the portfolio page, the navbar,
//! localization and persisted session state, and translates messages into
//! side effects like saving the last category or showing a toast. Startup
//! policy (which file to load, which category to open) lives in `App::new`
//! so it is easy to audit user-facing behavior.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::portfolio;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::portfolio::{self as page, Init};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// `None` when no category could be determined.
    page: Option<page::State>,
    navbar: navbar::State,
    theme_mode: ThemeMode,
    /// Persisted session state (last category).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field(
                "location",
                &self.page.as_ref().map(|page| page.location().to_string()),
            )
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            page: None,
            navbar: navbar::State::default(),
            theme_mode: ThemeMode::System,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Loads config, content and session state, then builds the page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        let data_path = flags
            .data_path
            .map(PathBuf::from)
            .or_else(|| config.portfolio.data_path.clone());
        let (portfolio, portfolio_warning) = portfolio::load(data_path.as_deref());

        // Show warnings for config/state/content loading issues
        for key in [config_warning, state_warning, portfolio_warning]
            .into_iter()
            .flatten()
        {
            app.notifications.push(Notification::warning(key));
        }

        let slug = flags
            .category
            .or_else(|| app.app_state.last_category.clone());
        let location = page::initial_location(slug.as_deref());

        let init = Init {
            portfolio,
            categories: config.portfolio.category_order(),
            location,
            policy: config.selector.input_policy(),
            scale_floor: config.selector.scale_floor(),
        };

        match page::State::new(init) {
            Ok(mut state) => {
                // No resize event arrives for the initial window size.
                state.resize(WINDOW_DEFAULT_WIDTH as f32, &app.i18n);
                let _ = state.mount();
                app.navbar.sync(state.location());
                tracing::info!(
                    category = state.selected_category(),
                    location = %state.location(),
                    "portfolio page ready"
                );
                app.page = Some(state);
            }
            Err(err) => {
                tracing::error!(%err, "portfolio page unavailable");
                app.notifications
                    .push(Notification::error(err.i18n_key()));
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.page {
            Some(page) => format!("{} - {app_name}", page.selected_category()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            page: &mut self.page,
            navbar: &mut self.navbar,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
            state_dir: None,
        };

        match message {
            Message::Portfolio(page_message) => {
                update::handle_portfolio_message(&mut ctx, page_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::WindowResized(width) => update::handle_window_resized(&mut ctx, width),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: self.page.as_ref(),
            navbar: &self.navbar,
            notifications: &self.notifications,
        })
    }
}
