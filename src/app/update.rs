// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler works on an [`UpdateContext`] borrowing the parts of `App` it
//! may touch, and turns component events into side effects: persisting the
//! session, showing toasts, and keeping the navbar's location field in sync.

use super::persisted_state::AppState;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::portfolio::{self, Event as PortfolioEvent};
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Mutable view of the application state for one update.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a mut Option<portfolio::State>,
    pub navbar: &'a mut navbar::State,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
    /// Data directory override for the session file (tests).
    pub state_dir: Option<PathBuf>,
}

pub fn handle_portfolio_message(
    ctx: &mut UpdateContext<'_>,
    message: portfolio::Message,
) -> Task<Message> {
    let Some(page) = ctx.page.as_mut() else {
        return Task::none();
    };

    let (event, task) = page.update(message, Instant::now(), ctx.i18n);
    handle_page_event(ctx, event);
    task.map(Message::Portfolio)
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    let Some(page) = ctx.page.as_mut() else {
        return Task::none();
    };

    let event = navbar::update(
        ctx.navbar,
        message,
        page.can_go_back(),
        page.can_go_forward(),
    );

    let page_event = match event {
        NavbarEvent::None => return Task::none(),
        NavbarEvent::HistoryBack => page.history_back(),
        NavbarEvent::HistoryForward => page.history_forward(),
        NavbarEvent::Navigate(location) => page.navigate_to(location),
    };

    // The field always shows where we are after a navigation attempt.
    ctx.navbar.sync(page.location());
    handle_page_event(ctx, page_event);
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, width: f32) -> Task<Message> {
    if let Some(page) = ctx.page.as_mut() {
        page.resize(width, ctx.i18n);
    }
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    Task::none()
}

/// Applies the side effects of a page event.
pub fn handle_page_event(ctx: &mut UpdateContext<'_>, event: PortfolioEvent) {
    match event {
        PortfolioEvent::None => {}
        PortfolioEvent::CategoryChanged { slug } => {
            if let Some(page) = ctx.page.as_ref() {
                ctx.navbar.sync(page.location());
            }
            ctx.app_state.last_category = Some(slug);
            if let Some(key) = ctx.app_state.save_to(ctx.state_dir.clone()) {
                ctx.notifications.push(Notification::warning(key));
            }
        }
        PortfolioEvent::LinkCopied(link) => {
            ctx.notifications
                .push(Notification::info("portfolio-link-copied").with_arg("link", link));
        }
        PortfolioEvent::UnknownLocation(location) => {
            ctx.notifications.push(
                Notification::warning("notification-unknown-location")
                    .with_arg("location", location),
            );
        }
    }
}
