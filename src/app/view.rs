// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Stacks the navbar above the portfolio page and layers the toast overlay on
//! top of both.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::portfolio;
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: Option<&'a portfolio::State>,
    pub navbar: &'a navbar::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let (can_go_back, can_go_forward) = ctx
        .page
        .map_or((false, false), |page| (page.can_go_back(), page.can_go_forward()));

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        state: ctx.navbar,
        can_go_back,
        can_go_forward,
    })
    .map(Message::Navbar);

    let content: Element<'_, Message> = match ctx.page {
        Some(page) => page.view(ctx.i18n).map(Message::Portfolio),
        None => view_unavailable(ctx.i18n),
    };

    let column = Column::new()
        .push(navbar_view)
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(column)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Shown when there is no category to build the page from.
fn view_unavailable(i18n: &I18n) -> Element<'_, Message> {
    Container::new(
        Container::new(Text::new(i18n.tr("error-selector-no-categories")).size(typography::BODY_LG))
            .padding(spacing::LG)
            .style(styles::container::empty_state),
    )
    .center(Length::Fill)
    .into()
}
