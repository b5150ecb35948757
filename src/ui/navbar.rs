// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with in-app history controls.
//!
//! Shows back/forward buttons and an editable location field. The page owns
//! the history itself; the navbar only keeps the text being typed and reports
//! what the user asked for.

use crate::domain::location::Location;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Container, Row, Text},
    Element, Length,
};

/// Text currently shown in the location field.
#[derive(Debug, Clone, Default)]
pub struct State {
    draft: String,
}

impl State {
    /// Replaces the draft with `location`, discarding any unsubmitted edit.
    pub fn sync(&mut self, location: &Location) {
        self.draft = location.to_string();
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Back,
    Forward,
    LocationEdited(String),
    LocationSubmitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    HistoryBack,
    HistoryForward,
    Navigate(Location),
}

/// Process a navbar message and return the corresponding event.
///
/// Presses on an unavailable direction are swallowed so keyboard shortcuts,
/// which bypass the disabled buttons, behave the same way.
pub fn update(
    state: &mut State,
    message: Message,
    can_go_back: bool,
    can_go_forward: bool,
) -> Event {
    match message {
        Message::Back if can_go_back => Event::HistoryBack,
        Message::Forward if can_go_forward => Event::HistoryForward,
        Message::Back | Message::Forward => Event::None,
        Message::LocationEdited(draft) => {
            state.draft = draft;
            Event::None
        }
        Message::LocationSubmitted => {
            let raw = state.draft.trim();
            if raw.is_empty() {
                Event::None
            } else {
                Event::Navigate(Location::parse(raw))
            }
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back = history_button(
        format!("← {}", ctx.i18n.tr("navbar-back")),
        ctx.can_go_back.then_some(Message::Back),
    );
    let forward = history_button(
        format!("{} →", ctx.i18n.tr("navbar-forward")),
        ctx.can_go_forward.then_some(Message::Forward),
    );

    let location = text_input(&ctx.i18n.tr("navbar-location-placeholder"), ctx.state.draft())
        .on_input(Message::LocationEdited)
        .on_submit(Message::LocationSubmitted)
        .size(typography::BODY)
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fill);

    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_SM);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(title)
        .push(back)
        .push(forward)
        .push(location);

    Container::new(row)
        .width(Length::Fill)
        .center_y(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::toolbar)
        .into()
}

fn history_button<'a>(label: String, on_press: Option<Message>) -> Element<'a, Message> {
    // Without on_press the button renders in its disabled status.
    button(Text::new(label).size(typography::BODY))
        .on_press_maybe(on_press)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary)
        .into()
}
