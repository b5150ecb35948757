// SPDX-License-Identifier: MPL-2.0
//! Circular category selector widget.
//!
//! Wraps a [`CircularSelector`] and translates Iced mouse input into
//! [`SelectorInput`]s. The component owns the lock-release timer: every
//! accepted step schedules an abortable sleep, and replacing or dropping the
//! component aborts whatever timer is still pending.

pub mod metrics;

pub use metrics::EstimatedTextMetrics;

use crate::domain::error::SelectorError;
use crate::domain::selector::{
    fit_label_scale, ArrowSide, CircularSelector, ClickTarget, InputPolicy, LabelScale,
    LockToken, SelectionChanged, SelectorInput,
};
use crate::domain::ui::ScaleFloor;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::Accents;
use iced::mouse::{self, ScrollDelta};
use iced::widget::{button, container, mouse_area, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, task, Element, Length, Point, Task, Theme};
use std::time::Instant;

/// Font size of the centred label before scaling.
pub const LABEL_FONT_SIZE: f32 = typography::TITLE_MD;

/// Font size of the neighbour labels.
const NEIGHBOUR_FONT_SIZE: f32 = typography::BODY;

const CARET_SIZE: f32 = typography::CAPTION;

/// Width taken by the two arrow buttons and their spacing.
pub const ARROW_ALLOWANCE: f32 = 2.0 * (typography::TITLE_SM + 2.0 * spacing::XS + spacing::XXS);

#[derive(Debug, Clone)]
pub enum Message {
    /// Input already expressed in selector terms (clicks, arrows, release).
    Input(SelectorInput),
    /// Primary button pressed somewhere over the wheel.
    Pressed,
    PointerMoved(Point),
    Scrolled(ScrollDelta),
    LockReleased(LockToken),
    /// New width for the selector viewport, in pixels.
    ViewportResized(f32),
}

/// Events propagated to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    SelectionChanged(SelectionChanged),
}

pub struct State {
    selector: CircularSelector,
    scale_floor: ScaleFloor,
    label_scale: LabelScale,
    viewport_width: Option<f32>,
    last_pointer: Option<Point>,
    lock_timer: Option<task::Handle>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("selector", &self.selector)
            .field("label_scale", &self.label_scale)
            .field("viewport_width", &self.viewport_width)
            .field("lock_timer_pending", &self.lock_timer.is_some())
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates the component. Fails if `items` is empty.
    pub fn new(
        items: Vec<String>,
        initial_index: Option<usize>,
        policy: InputPolicy,
        scale_floor: ScaleFloor,
    ) -> Result<Self, SelectorError> {
        let selector = CircularSelector::new(items, initial_index)?.with_policy(policy);
        Ok(Self {
            selector,
            scale_floor,
            label_scale: LabelScale::FULL,
            viewport_width: None,
            last_pointer: None,
            lock_timer: None,
        })
    }

    /// Announces the current selection once the page is shown.
    pub fn mount(&mut self) -> Event {
        self.refit();
        Event::SelectionChanged(self.selector.announce())
    }

    /// Jumps straight to `index`, as when the location changes under us.
    pub fn set_index(&mut self, index: usize) -> Event {
        let change = self.selector.set_index(index);
        self.refit();
        Event::SelectionChanged(change)
    }

    pub fn update(&mut self, message: Message, now: Instant) -> (Event, Task<Message>) {
        match message {
            Message::Input(input) => self.apply(input, now),
            Message::Pressed => match self.last_pointer {
                Some(point) => self.apply(
                    SelectorInput::PointerDown {
                        x: point.x,
                        y: point.y,
                    },
                    now,
                ),
                None => {
                    tracing::trace!("press without a known pointer position");
                    (Event::None, Task::none())
                }
            },
            Message::PointerMoved(point) => {
                self.last_pointer = Some(point);
                self.apply(
                    SelectorInput::PointerMoved {
                        x: point.x,
                        y: point.y,
                    },
                    now,
                )
            }
            Message::Scrolled(delta) => {
                let y = match delta {
                    ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => y,
                };
                // Iced reports a positive y when scrolling up.
                self.apply(SelectorInput::Wheel { delta_y: -y }, now)
            }
            Message::LockReleased(token) => {
                if self.selector.release_lock(token) {
                    self.lock_timer = None;
                } else {
                    tracing::trace!(?token, "stale lock release ignored");
                }
                (Event::None, Task::none())
            }
            Message::ViewportResized(width) => {
                self.set_viewport_width(width);
                (Event::None, Task::none())
            }
        }
    }

    /// Sets the viewport width in pixels and refits the centred label.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = Some(width);
        self.refit();
    }

    #[must_use]
    pub fn selector(&self) -> &CircularSelector {
        &self.selector
    }

    #[must_use]
    pub fn label_scale(&self) -> LabelScale {
        self.label_scale
    }

    #[must_use]
    pub fn viewport_width(&self) -> Option<f32> {
        self.viewport_width
    }

    /// Whether a lock-release timer is still pending.
    #[must_use]
    pub fn has_pending_release(&self) -> bool {
        self.lock_timer.is_some()
    }

    fn apply(&mut self, input: SelectorInput, now: Instant) -> (Event, Task<Message>) {
        let Some(change) = self.selector.handle_input(input, now) else {
            tracing::trace!(?input, "selector input produced no step");
            return (Event::None, Task::none());
        };

        self.refit();
        let task = match self.selector.lock_token() {
            Some(token) => self.schedule_release(token),
            None => Task::none(),
        };
        (Event::SelectionChanged(change), task)
    }

    fn schedule_release(&mut self, token: LockToken) -> Task<Message> {
        let delay = self.selector.policy().lock_duration();
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::LockReleased(token),
        )
        .abortable();
        self.arm_release(handle);
        task
    }

    /// Keeps `handle` as the pending release. Replacing or dropping it aborts
    /// the timer it controls.
    fn arm_release(&mut self, handle: task::Handle) {
        self.lock_timer = Some(handle.abort_on_drop());
    }

    fn refit(&mut self) {
        let metrics = EstimatedTextMetrics::new(LABEL_FONT_SIZE, self.viewport_width);
        if let Some(scale) =
            fit_label_scale(&metrics, self.selector.current_label(), self.scale_floor)
        {
            self.label_scale = scale;
        }
    }

    /// Renders the wheel with its arrow buttons on either side.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let upper = self.selector.previous_neighbour().map(|(_, label)| label);
        let lower = self.selector.next_neighbour().map(|(_, label)| label);

        let wheel = Column::new()
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .push(clickable(caret("▲"), ClickTarget::UpCaret))
            .push(clickable(neighbour(upper), ClickTarget::UpperSlot))
            .push(clickable(self.centre(), ClickTarget::CenterSlot))
            .push(clickable(neighbour(lower), ClickTarget::LowerSlot))
            .push(clickable(caret("▼"), ClickTarget::DownCaret));

        let body = mouse_area(Container::new(wheel).padding(spacing::XXS))
            .on_press(Message::Pressed)
            .on_move(Message::PointerMoved)
            .on_release(Message::Input(SelectorInput::PointerUp))
            .on_exit(Message::Input(SelectorInput::PointerCancelled))
            .on_scroll(Message::Scrolled)
            .interaction(mouse::Interaction::Pointer);

        let width = self.viewport_width.map_or(Length::Fill, Length::Fixed);

        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(arrow_button(i18n.tr("selector-previous"), ArrowSide::Left))
            .push(Container::new(body).width(width))
            .push(arrow_button(i18n.tr("selector-next"), ArrowSide::Right))
            .into()
    }

    fn centre(&self) -> Element<'_, Message> {
        let size = LABEL_FONT_SIZE * self.label_scale.value();
        Container::new(
            Text::new(self.selector.current_label())
                .size(size)
                .wrapping(text::Wrapping::None)
                .style(|theme: &Theme| text::Style {
                    color: Some(Accents::for_theme(theme).brand),
                }),
        )
        .height(Length::Fixed(sizing::SELECTOR_SLOT_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .into()
    }
}

fn clickable<'a>(
    content: impl Into<Element<'a, Message>>,
    target: ClickTarget,
) -> Element<'a, Message> {
    mouse_area(content)
        .on_release(Message::Input(SelectorInput::Click(target)))
        .into()
}

fn neighbour<'a>(label: Option<&'a str>) -> Element<'a, Message> {
    Text::new(label.unwrap_or_default())
        .size(NEIGHBOUR_FONT_SIZE)
        .wrapping(text::Wrapping::None)
        .style(|theme: &Theme| text::Style {
            color: Some(
                Accents::for_theme(theme)
                    .muted_text
                    .scale_alpha(opacity::SLOT_FADED),
            ),
        })
        .into()
}

fn caret<'a>(glyph: &'static str) -> Element<'a, Message> {
    Text::new(glyph)
        .size(CARET_SIZE)
        .style(|theme: &Theme| text::Style {
            color: Some(Accents::for_theme(theme).muted_text),
        })
        .into()
}

fn arrow_button<'a>(label: String, side: ArrowSide) -> Element<'a, Message> {
    let glyph = match side {
        ArrowSide::Left => "‹",
        ArrowSide::Right => "›",
    };
    let arrow = button(Text::new(glyph).size(typography::TITLE_SM))
        .on_press(Message::Input(SelectorInput::Arrow(side)))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::link);

    tooltip(
        arrow,
        container(Text::new(label).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::container::tag),
        tooltip::Position::Bottom,
    )
    .into()
}
