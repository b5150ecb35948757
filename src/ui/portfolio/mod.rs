// SPDX-License-Identifier: MPL-2.0
//! Portfolio page: category selector, related experience and project cards.
//!
//! The page owns the in-app [`History`]. The selected category is mirrored
//! into the current location's `category` parameter by replacing the entry in
//! place, so browsing categories never grows the history. Navigating to a
//! location (typed in the navbar, or back/forward) goes the other way: the
//! parameter is read back and the selector jumps to the matching index.

mod cards;

use crate::config::defaults::{CATEGORY_QUERY_KEY, PORTFOLIO_PATH};
use crate::domain::error::SelectorError;
use crate::domain::location::{find_by_slug, slugify, History, Location};
use crate::domain::selector::sizing::selector_viewport_width;
use crate::domain::selector::{InputPolicy, LineLayout, SelectionChanged, TextMeasure};
use crate::domain::ui::ScaleFloor;
use crate::i18n::fluent::I18n;
use crate::portfolio::{separator_after, Portfolio};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::selector::{self, EstimatedTextMetrics};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length, Task};
use std::time::Instant;

/// Horizontal padding around the page content.
const PAGE_PADDING: f32 = spacing::XL;

#[derive(Debug, Clone)]
pub enum Message {
    Selector(selector::Message),
    WindowResized(f32),
    CopyLink(String),
}

/// Events propagated to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The user picked a category; carries its slug for persistence.
    CategoryChanged { slug: String },
    LinkCopied(String),
    /// The requested location is not a page this app knows.
    UnknownLocation(String),
}

/// Everything the page needs at startup.
#[derive(Debug, Clone)]
pub struct Init {
    pub portfolio: Portfolio,
    /// Ordered category labels; derived from the data when empty.
    pub categories: Vec<String>,
    pub location: Location,
    pub policy: InputPolicy,
    pub scale_floor: ScaleFloor,
}

/// Location of the portfolio page, optionally pre-selecting `slug`.
#[must_use]
pub fn initial_location(slug: Option<&str>) -> Location {
    let location = Location::new(PORTFOLIO_PATH);
    match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => location.with_query_param(CATEGORY_QUERY_KEY, slug),
        None => location,
    }
}

#[derive(Debug)]
pub struct State {
    portfolio: Portfolio,
    categories: Vec<String>,
    history: History,
    selector: selector::State,
    stacked: bool,
}

impl State {
    /// Builds the page. Fails when no category can be shown at all.
    pub fn new(init: Init) -> Result<Self, SelectorError> {
        let categories = if init.categories.is_empty() {
            init.portfolio.categories()
        } else {
            init.categories
        };

        let initial_index = index_for(&categories, &init.location);
        let selector = selector::State::new(
            categories.clone(),
            initial_index,
            init.policy,
            init.scale_floor,
        )?;

        Ok(Self {
            portfolio: init.portfolio,
            categories,
            history: History::new(init.location),
            selector,
            stacked: false,
        })
    }

    /// Lets the selector announce its starting selection.
    pub fn mount(&mut self) -> Event {
        match self.selector.mount() {
            selector::Event::SelectionChanged(change) => self.on_selection_changed(change),
            selector::Event::None => Event::None,
        }
    }

    pub fn update(&mut self, message: Message, now: Instant, i18n: &I18n) -> (Event, Task<Message>) {
        match message {
            Message::Selector(message) => {
                let (event, task) = self.selector.update(message, now);
                let event = match event {
                    selector::Event::SelectionChanged(change) => self.on_selection_changed(change),
                    selector::Event::None => Event::None,
                };
                (event, task.map(Message::Selector))
            }
            Message::WindowResized(width) => {
                self.resize(width, i18n);
                (Event::None, Task::none())
            }
            Message::CopyLink(link) => {
                tracing::debug!(%link, "copying link");
                (Event::LinkCopied(link.clone()), iced::clipboard::write(link))
            }
        }
    }

    /// Recomputes the selector line for a window `width` pixels wide.
    pub fn resize(&mut self, width: f32, i18n: &I18n) {
        self.stacked = width < sizing::STACK_BREAKPOINT;

        let container_width = width.min(sizing::CONTENT_MAX_WIDTH) - 2.0 * PAGE_PADDING;
        let lead_label_width = EstimatedTextMetrics::new(typography::BODY_LG, None)
            .measure_text_width(&i18n.tr("portfolio-lead-in"), 1.0);

        let viewport = selector_viewport_width(&LineLayout {
            container_width,
            lead_label_width,
            gap: spacing::SM,
            stacked: self.stacked,
        }) - selector::ARROW_ALLOWANCE;

        self.selector.set_viewport_width(viewport.max(0.0));
    }

    /// Opens `location` as a new history entry.
    pub fn navigate_to(&mut self, location: Location) -> Event {
        if location.path() != PORTFOLIO_PATH {
            tracing::warn!(%location, "unknown in-app location");
            return Event::UnknownLocation(location.to_string());
        }
        tracing::info!(%location, "navigating");
        self.history.push(location);
        self.sync_from_location()
    }

    pub fn history_back(&mut self) -> Event {
        if self.history.back().is_none() {
            return Event::None;
        }
        tracing::debug!(location = %self.history.current(), "history back");
        self.sync_from_location()
    }

    pub fn history_forward(&mut self) -> Event {
        if self.history.forward().is_none() {
            return Event::None;
        }
        tracing::debug!(location = %self.history.current(), "history forward");
        self.sync_from_location()
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        self.history.current()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn selected_category(&self) -> &str {
        self.selector.selector().current_label()
    }

    #[must_use]
    pub fn selector(&self) -> &selector::State {
        &self.selector
    }

    /// Jumps the selector to whatever the current location names.
    fn sync_from_location(&mut self) -> Event {
        let index = index_for(&self.categories, self.history.current()).unwrap_or(0);
        if index == self.selector.selector().current_index() {
            return Event::None;
        }
        match self.selector.set_index(index) {
            selector::Event::SelectionChanged(change) => self.on_selection_changed(change),
            selector::Event::None => Event::None,
        }
    }

    fn on_selection_changed(&mut self, change: SelectionChanged) -> Event {
        if change.is_initial {
            tracing::debug!(category = %change.label, index = change.index, "initial category");
            return Event::None;
        }

        let slug = slugify(&change.label);
        let next = self
            .history
            .current()
            .with_query_param(CATEGORY_QUERY_KEY, &slug);
        self.history.replace(next);

        tracing::info!(category = %change.label, index = change.index, "category selected");
        Event::CategoryChanged { slug }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let heading = Text::new(i18n.tr("portfolio-heading")).size(typography::DISPLAY);

        let category = self.selected_category();
        let projects = self.portfolio.projects_in(category);

        let body: Element<'a, Message> = if projects.is_empty() {
            cards::empty_state(i18n)
        } else {
            cards::grid(projects, i18n)
        };

        let mut content = Column::new()
            .spacing(spacing::LG)
            .padding([spacing::LG, PAGE_PADDING])
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(heading)
            .push(self.selector_line(i18n));
        if let Some(experience) = self.experience_line(category, i18n) {
            content = content.push(experience);
        }
        let content = content.push(body);

        Scrollable::new(Container::new(content).center_x(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn selector_line<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let lead_in = Text::new(i18n.tr("portfolio-lead-in")).size(typography::BODY_LG);
        let wheel = self.selector.view(i18n).map(Message::Selector);

        if self.stacked {
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fill)
                .push(lead_in)
                .push(wheel)
                .into()
        } else {
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(lead_in)
                .push(wheel)
                .into()
        }
    }

    fn experience_line<'a>(
        &'a self,
        category: &str,
        i18n: &'a I18n,
    ) -> Option<Element<'a, Message>> {
        let experience = self.portfolio.related_experience(category);
        if experience.is_empty() {
            return None;
        }

        let mut row = Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr("portfolio-experience-lead-in")).size(typography::BODY));

        for (index, entry) in experience.iter().enumerate() {
            row = row.push(
                button(Text::new(entry.name.as_str()).size(typography::BODY))
                    .padding(0)
                    .style(styles::button::link)
                    .on_press(Message::CopyLink(format!("/resume#{}", entry.anchor))),
            );
            if let Some(separator) = separator_after(index, experience.len()) {
                row = row.push(Text::new(separator.trim_end()).size(typography::BODY));
            }
        }

        Some(row.wrap().into())
    }
}

/// Index of the category named by `location`'s `category` parameter.
fn index_for(categories: &[String], location: &Location) -> Option<usize> {
    let slug = location.query_param(CATEGORY_QUERY_KEY)?;
    let index = find_by_slug(categories, slug);
    if index.is_none() {
        tracing::debug!(%slug, "no category matches slug");
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{Experience, Project};

    fn project(title: &str, date: &str, category: &str) -> Project {
        Project {
            title: title.into(),
            date: date.into(),
            category: category.into(),
            description: String::new(),
            github_url: None,
            design_spec_url: None,
            tags: Vec::new(),
            featured: false,
            image: None,
        }
    }

    fn scenario_categories() -> Vec<String> {
        ["Agentic AI", "Web Dev", "Stats", "ML Systems", "Research"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn page(location: Location) -> State {
        let mut portfolio = Portfolio::default();
        portfolio.projects.push(project("Planner", "2024-05", "Agentic AI"));
        portfolio.projects.push(project("Site", "2023-01", "Web Dev"));
        portfolio.experience.insert(
            "Web Dev".into(),
            vec![Experience {
                name: "Acme".into(),
                anchor: "acme".into(),
            }],
        );

        State::new(Init {
            portfolio,
            categories: scenario_categories(),
            location,
            policy: InputPolicy::default(),
            scale_floor: ScaleFloor::default(),
        })
        .unwrap_or_else(|err| panic!("page should build: {err}"))
    }

    fn step_forward(page: &mut State, now: Instant) -> Event {
        let i18n = I18n::default();
        let (event, _) = page.update(
            Message::Selector(selector::Message::Input(
                crate::domain::selector::SelectorInput::Arrow(
                    crate::domain::selector::ArrowSide::Right,
                ),
            )),
            now,
            &i18n,
        );
        if let Some(token) = page.selector().selector().lock_token() {
            let _ = page.update(
                Message::Selector(selector::Message::LockReleased(token)),
                now,
                &i18n,
            );
        }
        event
    }

    #[test]
    fn initial_location_carries_slug() {
        assert_eq!(
            initial_location(Some("web-dev")).to_string(),
            "/portfolio?category=web-dev"
        );
        assert_eq!(initial_location(Some("  ")).to_string(), "/portfolio");
        assert_eq!(initial_location(None).to_string(), "/portfolio");
    }

    #[test]
    fn initial_index_comes_from_slug() {
        let page = page(initial_location(Some("stats")));
        assert_eq!(page.selected_category(), "Stats");
    }

    #[test]
    fn unknown_slug_falls_back_to_first_category() {
        let page = page(initial_location(Some("nope")));
        assert_eq!(page.selected_category(), "Agentic AI");
    }

    #[test]
    fn mount_does_not_rewrite_location() {
        let mut page = page(initial_location(None));
        assert_eq!(page.mount(), Event::None);
        assert_eq!(page.location().to_string(), "/portfolio");
    }

    #[test]
    fn selection_change_replaces_current_entry() {
        let mut page = page(initial_location(None));
        let _ = page.mount();

        let event = step_forward(&mut page, Instant::now());

        assert_eq!(
            event,
            Event::CategoryChanged {
                slug: "web-dev".into()
            }
        );
        assert_eq!(page.location().to_string(), "/portfolio?category=web-dev");
        assert!(!page.can_go_back());
    }

    #[test]
    fn back_and_forward_restore_selection() {
        let mut page = page(initial_location(Some("stats")));
        let _ = page.mount();

        let _ = page.navigate_to(initial_location(Some("research")));
        assert_eq!(page.selected_category(), "Research");
        assert!(page.can_go_back());

        let event = page.history_back();
        assert_eq!(event, Event::CategoryChanged { slug: "stats".into() });
        assert_eq!(page.selected_category(), "Stats");

        let _ = page.history_forward();
        assert_eq!(page.selected_category(), "Research");
        assert!(!page.can_go_forward());
    }

    #[test]
    fn back_without_history_is_a_no_op() {
        let mut page = page(initial_location(None));
        assert_eq!(page.history_back(), Event::None);
        assert_eq!(page.history_forward(), Event::None);
    }

    #[test]
    fn unknown_path_is_rejected() {
        let mut page = page(initial_location(None));
        let event = page.navigate_to(Location::parse("/blog?category=stats"));
        assert_eq!(event, Event::UnknownLocation("/blog?category=stats".into()));
        assert!(!page.can_go_back());
    }

    #[test]
    fn empty_category_list_uses_data_categories() {
        let mut portfolio = Portfolio::default();
        portfolio.projects.push(project("A", "2024", "Only"));
        let page = State::new(Init {
            portfolio,
            categories: Vec::new(),
            location: initial_location(None),
            policy: InputPolicy::default(),
            scale_floor: ScaleFloor::default(),
        })
        .unwrap_or_else(|err| panic!("page should build: {err}"));
        assert_eq!(page.categories(), ["Only".to_string()]);
    }

    #[test]
    fn no_categories_at_all_is_an_error() {
        let result = State::new(Init {
            portfolio: Portfolio::default(),
            categories: Vec::new(),
            location: initial_location(None),
            policy: InputPolicy::default(),
            scale_floor: ScaleFloor::default(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn narrow_window_stacks_the_selector_line() {
        let i18n = I18n::default();
        let mut page = page(initial_location(None));
        page.resize(400.0, &i18n);
        assert!(page.stacked);
        page.resize(1200.0, &i18n);
        assert!(!page.stacked);
        assert!(page.selector().viewport_width().is_some_and(|w| w > 0.0));
    }

    #[test]
    fn copy_link_reports_the_link() {
        let i18n = I18n::default();
        let mut page = page(initial_location(None));
        let (event, _) = page.update(
            Message::CopyLink("/resume#acme".into()),
            Instant::now(),
            &i18n,
        );
        assert_eq!(event, Event::LinkCopied("/resume#acme".into()));
    }

    #[test]
    fn view_renders_cards_and_empty_state() {
        let i18n = I18n::default();
        let mut page = page(initial_location(Some("web-dev")));
        let _with_projects = page.view(&i18n);
        drop(_with_projects);

        let _ = page.navigate_to(initial_location(Some("research")));
        let _empty = page.view(&i18n);
    }
}
