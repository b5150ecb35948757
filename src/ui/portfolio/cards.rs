// SPDX-License-Identifier: MPL-2.0
//! Project cards and the empty-category placeholder.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::portfolio::{format_project_date, Project};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::Accents;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Cards laid out in rows that wrap with the window width.
pub fn grid<'a>(projects: Vec<&'a Project>, i18n: &'a I18n) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = projects
        .into_iter()
        .map(|project| card(project, i18n))
        .collect();

    Row::with_children(cards)
        .spacing(spacing::MD)
        .wrap()
        .vertical_spacing(spacing::MD)
        .into()
}

fn card<'a>(project: &'a Project, i18n: &'a I18n) -> Element<'a, Message> {
    let mut title_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(project.title.as_str()).size(typography::TITLE_SM))
                .width(Length::Fill),
        );
    if project.featured {
        title_row = title_row.push(badge(i18n.tr("portfolio-featured")));
    }

    let date = format_project_date(&project.date);
    let date = Text::new(i18n.tr_with_args("portfolio-project-date", &[("date", date.as_str())]))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(Accents::for_theme(theme).muted_text),
        });

    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(title_row)
        .push(date)
        .push(Text::new(project.description.as_str()).size(typography::BODY));

    if !project.tags.is_empty() {
        let tags: Vec<Element<'a, Message>> = project
            .tags
            .iter()
            .map(|tag| badge(tag.clone()))
            .collect();
        content = content.push(
            Row::with_children(tags)
                .spacing(spacing::XXS)
                .wrap()
                .vertical_spacing(spacing::XXS),
        );
    }

    let mut links = Row::new().spacing(spacing::XS);
    if let Some(url) = &project.github_url {
        links = links.push(
            button(Text::new(i18n.tr("portfolio-link-github")).size(typography::BODY_SM))
                .style(styles::button::primary)
                .on_press(Message::CopyLink(url.clone())),
        );
    }
    if let Some(url) = &project.design_spec_url {
        links = links.push(
            button(Text::new(i18n.tr("portfolio-link-design-spec")).size(typography::BODY_SM))
                .style(styles::button::secondary)
                .on_press(Message::CopyLink(url.clone())),
        );
    }
    content = content.push(links);

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn badge<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::tag)
        .into()
}

/// Placeholder for a category without projects.
pub fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("portfolio-empty")).size(typography::BODY_LG))
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .style(styles::container::empty_state)
        .into()
}
