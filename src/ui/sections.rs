/// Page sections around the entry list
///
/// Header, summary counters, filter bar, empty state and the static
/// banner, legend and footer.
use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Alignment, Element, Length, Theme};

use super::style;
use crate::state::{Filter, Status, Summary};
use crate::Message;

pub const TITLE: &str = "Roblox Game Archive";

const SUBTITLE: &str = "Preserving Roblox gaming history, tracking found & lost games";

const BANNER_TITLE: &str = "Help Us Archive!";

const BANNER_TEXT: &str = "Do you remember any old Roblox games that are no longer \
available? Do you have screenshots, videos, or any information about lost Roblox games? \
Every bit of information helps preserve Roblox gaming history. This archive is a work in \
progress, more games will be added over time.";

const FOOTER: &str = "Roblox Game Archive • Preserving gaming history, one game at a time.";

const EMPTY_MESSAGE: &str = "No games found with this filter.";

/// Legend rows, least to most severe
const LEGEND_ORDER: [Status; 3] = [Status::Found, Status::PossibleLost, Status::Lost];

pub fn header<'a>() -> Element<'a, Message> {
    let logo = container(text("🎮").size(28))
        .width(56)
        .height(56)
        .center_x(56)
        .center_y(56)
        .style(style::tinted(style::banner_accent(), 16.0));

    row![
        logo,
        column![
            text(TITLE).size(34),
            text(SUBTITLE).size(14).color(style::muted()),
        ]
        .spacing(4),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}

/// Total plus one tile per status
pub fn counters<'a>(summary: Summary) -> Element<'a, Message> {
    let mut tiles: Vec<Element<'a, Message>> = vec![counter("Total Games", summary.total, None)];
    tiles.extend(Status::ALL.into_iter().map(|status| {
        counter(
            style::status_style(status).counter_label,
            summary.count(status),
            Some(status),
        )
    }));

    Row::with_children(tiles).spacing(16).wrap().into()
}

fn counter<'a>(label: &'a str, value: usize, status: Option<Status>) -> Element<'a, Message> {
    container(
        column![
            text(value.to_string()).size(30),
            text(label).size(14).color(style::muted()),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(180)
    .style(style::panel(style::counter_border(status), 12.0))
    .into()
}

/// One button per filter option; the selected one is highlighted
pub fn filter_bar<'a>(selected: Filter) -> Element<'a, Message> {
    let buttons = Filter::OPTIONS.into_iter().map(|filter| {
        let look: fn(&Theme, button::Status) -> button::Style = if filter == selected {
            button::primary
        } else {
            button::secondary
        };

        Element::from(
            button(text(style::filter_label(filter)).size(14))
                .padding([8, 16])
                .style(look)
                .on_press(Message::FilterSelected(filter)),
        )
    });

    Row::with_children(buttons).spacing(8).wrap().into()
}

/// Shown instead of the list when the filter matches nothing
pub fn empty_state<'a>() -> Element<'a, Message> {
    container(
        column![
            text("🔍").size(36),
            text(EMPTY_MESSAGE).size(16).color(style::muted()),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(style::panel(style::faded(style::muted(), 0.5), 16.0))
    .into()
}

pub fn banner<'a>() -> Element<'a, Message> {
    let accent = style::banner_accent();

    container(
        row![
            text("📢").size(24),
            column![
                text(BANNER_TITLE).size(16).color(accent),
                text(BANNER_TEXT).size(14).color(style::muted()),
            ]
            .spacing(6),
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::Fill)
    .style(style::panel(style::faded(accent, 0.2), 16.0))
    .into()
}

pub fn legend<'a>() -> Element<'a, Message> {
    let mut rows: Vec<Element<'a, Message>> =
        vec![text("STATUS LEGEND").size(13).color(style::muted()).into()];

    rows.extend(LEGEND_ORDER.into_iter().map(|status| {
        let descriptor = style::status_style(status);
        Element::from(
            row![
                container(text(descriptor.icon).size(14))
                    .width(32)
                    .height(32)
                    .center_x(32)
                    .center_y(32)
                    .style(style::tinted(descriptor.accent, 8.0)),
                text(descriptor.legend_label).size(15).color(descriptor.accent),
                text(descriptor.legend).size(13).color(style::muted()),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        )
    }));

    container(Column::with_children(rows).spacing(12))
        .padding(24)
        .width(Length::Fill)
        .style(style::panel(style::faded(style::muted(), 0.5), 16.0))
        .into()
}

pub fn footer<'a>() -> Element<'a, Message> {
    container(text(FOOTER).size(13).color(style::muted()))
        .padding(24)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
