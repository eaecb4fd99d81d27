/// Entry card: one catalog entry with its own expand/collapse toggle
use iced::widget::{column, container, horizontal_space, mouse_area, row, text, Space};
use iced::{Alignment, Element, Length};

use super::style;
use crate::state::{Entry, Status};
use crate::Message;

/// Render a single entry.
///
/// The whole card is the click target. When collapsed the description
/// is left out of the tree entirely rather than truncated.
pub fn view(entry: &Entry, expanded: bool) -> Element<'_, Message> {
    let descriptor = style::status_style(entry.status);

    let icon_tile = container(text(descriptor.icon).size(18))
        .width(40)
        .height(40)
        .center_x(40)
        .center_y(40)
        .style(style::tinted(descriptor.accent, 12.0));

    let heading = row![icon_tile, text(entry.title.as_str()).size(22)]
        .spacing(12)
        .align_y(Alignment::Center);

    let mut top = row![
        column![heading, badge(entry.status)].spacing(12),
        horizontal_space(),
    ]
    .spacing(16);

    if let Some(year) = entry.year.as_deref() {
        top = top.push(
            container(text(year).size(14).color(style::muted()))
                .padding([4, 12])
                .style(style::tinted(style::muted(), 8.0)),
        );
    }

    let mut body = column![top].spacing(12);

    if let Some(description) = description(entry, expanded) {
        body = body.push(
            container(text(description).size(15))
                .padding(16)
                .width(Length::Fill)
                .style(style::panel(style::faded(style::muted(), 0.5), 12.0)),
        );
    }

    body = body.push(text(hint(expanded)).size(12).color(style::muted()));

    let frame = column![
        container(Space::new(Length::Fill, Length::Fixed(4.0)))
            .width(Length::Fill)
            .style(style::accent_bar(entry.status)),
        container(body).padding(24).width(Length::Fill),
    ];

    mouse_area(
        container(frame)
            .width(Length::Fill)
            .style(style::card(entry.status)),
    )
    .on_press(Message::ToggleEntry(entry.id))
    .into()
}

/// Status pill with a dot, shared by cards
pub fn badge<'a>(status: Status) -> Element<'a, Message> {
    let descriptor = style::status_style(status);

    container(
        row![
            text("●").size(10).color(descriptor.accent),
            text(descriptor.label.to_uppercase()).size(12),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([4, 12])
    .style(style::tinted(descriptor.accent, 999.0))
    .into()
}

/// Description text to render, if any. Collapsed cards show none of it.
pub fn description(entry: &Entry, expanded: bool) -> Option<&str> {
    expanded.then_some(entry.description.as_str())
}

fn hint(expanded: bool) -> &'static str {
    if expanded {
        "▴ Click to collapse"
    } else {
        "▾ Click to expand"
    }
}
