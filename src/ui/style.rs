/// Status taxonomy display descriptors and shared container styles
///
/// Every status lookup is an exhaustive `match`, so adding a status
/// fails to compile until each place that displays one handles it.
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

use crate::state::{Filter, Status};

const EMERALD: Color = Color { r: 0.204, g: 0.827, b: 0.600, a: 1.0 };
const RED: Color = Color { r: 0.973, g: 0.443, b: 0.443, a: 1.0 };
const AMBER: Color = Color { r: 0.984, g: 0.749, b: 0.141, a: 1.0 };
const BLUE: Color = Color { r: 0.376, g: 0.647, b: 0.980, a: 1.0 };
const NEUTRAL: Color = Color { r: 0.420, g: 0.447, b: 0.502, a: 1.0 };

/// Fixed presentation of one status
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusStyle {
    /// Badge text on cards
    pub label: &'static str,
    /// Heading in the legend
    pub legend_label: &'static str,
    /// Explanation in the legend
    pub legend: &'static str,
    /// Caption under the summary counter
    pub counter_label: &'static str,
    pub icon: &'static str,
    pub accent: Color,
}

pub fn status_style(status: Status) -> StatusStyle {
    match status {
        Status::Found => StatusStyle {
            label: "Found",
            legend_label: "Found",
            legend: "Game is still playable or has been successfully archived",
            counter_label: "Found",
            icon: "✅",
            accent: EMERALD,
        },
        Status::Lost => StatusStyle {
            label: "Lost Media",
            legend_label: "Lost Media",
            legend: "Game is confirmed lost and no longer accessible",
            counter_label: "Lost",
            icon: "❌",
            accent: RED,
        },
        Status::PossibleLost => StatusStyle {
            label: "Possible Lost Media?",
            legend_label: "Possible Lost Media",
            legend: "Game may be lost; needs further investigation",
            counter_label: "Possible Lost",
            icon: "❓",
            accent: AMBER,
        },
    }
}

/// Text on a filter button
pub fn filter_label(filter: Filter) -> String {
    match filter {
        Filter::All => "All Games".to_string(),
        Filter::Only(Status::Found) => format!("{} Found", status_style(Status::Found).icon),
        Filter::Only(Status::Lost) => format!("{} Lost", status_style(Status::Lost).icon),
        Filter::Only(Status::PossibleLost) => {
            format!("{} Possible Lost", status_style(Status::PossibleLost).icon)
        }
    }
}

/// Same color at a lower opacity
pub fn faded(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Rounded panel with a tinted border
pub fn panel(border: Color, radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            border: Border {
                color: border,
                width: 1.0,
                radius: radius.into(),
            },
            ..container::Style::default()
        }
    }
}

/// Card frame, tinted with the entry's status accent
pub fn card(status: Status) -> impl Fn(&Theme) -> container::Style {
    panel(faded(status_style(status).accent, 0.3), 16.0)
}

/// Solid accent stripe across the top of a card
pub fn accent_bar(status: Status) -> impl Fn(&Theme) -> container::Style {
    let accent = status_style(status).accent;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(accent)),
        ..container::Style::default()
    }
}

/// Pill or tile filled with a translucent accent
pub fn tinted(accent: Color, radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(accent),
        background: Some(Background::Color(faded(accent, 0.2))),
        border: Border {
            color: faded(accent, 0.4),
            width: 1.0,
            radius: radius.into(),
        },
        ..container::Style::default()
    }
}

/// Border for the summary counter tiles; `None` is the total counter
pub fn counter_border(status: Option<Status>) -> Color {
    match status {
        Some(status) => faded(status_style(status).accent, 0.3),
        None => faded(NEUTRAL, 0.5),
    }
}

pub fn banner_accent() -> Color {
    BLUE
}

pub fn muted() -> Color {
    NEUTRAL
}
