use iced::widget::{column, container, scrollable, Column};
use iced::{Element, Length, Task, Theme};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod state;
mod ui;

use config::Settings;
use error::AppError;
use state::{Catalog, Entry, EntryId, ExpansionState, Filter, FilterController};

/// Main application state
struct Archive {
    /// The fixed catalog, validated before the window opens
    catalog: Catalog,
    /// Which statuses are currently shown
    filter: FilterController,
    /// Expand/collapse state of the rendered cards
    expansion: ExpansionState,
    settings: Settings,
}

/// Application messages (events)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// User picked one of the filter buttons
    FilterSelected(Filter),
    /// User clicked an entry card
    ToggleEntry(EntryId),
}

/// What the entry list area shows for the current filter
#[derive(Debug, PartialEq)]
enum EntryList<'a> {
    /// Nothing matches; show the empty-state message
    Empty,
    /// Cards to render, in catalog order
    Cards(Vec<&'a Entry>),
}

impl Archive {
    /// Create a new instance of the application
    fn new(catalog: Catalog, settings: Settings) -> (Self, Task<Message>) {
        (
            Archive {
                catalog,
                filter: FilterController::new(),
                expansion: ExpansionState::new(),
                settings,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FilterSelected(filter) => {
                if self.filter.set_filter(filter) {
                    // Cards that fall out of the list are unmounted
                    let mounted: Vec<EntryId> = self
                        .filter
                        .visible_entries(&self.catalog)
                        .iter()
                        .map(|entry| entry.id)
                        .collect();
                    info!(?filter, visible = mounted.len(), "filter changed");
                    self.expansion.retain_mounted(mounted);
                }
            }
            Message::ToggleEntry(id) => match self.catalog.get(id) {
                Some(entry) if self.filter.selection().matches(entry) => {
                    let expanded = self.expansion.toggle(id);
                    debug!(id, title = %entry.title, expanded, "entry toggled");
                }
                Some(_) => debug!(id, "toggle for hidden entry ignored"),
                None => warn!(id, "toggle for unknown entry ignored"),
            },
        }

        Task::none()
    }

    fn entry_list(&self) -> EntryList<'_> {
        let visible = self.filter.visible_entries(&self.catalog);
        if visible.is_empty() {
            EntryList::Empty
        } else {
            EntryList::Cards(visible)
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let list: Element<'_, Message> = match self.entry_list() {
            EntryList::Empty => ui::sections::empty_state(),
            EntryList::Cards(entries) => Column::with_children(
                entries
                    .into_iter()
                    .map(|entry| ui::card::view(entry, self.expansion.is_expanded(entry.id))),
            )
            .spacing(16)
            .into(),
        };

        let content = column![
            ui::sections::header(),
            ui::sections::counters(self.catalog.summary()),
            ui::sections::filter_bar(self.filter.selection()),
            list,
            ui::sections::banner(),
            ui::sections::legend(),
            ui::sections::footer(),
        ]
        .spacing(32)
        .padding(40)
        .max_width(1024.0);

        scrollable(container(content).width(Length::Fill).center_x(Length::Fill))
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.settings.theme.theme()
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), AppError> {
    let (settings, config_error) = Settings::load();
    init_tracing(&settings.log_filter);

    if let Some(err) = config_error {
        warn!(%err, "falling back to default settings");
    }

    let catalog = Catalog::builtin()?;
    if catalog.is_empty() {
        warn!("catalog has no entries");
    }
    let summary = catalog.summary();
    info!(
        total = summary.total,
        found = summary.found,
        lost = summary.lost,
        possible_lost = summary.possible_lost,
        "catalog loaded"
    );

    let window_size = settings.window_size();

    iced::application(ui::sections::TITLE, Archive::update, Archive::view)
        .theme(Archive::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || Archive::new(catalog, settings))?;

    Ok(())
}
